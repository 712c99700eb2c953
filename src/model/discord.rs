//! Plain representations of the Discord objects the bot reads and writes.
//!
//! The gateway trait speaks in these types so services never depend on Serenity's
//! builders and can be driven by the in-memory gateway in tests.

use serenity::all::Role as SerenityRole;

/// A role as it currently exists in the guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRole {
    pub id: u64,
    pub name: String,
    /// Position in the guild hierarchy, higher is more important.
    pub position: u16,
    /// RGB colour, `0` when the role has no colour.
    pub colour: u32,
}

impl From<&SerenityRole> for LiveRole {
    fn from(role: &SerenityRole) -> Self {
        Self {
            id: role.id.get(),
            name: role.name.clone(),
            position: role.position,
            colour: role.colour.0,
        }
    }
}

/// A role referenced by a command option, as resolved by Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRef {
    pub id: u64,
    pub name: String,
}

impl From<&SerenityRole> for RoleRef {
    fn from(role: &SerenityRole) -> Self {
        Self {
            id: role.id.get(),
            name: role.name.clone(),
        }
    }
}

/// Name and colour to give a role when creating or editing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSpec {
    pub name: String,
    /// `None` leaves the colour as it is (or uncoloured on creation).
    pub colour: Option<u32>,
}

/// A select-menu picker message for one category's self-assignable roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfRolePicker {
    /// Embed title.
    pub title: String,
    /// Embed body listing the roles.
    pub description: String,
    /// Custom id of the select menu, used to route selections back to the category.
    pub custom_id: String,
    pub options: Vec<SelfRoleOption>,
}

/// One entry of a self-role select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfRoleOption {
    pub label: String,
    /// Role id as a string, returned by Discord when the option is selected.
    pub value: String,
    pub description: String,
}
