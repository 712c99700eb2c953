//! Command permission tiers.

use crate::config::Config;

/// Minimum tier a member needs to run a command.
///
/// Tiers are ordered, a member holding a higher tier's role passes every lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PermissionLevel {
    Everyone,
    Staff,
    Admin,
    Owner,
}

impl PermissionLevel {
    pub const ALL: [PermissionLevel; 4] = [
        PermissionLevel::Everyone,
        PermissionLevel::Staff,
        PermissionLevel::Admin,
        PermissionLevel::Owner,
    ];
}

/// Maps each permission tier to the guild role that grants it.
#[derive(Debug, Clone)]
pub struct PermissionTable {
    everyone: u64,
    staff: u64,
    admin: u64,
    owner: u64,
}

impl PermissionTable {
    pub fn new(everyone: u64, staff: u64, admin: u64, owner: u64) -> Self {
        Self {
            everyone,
            staff,
            admin,
            owner,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.permission_everyone,
            config.permission_staff,
            config.permission_admin,
            config.permission_owner,
        )
    }

    /// Role id that grants `level`.
    pub fn role_for(&self, level: PermissionLevel) -> u64 {
        match level {
            PermissionLevel::Everyone => self.everyone,
            PermissionLevel::Staff => self.staff,
            PermissionLevel::Admin => self.admin,
            PermissionLevel::Owner => self.owner,
        }
    }

    /// Checks whether a member with `member_roles` satisfies `required`.
    ///
    /// # Arguments
    /// - `required` - Minimum tier declared by the command
    /// - `member_roles` - Role ids held by the member
    ///
    /// # Returns
    /// - `true` - `required` is `Everyone`, or the member holds the role of `required` or
    ///   of any higher tier
    /// - `false` - Otherwise
    pub fn allows(&self, required: PermissionLevel, member_roles: &[u64]) -> bool {
        if required == PermissionLevel::Everyone {
            return true;
        }

        PermissionLevel::ALL
            .into_iter()
            .filter(|level| *level >= required)
            .any(|level| member_roles.contains(&self.role_for(level)))
    }
}
