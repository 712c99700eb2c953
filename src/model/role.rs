//! Managed role domain models and parameters.

use sea_orm::DbErr;

/// A role managed by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Discord role id.
    pub id: u64,
    pub name: String,
    /// Placement of the role within its category, ascending.
    pub order: i32,
    pub description: String,
    /// Whether members can assign the role through the category's picker.
    pub self_role: bool,
    pub category_id: u64,
}

impl Role {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The role entity from the database
    ///
    /// # Returns
    /// - `Ok(Role)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse id or category_id as u64
    pub fn from_entity(entity: entity::role::Model) -> Result<Self, DbErr> {
        let id = entity
            .id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role id: {}", e)))?;
        let category_id = entity
            .category_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role category_id: {}", e)))?;

        Ok(Self {
            id,
            name: entity.name,
            order: entity.order,
            description: entity.description,
            self_role: entity.self_role,
            category_id,
        })
    }
}

/// Parameters for storing a new role.
#[derive(Debug, Clone)]
pub struct CreateRoleParams {
    /// Discord id of the role, created or adopted beforehand.
    pub id: u64,
    pub name: String,
    pub order: i32,
    pub description: String,
    pub self_role: bool,
    pub category_id: u64,
}

/// Parameters for updating a role. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoleParams {
    pub id: u64,
    pub name: Option<String>,
    pub order: Option<i32>,
    pub description: Option<String>,
    pub self_role: Option<bool>,
    pub category_id: Option<u64>,
}
