//! Role category domain models and parameters.

use sea_orm::DbErr;

use crate::model::role::Role;

/// A group of roles displayed under a separator role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCategory {
    /// Discord id of the separator role.
    pub id: u64,
    pub name: String,
    /// Placement of the category relative to other categories, ascending.
    pub order: i32,
    /// Blank characters on each side of the separator role's name.
    pub padding: i32,
}

impl RoleCategory {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The role category entity from the database
    ///
    /// # Returns
    /// - `Ok(RoleCategory)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse id as u64
    pub fn from_entity(entity: entity::role_category::Model) -> Result<Self, DbErr> {
        let id = entity
            .id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role category id: {}", e)))?;

        Ok(Self {
            id,
            name: entity.name,
            order: entity.order,
            padding: entity.padding,
        })
    }
}

/// A category together with its roles sorted by their own order.
#[derive(Debug, Clone)]
pub struct RoleCategoryWithRoles {
    pub category: RoleCategory,
    pub roles: Vec<Role>,
}

impl RoleCategoryWithRoles {
    /// Roles members may assign to themselves.
    pub fn self_roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter().filter(|role| role.self_role)
    }
}

/// Parameters for storing a new category.
#[derive(Debug, Clone)]
pub struct CreateRoleCategoryParams {
    /// Discord id of the separator role, created or adopted beforehand.
    pub id: u64,
    pub name: String,
    pub order: i32,
    pub padding: i32,
}

/// Parameters for updating a category. `None` leaves a field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateRoleCategoryParams {
    pub id: u64,
    pub name: Option<String>,
    pub order: Option<i32>,
    pub padding: Option<i32>,
}
