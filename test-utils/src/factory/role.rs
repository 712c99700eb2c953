//! Role factory for creating test role entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::role::RoleFactory;
///
/// let role = RoleFactory::new(&db, &category.id)
///     .name("Minecraft")
///     .self_role(true)
///     .build()
///     .await?;
/// ```
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    order: i32,
    description: String,
    self_role: bool,
    category_id: String,
}

impl<'a> RoleFactory<'a> {
    /// Creates a new RoleFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"Role {id}"`
    /// - order: the auto-incremented id
    /// - description: `"No Description"`
    /// - self_role: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Id of the category the role belongs to
    pub fn new(db: &'a DatabaseConnection, category_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            name: format!("Role {}", id),
            order: id as i32,
            description: "No Description".to_string(),
            self_role: false,
            category_id: category_id.into(),
        }
    }

    /// Sets the Discord role id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the role name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the order of the role within its category.
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Sets the role description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets whether members may assign the role to themselves.
    pub fn self_role(mut self, self_role: bool) -> Self {
        self.self_role = self_role;
        self
    }

    /// Builds and inserts the role entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::role::Model)` - Created role entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            order: ActiveValue::Set(self.order),
            description: ActiveValue::Set(self.description),
            self_role: ActiveValue::Set(self.self_role),
            category_id: ActiveValue::Set(self.category_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with default values in the given category.
pub async fn create_role(
    db: &DatabaseConnection,
    category_id: &str,
) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db, category_id).build().await
}

/// Creates a self-assignable role with default values in the given category.
pub async fn create_self_role(
    db: &DatabaseConnection,
    category_id: &str,
) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db, category_id).self_role(true).build().await
}
