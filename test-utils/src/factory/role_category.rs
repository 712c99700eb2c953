//! Role category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test role categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::role_category::RoleCategoryFactory;
///
/// let category = RoleCategoryFactory::new(&db)
///     .id("987654321")
///     .name("Pronouns")
///     .order(1)
///     .build()
///     .await?;
/// ```
pub struct RoleCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    order: i32,
    padding: i32,
}

impl<'a> RoleCategoryFactory<'a> {
    /// Creates a new RoleCategoryFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"Category {id}"`
    /// - order: the auto-incremented id
    /// - padding: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            name: format!("Category {}", id),
            order: id as i32,
            padding: 0,
        }
    }

    /// Sets the Discord role id backing the category.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the category order.
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Sets the display name padding.
    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::role_category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::role_category::Model, DbErr> {
        entity::role_category::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            order: ActiveValue::Set(self.order),
            padding: ActiveValue::Set(self.padding),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role category with default values.
///
/// Shorthand for `RoleCategoryFactory::new(db).build().await`.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::role_category::Model, DbErr> {
    RoleCategoryFactory::new(db).build().await
}
