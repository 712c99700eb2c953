//! Self-role message factory for creating published picker records.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test self-role message records.
pub struct SelfRoleMessageFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    role_category_id: String,
    custom_id: String,
}

impl<'a> SelfRoleMessageFactory<'a> {
    /// Creates a new SelfRoleMessageFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented message id
    /// - custom_id: `"1-category_{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `role_category_id` - Id of the category the picker belongs to
    pub fn new(db: &'a DatabaseConnection, role_category_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            role_category_id: role_category_id.into(),
            custom_id: format!("1-category_{}", id),
        }
    }

    /// Sets the Discord message id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the select menu custom id.
    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = custom_id.into();
        self
    }

    /// Builds and inserts the record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::self_role_message::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::self_role_message::Model, DbErr> {
        entity::self_role_message::ActiveModel {
            id: ActiveValue::Set(self.id),
            role_category_id: ActiveValue::Set(self.role_category_id),
            custom_id: ActiveValue::Set(self.custom_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a self-role message record with default values.
pub async fn create_self_role_message(
    db: &DatabaseConnection,
    role_category_id: &str,
) -> Result<entity::self_role_message::Model, DbErr> {
    SelfRoleMessageFactory::new(db, role_category_id).build().await
}
