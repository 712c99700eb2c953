use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::role::{CreateRoleParams, Role, UpdateRoleParams};

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new role
    pub async fn create(&self, params: CreateRoleParams) -> Result<Role, DbErr> {
        let entity = entity::role::ActiveModel {
            id: ActiveValue::Set(params.id.to_string()),
            name: ActiveValue::Set(params.name),
            order: ActiveValue::Set(params.order),
            description: ActiveValue::Set(params.description),
            self_role: ActiveValue::Set(params.self_role),
            category_id: ActiveValue::Set(params.category_id.to_string()),
        }
        .insert(self.db)
        .await?;

        Role::from_entity(entity)
    }

    /// Gets a role by its Discord id
    pub async fn get_by_id(&self, id: u64) -> Result<Option<Role>, DbErr> {
        entity::prelude::Role::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Role::from_entity)
            .transpose()
    }

    /// Checks whether a role with the given name or Discord id is stored
    pub async fn exists_by_name_or_id(&self, name: &str, id: Option<u64>) -> Result<bool, DbErr> {
        let mut condition = Condition::any().add(entity::role::Column::Name.eq(name));
        if let Some(id) = id {
            condition = condition.add(entity::role::Column::Id.eq(id.to_string()));
        }

        let count = entity::prelude::Role::find()
            .filter(condition)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the number of stored roles across all categories
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Role::find().count(self.db).await
    }

    /// Updates the fields of a role that are set in `params`
    pub async fn update(&self, params: UpdateRoleParams) -> Result<Role, DbErr> {
        let role = entity::prelude::Role::find_by_id(params.id.to_string())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Role with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::role::ActiveModel = role.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(order) = params.order {
            active_model.order = ActiveValue::Set(order);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(self_role) = params.self_role {
            active_model.self_role = ActiveValue::Set(self_role);
        }
        if let Some(category_id) = params.category_id {
            active_model.category_id = ActiveValue::Set(category_id.to_string());
        }

        let updated = active_model.update(self.db).await?;

        Role::from_entity(updated)
    }

    /// Deletes a role
    pub async fn delete(&self, id: u64) -> Result<(), DbErr> {
        entity::prelude::Role::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
