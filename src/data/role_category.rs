use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::model::{
    role::Role,
    role_category::{
        CreateRoleCategoryParams, RoleCategory, RoleCategoryWithRoles, UpdateRoleCategoryParams,
    },
};

pub struct RoleCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new role category
    pub async fn create(&self, params: CreateRoleCategoryParams) -> Result<RoleCategory, DbErr> {
        let entity = entity::role_category::ActiveModel {
            id: ActiveValue::Set(params.id.to_string()),
            name: ActiveValue::Set(params.name),
            order: ActiveValue::Set(params.order),
            padding: ActiveValue::Set(params.padding),
        }
        .insert(self.db)
        .await?;

        RoleCategory::from_entity(entity)
    }

    /// Gets a category by its separator role id
    pub async fn get_by_id(&self, id: u64) -> Result<Option<RoleCategory>, DbErr> {
        entity::prelude::RoleCategory::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(RoleCategory::from_entity)
            .transpose()
    }

    /// Checks whether a category with the given name or separator role id is stored
    pub async fn exists_by_name_or_id(&self, name: &str, id: Option<u64>) -> Result<bool, DbErr> {
        let mut condition = sea_orm::Condition::any()
            .add(entity::role_category::Column::Name.eq(name));
        if let Some(id) = id {
            condition = condition.add(entity::role_category::Column::Id.eq(id.to_string()));
        }

        let count = entity::prelude::RoleCategory::find()
            .filter(condition)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every category in ascending order
    pub async fn get_all(&self) -> Result<Vec<RoleCategory>, DbErr> {
        entity::prelude::RoleCategory::find()
            .order_by_asc(entity::role_category::Column::Order)
            .order_by_asc(entity::role_category::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(RoleCategory::from_entity)
            .collect()
    }

    /// Gets every category in ascending order together with its roles
    ///
    /// Roles within each category are sorted by their own order, ties broken by name.
    pub async fn get_all_with_roles(&self) -> Result<Vec<RoleCategoryWithRoles>, DbErr> {
        let categories = self.get_all().await?;

        let roles = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Order)
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        let mut roles_by_category: HashMap<u64, Vec<Role>> = HashMap::new();
        for role in roles {
            let role = Role::from_entity(role)?;
            roles_by_category
                .entry(role.category_id)
                .or_default()
                .push(role);
        }

        Ok(categories
            .into_iter()
            .map(|category| RoleCategoryWithRoles {
                roles: roles_by_category.remove(&category.id).unwrap_or_default(),
                category,
            })
            .collect())
    }

    /// Gets a single category together with its roles sorted by order
    pub async fn get_with_roles(&self, id: u64) -> Result<Option<RoleCategoryWithRoles>, DbErr> {
        let Some(category) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let roles = entity::prelude::Role::find()
            .filter(entity::role::Column::CategoryId.eq(id.to_string()))
            .order_by_asc(entity::role::Column::Order)
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Role::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(RoleCategoryWithRoles { category, roles }))
    }

    /// Gets the number of stored categories
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::RoleCategory::find().count(self.db).await
    }

    /// Updates the fields of a category that are set in `params`
    pub async fn update(&self, params: UpdateRoleCategoryParams) -> Result<RoleCategory, DbErr> {
        let category = entity::prelude::RoleCategory::find_by_id(params.id.to_string())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Role category with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::role_category::ActiveModel = category.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(order) = params.order {
            active_model.order = ActiveValue::Set(order);
        }
        if let Some(padding) = params.padding {
            active_model.padding = ActiveValue::Set(padding);
        }

        let updated = active_model.update(self.db).await?;

        RoleCategory::from_entity(updated)
    }

    /// Deletes a category along with its roles and published picker records
    pub async fn delete(&self, id: u64) -> Result<(), DbErr> {
        let id = id.to_string();
        let txn = self.db.begin().await?;

        entity::prelude::SelfRoleMessage::delete_many()
            .filter(entity::self_role_message::Column::RoleCategoryId.eq(id.clone()))
            .exec(&txn)
            .await?;

        entity::prelude::Role::delete_many()
            .filter(entity::role::Column::CategoryId.eq(id.clone()))
            .exec(&txn)
            .await?;

        entity::prelude::RoleCategory::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await
    }
}
