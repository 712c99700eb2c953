use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::self_role_message::{CreateSelfRoleMessageParams, SelfRoleMessage};

pub struct SelfRoleMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SelfRoleMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a published picker message
    pub async fn create(
        &self,
        params: CreateSelfRoleMessageParams,
    ) -> Result<SelfRoleMessage, DbErr> {
        let entity = entity::self_role_message::ActiveModel {
            id: ActiveValue::Set(params.id.to_string()),
            role_category_id: ActiveValue::Set(params.role_category_id.to_string()),
            custom_id: ActiveValue::Set(params.custom_id),
        }
        .insert(self.db)
        .await?;

        SelfRoleMessage::from_entity(entity)
    }

    /// Gets every recorded picker message
    pub async fn get_all(&self) -> Result<Vec<SelfRoleMessage>, DbErr> {
        entity::prelude::SelfRoleMessage::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(SelfRoleMessage::from_entity)
            .collect()
    }

    /// Finds the picker message whose select menu has the given custom id
    pub async fn find_by_custom_id(&self, custom_id: &str) -> Result<Option<SelfRoleMessage>, DbErr> {
        entity::prelude::SelfRoleMessage::find()
            .filter(entity::self_role_message::Column::CustomId.eq(custom_id))
            .one(self.db)
            .await?
            .map(SelfRoleMessage::from_entity)
            .transpose()
    }

    /// Deletes every recorded picker message, returning how many were removed
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::SelfRoleMessage::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
