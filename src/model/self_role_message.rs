use sea_orm::DbErr;

/// A published self-role picker message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfRoleMessage {
    /// Discord message id.
    pub id: u64,
    pub role_category_id: u64,
    /// Custom id of the message's select menu.
    pub custom_id: String,
}

impl SelfRoleMessage {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(SelfRoleMessage)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse id or role_category_id as u64
    pub fn from_entity(entity: entity::self_role_message::Model) -> Result<Self, DbErr> {
        let id = entity
            .id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse message id: {}", e)))?;
        let role_category_id = entity
            .role_category_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role_category_id: {}", e)))?;

        Ok(Self {
            id,
            role_category_id,
            custom_id: entity.custom_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateSelfRoleMessageParams {
    pub id: u64,
    pub role_category_id: u64,
    pub custom_id: String,
}
