use sea_orm::entity::prelude::*;

/// A Discord role acting as the visual separator for a group of roles.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role_category")]
pub struct Model {
    /// Discord role id of the separator role.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    pub order: i32,
    pub padding: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role::Entity")]
    Role,
    #[sea_orm(has_many = "super::self_role_message::Entity")]
    SelfRoleMessage,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::self_role_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelfRoleMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
