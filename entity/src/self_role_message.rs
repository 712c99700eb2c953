use sea_orm::entity::prelude::*;

/// A published self-role picker message for one category.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "self_role_message")]
pub struct Model {
    /// Discord message id of the picker.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub role_category_id: String,
    #[sea_orm(unique)]
    pub custom_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role_category::Entity",
        from = "Column::RoleCategoryId",
        to = "super::role_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RoleCategory,
}

impl Related<super::role_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
