use sea_orm::entity::prelude::*;

/// A managed Discord role belonging to exactly one category.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role")]
pub struct Model {
    /// Discord role id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    pub order: i32,
    pub description: String,
    pub self_role: bool,
    pub category_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role_category::Entity",
        from = "Column::CategoryId",
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
