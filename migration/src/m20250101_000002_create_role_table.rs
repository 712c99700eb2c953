use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000001_create_role_category_table::RoleCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Role::Id).string().not_null().primary_key())
                    .col(string_uniq(Role::Name))
                    .col(integer(Role::Order))
                    .col(string(Role::Description))
                    .col(boolean(Role::SelfRole).default(false))
                    .col(string(Role::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_category_id")
                            .from(Role::Table, Role::CategoryId)
                            .to(RoleCategory::Table, RoleCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    Name,
    Order,
    Description,
    SelfRole,
    CategoryId,
}
