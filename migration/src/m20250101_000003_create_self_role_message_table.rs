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
                    .table(SelfRoleMessage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SelfRoleMessage::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string(SelfRoleMessage::RoleCategoryId))
                    .col(string_uniq(SelfRoleMessage::CustomId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_self_role_message_role_category_id")
                            .from(SelfRoleMessage::Table, SelfRoleMessage::RoleCategoryId)
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
            .drop_table(Table::drop().table(SelfRoleMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SelfRoleMessage {
    Table,
    Id,
    RoleCategoryId,
    CustomId,
}
