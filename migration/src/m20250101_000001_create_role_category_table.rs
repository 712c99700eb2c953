use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoleCategory::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_uniq(RoleCategory::Name))
                    .col(integer(RoleCategory::Order))
                    .col(integer(RoleCategory::Padding).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleCategory {
    Table,
    Id,
    Name,
    Order,
    Padding,
}
