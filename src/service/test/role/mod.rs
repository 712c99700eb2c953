use super::*;
use crate::{
    data::role::RoleRepository,
    discord::fake::FakeGateway,
    error::AppError,
    model::discord::RoleRef,
    service::role::{parse_hex_color, CreateRoleInput, EditRoleInput, RoleService},
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list;

const CATEGORY: u64 = 50;

fn role_ref(id: u64, name: &str) -> RoleRef {
    RoleRef {
        id,
        name: name.to_string(),
    }
}

fn create_input(name: &str) -> CreateRoleInput {
    CreateRoleInput {
        category: role_ref(CATEGORY, "Games"),
        name: name.to_string(),
        color: None,
        order: None,
        self_role: None,
        existing: None,
        description: None,
    }
}

fn edit_input(role: RoleRef) -> EditRoleInput {
    EditRoleInput {
        role,
        name: None,
        order: None,
        color: None,
        category: None,
        self_role: None,
        description: None,
    }
}

async fn store_games(db: &sea_orm::DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    factory::role_category::RoleCategoryFactory::new(db)
        .id(CATEGORY.to_string())
        .name("Games")
        .build()
        .await?;
    Ok(())
}

fn guild() -> FakeGateway {
    FakeGateway::with_roles(&[(GUILD_ID, "@everyone"), (CATEGORY, "Games")])
}
