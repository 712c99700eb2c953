use super::*;
use crate::{
    data::role_category::RoleCategoryRepository,
    discord::fake::FakeGateway,
    error::AppError,
    model::discord::RoleRef,
    service::role_category::{
        format_category_list, CreateCategoryInput, EditCategoryInput, RoleCategoryService,
    },
    util::format::category_display_name,
};
use test_utils::{builder::TestBuilder, factory};

mod edit;

fn role_ref(id: u64, name: &str) -> RoleRef {
    RoleRef {
        id,
        name: name.to_string(),
    }
}

fn create_input(name: &str) -> CreateCategoryInput {
    CreateCategoryInput {
        name: name.to_string(),
        order: None,
        existing: None,
        padding: None,
    }
}
