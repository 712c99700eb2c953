use crate::{
    data::self_role_message::SelfRoleMessageRepository,
    model::self_role_message::CreateSelfRoleMessageParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_all;
mod find_by_custom_id;
