use super::*;
use crate::{
    data::self_role_message::SelfRoleMessageRepository,
    discord::fake::FakeGateway,
    error::AppError,
    service::self_role_message::{build_picker, SelfRoleMessageService, MAX_PICKER_OPTIONS},
};
use test_utils::{builder::TestBuilder, factory};

mod build_picker;
mod publish;

const CHANNEL_ID: u64 = 900;
