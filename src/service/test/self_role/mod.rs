use std::collections::HashSet;

use super::*;
use crate::{
    discord::fake::FakeGateway,
    error::AppError,
    model::self_role::RoleChange,
    service::self_role::{reconcile_self_roles, SelfRoleSelection, SelfRoleService},
};
use test_utils::{builder::TestBuilder, factory};


const USER_ID: u64 = 7;
const CATEGORY: u64 = 100;
const ROLE_A: u64 = 101;
const ROLE_B: u64 = 102;
/// Stored in the category but not self-assignable.
const ROLE_STAFF: u64 = 103;

fn guild() -> FakeGateway {
    FakeGateway::with_roles(&[
        (GUILD_ID, "@everyone"),
        (ROLE_STAFF, "Staff"),
        (ROLE_B, "B"),
        (ROLE_A, "A"),
        (CATEGORY, "Games"),
    ])
}

fn selection(selected: &[u64]) -> SelfRoleSelection {
    SelfRoleSelection {
        category_id: CATEGORY,
        self_roles: vec![ROLE_A, ROLE_B],
        category_roles: vec![ROLE_A, ROLE_B, ROLE_STAFF],
        selected: selected.iter().copied().collect(),
    }
}

fn held(roles: &[u64]) -> HashSet<u64> {
    roles.iter().copied().collect()
}
