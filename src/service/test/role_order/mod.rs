use super::*;
use crate::{
    discord::fake::FakeGateway,
    error::AppError,
    model::discord::LiveRole,
    service::role_order::{plan_role_order, RoleOrderService},
};
use test_utils::{builder::TestBuilder, factory};

mod sort;

/// Live roles from `(id, position)` pairs.
fn live(roles: &[(u64, u16)]) -> Vec<LiveRole> {
    roles
        .iter()
        .map(|(id, position)| LiveRole {
            id: *id,
            name: format!("Role {}", id),
            position: *position,
            colour: 0,
        })
        .collect()
}

/// A guild with an admin role on top, a category (20) with two roles (22 above 21
/// once sorted) and two unmanaged roles scattered in between.
///
/// Bottom-up: @everyone(1), 10, 21, 20, 11, 22, admin(99)
const GUILD_BOTTOM_UP: [(u64, &str); 7] = [
    (1, "@everyone"),
    (10, "Unmanaged Low"),
    (21, "Second"),
    (20, "-- Category --"),
    (11, "Unmanaged High"),
    (22, "First"),
    (99, "Admin"),
];
