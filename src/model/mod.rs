//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary, parsing stored string ids into `u64` snowflakes. Services and command
//! handlers only ever see domain models.

pub mod discord;
pub mod permission;
pub mod role;
pub mod role_category;
pub mod role_order;
pub mod self_role;
pub mod self_role_message;
