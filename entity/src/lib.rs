//! SeaORM entities for the role catalog.

pub mod prelude;

pub mod role;
pub mod role_category;
pub mod self_role_message;
