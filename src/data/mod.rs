//! Database repository layer for the role catalog.
//!
//! Repository structs perform all reads and writes against the role catalog tables.
//! They use SeaORM entity models internally and return domain models, parsing the
//! stored string snowflakes at this boundary.

pub mod role;
pub mod role_category;
pub mod self_role_message;

#[cfg(test)]
mod test;
