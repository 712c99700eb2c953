//! Business logic between command handlers, the data layer and Discord.
//!
//! Services that touch Discord receive a `DiscordGateway` alongside the database
//! connection. Pure functions (dice, coins, ordering plans, picker building) are kept
//! free of I/O so they can be tested directly.

pub mod coin;
pub mod dice;
pub mod role;
pub mod role_category;
pub mod role_order;
pub mod self_role;
pub mod self_role_message;
