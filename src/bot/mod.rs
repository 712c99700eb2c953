//! Discord bot integration.
//!
//! The bot answers slash commands and self-role picker selections. Each interaction is
//! handled on its own task by Serenity. Reconciliation is serialized through the keyed
//! locks in `BotState`.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required. Interactions are delivered regardless of intents and
//! member roles are read through the HTTP API.

pub mod command;
pub mod deploy;
pub mod handler;
pub mod reply;
pub mod start;
