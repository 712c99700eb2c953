//! Bot state shared by every event handler.
//!
//! Built once at startup from configuration and handed to the event handler behind an
//! `Arc`. Holds the database connection, the permission table, and the keyed locks that
//! serialize reconciliation.

use sea_orm::DatabaseConnection;

use crate::{config::Config, model::permission::PermissionTable, util::lock::KeyedLock};

pub struct BotState {
    /// Connection pool for the role catalog.
    pub db: DatabaseConnection,

    pub permissions: PermissionTable,

    /// Number of roles at the top of the hierarchy that role sorting leaves alone.
    pub no_sort_role_count: usize,

    /// Channel the self-role pickers are published to.
    pub self_role_channel: u64,

    /// One lock per guild, held while sorting its roles.
    pub order_locks: KeyedLock<u64>,

    /// One lock per `(guild, member)`, held while applying a self-role selection.
    pub self_role_locks: KeyedLock<(u64, u64)>,
}

impl BotState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            permissions: PermissionTable::from_config(config),
            no_sort_role_count: config.no_sort_role_count,
            self_role_channel: config.self_role_channel,
            order_locks: KeyedLock::new(),
            self_role_locks: KeyedLock::new(),
        }
    }
}
