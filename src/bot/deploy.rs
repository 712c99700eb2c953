//! Global command registration.
//!
//! The command schema is serialized and compared with the snapshot written by the last
//! registration. Commands are only registered with Discord again when the schema changed.

use std::path::Path;

use serenity::all::{Command, CreateCommand, Http};

use crate::{bot::command, error::AppError};

/// Serializes the command schema as stored in the snapshot.
pub fn snapshot(commands: &[CreateCommand]) -> Result<String, AppError> {
    Ok(serde_json::to_string(commands)?)
}

/// Whether `current` differs from the stored snapshot.
///
/// A missing snapshot always needs a deployment.
pub fn needs_deploy(current: &str, stored: Option<&str>) -> bool {
    stored != Some(current)
}

async fn read_snapshot(path: &Path) -> Result<Option<String>, AppError> {
    match tokio::fs::read_to_string(path).await {
        Ok(stored) => Ok(Some(stored)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Registers the global commands when the schema changed since the last run.
///
/// # Arguments
/// - `http` - Discord HTTP client with the application id set
/// - `snapshot_path` - File holding the last registered schema
///
/// # Returns
/// - `Ok(true)` - Commands were registered and the snapshot rewritten
/// - `Ok(false)` - The schema is unchanged
/// - `Err(AppError)` - Reading the snapshot, serializing, registering or writing failed
pub async fn deploy_commands(http: &Http, snapshot_path: &Path) -> Result<bool, AppError> {
    let commands = command::definitions();
    let current = snapshot(&commands)?;
    let stored = read_snapshot(snapshot_path).await?;

    if !needs_deploy(&current, stored.as_deref()) {
        tracing::info!("Slash commands are up to date");
        return Ok(false);
    }

    let registered = Command::set_global_commands(http, commands).await?;
    tokio::fs::write(snapshot_path, current).await?;

    tracing::info!("Registered {} global slash commands", registered.len());

    Ok(true)
}
