use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DEPLOYED_COMMANDS_PATH: &str = "deployed_commands.json";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub discord_client_id: u64,

    /// Role id granted to every member, usually the guild's @everyone role.
    pub permission_everyone: u64,
    pub permission_staff: u64,
    pub permission_admin: u64,
    pub permission_owner: u64,

    /// Number of roles at the top of the guild hierarchy that role sorting never moves.
    pub no_sort_role_count: usize,
    /// Channel the self-role pickers are published to.
    pub self_role_channel: u64,

    /// Where the last registered command schema is stored.
    pub deployed_commands_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("TOKEN")?,
            discord_client_id: required_parsed("CLIENT_ID")?,
            permission_everyone: required_parsed("PERMISSION_EVERYONE")?,
            permission_staff: required_parsed("PERMISSION_STAFF")?,
            permission_admin: required_parsed("PERMISSION_ADMIN")?,
            permission_owner: required_parsed("PERMISSION_OWNER")?,
            no_sort_role_count: required_parsed("NO_SORT_ROLE_COUNT")?,
            self_role_channel: required_parsed("SELF_ROLE_CHANNEL")?,
            deployed_commands_path: std::env::var("DEPLOYED_COMMANDS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DEPLOYED_COMMANDS_PATH)),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn required_parsed<T: std::str::FromStr>(name: &str) -> Result<T, ConfigError> {
    let value = required(name)?;

    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
