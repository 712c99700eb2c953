//! Boundary between the bot's services and the Discord API.
//!
//! Services talk to Discord through the `DiscordGateway` trait so the reconcilers and
//! catalog operations can be exercised against an in-memory guild in tests. The
//! production implementation, `HttpGateway`, wraps Serenity's shared HTTP client.

pub mod http;

#[cfg(test)]
pub mod fake;

use std::collections::HashSet;

use crate::{
    error::AppError,
    model::discord::{LiveRole, RoleSpec, SelfRolePicker},
};

pub use http::HttpGateway;

/// The Discord operations the bot performs.
///
/// All ids are raw snowflakes. Every method performs exactly one logical API request.
#[serenity::async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Lists every role in the guild, including @everyone.
    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<LiveRole>, AppError>;

    /// Creates a role without permissions and returns its id.
    async fn create_role(&self, guild_id: u64, spec: RoleSpec) -> Result<u64, AppError>;

    async fn edit_role(&self, guild_id: u64, role_id: u64, spec: RoleSpec)
        -> Result<(), AppError>;

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), AppError>;

    /// Moves one role to `position`.
    ///
    /// Discord shifts the other roles to make room, so the refreshed role list is
    /// returned.
    async fn set_role_position(
        &self,
        guild_id: u64,
        role_id: u64,
        position: u16,
    ) -> Result<Vec<LiveRole>, AppError>;

    /// Reads the role ids currently held by a member.
    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<HashSet<u64>, AppError>;

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError>;

    /// Sends a self-role picker message and returns its message id.
    async fn send_self_role_picker(
        &self,
        channel_id: u64,
        picker: &SelfRolePicker,
    ) -> Result<u64, AppError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError>;

    /// Deletes the newest `amount` messages of a channel and returns how many were
    /// deleted.
    async fn purge_messages(&self, channel_id: u64, amount: u8) -> Result<usize, AppError>;
}
