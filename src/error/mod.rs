//! Error types and user-facing reply mapping.
//!
//! This module provides the bot's error hierarchy. `AppError` is the top-level error
//! returned by services, repositories and command handlers. User mistakes carry the
//! message that is shown to the member, while infrastructure failures are logged and
//! replaced by a generic reply so internal details never reach Discord.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Reply sent to the member when a command fails for an internal reason.
pub const GENERIC_ERROR_MESSAGE: &str = "There was an error while executing this command!";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected state indicating a bug or malformed Discord payload.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Reading or writing the deployed command snapshot failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Serializing the command schema failed.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Invalid user input. The message is shown to the member as-is.
    #[error("{0}")]
    Validation(String),

    /// A referenced category or role is not stored. The message is shown to the member.
    #[error("{0}")]
    NotFound(String),

    /// The member lacks the permission tier required by the command.
    #[error("You do not have permission to use this command")]
    PermissionDenied,

    /// A stored record has no counterpart in the guild's live role list.
    ///
    /// Raised while planning, before anything in Discord has been changed.
    #[error("Could not find the {kind} with id {id} in this server")]
    MissingExternalResource {
        /// What kind of record was missing, e.g. "role category"
        kind: &'static str,
        /// Discord id of the missing resource
        id: u64,
    },
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Whether the error was caused by the member rather than by the bot.
    ///
    /// User-facing errors are replied to with their own message and are not logged as
    /// failures.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::NotFound(_)
                | Self::PermissionDenied
                | Self::MissingExternalResource { .. }
        )
    }

    /// Message shown to the member for this error.
    ///
    /// # Returns
    /// - The error's own message for user-facing variants
    /// - `GENERIC_ERROR_MESSAGE` for every infrastructure failure
    pub fn user_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            GENERIC_ERROR_MESSAGE.to_string()
        }
    }
}
