use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results in the generic error reply being sent to the user.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Interaction arrived outside of a guild for a guild-only command.
    #[error("Interaction {0} was not sent from a guild")]
    MissingGuild(String),

    /// A command option that Discord guarantees to be present was missing or had the
    /// wrong type.
    #[error("Command option '{0}' is missing or malformed")]
    MalformedOption(String),

    /// A select menu was built with more options than it can hold.
    #[error("Select menu '{custom_id}' has {count} options")]
    TooManyMenuOptions {
        custom_id: String,
        count: usize,
    },
}
