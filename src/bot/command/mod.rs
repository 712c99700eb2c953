//! Slash commands.
//!
//! Every command is a `CommandKind` with a name, a minimum permission tier and a
//! definition registered with Discord. Invocations are parsed into a `BotCommand`
//! before anything runs, so handlers only ever see typed options.

pub mod delete;
pub mod flip;
pub mod options;
pub mod ping;
pub mod roles;
pub mod roll;

use serenity::all::CreateCommand;

use crate::{
    bot::command::{
        delete::DeleteOptions, flip::FlipOptions, options::CommandOption, options::Options,
        roles::RolesCommand, roll::RollOptions,
    },
    error::AppError,
    model::permission::PermissionLevel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Roles,
    Delete,
    Roll,
    Flip,
    Ping,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Roles,
        CommandKind::Delete,
        CommandKind::Roll,
        CommandKind::Flip,
        CommandKind::Ping,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Roles => roles::NAME,
            CommandKind::Delete => delete::NAME,
            CommandKind::Roll => roll::NAME,
            CommandKind::Flip => flip::NAME,
            CommandKind::Ping => ping::NAME,
        }
    }

    /// Minimum tier a member needs to run the command.
    pub fn permission(&self) -> PermissionLevel {
        match self {
            CommandKind::Roles => PermissionLevel::Admin,
            CommandKind::Delete => PermissionLevel::Staff,
            CommandKind::Roll | CommandKind::Flip | CommandKind::Ping => PermissionLevel::Everyone,
        }
    }

    pub fn definition(&self) -> CreateCommand {
        match self {
            CommandKind::Roles => roles::definition(),
            CommandKind::Delete => delete::definition(),
            CommandKind::Roll => roll::definition(),
            CommandKind::Flip => flip::definition(),
            CommandKind::Ping => ping::definition(),
        }
    }
}

/// Definitions of every command, in registration order.
pub fn definitions() -> Vec<CreateCommand> {
    CommandKind::ALL
        .iter()
        .map(|kind| kind.definition())
        .collect()
}

/// A fully parsed command invocation.
#[derive(Debug, Clone)]
pub enum BotCommand {
    Roles(RolesCommand),
    Delete(DeleteOptions),
    Roll(RollOptions),
    Flip(FlipOptions),
    Ping,
}

impl BotCommand {
    pub fn parse(kind: CommandKind, options: &[CommandOption]) -> Result<Self, AppError> {
        let options = Options::new(options);

        Ok(match kind {
            CommandKind::Roles => BotCommand::Roles(roles::parse(options)?),
            CommandKind::Delete => BotCommand::Delete(delete::parse(options)?),
            CommandKind::Roll => BotCommand::Roll(roll::parse(options)?),
            CommandKind::Flip => BotCommand::Flip(flip::parse(options)?),
            CommandKind::Ping => BotCommand::Ping,
        })
    }
}
