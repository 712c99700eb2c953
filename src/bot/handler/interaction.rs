//! Interaction dispatch.
//!
//! Slash commands are checked against the permission table, parsed, and run. Select
//! menu interactions are self-role pickers.

use serenity::all::{CommandInteraction, Context, Interaction};

use crate::{
    bot::{
        command::{
            delete, flip, options::from_resolved, ping, roles, roll, BotCommand, CommandKind,
        },
        handler::self_role,
        reply,
    },
    discord::HttpGateway,
    error::{internal::InternalError, AppError},
    state::BotState,
};

pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            if let Err(e) = run_command(state, &ctx, &command).await {
                reply::error(&ctx, &command, &e).await;
            }
        }
        Interaction::Component(component) => {
            self_role::handle_self_role_selection(state, &ctx, &component).await;
        }
        _ => {}
    }
}

async fn run_command(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(kind) = CommandKind::from_name(&command.data.name) else {
        tracing::warn!("Received unknown command {}", command.data.name);
        return Ok(());
    };

    let member_roles: Vec<u64> = command
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|id| id.get()).collect())
        .unwrap_or_default();
    if !state.permissions.allows(kind.permission(), &member_roles) {
        return Err(AppError::PermissionDenied);
    }

    let options = from_resolved(&command.data.options());
    let parsed = BotCommand::parse(kind, &options)?;

    tracing::debug!("{} ran {:?}", command.user.name, parsed);

    let gateway = HttpGateway::new(ctx.http.clone());

    match parsed {
        BotCommand::Roles(roles_command) => {
            let guild_id = command
                .guild_id
                .ok_or_else(|| InternalError::MissingGuild(command.id.to_string()))?;

            roles::run(state, ctx, command, &gateway, guild_id.get(), roles_command).await
        }
        BotCommand::Delete(options) => delete::run(ctx, command, &gateway, options).await,
        BotCommand::Roll(options) => roll::run(ctx, command, options).await,
        BotCommand::Flip(options) => flip::run(ctx, command, options).await,
        BotCommand::Ping => ping::run(ctx, command).await,
    }
}
