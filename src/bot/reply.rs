//! Helpers for answering slash command interactions.

use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EditInteractionResponse,
};

use crate::error::AppError;

/// Sends the initial plain text reply.
pub async fn content(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(ephemeral);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Sends the initial reply as an embed.
pub async fn embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
    ephemeral: bool,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(ephemeral);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Replaces the text of the initial reply, used for progress updates.
pub async fn edit(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

/// Tells the member that their command failed.
///
/// User mistakes are shown with their own message, anything else is logged and replaced
/// by the generic message. When the command has already replied the error is sent as an
/// ephemeral follow-up instead.
pub async fn error(ctx: &Context, command: &CommandInteraction, error: &AppError) {
    if error.is_user_facing() {
        tracing::debug!("Command {} rejected: {}", command.data.name, error);
    } else {
        tracing::error!("Command {} failed: {}", command.data.name, error);
    }

    let message = error.user_message();
    let response = CreateInteractionResponseMessage::new()
        .content(message.clone())
        .ephemeral(true);

    if command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
        .is_ok()
    {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(message)
        .ephemeral(true);
    if let Err(e) = command.create_followup(&ctx.http, followup).await {
        tracing::error!(
            "Failed to report error for command {}: {}",
            command.data.name,
            e
        );
    }
}
