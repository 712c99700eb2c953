//! `/delete`, bulk deletes the newest messages of the channel.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::{
    bot::{command::options::Options, reply},
    discord::DiscordGateway,
    error::AppError,
};

pub const NAME: &str = "delete";

const MIN_AMOUNT: i64 = 1;
const MAX_AMOUNT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOptions {
    pub amount: u8,
}

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Delete messages")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "amount",
                "Amount of messages to delete",
            )
            .min_int_value(MIN_AMOUNT as u64)
            .max_int_value(MAX_AMOUNT as u64),
        )
}

/// Reads the amount, defaulting to one message.
///
/// # Returns
/// - `Ok(DeleteOptions)` - Amount between 1 and 100
/// - `Err(AppError::Validation)` - Amount outside that range
pub fn parse(options: Options<'_>) -> Result<DeleteOptions, AppError> {
    let amount = options.integer("amount")?.unwrap_or(MIN_AMOUNT);

    if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
        return Err(AppError::Validation(format!(
            "You can only delete between {} and {} messages at a time",
            MIN_AMOUNT, MAX_AMOUNT
        )));
    }

    Ok(DeleteOptions {
        amount: amount as u8,
    })
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    gateway: &dyn DiscordGateway,
    options: DeleteOptions,
) -> Result<(), AppError> {
    let amount = options.amount;

    reply::content(ctx, command, format!("Deleting {} messages...", amount), true).await?;

    let deleted = gateway
        .purge_messages(command.channel_id.get(), amount)
        .await?;
    tracing::info!(
        "{} deleted {} messages in channel {}",
        command.user.name,
        deleted,
        command.channel_id
    );

    reply::edit(
        ctx,
        command,
        format!("Successfully deleted {} messages.", amount),
    )
    .await
}
