use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{bot::reply, error::AppError};

pub const NAME: &str = "ping";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME).description("Replies with Pong!")
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    reply::content(ctx, command, "Pong!", false).await
}
