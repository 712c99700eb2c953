//! `/flip`, flips one or more coins.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed,
};

use crate::{
    bot::{command::options::Options, reply},
    error::AppError,
    service::coin::{flip_many, flip_one, CoinFace, CoinTally},
};

pub const NAME: &str = "flip";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipOptions {
    pub coins: Option<i64>,
    pub private: bool,
}

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Flip coins")
        .add_option(CreateCommandOption::new(
            CommandOptionType::Integer,
            "coins",
            "Amount of coins to flip",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "private",
            "Show result only to you",
        ))
}

pub fn parse(options: Options<'_>) -> Result<FlipOptions, AppError> {
    Ok(FlipOptions {
        coins: options.integer("coins")?,
        private: options.boolean("private")?.unwrap_or(false),
    })
}

pub fn face_embed(face: CoinFace) -> CreateEmbed {
    CreateEmbed::new().description(face.describe())
}

pub fn tally_embed(tally: CoinTally) -> CreateEmbed {
    CreateEmbed::new()
        .field("Heads:", tally.heads.to_string(), false)
        .field("Tails:", tally.tails.to_string(), false)
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    options: FlipOptions,
) -> Result<(), AppError> {
    let embed = match options.coins {
        None => face_embed(flip_one(&mut rand::rng())),
        Some(coins) => tally_embed(flip_many(&mut rand::rng(), coins)?),
    };

    reply::embed(ctx, command, embed, options.private).await
}
