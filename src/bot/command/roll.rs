//! `/roll`, rolls dice given as notation or as sides and amount.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed,
};

use crate::{
    bot::{command::options::Options, reply},
    error::{internal::InternalError, AppError},
    service::dice::{parse_notation, roll_dice, Dice, DiceRoll},
};

pub const NAME: &str = "roll";

const DEFAULT_SIDES: i64 = 6;
const DEFAULT_AMOUNT: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOptions {
    pub rpg: Option<String>,
    pub sides: i64,
    pub amount: i64,
    pub private: bool,
}

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Roll dices, specify nothing for a normal 6 sided dice")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "rpg",
            "RPG notation - example: 4d8, you may specify multiple",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "sides",
                "Number of sides on a dice",
            )
            .min_int_value(0),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "amount", "Amount of dice to roll")
                .min_int_value(0),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::Boolean,
            "private",
            "Show result only to you",
        ))
}

pub fn parse(options: Options<'_>) -> Result<RollOptions, AppError> {
    Ok(RollOptions {
        rpg: options.string("rpg")?,
        sides: options.integer("sides")?.unwrap_or(DEFAULT_SIDES),
        amount: options.integer("amount")?.unwrap_or(DEFAULT_AMOUNT),
        private: options.boolean("private")?.unwrap_or(false),
    })
}

/// Dice requested by the options. Notation wins over sides and amount.
pub fn requested_dice(options: &RollOptions) -> Result<Vec<Dice>, AppError> {
    if let Some(notation) = &options.rpg {
        return parse_notation(notation);
    }

    let non_negative = |name: &str, value: i64| {
        u64::try_from(value).map_err(|_| AppError::from(InternalError::MalformedOption(name.to_string())))
    };

    Ok(vec![Dice {
        amount: non_negative("amount", options.amount)?,
        sides: non_negative("sides", options.sides)?,
    }])
}

/// Embed listing one field per group of dice.
pub fn results_embed(rolls: &[DiceRoll]) -> CreateEmbed {
    rolls.iter().fold(
        CreateEmbed::new().title("Roll Results:"),
        |embed, roll| embed.field(roll.label(), roll.results_text(), false),
    )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    options: RollOptions,
) -> Result<(), AppError> {
    let dice = requested_dice(&options)?;
    let rolls = roll_dice(&mut rand::rng(), &dice)?;

    reply::embed(ctx, command, results_embed(&rolls), options.private).await
}
