//! Dice notation parsing and rolling.
//!
//! Notation is one or more whitespace separated tokens of the form `[count]d<sides>`,
//! e.g. `4d8 2d6 d20`. An omitted count means one die.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::error::AppError;

static NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d*)[dD](\d+)$").expect("valid dice notation regex"));

const MAX_NOTATION_LENGTH: usize = 50;
const MAX_AMOUNT: u64 = 100;
const MAX_SIDES: u64 = 1000;

/// A group of identical dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    pub amount: u64,
    pub sides: u64,
}

/// Results of rolling one group of dice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    pub dice: Dice,
    pub results: Vec<u64>,
}

impl DiceRoll {
    /// Field name shown in the reply, e.g. `4 x D8`.
    pub fn label(&self) -> String {
        format!("{} x D{}", self.dice.amount, self.dice.sides)
    }

    /// Comma separated results.
    pub fn results_text(&self) -> String {
        self.results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn invalid(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}

/// Parses dice notation.
///
/// Every token must match before anything is returned. Numbers too large for `u64`
/// parse as `u64::MAX` so they fail the size checks.
///
/// # Returns
/// - `Ok(Vec<Dice>)` - One entry per token, in input order
/// - `Err(AppError::Validation)` - Input longer than 50 characters, empty, or a token
///   that is not dice notation
pub fn parse_notation(input: &str) -> Result<Vec<Dice>, AppError> {
    if input.chars().count() > MAX_NOTATION_LENGTH {
        return Err(invalid("Too much dice"));
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(invalid("Invalid dice syntax"));
    }

    tokens
        .into_iter()
        .map(|token| {
            let captures = NOTATION
                .captures(token)
                .ok_or_else(|| invalid("Invalid dice syntax"))?;

            let amount = match &captures[1] {
                "" => 1,
                count => count.parse().unwrap_or(u64::MAX),
            };
            let sides = captures[2].parse().unwrap_or(u64::MAX);

            Ok(Dice { amount, sides })
        })
        .collect()
}

/// Checks that a group of dice can be rolled.
///
/// Checks run in a fixed order and the first failing one decides the message.
pub fn validate(dice: &Dice) -> Result<(), AppError> {
    if dice.amount == 0 {
        return Err(invalid("How am I supposed to roll zero dice?"));
    }
    if dice.sides == 2 {
        return Err(invalid("Did you mean to flip a coin instead?"));
    }
    if dice.sides == 1 {
        return Err(invalid("A 1 sided dice? that's just 1, every single time"));
    }
    if dice.sides == 0 {
        return Err(invalid("A dice with zero sides? I can't roll that"));
    }
    if dice.amount > MAX_AMOUNT {
        return Err(invalid("I don't have that many dice to roll"));
    }
    if dice.sides > MAX_SIDES {
        return Err(invalid("How big of a dice are you trying to roll?"));
    }

    Ok(())
}

/// Validates every group, then rolls them all.
///
/// # Returns
/// - `Ok(Vec<DiceRoll>)` - One entry per group with `amount` results in `1..=sides`
/// - `Err(AppError::Validation)` - The first group that cannot be rolled
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R, dice: &[Dice]) -> Result<Vec<DiceRoll>, AppError> {
    for group in dice {
        validate(group)?;
    }

    Ok(dice
        .iter()
        .map(|group| DiceRoll {
            dice: *group,
            results: (0..group.amount)
                .map(|_| rng.random_range(1..=group.sides))
                .collect(),
        })
        .collect())
}
