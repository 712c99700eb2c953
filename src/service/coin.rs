use rand::Rng;

use crate::error::AppError;

const SIDE_LANDING_CHANCE: f64 = 0.03;

/// Outcome of flipping a single coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinFace {
    Heads,
    Tails,
    Side,
}

impl CoinFace {
    /// Reply text for a single flip.
    pub fn describe(&self) -> &'static str {
        match self {
            CoinFace::Heads => "It landed on heads",
            CoinFace::Tails => "It landed on tails",
            CoinFace::Side => "It landed on it's side.",
        }
    }
}

/// Heads and tails totals of flipping several coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoinTally {
    pub heads: u64,
    pub tails: u64,
}

fn heads<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}

/// Flips one coin, which occasionally lands on its side.
pub fn flip_one<R: Rng + ?Sized>(rng: &mut R) -> CoinFace {
    if rng.random_bool(SIDE_LANDING_CHANCE) {
        CoinFace::Side
    } else if heads(rng) {
        CoinFace::Heads
    } else {
        CoinFace::Tails
    }
}

/// Flips `coins` coins and counts the faces.
///
/// # Returns
/// - `Ok(CoinTally)` - Totals for two or more coins
/// - `Err(AppError::Validation)` - The amount is more than three characters long,
///   negative, zero, or one
pub fn flip_many<R: Rng + ?Sized>(rng: &mut R, coins: i64) -> Result<CoinTally, AppError> {
    if coins.to_string().len() > 3 {
        return Err(AppError::Validation("WTF are you trying to do?".to_string()));
    }
    if coins < 0 {
        return Err(AppError::Validation(
            "How am I supposed to flip a negative amount of coins?".to_string(),
        ));
    }
    if coins == 0 {
        return Err(AppError::Validation(
            "How am I supposed to flip zero coins?".to_string(),
        ));
    }
    if coins == 1 {
        return Err(AppError::Validation(
            "Did you know that you don't need to type the amount if you are only flipping one coin?"
                .to_string(),
        ));
    }

    let mut tally = CoinTally::default();
    for _ in 0..coins {
        if heads(rng) {
            tally.heads += 1;
        } else {
            tally.tails += 1;
        }
    }

    Ok(tally)
}
