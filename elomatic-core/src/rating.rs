/// Elo rating updates for a single head-to-head result.
///
/// Pure computation, no state beyond the k-factor.
use serde::Deserialize;

use crate::constants::{DEFAULT_K_FACTOR, RATING_SCALE};

/// Configuration for the rating engine.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Sensitivity: how far one result can move a rating.
    pub k_factor: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        RatingConfig { k_factor: DEFAULT_K_FACTOR }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EloRating {
    k_factor: f64,
}

impl Default for EloRating {
    fn default() -> Self {
        Self::new(RatingConfig::default())
    }
}

impl EloRating {
    pub fn new(config: RatingConfig) -> Self {
        EloRating { k_factor: config.k_factor }
    }

    pub fn k_factor(&self) -> f64 {
        self.k_factor
    }

    /// New ratings after `winner_rating` beat `loser_rating`.
    ///
    /// Each side is updated against its own expectation, then rounded.
    /// Returns `(new_winner_rating, new_loser_rating)`.
    pub fn apply_result(&self, winner_rating: i64, loser_rating: i64) -> (i64, i64) {
        let expected_winner = expected_score(winner_rating, loser_rating);
        let expected_loser = expected_score(loser_rating, winner_rating);

        let new_winner = round_half_up(winner_rating as f64 + self.k_factor * (1.0 - expected_winner));
        let new_loser = round_half_up(loser_rating as f64 + self.k_factor * (0.0 - expected_loser));

        (new_winner, new_loser)
    }
}

/// Logistic win probability on the base-10, 400-point Elo scale.
///
/// The difference is taken in `f64` so any pair of stored ratings is valid.
pub fn expected_score(rating_a: i64, rating_b: i64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b as f64 - rating_a as f64) / RATING_SCALE))
}

// Ties round toward +inf. The cast saturates at the i64 bounds.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
