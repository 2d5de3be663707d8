use serde::{Deserialize, Serialize};

use crate::constants::{INITIAL_RATING, TIER_FEW_BELOW, TIER_SEVERAL_BELOW};

/// One ranked entity.
///
/// The title is the identity key for reconciliation and never changes after
/// creation; only the rating engine and resets touch `score` and `comparisons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    title: String,
    pub score: i64,
    pub comparisons: u32,
}

impl Item {
    /// A fresh item at the initial rating with no comparisons.
    pub fn new(title: impl Into<String>) -> Self {
        Item {
            title: title.into(),
            score: INITIAL_RATING,
            comparisons: 0,
        }
    }

    /// Rebuild an item with existing state (e.g. from storage).
    pub fn with_state(title: impl Into<String>, score: i64, comparisons: u32) -> Self {
        Item {
            title: title.into(),
            score,
            comparisons,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tier(&self) -> ComparisonTier {
        ComparisonTier::from_count(self.comparisons)
    }

    pub(crate) fn reset(&mut self) {
        self.score = INITIAL_RATING;
        self.comparisons = 0;
    }
}

/// Two distinct indices into the live collection, presented side by side.
///
/// Only valid until the collection is next mutated by anything other than
/// `record_result` on these same two items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub first: usize,
    pub second: usize,
}

impl Comparison {
    /// `(winner, loser)` indices given which slot the user picked.
    pub fn resolve(&self, first_wins: bool) -> (usize, usize) {
        if first_wins {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

/// What a resolved comparison did to the two items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonOutcome {
    pub winner_index: usize,
    pub loser_index: usize,
    pub winner_title: String,
    pub loser_title: String,
    pub winner_before: i64,
    pub winner_after: i64,
    pub loser_before: i64,
    pub loser_after: i64,
}

impl ComparisonOutcome {
    pub fn winner_delta(&self) -> i64 {
        self.winner_after.saturating_sub(self.winner_before)
    }

    pub fn loser_delta(&self) -> i64 {
        self.loser_after.saturating_sub(self.loser_before)
    }
}

/// Ordering for list views. The stored collection order is never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Highest score first.
    #[default]
    Score,
    /// Title, A to Z.
    Alpha,
    /// Most compared first.
    Compares,
}

/// How well-established an item's score is, by comparison count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonTier {
    Never,
    Few,
    Several,
    Many,
}

impl ComparisonTier {
    pub fn from_count(comparisons: u32) -> Self {
        match comparisons {
            0 => ComparisonTier::Never,
            n if n < TIER_FEW_BELOW => ComparisonTier::Few,
            n if n < TIER_SEVERAL_BELOW => ComparisonTier::Several,
            _ => ComparisonTier::Many,
        }
    }
}
