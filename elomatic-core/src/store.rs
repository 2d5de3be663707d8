/// The canonical item collection and every operation that mutates it.
///
/// Each mutating operation computes its new state in memory, then writes the
/// whole collection through the backend. A failed write is returned to the
/// caller but the in-memory change stays applied.
use tracing::{debug, warn, Level};

use crate::constants::STORAGE_KEY;
use crate::error::{ElomaticError, Result};
use crate::pairing::select_pair;
use crate::persistence::{load_items, save_items, KeyValueStore};
use crate::rating::{EloRating, RatingConfig};
use crate::reconcile::{dropped_count, reconcile};
use crate::types::{Comparison, ComparisonOutcome, Item, SortMethod};

pub struct ItemStore<S: KeyValueStore> {
    items: Vec<Item>,
    backend: S,
    elo: EloRating,
}

impl<S: KeyValueStore> ItemStore<S> {
    /// Load the stored collection from `backend`.
    ///
    /// Stored data that doesn't parse is logged and replaced by an empty
    /// collection; a backend that can't be read is an error.
    pub fn open(backend: S, config: RatingConfig) -> Result<Self> {
        let items = match load_items(&backend, STORAGE_KEY) {
            Ok(items) => items,
            Err(ElomaticError::Deserialization(e)) => {
                warn!(error = %e, "Stored items are unreadable, starting with an empty list");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self::with_items(backend, config, items))
    }

    /// Wrap an existing collection. Nothing is written until the first mutation.
    pub fn with_items(backend: S, config: RatingConfig, items: Vec<Item>) -> Self {
        ItemStore {
            items,
            backend,
            elo: EloRating::new(config),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Append a new item. Returns its index.
    pub fn add(&mut self, title: &str) -> Result<usize> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ElomaticError::Validation("title must not be empty".to_string()));
        }
        self.items.push(Item::new(title));
        let index = self.items.len() - 1;
        debug!(index, title, "Added item");
        self.persist()?;
        Ok(index)
    }

    /// Remove the item at `index` and return it.
    pub fn delete(&mut self, index: usize) -> Result<Item> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        debug!(index, title = removed.title(), "Deleted item");
        self.persist()?;
        Ok(removed)
    }

    /// Every item back to the initial rating with zero comparisons.
    pub fn reset_all(&mut self) -> Result<()> {
        for item in &mut self.items {
            item.reset();
        }
        debug!(count = self.items.len(), "Reset all scores");
        self.persist()
    }

    /// Apply one head-to-head result.
    pub fn record_result(&mut self, winner_index: usize, loser_index: usize) -> Result<ComparisonOutcome> {
        self.check_index(winner_index)?;
        self.check_index(loser_index)?;
        if winner_index == loser_index {
            return Err(ElomaticError::SameItem(winner_index));
        }

        let winner_before = self.items[winner_index].score;
        let loser_before = self.items[loser_index].score;
        let (winner_after, loser_after) = self.elo.apply_result(winner_before, loser_before);

        let winner = &mut self.items[winner_index];
        winner.score = winner_after;
        winner.comparisons = winner.comparisons.saturating_add(1);
        let loser = &mut self.items[loser_index];
        loser.score = loser_after;
        loser.comparisons = loser.comparisons.saturating_add(1);

        let outcome = ComparisonOutcome {
            winner_index,
            loser_index,
            winner_title: self.items[winner_index].title().to_string(),
            loser_title: self.items[loser_index].title().to_string(),
            winner_before,
            winner_after,
            loser_before,
            loser_after,
        };
        debug!(
            winner = %outcome.winner_title,
            loser = %outcome.loser_title,
            winner_delta = outcome.winner_delta(),
            loser_delta = outcome.loser_delta(),
            "Recorded result"
        );

        self.persist()?;
        Ok(outcome)
    }

    /// Record the user's pick for a presented comparison.
    pub fn record_comparison(&mut self, comparison: Comparison, first_wins: bool) -> Result<ComparisonOutcome> {
        let (winner, loser) = comparison.resolve(first_wins);
        self.record_result(winner, loser)
    }

    /// Pick the next two items to compare from the live collection.
    pub fn next_comparison(&self) -> Result<Comparison> {
        select_pair(&self.items).ok_or(ElomaticError::NotEnoughItems { len: self.items.len() })
    }

    /// Replace the collection with the one described by `lines`.
    ///
    /// Returns how many items the new collection has. Zero is an
    /// `EmptyInput` error and leaves the current collection untouched.
    pub fn reconcile_from_lines<I, L>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let rebuilt = reconcile(&self.items, lines);
        if rebuilt.is_empty() {
            return Err(ElomaticError::EmptyInput);
        }

        let count = rebuilt.len();
        if tracing::enabled!(Level::DEBUG) {
            debug!(count, dropped = dropped_count(&self.items, &rebuilt), "Reconciled items");
        }
        self.items = rebuilt;

        self.persist()?;
        Ok(count)
    }

    /// [`reconcile_from_lines`](Self::reconcile_from_lines) over newline-separated text.
    pub fn reconcile_from_text(&mut self, text: &str) -> Result<usize> {
        self.reconcile_from_lines(text.lines())
    }

    /// One title per line in stored order, each line newline-terminated.
    pub fn export_text(&self) -> String {
        self.items.iter().fold(String::new(), |mut out, item| {
            out.push_str(item.title());
            out.push('\n');
            out
        })
    }

    /// Items with their stored index, ordered for display.
    pub fn sorted(&self, method: SortMethod) -> Vec<(usize, &Item)> {
        let mut view: Vec<(usize, &Item)> = self.items.iter().enumerate().collect();
        match method {
            SortMethod::Score => view.sort_by(|a, b| b.1.score.cmp(&a.1.score)),
            SortMethod::Alpha => view.sort_by(|a, b| a.1.title().cmp(b.1.title())),
            SortMethod::Compares => view.sort_by(|a, b| b.1.comparisons.cmp(&a.1.comparisons)),
        }
        view
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(ElomaticError::IndexOutOfRange { index, len: self.items.len() });
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        save_items(&mut self.backend, STORAGE_KEY, &self.items)
    }
}
