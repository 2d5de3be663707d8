/// elomatic-core: rank a personal list by picking winners between two items.
///
/// Pick a pair → record the winner → Elo ratings move → pick the next pair.
/// The core owns the item collection and hands every write to a pluggable
/// key-value backend. No terminal, no UI: callers render the plain data it returns.
///
/// # Quick start
///
/// ```rust
/// use elomatic_core::{ItemStore, MemoryStore, RatingConfig};
///
/// let mut store = ItemStore::open(MemoryStore::new(), RatingConfig::default()).unwrap();
/// store.add("Pizza").unwrap();
/// store.add("Sushi").unwrap();
///
/// let comparison = store.next_comparison().unwrap();
/// let outcome = store.record_comparison(comparison, true).unwrap();
/// assert_eq!(outcome.winner_after, 1516);
///
/// // Bulk edit / import: keep Pizza's score, drop Sushi, add Tacos.
/// store.reconcile_from_text("Pizza\nTacos\n").unwrap();
/// assert_eq!(store.len(), 2);
/// ```

pub mod bulk_edit;
pub mod constants;
pub mod error;
pub mod pairing;
pub mod persistence;
pub mod rating;
pub mod reconcile;
pub mod store;
pub mod types;

// Re-export primary public API at crate root.
pub use bulk_edit::BulkEdit;
pub use constants::{EXPORT_FILE_NAME, INITIAL_RATING, STORAGE_KEY};
pub use error::{ElomaticError, Result, StoreError};
pub use pairing::{select_pair, select_pair_with_rng};
pub use persistence::{FileStore, KeyValueStore, MemoryStore};
pub use rating::{expected_score, EloRating, RatingConfig};
pub use reconcile::reconcile;
pub use store::ItemStore;
pub use types::{Comparison, ComparisonOutcome, ComparisonTier, Item, SortMethod};
