/// Rating every item starts at, and the value `reset_all()` restores.
pub const INITIAL_RATING: i64 = 1500;

/// Default Elo sensitivity (k-factor): the most a single result can move a rating.
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Rating difference at which the favourite is expected to win 10 times out of 11.
pub const RATING_SCALE: f64 = 400.0;

/// Key the whole item collection is stored under.
pub const STORAGE_KEY: &str = "elomaticItems";

/// Default file name for the plain-text export.
pub const EXPORT_FILE_NAME: &str = "elomatic_data.txt";

/// Comparison counts at which the list view's indicator changes tier.
/// 0 = never compared, below FEW = few, below SEVERAL = several, otherwise many.
pub const TIER_FEW_BELOW: u32 = 5;
pub const TIER_SEVERAL_BELOW: u32 = 10;
