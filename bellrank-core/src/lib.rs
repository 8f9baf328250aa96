//! bellrank-core: pure-computation ranking and bucketing engine.
//!
//! Pairwise comparisons → total order → bell-curve rating buckets.
//! No IO, no filesystem, no prompts. Bring your own comparator.
//!
//! # Quick start
//!
//! ```rust
//! use bellrank_core::{bucketize, rank, Choice, Comparator, RankOutcome, RATING_WEIGHTS};
//!
//! struct FirstWins;
//! impl Comparator for FirstWins {
//!     fn compare(&mut self, _first: &str, _second: &str) -> Choice {
//!         Choice::First
//!     }
//! }
//!
//! let items: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
//! if let RankOutcome::Ranked(order) = rank(&items, &mut FirstWins) {
//!     let ratings = bucketize(&order, &RATING_WEIGHTS);
//!     for (name, bucket) in &ratings {
//!         println!("{name}: bucket {bucket}");
//!     }
//! }
//! ```

pub mod buckets;
pub mod constants;
pub mod engine;
pub mod types;

// Re-export primary public API at crate root.
pub use buckets::{bucket_sizes, bucketize};
pub use constants::{BUCKET_COUNT, QUIT_TEXT, RATING_WEIGHTS};
pub use engine::{estimate_comparisons, insert_position, rank};
pub use types::{Choice, Comparator, RankOutcome, RatingMap};
