use std::collections::BTreeMap;

/// Outcome of a single pairwise comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The first item presented is the better one.
    First,
    /// The second item presented is the better one.
    Second,
    /// The oracle wants to stop the whole ranking run.
    Quit,
}

/// The decision source that picks a winner between two items.
///
/// The engine calls this at every pairwise comparison and nowhere else.
/// `Quit` is the only cancellation channel, observed only at comparison
/// points. Calls may block indefinitely (a human at a prompt).
pub trait Comparator {
    fn compare(&mut self, first: &str, second: &str) -> Choice;
}

/// Result of a full ranking run.
///
/// An abort is a deliberate early exit requested through the comparator,
/// not an error. The caller is expected to flush partial state and stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankOutcome {
    /// All comparisons completed; names in descending preference order.
    Ranked(Vec<String>),
    /// The comparator signalled quit mid-run.
    Aborted,
}

/// Item name → bucket index. BTreeMap so iteration order is deterministic.
pub type RatingMap = BTreeMap<String, usize>;
