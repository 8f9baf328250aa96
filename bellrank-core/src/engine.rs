//! Tournament ranking engine.
//!
//! Orders items by pairwise comparisons from an external oracle. Winners of
//! each round advance to the next; once fewer than two survivors remain,
//! every knocked-out item is inserted back into the survivor list by
//! lexicographic binary search over names. The result is a total order,
//! built from far fewer comparisons than a full sort would need.

use tracing::{debug, warn};

use crate::types::{Choice, Comparator, RankOutcome};

/// Upper-bound estimate of comparisons needed to rank `n` items.
///
/// Always `n * (n - 1)`, shown to the user before ranking starts. The
/// actual count is much smaller (one comparison per surviving pair per
/// round), but this figure is kept for compatibility with prior runs.
pub fn estimate_comparisons(n: usize) -> usize {
    n * n.saturating_sub(1)
}

/// Index at which `name` belongs in `ranked`, by ascending lexicographic
/// order: the count of elements strictly less than `name`.
///
/// Note this is string order, not preference order. Items knocked out in
/// round one were never ranked against each other, so their position in
/// the final list is decided by name alone.
pub fn insert_position(ranked: &[String], name: &str) -> usize {
    ranked.partition_point(|existing| existing.as_str() < name)
}

/// Rank `items` in descending preference order using `comparator`.
///
/// Round structure: consecutive pairs in input order; an item left
/// unpaired by an odd count advances unchallenged. Only winners are
/// tracked between rounds. When fewer than two survivors remain, the
/// survivors form the seed ranking and every item missing from it is
/// inserted via [`insert_position`], in original input order.
///
/// Fewer than two items is a no-op: the input comes back unchanged and a
/// warning is logged. A `Quit` from the comparator aborts the whole run
/// immediately; no partial ranking is returned.
pub fn rank(items: &[String], comparator: &mut dyn Comparator) -> RankOutcome {
    if items.len() < 2 {
        warn!("not enough items to rank, returning input unchanged");
        return RankOutcome::Ranked(items.to_vec());
    }

    // Reduce rounds until at most one survivor is left. An explicit loop:
    // depth is only ceil(log2(n)) but there is no reason to recurse.
    let mut survivors: Vec<String> = items.to_vec();
    let mut round = 0_usize;
    while survivors.len() >= 2 {
        round += 1;
        let mut winners = Vec::with_capacity(survivors.len() / 2 + 1);
        for pair in survivors.chunks(2) {
            match pair {
                [first, second] => match comparator.compare(first, second) {
                    Choice::First => winners.push(first.clone()),
                    Choice::Second => winners.push(second.clone()),
                    Choice::Quit => {
                        debug!(round, "comparator requested quit");
                        return RankOutcome::Aborted;
                    }
                },
                // Odd count: the last item advances unchallenged.
                [unpaired] => winners.push(unpaired.clone()),
                _ => unreachable!("chunks(2) yields 1 or 2 elements"),
            }
        }
        debug!(round, advancing = winners.len(), "round complete");
        survivors = winners;
    }

    // Survivors seed the ranking; everyone knocked out along the way is
    // inserted by name, in original input order.
    let mut ranked = survivors;
    for item in items {
        if !ranked.iter().any(|r| r == item) {
            let position = insert_position(&ranked, item);
            ranked.insert(position, item.clone());
        }
    }

    RankOutcome::Ranked(ranked)
}
