//! Bucket assignment: maps a total order onto weighted rating buckets.
//!
//! Bucket sizes are derived from a weight table, so a middle-heavy table
//! pushes most items into the middle tiers. Bucket 0 is always filled
//! first from the top of the ranking; weights are consumed in table
//! order, never re-sorted by magnitude.

use tracing::{debug, warn};

use crate::types::RatingMap;

/// Absolute bucket sizes for `total_items` items under `weights`.
///
/// `size_i = round(weights[i] / total_weight * total_items)`, rounding
/// half away from zero (`f64::round`). Because each size is rounded
/// independently, the sizes need not sum to `total_items`.
pub fn bucket_sizes(weights: &[f64], total_items: usize) -> Vec<usize> {
    let total_weight: f64 = weights.iter().sum();
    weights
        .iter()
        .map(|weight| ((weight / total_weight) * total_items as f64).round() as usize)
        .collect()
}

/// Assign every ranked item to a bucket, best items in bucket 0.
///
/// Walks the ranking from the top, filling bucket 0 to its computed size,
/// then bucket 1, and so on. Rounding undershoot leaves trailing items
/// unassigned; they are dropped from the map, matching the long-standing
/// behavior of this tool, and a warning is logged whenever the computed
/// sizes do not sum to the item count. Oversum is clamped by simply
/// running out of ranked items.
///
/// Deterministic: the same ranking and weights always produce the same
/// map.
pub fn bucketize(ranking: &[String], weights: &[f64]) -> RatingMap {
    let sizes = bucket_sizes(weights, ranking.len());
    let assignable: usize = sizes.iter().sum();
    if assignable != ranking.len() {
        warn!(
            computed = assignable,
            items = ranking.len(),
            "bucket sizes do not sum to item count; trailing items will be dropped or buckets truncated"
        );
    }

    let mut ratings = RatingMap::new();
    let mut next = 0_usize;
    for (bucket, &size) in sizes.iter().enumerate() {
        for _ in 0..size {
            if next >= ranking.len() {
                break;
            }
            ratings.insert(ranking[next].clone(), bucket);
            next += 1;
        }
    }

    debug!(assigned = ratings.len(), dropped = ranking.len() - next, "bucketized ranking");
    ratings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RATING_WEIGHTS;

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("item{i:02}")).collect()
    }

    #[test]
    fn test_bucket_sizes_uniform_weights() {
        assert_eq!(bucket_sizes(&[1.0; 10], 10), vec![1; 10]);
        assert_eq!(bucket_sizes(&[1.0; 10], 20), vec![2; 10]);
    }

    #[test]
    fn test_bucket_sizes_rounds_half_away_from_zero() {
        // 3 items over two equal weights: each share is 1.5, rounded to 2.
        assert_eq!(bucket_sizes(&[1.0, 1.0], 3), vec![2, 2]);
    }

    #[test]
    fn test_bucket_sizes_default_weights_undersum() {
        // With the default table and 10 items the tails round to zero and
        // the sizes only cover 8 of the 10 items.
        let sizes = bucket_sizes(&RATING_WEIGHTS, 10);
        assert_eq!(sizes, vec![0, 0, 1, 1, 2, 2, 1, 1, 0, 0]);
        assert_eq!(sizes.iter().sum::<usize>(), 8);
    }

    #[test]
    fn test_bucketize_uniform_weights_one_item_per_bucket() {
        let ranking = names(10);
        let ratings = bucketize(&ranking, &[1.0; 10]);
        assert_eq!(ratings.len(), 10);
        for (position, name) in ranking.iter().enumerate() {
            assert_eq!(ratings[name], position);
        }
    }

    #[test]
    fn test_bucketize_indices_in_range_and_unique_assignment() {
        let ranking = names(37);
        let ratings = bucketize(&ranking, &RATING_WEIGHTS);
        assert!(ratings.len() <= ranking.len());
        for (name, &bucket) in &ratings {
            assert!(bucket < RATING_WEIGHTS.len(), "{name} got bucket {bucket}");
        }
    }

    #[test]
    fn test_bucketize_undersum_drops_trailing_items() {
        let ranking = names(10);
        let ratings = bucketize(&ranking, &RATING_WEIGHTS);
        // Sizes [0,0,1,1,2,2,1,1,0,0]: the last two ranked items get no bucket.
        assert_eq!(ratings.len(), 8);
        assert!(!ratings.contains_key(&ranking[8]));
        assert!(!ratings.contains_key(&ranking[9]));
        assert_eq!(ratings[&ranking[0]], 2);
        assert_eq!(ratings[&ranking[1]], 3);
        assert_eq!(ratings[&ranking[7]], 7);
    }

    #[test]
    fn test_bucketize_oversum_clamped_by_ranking_length() {
        // Sizes [2, 2] for 3 items: bucket 0 takes two, bucket 1 the rest.
        let ranking = names(3);
        let ratings = bucketize(&ranking, &[1.0, 1.0]);
        assert_eq!(ratings.len(), 3);
        assert_eq!(ratings[&ranking[0]], 0);
        assert_eq!(ratings[&ranking[1]], 0);
        assert_eq!(ratings[&ranking[2]], 1);
    }

    #[test]
    fn test_bucketize_is_idempotent() {
        let ranking = names(23);
        let first = bucketize(&ranking, &RATING_WEIGHTS);
        let second = bucketize(&ranking, &RATING_WEIGHTS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bucketize_empty_ranking() {
        assert!(bucketize(&[], &RATING_WEIGHTS).is_empty());
    }
}
