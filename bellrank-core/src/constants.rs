/// Number of rating buckets.
pub const BUCKET_COUNT: usize = 10;

/// Relative target sizes for the rating buckets, in bucket order.
///
/// Skewed toward the middle buckets so that bucket sizes roughly follow a
/// normal distribution: most items land in average tiers, few at either
/// extreme. These are relative weights, not absolute counts. Bucket 0 is
/// still the first one filled from the top of the ranking, regardless of
/// its weight.
pub const RATING_WEIGHTS: [f64; BUCKET_COUNT] =
    [1.0, 2.0, 4.0, 8.0, 12.0, 12.0, 8.0, 4.0, 2.0, 1.0];

/// Default token the user types to quit mid-ranking. Matched
/// case-insensitively.
pub const QUIT_TEXT: &str = "q";
