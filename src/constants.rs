use std::ops::Range;

/// Seed of the pseudo-random sample sorted by the demo, fixed so its output is reproducible
pub const DEMO_SEED: u64 = 0;
pub const DEMO_RANDOM_LEN: usize = 12;
pub const DEMO_REVERSE_LEN: usize = 8;
pub const DEMO_VALUE_RANGE: Range<i32> = -50..50;
