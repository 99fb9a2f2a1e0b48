/// Table lengths every benchmark is run against.
pub const SIZES: [usize; 5] = [1_000, 10_000, 100_000, 1_000_000, 4_000_000];

/// Maximum load factors every benchmark is run against.
pub const LOAD_FACTORS: [f64; 4] = [0.5, 0.75, 1.0, 2.0];
