/// Length of one generated permutation, and the longest derivable keystream
pub const PERMUTATION_LEN: usize = 256;
/// Number of XOR-accumulation rounds per derived keystream
pub const ROUNDS: usize = 16;
/// Number of candidate seeds in the full search space
pub const SEED_SPACE: u32 = 1 << 16;

mod keystream;
mod rng;
mod sort;

pub mod error;
pub mod search;

pub use keystream::derive_keystream;
pub use rng::Pcg32;
pub use sort::{sort_with_limit, STEP_COUNTS};
