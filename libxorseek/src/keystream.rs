use crate::rng::Pcg32;
use crate::sort::sort_with_limit;
use crate::{PERMUTATION_LEN, ROUNDS};

/// Derive the XOR keystream for a generator seed.
///
/// A single generator, seeded with `(seed, stream 0)`, persists across all
/// rounds. Each round shuffles the identity permutation, keeps its first
/// `length` bytes, draws a 64-bit sorting budget, runs the bounded sort and
/// folds the result into the key. Identical seeds produce bit-identical
/// keystreams.
pub fn derive_keystream(seed: u64, length: usize) -> Vec<u8> {
    assert!(length <= PERMUTATION_LEN, "length validated by callers");

    let mut rng = Pcg32::new(seed, 0);
    let mut buffer = [0u8; PERMUTATION_LEN];
    let mut key = vec![0u8; length];

    for _ in 0..ROUNDS {
        for (index, slot) in buffer.iter_mut().enumerate() {
            *slot = index as u8;
        }

        // Fisher-Yates, last index down to 1
        for j in (1..PERMUTATION_LEN).rev() {
            let drawn = rng.next_below(j as u32 + 1) as usize;
            buffer.swap(j, drawn);
        }

        // Only the first `length` elements are needed
        let mut component = buffer[..length].to_vec();

        let part1 = u64::from(rng.next_u32());
        let part2 = u64::from(rng.next_u32());
        let limit = (part2 << 32) | part1;

        // Both outcomes are accepted; the key folds in whatever state the
        // budget reached
        sort_with_limit(&mut component, limit);

        for (slot, value) in key.iter_mut().zip(&component) {
            *slot ^= value;
        }

        key.reverse();
    }

    key
}
