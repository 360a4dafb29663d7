/// Multiplier of the 64-bit linear congruential step
const MULTIPLIER: u64 = 6364136223846793005;

/// PCG-XSH-RR 64/32 generator, setseq variant.
///
/// The keystream derivation fixes the exact draw sequence, so the constants,
/// the seeding procedure and the bounded-draw scheme must stay as they are.
#[derive(Debug)]
pub struct Pcg32 {
    state: u64,
    increment: u64,
}

impl Pcg32 {
    /// Create a generator for the given seed and stream
    pub fn new(seed: u64, stream: u64) -> Self {
        let mut rng = Self {
            state: 0,
            increment: (stream << 1) | 1,
        };

        rng.advance();
        rng.state = rng.state.wrapping_add(seed);
        rng.advance();

        rng
    }

    /// Draw the next 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.advance();

        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rotation = (old >> 59) as u32;

        xorshifted.rotate_right(rotation)
    }

    /// Draw a uniform value in `[0, bound)` using threshold rejection
    pub fn next_below(&mut self, bound: u32) -> u32 {
        let threshold = bound.wrapping_neg() % bound;

        loop {
            let value = self.next_u32();
            if value >= threshold {
                return value % bound;
            }
        }
    }

    fn advance(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_vector() {
        // First outputs of the canonical pcg32 demo, seed 42 stream 54
        let mut rng = Pcg32::new(42, 54);
        let expected = [
            0xa15c02b7u32,
            0x7b47f409,
            0xba1d3330,
            0x83d2f293,
            0xbfa4784b,
            0xcbed606e,
        ];

        for value in expected {
            assert_eq!(rng.next_u32(), value);
        }
    }

    #[test]
    fn bounded_draws_stay_below_bound() {
        let mut rng = Pcg32::new(7, 0);

        for bound in [1u32, 2, 6, 52, 256] {
            for _ in 0..100 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }
}
