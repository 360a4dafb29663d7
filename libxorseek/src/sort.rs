/// Orderings of a reverse-sorted suffix: `STEP_COUNTS[k] == k!`
pub const STEP_COUNTS: [u64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5040,
    40320,
    362880,
    3628800,
    39916800,
    479001600,
    6227020800,
    87178291200,
    1307674368000,
    20922789888000,
    355687428096000,
    6402373705728000,
    121645100408832000,
    2432902008176640000,
];

/// Advance the sequence by one sorting step.
///
/// Returns true when the sequence is already fully ascending.
pub(crate) fn sort_step(input: &mut [u8]) -> bool {
    // Pick the first index: the rightmost element greater than its
    // successor. The scan direction is inverted relative to the textbook
    // successor algorithm; the limit accounting depends on this ordering.
    let mut first = input.len() - 2;
    while input[first] < input[first + 1] {
        if first == 0 {
            // Sorted
            return true;
        }
        first -= 1;
    }

    // Pick the second index: the rightmost element smaller than the first
    let mut second = input.len() - 1;
    while input[second] > input[first] {
        second -= 1;
    }

    input.swap(first, second);
    input[first + 1..].reverse();

    // Not sorted
    false
}

/// Run the bounded pessimal sort over `input`.
///
/// Performs at most `limit` sorting steps, skipping whole reverse-sorted
/// suffixes in one jump when the remaining budget covers the pre-calculated
/// step count. Returns true once the sequence is fully ascending, false when
/// the budget runs out first.
pub fn sort_with_limit(input: &mut [u8], mut limit: u64) -> bool {
    if input.len() < 2 {
        return true;
    }

    while limit > 0 {
        // Count reverse-sorted bytes at the end of the input
        let mut index = input.len() - 2;
        while index > 0 && input[index] > input[index + 1] {
            index -= 1;
        }
        let length = input.len() - index - 1;

        if length > 2 && length < STEP_COUNTS.len() && limit >= STEP_COUNTS[length] - 1 {
            // Reversing a reverse-sorted suffix of length L lands on the
            // sequence that L! - 1 individual steps would reach
            input[index + 1..].reverse();
            limit -= STEP_COUNTS[length] - 1;
        } else {
            if sort_step(input) {
                return true;
            }
            limit -= 1;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_counts_are_factorials() {
        let mut factorial = 1u64;

        assert_eq!(STEP_COUNTS[0], 1);
        for (k, count) in STEP_COUNTS.iter().enumerate().skip(1) {
            factorial *= k as u64;
            assert_eq!(*count, factorial);
        }
    }

    #[test]
    fn single_step_reaches_predecessor() {
        let mut input = [1u8, 3, 2];
        assert!(!sort_step(&mut input));
        assert_eq!(input, [1, 2, 3]);
    }

    #[test]
    fn ascending_input_is_terminal() {
        let mut input = [0u8, 1, 2, 3, 4];
        assert!(sort_step(&mut input));
        assert_eq!(input, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn short_inputs_are_sorted() {
        assert!(sort_with_limit(&mut [], u64::MAX));
        assert!(sort_with_limit(&mut [42], u64::MAX));
    }

    #[test]
    fn zero_limit_leaves_input_unchanged() {
        let mut input = [4u8, 1, 3, 2];
        assert!(!sort_with_limit(&mut input, 0));
        assert_eq!(input, [4, 1, 3, 2]);
    }
}
