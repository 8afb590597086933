//! Shared internal utilities for perceptron-rs.

/// Linear congruential PRNG driving the training-set shuffle.
pub(crate) fn rng_next(state: &mut u64) -> usize {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (*state >> 33) as usize
}

/// Shuffle `items` in place.
///
/// The permutation is a plain Fisher–Yates pass driven by [`rng_next`], so it
/// is fully determined by `seed`: the same seed over the same length always
/// produces the same permutation.
pub fn shuffle<T>(items: &mut [T], seed: u64) {
    let len = items.len();
    if len <= 1 {
        return;
    }
    let mut state = seed;
    for i in 0..len {
        let j = i + rng_next(&mut state) % (len - i);
        items.swap(i, j);
    }
}
