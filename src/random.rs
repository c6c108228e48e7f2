//! Seeded generators, in-place randomization, and shuffling.
//!
//! Provides the approximate "N random transpositions" randomizer along
//! with an exact Fisher-Yates shuffle for comparison.
//!
//! # Reproducibility
//!
//! Every routine takes the generator explicitly. Use [`create_rng`] with a
//! fixed seed to replay a run; the underlying algorithm (SmallRng) is
//! deterministic for a given seed on the same platform.

use rand::{Rng, RngCore};
use tracing::debug;

use crate::error::{Error, Result};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_randomize::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws a fresh seed from the OS-seeded thread generator.
///
/// Callers that have no seed of their own should log the returned value
/// so the run can be replayed with [`create_rng`].
pub fn entropy_seed() -> u64 {
    rand::rng().next_u64()
}

/// Exchanges the elements at positions `a` and `b`.
///
/// `swap(seq, a, a)` leaves the sequence untouched.
///
/// # Errors
/// [`Error::IndexOutOfBounds`] if either position is `>= seq.len()`; the
/// sequence is not modified in that case.
///
/// # Examples
/// ```
/// use u_randomize::random::swap;
/// let mut v = vec![10, 20, 30];
/// swap(&mut v, 0, 2).unwrap();
/// assert_eq!(v, vec![30, 20, 10]);
/// assert!(swap(&mut v, 0, 3).is_err());
/// ```
pub fn swap<T>(sequence: &mut [T], a: usize, b: usize) -> Result<()> {
    let len = sequence.len();
    for index in [a, b] {
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
    }
    sequence.swap(a, b);
    Ok(())
}

/// Randomizes `sequence` in place with `len` random transpositions.
///
/// Each of the `len` iterations draws two positions `a` and `b`
/// independently and uniformly from `[0, len)` and swaps them. `a == b`
/// is allowed and leaves the sequence unchanged for that step.
///
/// This is **not** a uniform shuffle: `n` random transpositions only
/// approach uniform mixing. Use [`shuffle`] when every permutation must be
/// equally likely.
///
/// # Complexity
/// Time: O(n), Space: O(1). Consumes exactly `2n` index draws from `rng`.
///
/// # Examples
/// ```
/// use u_randomize::random::{create_rng, randomize};
/// let mut v: Vec<i64> = (0..100).collect();
/// let mut rng = create_rng(7);
/// randomize(&mut v, &mut rng);
/// v.sort();
/// assert_eq!(v, (0..100).collect::<Vec<i64>>());
/// ```
pub fn randomize<T, R: Rng + ?Sized>(sequence: &mut [T], rng: &mut R) {
    let len = sequence.len();
    debug!(len, draws = 2 * len, "randomizing via random transpositions");
    for _ in 0..len {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        sequence.swap(a, b);
    }
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely.
///
/// # Algorithm
/// Iterates backwards, swapping each element with a uniformly chosen
/// earlier (or same) position.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use u_randomize::random::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle(&mut v, &mut rng);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: Rng + ?Sized>(sequence: &mut [T], rng: &mut R) {
    let n = sequence.len();
    debug!(len = n, "shuffling via Fisher-Yates");
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        sequence.swap(i, j);
    }
}

// ============================================================================
// Tests
// ============================================================================
