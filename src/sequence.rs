//! Baseline sequences with a fixed stride.

/// Default stride between consecutive baseline values.
pub const STEP: i64 = 10;

/// Default number of consecutive differences in the experiment. The
/// experiment sequence itself holds `LEN + 1` values.
pub const LEN: usize = 1000;

/// Sets `sequence[i] = i * step` for every position.
///
/// # Examples
/// ```
/// use u_randomize::sequence::fill;
/// let mut v = vec![0_i64; 4];
/// fill(&mut v, 10);
/// assert_eq!(v, vec![0, 10, 20, 30]);
/// ```
pub fn fill(sequence: &mut [i64], step: i64) {
    for (i, slot) in sequence.iter_mut().enumerate() {
        *slot = i as i64 * step;
    }
}

/// Allocates a sequence of `len` values filled with [`fill`].
pub fn filled(len: usize, step: i64) -> Vec<i64> {
    let mut sequence = vec![0; len];
    fill(&mut sequence, step);
    sequence
}

/// Returns `true` if `a` and `b` hold the same values with the same
/// multiplicities, in any order.
///
/// # Examples
/// ```
/// use u_randomize::sequence::is_permutation_of;
/// assert!(is_permutation_of(&[3, 1, 2], &[1, 2, 3]));
/// assert!(!is_permutation_of(&[1, 1, 2], &[1, 2, 2]));
/// ```
pub fn is_permutation_of<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut sorted_a = a.to_vec();
    let mut sorted_b = b.to_vec();
    sorted_a.sort_unstable();
    sorted_b.sort_unstable();
    sorted_a == sorted_b
}
