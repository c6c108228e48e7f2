//! Consecutive-difference statistics with numerical stability guarantees.
//!
//! Used to sanity-check a randomized sequence: the differences between
//! adjacent values of a well-mixed stride sequence should have a mean near
//! zero and a large spread.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier-compensated summation for O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm, population form
//!   (no Bessel correction). Mathematically equal to `E[x²] − E[x]²` but
//!   free of catastrophic cancellation.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

use crate::error::{Error, Result};

/// Returns `seq[i + 1] - seq[i]` for every adjacent pair.
///
/// A sequence of `n + 1` values yields `n` differences; fewer than two
/// values yield none. Differences are widened to `i128` since two `i64`
/// neighbours can be up to `2^64 - 1` apart.
///
/// # Examples
/// ```
/// use u_randomize::stats::consecutive_diffs;
/// assert_eq!(consecutive_diffs(&[0, 30, 10]), vec![30, -20]);
/// assert!(consecutive_diffs(&[5]).is_empty());
/// ```
pub fn consecutive_diffs(seq: &[i64]) -> Vec<i128> {
    seq.windows(2)
        .map(|w| i128::from(w[1]) - i128::from(w[0]))
        .collect()
}

/// Computes the arithmetic mean using compensated summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_randomize::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the population variance using Welford's online algorithm.
///
/// Returns the **population** variance (denominator `n`).
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_randomize::stats::population_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-10);
/// ```
pub fn population_variance(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    acc.extend(data.iter().copied());
    acc.population_variance()
}

/// Computes the population standard deviation.
///
/// Equivalent to `sqrt(population_variance(data))`.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}

/// Neumaier compensated summation.
///
/// Improved Kahan summation that also handles the case where the addend
/// is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
/// und Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for count, mean, and population variance.
///
/// Backs [`population_variance`] and [`DiffSummary::from_sequence`].
///
/// # Examples
/// ```
/// use u_randomize::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-12);
/// assert!((acc.population_std_dev().unwrap() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean_acc: 0.0,
            m2: 0.0,
        }
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        self.m2 += delta * (value - self.mean_acc);
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean_acc)
        }
    }

    /// Returns the population variance (n denominator), or `None` if no
    /// samples have been added.
    pub fn population_variance(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.count as f64)
        }
    }

    /// Returns the population standard deviation, or `None` if no samples
    /// have been added.
    pub fn population_std_dev(&self) -> Option<f64> {
        self.population_variance().map(f64::sqrt)
    }

}

impl Default for WelfordAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for WelfordAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.update(x);
        }
    }
}

// ---------------------------------------------------------------------------
// Difference summary
// ---------------------------------------------------------------------------

/// Mean and population standard deviation of a sequence's consecutive
/// differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffSummary {
    /// Number of differences (sequence length minus one)
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl DiffSummary {
    /// Summarizes the consecutive differences of `seq`.
    ///
    /// # Errors
    /// [`Error::InsufficientData`] if `seq` has fewer than two values.
    ///
    /// # Examples
    /// ```
    /// use u_randomize::stats::DiffSummary;
    /// let s = DiffSummary::from_sequence(&[0, 10, 20, 30]).unwrap();
    /// assert_eq!(s.count, 3);
    /// assert_eq!(s.mean, 10.0);
    /// assert_eq!(s.std_dev, 0.0);
    /// ```
    pub fn from_sequence(seq: &[i64]) -> Result<Self> {
        if seq.len() < 2 {
            return Err(Error::InsufficientData {
                needed: 2,
                got: seq.len(),
            });
        }
        let diffs: Vec<f64> = consecutive_diffs(seq)
            .into_iter()
            .map(|d| d as f64)
            .collect();
        let mut acc = WelfordAccumulator::new();
        acc.extend(diffs.iter().copied());
        let (Some(m), Some(sd)) = (mean(&diffs), acc.population_std_dev()) else {
            return Err(Error::InsufficientData {
                needed: 2,
                got: seq.len(),
            });
        };
        Ok(Self {
            count: diffs.len(),
            mean: m,
            std_dev: sd,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // --- consecutive_diffs ---

    #[test]
    fn test_diffs_basic() {
        assert_eq!(consecutive_diffs(&[0, 10, 20, 30]), vec![10, 10, 10]);
    }

    #[test]
    fn test_diffs_short() {
        assert!(consecutive_diffs(&[]).is_empty());
        assert!(consecutive_diffs(&[1]).is_empty());
    }

    #[test]
    fn test_diffs_telescope() {
        let seq = [40, 0, 30, 10, 20];
        let total: i128 = consecutive_diffs(&seq).iter().sum();
        assert_eq!(total, i128::from(seq[4] - seq[0]));
    }

    #[test]
    fn test_diffs_span_full_i64_range() {
        let diffs = consecutive_diffs(&[i64::MIN, i64::MAX, i64::MIN]);
        let span = i128::from(i64::MAX) - i128::from(i64::MIN);
        assert_eq!(diffs, vec![span, -span]);
    }

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_nan() {
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), None);
    }

    #[test]
    fn test_mean_inf() {
        assert_eq!(mean(&[1.0, f64::INFINITY, 3.0]), None);
    }

    // --- population variance / std dev ---

    #[test]
    fn test_population_variance() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_variance(&v).unwrap(), 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_population_std_dev_matches_moment_formula() {
        let v = [10.0, -20.0, 30.0, 0.0, -10.0];
        let n = v.len() as f64;
        let ex = v.iter().sum::<f64>() / n;
        let ex2 = v.iter().map(|x| x * x).sum::<f64>() / n;
        let expected = (ex2 - ex * ex).sqrt();
        assert_relative_eq!(population_std_dev(&v).unwrap(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_population_variance_single() {
        assert_eq!(population_variance(&[3.0]), Some(0.0));
    }

    #[test]
    fn test_population_variance_empty() {
        assert_eq!(population_variance(&[]), None);
        assert_eq!(population_std_dev(&[]), None);
    }

    #[test]
    fn test_variance_large_offset() {
        // Naive E[x²] − E[x]² would cancel catastrophically here.
        let data: Vec<f64> = (1..=5).map(|i| 1e9 + i as f64).collect();
        let var = population_variance(&data).unwrap();
        assert!(
            (var - 2.0).abs() < 1e-5,
            "Variance of offset data should be ~2.0, got {var}"
        );
    }

    // --- kahan_sum ---

    #[test]
    fn test_kahan_sum_precision() {
        // Sum of 1e16 + 1.0 + (-1e16) with naive sum loses the 1.0
        let v = [1e16, 1.0, -1e16];
        let result = kahan_sum(&v);
        assert!(
            (result - 1.0).abs() < 1e-10,
            "Kahan sum should preserve the 1.0: got {result}"
        );
    }

    // --- WelfordAccumulator ---

    #[test]
    fn test_welford_empty() {
        let acc = WelfordAccumulator::new();
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.population_variance(), None);
    }

    #[test]
    fn test_welford_extend_matches_batch() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let mut acc = WelfordAccumulator::default();
        acc.extend(data);
        assert_eq!(acc.count(), 8);
        assert_relative_eq!(acc.mean().unwrap(), mean(&data).unwrap(), epsilon = 1e-14);
        assert_relative_eq!(acc.population_variance().unwrap(), 5.25, epsilon = 1e-10);
    }

    // --- DiffSummary ---

    #[test]
    fn test_summary_alternating() {
        // diffs: +10, -10, +10, -10
        let s = DiffSummary::from_sequence(&[0, 10, 0, 10, 0]).unwrap();
        assert_eq!(s.count, 4);
        assert_relative_eq!(s.mean, 0.0);
        assert_relative_eq!(s.std_dev, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_extreme_neighbours() {
        // The single difference is 2^64 - 1, which does not fit in an i64.
        let s = DiffSummary::from_sequence(&[i64::MIN, i64::MAX]).unwrap();
        assert_eq!(s.count, 1);
        assert_relative_eq!(s.mean, 18_446_744_073_709_551_615.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_summary_extreme_alternating() {
        let s = DiffSummary::from_sequence(&[i64::MAX, i64::MIN, i64::MAX]).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.mean, 0.0);
        assert_relative_eq!(s.std_dev, 18_446_744_073_709_551_615.0);
    }

    #[test]
    fn test_summary_too_short() {
        assert_eq!(
            DiffSummary::from_sequence(&[1]),
            Err(Error::InsufficientData { needed: 2, got: 1 })
        );
        assert!(DiffSummary::from_sequence(&[]).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating finite f64 vectors of reasonable size.
    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn variance_non_negative(data in finite_vec(1, 100)) {
            let var = population_variance(&data).unwrap();
            prop_assert!(var >= 0.0, "variance must be >= 0, got {}", var);
        }

        #[test]
        fn welford_matches_population_variance(data in finite_vec(1, 100)) {
            let mut acc = WelfordAccumulator::new();
            acc.extend(data.iter().copied());
            let batch = population_variance(&data).unwrap();
            prop_assert_eq!(acc.count(), data.len() as u64);
            prop_assert!((acc.population_variance().unwrap() - batch).abs() < 1e-6 * batch.max(1.0));
        }

        #[test]
        fn diff_summary_is_finite(
            seq in proptest::collection::vec(any::<i64>(), 2..200),
        ) {
            let s = DiffSummary::from_sequence(&seq).unwrap();
            prop_assert_eq!(s.count, seq.len() - 1);
            prop_assert!(s.mean.is_finite());
            prop_assert!(s.std_dev.is_finite() && s.std_dev >= 0.0);
        }
    }
}
