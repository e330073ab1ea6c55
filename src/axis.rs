//! Tic marks for plot axes.

use log::debug;

use crate::error::{domain_error, Result};
use crate::simd::Real;

/// Mantissas a tic step may take, before the power of ten.
const STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Relative slack when comparing against step boundaries.
const TOLERANCE: f64 = 1e-9;

/// Evenly spaced tic positions on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tics<T> {
    /// Distance between two consecutive tics.
    pub step: T,
    /// Tic positions in increasing order, all multiples of `step`.
    pub values: Vec<T>,
}

impl<T> Tics<T> {
    /// Number of tics.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// Chooses a round step for an axis spanning `[min, max]` with about `labels`
/// labels and lists the multiples of it inside the range.
///
/// The step is `10^k` times one of 1, 2, 2.5, 5 or 10, the smallest such value
/// not below `(max - min) / labels`.
///
/// ```rust
/// let tics = jbm::axis::tics(0.0f64, 10.0, 5).unwrap();
/// assert_eq!(tics.step, 2.0);
/// assert_eq!(tics.values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
///
/// # Errors
///
/// Returns a domain error when a bound is not finite, when `max <= min` or
/// when `labels` is zero.
pub fn tics<T: Real>(min: T, max: T, labels: usize) -> Result<Tics<T>> {
    let (lo, hi) = (min.to_f64(), max.to_f64());
    if !lo.is_finite() || !hi.is_finite() {
        debug!("axis range [{lo}, {hi}] rejected: not finite");
        return Err(domain_error("min", "axis bounds must be finite"));
    }
    if hi <= lo {
        debug!("axis range [{lo}, {hi}] rejected: empty");
        return Err(domain_error("max", "axis maximum must exceed the minimum"));
    }
    if labels == 0 {
        debug!("axis with zero labels rejected");
        return Err(domain_error("labels", "at least one label is required"));
    }

    let raw = (hi - lo) / labels as f64;
    let scale = 10f64.powi(raw.log10().floor() as i32);
    let ratio = raw / scale;
    let mantissa = STEPS
        .iter()
        .copied()
        .find(|&m| m >= ratio * (1.0 - TOLERANCE))
        .unwrap_or(10.0);
    let step = mantissa * scale;
    debug!("axis [{lo}, {hi}] with {labels} labels: step {step}");

    let first = (lo / step - TOLERANCE).ceil() as i64;
    let last = (hi / step + TOLERANCE).floor() as i64;
    let values = (first..=last)
        .map(|i| T::cast(i as f64 * step))
        .collect();

    Ok(Tics {
        step: T::cast(step),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JbmError;

    #[test]
    fn test_unit_range() {
        let tics = tics(0.0f64, 1.0, 10).unwrap();
        assert!((tics.step - 0.1).abs() < 1e-15);
        assert_eq!(tics.count(), 11);
        assert!((tics.values[10] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_and_a_half() {
        let tics = tics(0.0f64, 100.0, 4).unwrap();
        assert_eq!(tics.step, 25.0);
        assert_eq!(tics.values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_step_rounds_up() {
        let tics = tics(0.0f64, 7.0, 2).unwrap();
        assert_eq!(tics.step, 5.0);
        assert_eq!(tics.values, vec![0.0, 5.0]);
    }

    #[test]
    fn test_negative_range() {
        let tics = tics(-3.2f32, 4.9, 4).unwrap();
        assert_eq!(tics.step, 2.5);
        assert_eq!(tics.values, vec![-2.5, 0.0, 2.5]);
    }

    #[test]
    fn test_rejects_bad_ranges() {
        assert!(matches!(
            tics(1.0f64, 1.0, 5),
            Err(JbmError::DomainError { argument: "max", .. })
        ));
        assert!(matches!(
            tics(f64::NAN, 1.0, 5),
            Err(JbmError::DomainError { argument: "min", .. })
        ));
        assert!(matches!(
            tics(0.0f64, 1.0, 0),
            Err(JbmError::DomainError { argument: "labels", .. })
        ));
    }
}
