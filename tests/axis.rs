//! Axis tic selection.

use jbm::{tics, JbmError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MANTISSAS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

fn is_round(step: f64) -> bool {
    let scale = 10f64.powf(step.log10().floor());
    MANTISSAS
        .iter()
        .any(|m| ((step / scale) - m).abs() < 1e-9 * m)
}

#[test]
fn test_tics_scenarios() {
    let t = tics(0.0f64, 10.0, 5).unwrap();
    assert_eq!(t.step, 2.0);
    assert_eq!(t.values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

    let t = tics(-1.0f64, 1.0, 4).unwrap();
    assert_eq!(t.step, 0.5);
    assert_eq!(t.count(), 5);

    let t = tics(3.0f64, 1003.0, 8).unwrap();
    assert_eq!(t.step, 200.0);
    assert_eq!(t.values, vec![200.0, 400.0, 600.0, 800.0, 1000.0]);

    let t = tics(0.5f32, 0.55, 1).unwrap();
    assert!((t.step - 0.1).abs() < 1e-7);
    assert_eq!(t.values, vec![0.5]);
}

#[test]
fn test_tics_random_ranges() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..10_000 {
        let span = 10f64.powf(rng.random_range(-6.0..=6.0));
        let min = rng.random_range(-1000.0..=1000.0) * span;
        let max = min + span;
        let labels: usize = rng.random_range(1..=20);

        let t = tics(min, max, labels).unwrap();
        let raw = (max - min) / labels as f64;
        assert!(t.step >= raw * (1.0 - 1e-9), "step {} below {}", t.step, raw);
        assert!(t.step <= raw * 2.5 * (1.0 + 1e-9), "step {} too large for {}", t.step, raw);
        assert!(is_round(t.step), "step {} is not round", t.step);
        assert!(t.count() <= labels + 1, "{} tics for {} labels", t.count(), labels);

        let tolerance = 2e-9 * t.step;
        for pair in t.values.windows(2) {
            assert!((pair[1] - pair[0] - t.step).abs() < tolerance);
        }
        for v in &t.values {
            assert!(*v >= min - tolerance && *v <= max + tolerance, "{} outside [{}, {}]", v, min, max);
            let k = (v / t.step).round();
            assert!((v - k * t.step).abs() <= tolerance.max(1e-9 * v.abs()));
        }
    }
}

#[test]
fn test_tics_errors() {
    let error = tics(2.0f64, 1.0, 5).unwrap_err();
    println!("{}", error);
    assert!(matches!(error, JbmError::DomainError { argument: "max", .. }));

    assert!(matches!(
        tics(0.0f64, f64::INFINITY, 5),
        Err(JbmError::DomainError { argument: "min", .. })
    ));
    assert!(matches!(
        tics(0.0f32, 1.0, 0),
        Err(JbmError::DomainError { argument: "labels", .. })
    ));
}
