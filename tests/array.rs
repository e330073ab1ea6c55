//! Batch operators over slices, vectors and 1-D arrays.

use jbm::array::{self, kernels, map, par_map, par_zip_map, zip_map};
use jbm::{math, BatchMath, JbmError, PARALLEL_THRESHOLD};
use ndarray::{s, Array1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vec(len: usize, lo: f64, hi: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(lo..=hi)).collect()
}

#[test]
fn test_batch_matches_scalar_kernel() {
    // odd lengths exercise the scalar tail
    for len in [0, 1, 3, 7, 17, 64, 1001] {
        let x = random_vec(len, -3.0, 3.0, len as u64);
        let y = x.sin();
        assert_eq!(y.len(), len);
        for (a, b) in x.iter().zip(&y) {
            assert_eq!(b.to_bits(), math::sin(*a).to_bits());
        }

        let e = x.as_slice().erf();
        for (a, b) in x.iter().zip(&e) {
            assert_eq!(b.to_bits(), math::erf(*a).to_bits());
        }
    }
}

#[test]
fn test_batch_single_precision() {
    let x: Vec<f32> = (1..=37).map(|i| i as f32 * 0.25).collect();
    let y = x.ln();
    for (a, b) in x.iter().zip(&y) {
        assert_eq!(b.to_bits(), math::log(*a).to_bits());
    }
    let z = x.batch(kernels::Cbrt);
    assert!((z[35] - 9.0f32.cbrt()).abs() < 1e-6);
}

#[test]
fn test_parallel_batch_large_array() {
    let len = PARALLEL_THRESHOLD + 12_345;
    let x = random_vec(len, -10.0, 10.0, 1);
    let sequential = x.exp();
    let parallel = x.par_exp();
    assert_eq!(parallel.len(), len);
    assert_eq!(sequential, parallel);

    let tanh = x.par_tanh();
    assert!((tanh[len - 1] - x[len - 1].tanh()).abs() < 1e-14);
}

#[test]
fn test_parallel_batch_small_array() {
    let data = vec![1.0f32, -2.0, 3.0, -4.0];
    let result = data.as_slice().par_abs();
    assert_eq!(result, vec![1.0f32, 2.0, 3.0, 4.0]);

    let cos = data.par_cos();
    for (a, b) in data.iter().zip(&cos) {
        assert!((b - a.cos()).abs() < 1e-6, "par_cos({})", a);
    }
}

#[test]
fn test_ndarray_batch() {
    let x = Array1::linspace(0.1f64, 2.0, 101);
    let y = BatchMath::exp(&x);
    assert_eq!(y.len(), 101);
    for (a, b) in x.iter().zip(y.iter()) {
        assert_eq!(b.to_bits(), math::exp(*a).to_bits());
    }

    let erf = x.par_erf();
    assert_eq!(erf[100].to_bits(), math::erf(x[100]).to_bits());

    // a strided view has no contiguous slice
    let strided = x.slice(s![..;2]);
    let y = BatchMath::ln(&strided);
    assert_eq!(y.len(), 51);
    for (a, b) in strided.iter().zip(y.iter()) {
        assert_eq!(b.to_bits(), math::log(*a).to_bits());
    }
    let z = strided.par_batch(kernels::Atan);
    assert_eq!(z[50].to_bits(), math::atan(x[100]).to_bits());
}

#[test]
fn test_ndarray_reversed_view() {
    let x = Array1::linspace(-2.0f64, 2.0, 33);
    let reversed = x.slice(s![..;-1]);

    let sequential = reversed.batch(kernels::Exp);
    let parallel = reversed.par_batch(kernels::Exp);
    assert_eq!(sequential, parallel);
    for (a, b) in reversed.iter().zip(parallel.iter()) {
        assert_eq!(b.to_bits(), math::exp(*a).to_bits());
    }
    assert_eq!(parallel[0].to_bits(), math::exp(2.0f64).to_bits());

    let large = Array1::from(random_vec(PARALLEL_THRESHOLD + 7, -1.0, 1.0, 41));
    let every_third = large.slice(s![..;-3]);
    let result = every_third.par_sin();
    assert_eq!(result.len(), every_third.len());
    for (a, b) in every_third.iter().zip(result.iter()) {
        assert_eq!(b.to_bits(), math::sin(*a).to_bits());
    }
}

#[test]
fn test_map_and_zip_map() {
    let a = random_vec(100, 0.5, 2.0, 7);
    let b = random_vec(100, -1.0, 1.0, 8);
    let mut out = vec![0.0; 100];

    map(&kernels::Sqr, &a, &mut out).unwrap();
    for (x, y) in a.iter().zip(&out) {
        assert_eq!(*y, x * x);
    }

    zip_map(&kernels::Pow, &a, &b, &mut out).unwrap();
    for ((x, e), y) in a.iter().zip(&b).zip(&out) {
        assert_eq!(y.to_bits(), math::pow(*x, *e).to_bits());
    }

    let mut par = vec![0.0; 100];
    par_zip_map(&kernels::Pow, &a, &b, &mut par).unwrap();
    assert_eq!(out, par);

    par_map(&kernels::Dbl, &a, &mut par).unwrap();
    for (x, y) in a.iter().zip(&par) {
        assert_eq!(*y, 2.0 * x);
    }
}

#[test]
fn test_length_mismatch_is_rejected() {
    let a = [1.0f64, 2.0, 3.0];
    let b = [1.0f64, 2.0];
    let mut out = [0.0f64; 3];

    let error = zip_map(&kernels::Add, &a, &b, &mut out).unwrap_err();
    println!("{}", error);
    assert!(matches!(error, JbmError::ValidationError { .. }));

    let mut short = [0.0f64; 2];
    assert!(map(&kernels::Exp, &a, &mut short).is_err());
    assert!(par_map(&kernels::Exp, &a, &mut short).is_err());
    assert!(array::add(&a, &b).is_err());
    assert!(array::par_div(&a, &b).is_err());
}

#[test]
fn test_arithmetic() {
    let a = random_vec(1003, -5.0, 5.0, 11);
    let b = random_vec(1003, 0.5, 5.0, 12);

    let sum = array::add(&a, &b).unwrap();
    let difference = array::sub(&a, &b).unwrap();
    let product = array::mul(&a, &b).unwrap();
    let quotient = array::div(&a, &b).unwrap();
    for i in 0..a.len() {
        assert_eq!(sum[i], a[i] + b[i]);
        assert_eq!(difference[i], a[i] - b[i]);
        assert_eq!(product[i], a[i] * b[i]);
        assert_eq!(quotient[i], a[i] / b[i]);
    }
    assert_eq!(array::par_mul(&a, &b).unwrap(), product);

    let shifted = array::add_scalar(&a, 1.5);
    let scaled = array::mul_scalar(&a, -2.0);
    let lowered = array::par_sub_scalar(&a, 0.25);
    let divided = array::div_scalar(&a, 4.0);
    for i in 0..a.len() {
        assert_eq!(shifted[i], a[i] + 1.5);
        assert_eq!(scaled[i], a[i] * -2.0);
        assert_eq!(lowered[i], a[i] - 0.25);
        assert_eq!(divided[i], a[i] / 4.0);
    }

    assert_eq!(array::dbl(&a), array::par_mul_scalar(&a, 2.0));
    assert_eq!(array::sqr(&b), array::mul(&b, &b).unwrap());
    assert_eq!(array::par_sqr(&b), array::sqr(&b));
    assert_eq!(array::par_dbl(&a), array::dbl(&a));
}

#[test]
fn test_parallel_arithmetic_large_array() {
    let len = PARALLEL_THRESHOLD * 2 + 3;
    let a = random_vec(len, -5.0, 5.0, 21);
    let b = random_vec(len, -5.0, 5.0, 22);
    assert_eq!(array::par_add(&a, &b).unwrap(), array::add(&a, &b).unwrap());
    assert_eq!(array::par_sub(&a, &b).unwrap(), array::sub(&a, &b).unwrap());
    assert_eq!(array::par_add_scalar(&a, 3.0), array::add_scalar(&a, 3.0));
    assert_eq!(array::par_div_scalar(&a, 3.0), array::div_scalar(&a, 3.0));
}

#[test]
fn test_maxmin() {
    let a = random_vec(1001, -100.0, 100.0, 31);
    let (hi, lo) = array::maxmin(&a).unwrap();
    let expected_hi = a.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let expected_lo = a.iter().cloned().fold(f64::INFINITY, f64::min);
    assert_eq!(hi, expected_hi);
    assert_eq!(lo, expected_lo);
    assert_eq!(array::max(&a).unwrap(), expected_hi);
    assert_eq!(array::min(&a).unwrap(), expected_lo);

    assert_eq!(array::maxmin(&[3.0f32]).unwrap(), (3.0, 3.0));
    assert_eq!(array::maxmin(&[2.0f32, f32::NAN, -1.0]).unwrap(), (2.0, -1.0));

    let error = array::maxmin::<f64>(&[]).unwrap_err();
    assert!(matches!(error, JbmError::ValidationError { .. }));
    assert!(array::max::<f32>(&[]).is_err());
}
