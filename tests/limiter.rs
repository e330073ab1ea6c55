//! Flux limiter values, selection by code and by name.

use jbm::math::limiter::{
    centred, mean, minmod, minsuper, monotonized_central, null, superbee, supermin, total,
    van_albada, van_leer,
};
use jbm::math::{flux_limiter_select, FluxLimiter};
use jbm::{F64x4, Lane};
use strum::IntoEnumIterator;

const TVD: [FluxLimiter; 8] = [
    FluxLimiter::Superbee,
    FluxLimiter::VanLeer,
    FluxLimiter::VanAlbada,
    FluxLimiter::Minsuper,
    FluxLimiter::Supermin,
    FluxLimiter::Minmod,
    FluxLimiter::MonotonizedCentral,
    FluxLimiter::Mean,
];

#[test]
fn test_unit_ratio_gives_one() {
    for kind in TVD {
        assert_eq!(kind.apply(1.0f64, 1.0), 1.0, "{}", kind);
        assert_eq!(kind.apply(-2.0f32, -2.0), 1.0, "{}", kind);
    }
    assert_eq!(centred(1.0f64, 1.0), 1.0);
    assert_eq!(null(1.0f64, 1.0), 1.0);
    assert_eq!(total(1.0f64, 1.0), 0.0);
}

#[test]
fn test_opposite_slopes_give_zero() {
    for kind in TVD {
        assert_eq!(kind.apply(-1.0f64, 2.0), 0.0, "{}", kind);
        assert_eq!(kind.apply(3.0f64, -0.5), 0.0, "{}", kind);
        assert_eq!(kind.apply(0.0f64, 1.0), 0.0, "{}", kind);
        assert_eq!(kind.apply(1e-9f64, 1e-9), 0.0, "{}", kind);
    }
}

#[test]
fn test_limiter_values() {
    assert_eq!(minmod(1.0f64, 2.0), 0.5);
    assert_eq!(minmod(-1.0f64, 2.0), 0.0);
    assert_eq!(minmod(4.0f64, 2.0), 1.0);

    assert_eq!(superbee(1.0f64, 4.0), 0.5);
    assert_eq!(superbee(1.5f64, 1.0), 1.5);
    assert_eq!(superbee(3.0f64, 1.0), 2.0);

    assert_eq!(van_leer(3.0f64, 1.0), 1.5);
    assert_eq!(van_albada(2.0f64, 1.0), 1.2);
    assert_eq!(minsuper(3.0f64, 1.0), 2.0);
    assert_eq!(supermin(0.25f64, 1.0), 0.5);
    assert_eq!(monotonized_central(0.25f64, 1.0), 0.5);
    assert_eq!(monotonized_central(2.0f64, 1.0), 1.5);
    assert_eq!(monotonized_central(5.0f64, 1.0), 2.0);
    assert_eq!(mean(3.0f64, 1.0), 2.0);

    assert_eq!(centred(-3.0f64, 1.0), -3.0);
    assert_eq!(centred(1.0f64, 0.0), 0.0);
}

#[test]
fn test_limiters_on_lanes() {
    let d1 = F64x4::from([1.0, -1.0, 4.0, 0.5]);
    let d2 = F64x4::from([2.0, 2.0, 2.0, 1.0]);
    let psi = minmod(d1, d2);
    assert_eq!(psi, F64x4::from([0.5, 0.0, 1.0, 0.5]));

    for kind in FluxLimiter::iter() {
        let f = flux_limiter_select::<F64x4>(kind);
        let g = flux_limiter_select::<f64>(kind);
        let lanes = f(d1, d2);
        for i in 0..4 {
            assert_eq!(
                lanes.extract(i).to_bits(),
                g(d1.extract(i), d2.extract(i)).to_bits(),
                "{} lane {}",
                kind,
                i
            );
        }
    }
}

#[test]
fn test_codes_round_trip() {
    for kind in FluxLimiter::iter() {
        assert_eq!(FluxLimiter::from(kind as i64), kind);
    }
    assert_eq!(FluxLimiter::from(0), FluxLimiter::Total);
    assert_eq!(FluxLimiter::from(8), FluxLimiter::Minmod);
    assert_eq!(FluxLimiter::from(42), FluxLimiter::Mean);
    assert_eq!(FluxLimiter::from(-1), FluxLimiter::Mean);
}

#[test]
fn test_names() {
    assert_eq!(FluxLimiter::VanLeer.to_string(), "van_leer");
    assert_eq!(FluxLimiter::MonotonizedCentral.to_string(), "monotonized_central");
    assert_eq!(FluxLimiter::from_name("superbee"), FluxLimiter::Superbee);
    assert_eq!(FluxLimiter::from_name(" van_albada "), FluxLimiter::VanAlbada);
    assert_eq!(FluxLimiter::from_name("unknown"), FluxLimiter::Mean);
    assert_eq!("minmod".parse::<FluxLimiter>(), Ok(FluxLimiter::Minmod));
    assert!("MinMod".parse::<FluxLimiter>().is_err());
    assert_eq!(FluxLimiter::default(), FluxLimiter::Mean);

    for kind in FluxLimiter::iter() {
        assert_eq!(FluxLimiter::from_name(&kind.to_string()), kind);
    }
}
