use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use dualnum::{exp, log, near_eq, Dual, Dual64};
use proptest::prelude::*;

fn dual_strategy() -> impl Strategy<Value = Dual64> {
    (-1e3f64..1e3, -1e3f64..1e3).prop_map(|(re, eps)| Dual::new(re, eps))
}

fn nonzero_dual_strategy() -> impl Strategy<Value = Dual64> {
    (prop_oneof![-1e3f64..-1e-2, 1e-2f64..1e3], -1e3f64..1e3)
        .prop_map(|(re, eps)| Dual::new(re, eps))
}

fn hash_of(x: &Dual64) -> u64 {
    let mut h = DefaultHasher::new();
    x.hash(&mut h);
    h.finish()
}

/// Absolute tolerance 1e-12 scaled by the magnitude of the operands involved.
fn scaled_tol(scale: f64) -> f64 {
    1e-12 * scale.max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn add_then_sub_roundtrips(x in dual_strategy(), y in dual_strategy()) {
        let r = (x + y) - y;
        let scale = x.re.abs().max(y.re.abs()).max(x.eps.abs()).max(y.eps.abs());
        prop_assert!(near_eq(r, x, scaled_tol(scale)), "{} vs {}", r, x);
    }

    #[test]
    fn mul_then_div_roundtrips(x in dual_strategy(), y in nonzero_dual_strategy()) {
        let r = ((x * y) / y).unwrap();
        let scale = (x.re.abs() + x.eps.abs()) * (1.0 + y.eps.abs() / y.re.abs()).powi(2);
        prop_assert!(near_eq(r, x, scaled_tol(scale)), "{} vs {}", r, x);
    }

    #[test]
    fn scalar_promotion_symmetry(x in dual_strategy(), c in -1e3f64..1e3) {
        prop_assert_eq!(x + c, c + x);
        prop_assert_eq!(x * c, c * x);
        prop_assert_eq!(x - c, -(c - x));
        prop_assert_eq!(x + c, x + Dual::constant(c));
        prop_assert_eq!(x * c, x * Dual::constant(c));
    }

    #[test]
    fn conj_is_an_involution(x in dual_strategy()) {
        prop_assert_eq!(x.conj().conj(), x);
    }

    #[test]
    fn negation_is_an_involution(x in dual_strategy()) {
        prop_assert_eq!(-(-x), x);
    }

    #[test]
    fn equal_values_hash_equal(re in -1e3f64..1e3, eps in -1e3f64..1e3) {
        let a = Dual::new(re, eps);
        let b = Dual::new(re, eps);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn scalar_equality_ignores_tangent(re in -1e3f64..1e3, eps in -1e3f64..1e3) {
        prop_assert!(Dual::new(re, eps) == re);
        prop_assert!(re == Dual::new(re, eps));
    }

    #[test]
    fn log_inverts_exp(x in (-50.0f64..50.0, -10.0f64..10.0).prop_map(|(r, e)| Dual::new(r, e))) {
        let r = log(exp(x).unwrap()).unwrap();
        prop_assert!(near_eq(r, x, scaled_tol(x.re.abs().max(x.eps.abs()))), "{} vs {}", r, x);
    }

    #[test]
    fn display_roundtrips(x in dual_strategy()) {
        let parsed: Dual64 = x.to_string().parse().unwrap();
        prop_assert_eq!(parsed, x);
    }
}

#[test]
fn signed_zeros_hash_equal() {
    let a = Dual::new(0.0, -0.0);
    let b = Dual::new(-0.0, 0.0);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn usable_as_map_key() {
    let mut cache = std::collections::HashMap::new();
    cache.insert(Dual::new(1.0, 2.0), "a");
    cache.insert(Dual::new(1.0, 3.0), "b");
    assert_eq!(cache.get(&Dual::new(1.0, 2.0)), Some(&"a"));
    assert_eq!(cache.len(), 2);
}
