//! Tolerance-based comparison of dual numbers.
//!
//! [`near_eq`] checks both components against one absolute tolerance. The
//! `approx` traits are implemented component-wise as well, so
//! `assert_abs_diff_eq!` and `assert_relative_eq!` accept duals directly.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::dual::Dual;
use crate::float::Float;

/// Default absolute tolerance for [`near_eq_default`] and `AbsDiffEq::default_epsilon`.
pub const NEAR_EQ_EPS: f64 = 1e-12;

#[inline]
fn default_eps<F: Float>() -> F {
    F::from_f64(NEAR_EQ_EPS).unwrap_or_else(F::epsilon)
}

/// `true` iff `|x.re - y.re| <= eps` and `|x.eps - y.eps| <= eps`.
///
/// Either side may be a plain scalar, promoted to a constant.
///
/// ```
/// use dualnum::{near_eq, Dual};
///
/// assert!(near_eq(Dual::new(1.0_f64, 2.0), Dual::new(1.0 + 1e-13, 2.0), 1e-12));
/// assert!(!near_eq(Dual::new(1.0_f64, 2.0), 1.0, 1e-12));
/// ```
pub fn near_eq<F: Float>(x: impl Into<Dual<F>>, y: impl Into<Dual<F>>, eps: F) -> bool {
    let diff = x.into() - y.into();
    diff.re.abs() <= eps && diff.eps.abs() <= eps
}

/// [`near_eq`] with tolerance [`NEAR_EQ_EPS`].
pub fn near_eq_default<F: Float>(x: impl Into<Dual<F>>, y: impl Into<Dual<F>>) -> bool {
    near_eq(x, y, default_eps())
}

impl<F: Float + AbsDiffEq<Epsilon = F>> AbsDiffEq for Dual<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        default_eps()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.eps.abs_diff_eq(&other.eps, epsilon)
    }
}

impl<F: Float + RelativeEq<Epsilon = F>> RelativeEq for Dual<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.eps.relative_eq(&other.eps, epsilon, max_relative)
    }
}

impl<F: Float + UlpsEq<Epsilon = F>> UlpsEq for Dual<F> {
    fn default_max_ulps() -> u32 {
        F::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: F, max_ulps: u32) -> bool {
        self.re.ulps_eq(&other.re, epsilon, max_ulps)
            && self.eps.ulps_eq(&other.eps, epsilon, max_ulps)
    }
}
