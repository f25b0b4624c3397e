//! Checked real-valued primitives.
//!
//! Every elementary function, on a plain float or on the value part of a dual,
//! goes through these so that leaving the real domain is reported as a
//! [`DualError`] instead of surfacing as NaN or ±∞.

use crate::error::{DualError, DualResult};
use crate::float::Float;

/// Classify the result `y = f(x)` of a primitive evaluated at `x`.
///
/// NaN from a non-NaN argument is a domain error; ±∞ from a finite argument
/// is an overflow. NaN arguments propagate untouched.
#[inline]
pub(crate) fn classify<F: Float>(op: &'static str, x: F, y: F) -> DualResult<F> {
    if y.is_nan() && !x.is_nan() {
        Err(DualError::domain(op, x))
    } else if y.is_infinite() && x.is_finite() {
        Err(DualError::overflow(op, x))
    } else {
        Ok(y)
    }
}

/// `f(x)` with [`classify`] applied to the result.
#[inline]
pub(crate) fn unary<F: Float>(op: &'static str, x: F, f: impl FnOnce(F) -> F) -> DualResult<F> {
    classify(op, x, f(x))
}

/// `num / den`, failing when `den` is exactly zero.
#[inline]
pub(crate) fn div<F: Float>(op: &'static str, num: F, den: F) -> DualResult<F> {
    if den == F::zero() {
        Err(DualError::division_by_zero(op))
    } else {
        Ok(num / den)
    }
}

/// Shared guard for the logarithm family: `x` must be strictly above `lower`.
#[inline]
fn log_domain<F: Float>(op: &'static str, x: F, lower: F) -> DualResult<()> {
    if x <= lower {
        Err(DualError::domain(op, x))
    } else {
        Ok(())
    }
}

#[inline]
pub(crate) fn ln<F: Float>(op: &'static str, x: F) -> DualResult<F> {
    log_domain(op, x, F::zero())?;
    Ok(x.ln())
}

#[inline]
pub(crate) fn log10<F: Float>(x: F) -> DualResult<F> {
    log_domain("log10", x, F::zero())?;
    Ok(x.log10())
}

#[inline]
pub(crate) fn log2<F: Float>(x: F) -> DualResult<F> {
    log_domain("log2", x, F::zero())?;
    Ok(x.log2())
}

#[inline]
pub(crate) fn ln_1p<F: Float>(x: F) -> DualResult<F> {
    log_domain("log1p", x, -F::one())?;
    Ok(x.ln_1p())
}

#[inline]
pub(crate) fn sqrt<F: Float>(x: F) -> DualResult<F> {
    if x < F::zero() {
        return Err(DualError::domain("sqrt", x));
    }
    Ok(x.sqrt())
}

/// Principal cube root: a negative argument is a domain error.
#[inline]
pub(crate) fn cbrt<F: Float>(x: F) -> DualResult<F> {
    if x < F::zero() {
        return Err(DualError::domain("cbrt", x));
    }
    Ok(x.cbrt())
}

/// `x^y` for real operands.
///
/// A zero base with a negative exponent and a negative base with a
/// non-integer exponent are domain errors; an infinite result from finite
/// operands is an overflow.
pub(crate) fn pow<F: Float>(op: &'static str, x: F, y: F) -> DualResult<F> {
    if x == F::zero() && y < F::zero() {
        return Err(DualError::domain(op, x));
    }
    let r = x.powf(y);
    if r.is_nan() && !x.is_nan() && !y.is_nan() {
        Err(DualError::domain(op, x))
    } else if r.is_infinite() && x.is_finite() && y.is_finite() {
        Err(DualError::overflow(op, x))
    } else {
        Ok(r)
    }
}

/// `true` when `x` is finite and has no fractional part.
#[inline]
pub(crate) fn is_integer<F: Float>(x: F) -> bool {
    x.is_finite() && x == x.floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn nan_argument_propagates_without_error() {
        let y = unary("sin", f64::NAN, f64::sin).unwrap();
        assert!(y.is_nan());
    }

    #[test]
    fn nan_from_finite_argument_is_domain() {
        let err = unary("asin", 2.0_f64, f64::asin).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn infinity_from_finite_argument_is_overflow() {
        let err = unary("exp", 1000.0_f64, f64::exp).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn infinite_argument_may_yield_infinity() {
        assert_eq!(unary("exp", f64::INFINITY, f64::exp).unwrap(), f64::INFINITY);
    }

    #[test]
    fn exact_zero_denominator() {
        assert_eq!(div("div", 1.0_f64, 0.0).unwrap_err().kind(), ErrorKind::DivisionByZero);
        assert_eq!(div("div", 0.0_f64, -0.0).unwrap_err().kind(), ErrorKind::DivisionByZero);
        assert_eq!(div("div", 1.0_f64, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn logarithm_bounds() {
        assert_eq!(ln("log", 0.0_f64).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(ln("log", -1.0_f64).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(ln_1p(-1.0_f64).unwrap_err().kind(), ErrorKind::Domain);
        assert!(ln_1p(-0.5_f64).is_ok());
        assert_eq!(log10(0.0_f64).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(log2(-2.0_f64).unwrap_err().kind(), ErrorKind::Domain);
    }

    #[test]
    fn cbrt_rejects_negative_argument() {
        assert_eq!(cbrt(-8.0_f64).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(cbrt(8.0_f64).unwrap(), 2.0);
        assert_eq!(cbrt(-0.0_f64).unwrap(), 0.0);
    }

    #[test]
    fn pow_edge_cases() {
        assert_eq!(pow("pow", 0.0_f64, -1.0).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(pow("pow", -3.0_f64, 2.5).unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(pow("pow", 10.0_f64, 400.0).unwrap_err().kind(), ErrorKind::Overflow);
        assert_eq!(pow("pow", 0.0_f64, 0.0).unwrap(), 1.0);
        assert_eq!(pow("pow", -3.0_f64, 2.0).unwrap(), 9.0);
    }

    #[test]
    fn integer_detection() {
        assert!(is_integer(2.0_f64));
        assert!(is_integer(-7.0_f64));
        assert!(!is_integer(2.5_f64));
        assert!(!is_integer(f64::INFINITY));
        assert!(!is_integer(f64::NAN));
    }
}
