use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{DualError, DualResult, ParseDualError};
use crate::float::Float;
use crate::primitive;

/// Forward-mode dual number: a value paired with its tangent (derivative).
///
/// `Dual { re, eps }` represents `re + eps·ε` where `ε² = 0`.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<F: Float> {
    /// Primal (real) value.
    pub re: F,
    /// Tangent (derivative) value.
    pub eps: F,
}

/// Renders `re + epsε`, folding a negative tangent into the separator.
/// A signed-zero tangent renders as `+ 0ε`.
///
/// ```
/// use dualnum::Dual;
///
/// assert_eq!(Dual::new(1.5_f64, 2.0).to_string(), "1.5 + 2ε");
/// assert_eq!(Dual::new(1.5_f64, -2.0).to_string(), "1.5 - 2ε");
/// assert_eq!(Dual::new(1.0_f64, -0.0).to_string(), "1 + 0ε");
/// ```
impl<F: Float> Display for Dual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.eps >= F::zero() {
            write!(f, "{} + {}ε", self.re, self.eps.abs())
        } else {
            write!(f, "{} - {}ε", self.re, self.eps.abs())
        }
    }
}

impl<F: Float + FromStr> FromStr for Dual<F> {
    type Err = ParseDualError;

    /// Parses the [`Display`] rendering back. A bare number parses as a constant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDualError::Empty);
        }

        let Some(body) = s.strip_suffix('ε') else {
            return parse_component(s, "value").map(Dual::constant);
        };

        // The separator is the last ` + ` / ` - `; a leading sign belongs to the value.
        let (idx, negative) = match (body.rfind(" + "), body.rfind(" - ")) {
            (Some(p), Some(m)) if m > p => (m, true),
            (Some(p), _) => (p, false),
            (None, Some(m)) => (m, true),
            (None, None) => return Err(ParseDualError::MissingSeparator(s.to_string())),
        };

        let re = parse_component(&body[..idx], "value")?;
        let magnitude: F = parse_component(&body[idx + 3..], "derivative")?;
        let eps = if negative { -magnitude } else { magnitude };
        Ok(Dual { re, eps })
    }
}

fn parse_component<F: FromStr>(text: &str, component: &'static str) -> Result<F, ParseDualError> {
    let text = text.trim();
    text.parse().map_err(|_| ParseDualError::InvalidNumber {
        component,
        text: text.to_string(),
    })
}

/// Bit pattern of `x` with `-0.0` folded onto `+0.0`, so that values which
/// compare equal hash equal.
#[inline]
fn hash_bits<F: Float>(x: F) -> (u64, i16, i8) {
    if x == F::zero() {
        F::zero().integer_decode()
    } else {
        x.integer_decode()
    }
}

impl<F: Float> Hash for Dual<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.re).hash(state);
        hash_bits(self.eps).hash(state);
    }
}

impl<F: Float> From<F> for Dual<F> {
    /// Promote a plain scalar to a constant (zero derivative).
    #[inline]
    fn from(re: F) -> Self {
        Dual::constant(re)
    }
}

impl<F: Float> Dual<F> {
    /// Create a new dual number.
    #[inline]
    pub fn new(re: F, eps: F) -> Self {
        Dual { re, eps }
    }

    /// Create a constant (zero derivative).
    #[inline]
    pub fn constant(re: F) -> Self {
        Dual { re, eps: F::zero() }
    }

    /// Create a variable (unit derivative) for differentiation.
    #[inline]
    pub fn variable(re: F) -> Self {
        Dual { re, eps: F::one() }
    }

    /// Apply the chain rule: given `f(self.re)` and `f'(self.re)`, produce the dual result.
    #[inline]
    pub(crate) fn chain(self, f_val: F, f_deriv: F) -> Self {
        Dual {
            re: f_val,
            eps: self.eps * f_deriv,
        }
    }

    /// Unary plus.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Flip the sign of the tangent only: `re - epsε`.
    #[inline]
    pub fn conj(self) -> Self {
        Dual {
            re: self.re,
            eps: -self.eps,
        }
    }

    /// Component-wise magnitude `(|re|, |eps|)`.
    ///
    /// This is not the calculus derivative of `|x|` (which would be
    /// `signum(re)·eps`); both parts are taken independently.
    #[inline]
    pub fn abs(self) -> Self {
        Dual {
            re: self.re.abs(),
            eps: self.eps.abs(),
        }
    }

    // ── Division ──

    /// Quotient rule, failing when `rhs.re` is exactly zero.
    #[inline]
    pub fn try_div(self, rhs: Self) -> DualResult<Self> {
        let inv = primitive::div("div", F::one(), rhs.re)?;
        let q = self.re * inv;
        Ok(Dual {
            re: q,
            eps: (self.eps - q * rhs.eps) * inv,
        })
    }

    /// Divide by a plain scalar, failing when it is exactly zero.
    #[inline]
    pub fn try_div_scalar(self, rhs: F) -> DualResult<Self> {
        let inv = primitive::div("div", F::one(), rhs)?;
        Ok(Dual {
            re: self.re * inv,
            eps: self.eps * inv,
        })
    }

    /// Scalar numerator over a dual denominator; the numerator is a constant.
    #[inline]
    pub fn scalar_div(lhs: F, rhs: Self) -> DualResult<Self> {
        Dual::constant(lhs).try_div(rhs)
    }

    // ── Powers ──

    /// `self ^ n` for a dual exponent.
    ///
    /// Uses `x^y ≈ x^y + x^(y-1)·(y·dx + x·ln(x)·dy)` with two short cuts:
    /// a zero base with exponent `>= 1` has a finite closed form, and a
    /// negative base with a constant integer exponent skips the logarithm term.
    /// Everything else goes through the general formula, so a zero base with
    /// exponent `< 1` or a negative base with a non-integer (or non-constant)
    /// exponent fails with a domain error.
    pub fn powd(self, n: Self) -> DualResult<Self> {
        let zero = F::zero();
        let one = F::one();

        if self.re == zero && n.re >= one {
            return Ok(if n.re > one {
                Dual::constant(zero)
            } else {
                self
            });
        }

        if self.re < zero && primitive::is_integer(n.re) && n.eps == zero {
            let val = primitive::pow("pow", self.re, n.re)?;
            let slope = n.re * primitive::pow("pow", self.re, n.re - one)?;
            return Ok(self.chain(val, slope));
        }

        let val = primitive::pow("pow", self.re, n.re)?;
        let slope = n.re * primitive::pow("pow", self.re, n.re - one)?;
        let log_term = val * primitive::ln("pow", self.re)?;
        Ok(Dual {
            re: val,
            eps: slope * self.eps + log_term * n.eps,
        })
    }

    /// `self ^ n` for a plain exponent, promoted to a constant dual.
    #[inline]
    pub fn powf(self, n: F) -> DualResult<Self> {
        self.powd(Dual::constant(n))
    }

    /// `base ^ n` for a plain base; the base carries no tangent.
    ///
    /// The derivative `base^b · b' · ln(base)` always evaluates the logarithm,
    /// so a non-positive base is a domain error except `0^(b<0)`, which is a
    /// division by zero.
    pub fn scalar_powd(base: F, n: Self) -> DualResult<Self> {
        if base == F::zero() && n.re < F::zero() {
            return Err(DualError::division_by_zero("pow"));
        }
        let ln_base = primitive::ln("pow", base)?;
        let val = primitive::pow("pow", base, n.re)?;
        Ok(Dual {
            re: val,
            eps: val * (n.eps * ln_base),
        })
    }
}
