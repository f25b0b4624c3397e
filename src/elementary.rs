//! Elementary functions over plain floats and dual numbers.
//!
//! Each function is available as a method of [`Elementary`] and as a free
//! function generic over it, so `sin(x)` works whether `x` is an `f64` or a
//! [`Dual`]. On a plain float the ordinary real function is evaluated; on a
//! dual the tangent is the chain-rule product `eps · f'(re)`.
//!
//! All functions are checked: leaving the real domain, dividing by an exact
//! zero, or overflowing from a finite argument returns a [`DualError`](crate::DualError).
//!
//! ```
//! use dualnum::{exp, sin, Dual};
//!
//! let x = Dual::variable(0.5_f64);
//! let y = sin(exp(x)?)?;
//! assert!((y.eps - 0.5_f64.exp().cos() * 0.5_f64.exp()).abs() < 1e-12);
//! assert_eq!(sin(0.5_f64)?, 0.5_f64.sin());
//! # Ok::<(), dualnum::DualError>(())
//! ```

use crate::dual::Dual;
use crate::error::{DualError, DualResult};
use crate::float::Float;
use crate::primitive;

/// Checked elementary functions, implemented for `f32`, `f64` and [`Dual`].
pub trait Elementary: Copy {
    fn sin(self) -> DualResult<Self>;
    fn asin(self) -> DualResult<Self>;
    fn cos(self) -> DualResult<Self>;
    fn acos(self) -> DualResult<Self>;
    fn tan(self) -> DualResult<Self>;
    fn atan(self) -> DualResult<Self>;
    fn sinh(self) -> DualResult<Self>;
    fn cosh(self) -> DualResult<Self>;
    /// Hyperbolic tangent.
    ///
    /// On a dual the tangent is propagated with the circular identity
    /// `eps · (1 + tan²(re))`, not `1 - tanh²(re)`. This is a known
    /// inaccuracy kept for compatibility with existing results.
    fn tanh(self) -> DualResult<Self>;
    /// `e^x`; overflows if either the value or the propagated tangent is infinite.
    fn exp(self) -> DualResult<Self>;
    /// `e^x - 1`, accurate near zero.
    fn expm1(self) -> DualResult<Self>;
    /// Natural logarithm; domain error for `x <= 0`.
    fn log(self) -> DualResult<Self>;
    /// Base-10 logarithm.
    ///
    /// On a dual the tangent is `eps / ln(10)`, without the `1/re` factor.
    /// Known inaccuracy kept for compatibility, like [`Elementary::tanh`].
    fn log10(self) -> DualResult<Self>;
    /// `ln(1 + x)`, accurate near zero; domain error for `x <= -1`.
    fn log1p(self) -> DualResult<Self>;
    fn log2(self) -> DualResult<Self>;
    /// Principal cube root; domain error for `x < 0`. On a dual, `x == 0` is a division by zero.
    fn cbrt(self) -> DualResult<Self>;
    /// Square root; domain error for `x < 0`. On a dual, `x == 0` is a division by zero.
    fn sqrt(self) -> DualResult<Self>;
}

macro_rules! impl_elementary_real {
    ($f:ty) => {
        impl Elementary for $f {
            #[inline]
            fn sin(self) -> DualResult<Self> {
                primitive::unary("sin", self, |x: $f| x.sin())
            }
            #[inline]
            fn asin(self) -> DualResult<Self> {
                primitive::unary("asin", self, |x: $f| x.asin())
            }
            #[inline]
            fn cos(self) -> DualResult<Self> {
                primitive::unary("cos", self, |x: $f| x.cos())
            }
            #[inline]
            fn acos(self) -> DualResult<Self> {
                primitive::unary("acos", self, |x: $f| x.acos())
            }
            #[inline]
            fn tan(self) -> DualResult<Self> {
                primitive::unary("tan", self, |x: $f| x.tan())
            }
            #[inline]
            fn atan(self) -> DualResult<Self> {
                primitive::unary("atan", self, |x: $f| x.atan())
            }
            #[inline]
            fn sinh(self) -> DualResult<Self> {
                primitive::unary("sinh", self, |x: $f| x.sinh())
            }
            #[inline]
            fn cosh(self) -> DualResult<Self> {
                primitive::unary("cosh", self, |x: $f| x.cosh())
            }
            #[inline]
            fn tanh(self) -> DualResult<Self> {
                primitive::unary("tanh", self, |x: $f| x.tanh())
            }
            #[inline]
            fn exp(self) -> DualResult<Self> {
                primitive::unary("exp", self, |x: $f| x.exp())
            }
            #[inline]
            fn expm1(self) -> DualResult<Self> {
                primitive::unary("expm1", self, |x: $f| x.exp_m1())
            }
            #[inline]
            fn log(self) -> DualResult<Self> {
                primitive::ln("log", self)
            }
            #[inline]
            fn log10(self) -> DualResult<Self> {
                primitive::log10(self)
            }
            #[inline]
            fn log1p(self) -> DualResult<Self> {
                primitive::ln_1p(self)
            }
            #[inline]
            fn log2(self) -> DualResult<Self> {
                primitive::log2(self)
            }
            #[inline]
            fn cbrt(self) -> DualResult<Self> {
                primitive::cbrt(self)
            }
            #[inline]
            fn sqrt(self) -> DualResult<Self> {
                primitive::sqrt(self)
            }
        }
    };
}

impl_elementary_real!(f32);
impl_elementary_real!(f64);

impl<F: Float> Elementary for Dual<F> {
    #[inline]
    fn sin(self) -> DualResult<Self> {
        let s = primitive::unary("sin", self.re, |x: F| x.sin())?;
        Ok(self.chain(s, self.re.cos()))
    }

    #[inline]
    fn asin(self) -> DualResult<Self> {
        let v = primitive::unary("asin", self.re, |x: F| x.asin())?;
        let root = (F::one() - self.re * self.re).sqrt();
        Ok(Dual::new(v, primitive::div("asin", self.eps, root)?))
    }

    #[inline]
    fn cos(self) -> DualResult<Self> {
        let c = primitive::unary("cos", self.re, |x: F| x.cos())?;
        Ok(self.chain(c, -self.re.sin()))
    }

    #[inline]
    fn acos(self) -> DualResult<Self> {
        let v = primitive::unary("acos", self.re, |x: F| x.acos())?;
        let root = (F::one() - self.re * self.re).sqrt();
        Ok(Dual::new(v, primitive::div("acos", -self.eps, root)?))
    }

    #[inline]
    fn tan(self) -> DualResult<Self> {
        let t = primitive::unary("tan", self.re, |x: F| x.tan())?;
        Ok(self.chain(t, F::one() + t * t))
    }

    #[inline]
    fn atan(self) -> DualResult<Self> {
        let a = self.re;
        let v = primitive::unary("atan", a, |x: F| x.atan())?;
        Ok(Dual::new(v, self.eps / (F::one() + a * a)))
    }

    #[inline]
    fn sinh(self) -> DualResult<Self> {
        let s = primitive::unary("sinh", self.re, |x: F| x.sinh())?;
        let c = primitive::unary("sinh", self.re, |x: F| x.cosh())?;
        Ok(self.chain(s, c))
    }

    #[inline]
    fn cosh(self) -> DualResult<Self> {
        let c = primitive::unary("cosh", self.re, |x: F| x.cosh())?;
        let s = primitive::unary("cosh", self.re, |x: F| x.sinh())?;
        Ok(self.chain(c, s))
    }

    #[inline]
    fn tanh(self) -> DualResult<Self> {
        let v = primitive::unary("tanh", self.re, |x: F| x.tanh())?;
        let t = primitive::unary("tanh", self.re, |x: F| x.tan())?;
        Ok(self.chain(v, F::one() + t * t))
    }

    #[inline]
    fn exp(self) -> DualResult<Self> {
        let e = primitive::unary("exp", self.re, |x: F| x.exp())?;
        let d = e * self.eps;
        if d.is_infinite() {
            return Err(DualError::overflow("exp", self.re));
        }
        Ok(Dual::new(e, d))
    }

    #[inline]
    fn expm1(self) -> DualResult<Self> {
        let em1 = primitive::unary("expm1", self.re, |x: F| x.exp_m1())?;
        Ok(self.chain(em1, F::one() + em1))
    }

    #[inline]
    fn log(self) -> DualResult<Self> {
        let l = primitive::ln("log", self.re)?;
        Ok(Dual::new(l, self.eps / self.re))
    }

    #[inline]
    fn log10(self) -> DualResult<Self> {
        let l = primitive::log10(self.re)?;
        Ok(Dual::new(l, self.eps / F::LN_10()))
    }

    #[inline]
    fn log1p(self) -> DualResult<Self> {
        let l = primitive::ln_1p(self.re)?;
        Ok(Dual::new(l, self.eps / (F::one() + self.re)))
    }

    #[inline]
    fn log2(self) -> DualResult<Self> {
        let l = primitive::log2(self.re)?;
        Ok(Dual::new(
            l,
            primitive::div("log2", self.eps, self.re * F::LN_2())?,
        ))
    }

    #[inline]
    fn cbrt(self) -> DualResult<Self> {
        let c = primitive::cbrt(self.re)?;
        let three = F::one() + F::one() + F::one();
        Ok(Dual::new(c, primitive::div("cbrt", self.eps, three * c * c)?))
    }

    #[inline]
    fn sqrt(self) -> DualResult<Self> {
        let s = primitive::sqrt(self.re)?;
        let two = F::one() + F::one();
        Ok(Dual::new(s, primitive::div("sqrt", self.eps, two * s)?))
    }
}

/// Overflow-safe `sqrt(x² + y²)` for any mix of dual and plain operands.
///
/// A plain operand is promoted to a constant dual when the other side is dual.
pub trait Hypot<Rhs = Self> {
    type Output;
    fn hypot(self, rhs: Rhs) -> DualResult<Self::Output>;
}

impl<F: Float> Hypot for Dual<F> {
    type Output = Dual<F>;

    fn hypot(self, rhs: Self) -> DualResult<Self> {
        let h = self.re.hypot(rhs.re);
        if h.is_infinite() && self.re.is_finite() && rhs.re.is_finite() {
            return Err(DualError::overflow("hypot", self.re.abs().max(rhs.re.abs())));
        }
        let num = self.re * self.eps + rhs.re * rhs.eps;
        Ok(Dual::new(h, primitive::div("hypot", num, h)?))
    }
}

macro_rules! impl_hypot_scalar {
    ($f:ty) => {
        impl Hypot<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn hypot(self, rhs: $f) -> DualResult<Dual<$f>> {
                Hypot::hypot(self, Dual::constant(rhs))
            }
        }

        impl Hypot<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn hypot(self, rhs: Dual<$f>) -> DualResult<Dual<$f>> {
                Hypot::hypot(Dual::constant(self), rhs)
            }
        }

        impl Hypot for $f {
            type Output = $f;
            #[inline]
            fn hypot(self, rhs: $f) -> DualResult<$f> {
                let h = <$f>::hypot(self, rhs);
                if h.is_infinite() && self.is_finite() && rhs.is_finite() {
                    return Err(DualError::overflow("hypot", self.abs().max(rhs.abs())));
                }
                Ok(h)
            }
        }
    };
}

impl_hypot_scalar!(f32);
impl_hypot_scalar!(f64);

// ── Free functions ──

/// Sine (radians).
pub fn sin<T: Elementary>(x: T) -> DualResult<T> {
    x.sin()
}

/// Arc sine (radians).
pub fn asin<T: Elementary>(x: T) -> DualResult<T> {
    x.asin()
}

/// Cosine (radians).
pub fn cos<T: Elementary>(x: T) -> DualResult<T> {
    x.cos()
}

/// Arc cosine (radians).
pub fn acos<T: Elementary>(x: T) -> DualResult<T> {
    x.acos()
}

/// Tangent (radians).
pub fn tan<T: Elementary>(x: T) -> DualResult<T> {
    x.tan()
}

/// Arc tangent (radians).
pub fn atan<T: Elementary>(x: T) -> DualResult<T> {
    x.atan()
}

pub fn sinh<T: Elementary>(x: T) -> DualResult<T> {
    x.sinh()
}

pub fn cosh<T: Elementary>(x: T) -> DualResult<T> {
    x.cosh()
}

/// See [`Elementary::tanh`] for the tangent rule used on duals.
pub fn tanh<T: Elementary>(x: T) -> DualResult<T> {
    x.tanh()
}

/// `e` raised to `x`.
pub fn exp<T: Elementary>(x: T) -> DualResult<T> {
    x.exp()
}

/// `e^x - 1`.
pub fn expm1<T: Elementary>(x: T) -> DualResult<T> {
    x.expm1()
}

/// Natural logarithm.
pub fn log<T: Elementary>(x: T) -> DualResult<T> {
    x.log()
}

/// See [`Elementary::log10`] for the tangent rule used on duals.
pub fn log10<T: Elementary>(x: T) -> DualResult<T> {
    x.log10()
}

/// `ln(1 + x)`.
pub fn log1p<T: Elementary>(x: T) -> DualResult<T> {
    x.log1p()
}

pub fn log2<T: Elementary>(x: T) -> DualResult<T> {
    x.log2()
}

pub fn cbrt<T: Elementary>(x: T) -> DualResult<T> {
    x.cbrt()
}

/// Square root.
pub fn sqrt<T: Elementary>(x: T) -> DualResult<T> {
    x.sqrt()
}

/// `sqrt(x² + y²)` without intermediate overflow or underflow.
///
/// ```
/// use dualnum::{hypot, Dual};
///
/// let h = hypot(Dual::variable(3.0_f64), 4.0_f64)?;
/// assert_eq!(h, Dual::new(5.0, 0.6));
/// # Ok::<(), dualnum::DualError>(())
/// ```
pub fn hypot<A: Hypot<B>, B>(x: A, y: B) -> DualResult<A::Output> {
    x.hypot(y)
}
