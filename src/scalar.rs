//! The [`Scalar`] trait for writing AD-generic numeric code.
//!
//! Functions written as `fn f<T: Scalar>(x: T) -> DualResult<T>` work
//! transparently with plain `f64` and with `Dual<f64>`, so the same body yields
//! a value or a value together with its derivative.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{FromPrimitive, One, Zero};

use crate::dual::Dual;
use crate::elementary::{Elementary, Hypot};
use crate::error::DualResult;
use crate::float::Float;
use crate::primitive;

/// The central trait for AD-generic numeric code.
///
/// Addition, subtraction and multiplication are infallible operators;
/// division and exponentiation are the checked [`Scalar::try_div`] and
/// [`Scalar::try_pow`].
///
/// ```
/// use dualnum::{derivative, DualResult, Scalar};
///
/// fn cubic<T: Scalar>(x: T) -> DualResult<T> {
///     Ok(x * x * x - x)
/// }
///
/// assert_eq!(cubic(2.0_f64)?, 6.0);
/// assert_eq!(derivative(cubic, 2.0_f64)?, 11.0);
/// # Ok::<(), dualnum::DualError>(())
/// ```
pub trait Scalar:
    Elementary
    + Hypot<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + FromPrimitive
    + PartialEq
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// The underlying primitive float type.
    type Float: Float;

    /// Lift a plain float to this scalar (constant, zero derivative).
    fn from_f(val: Self::Float) -> Self;

    /// Extract the primal value.
    fn value(&self) -> Self::Float;

    /// Checked division; fails when the divisor's value is exactly zero.
    fn try_div(self, rhs: Self) -> DualResult<Self>;

    /// Checked exponentiation `self ^ rhs`.
    fn try_pow(self, rhs: Self) -> DualResult<Self>;
}

macro_rules! impl_scalar_real {
    ($f:ty) => {
        impl Scalar for $f {
            type Float = $f;

            #[inline]
            fn from_f(val: $f) -> Self {
                val
            }

            #[inline]
            fn value(&self) -> $f {
                *self
            }

            #[inline]
            fn try_div(self, rhs: Self) -> DualResult<Self> {
                primitive::div("div", self, rhs)
            }

            #[inline]
            fn try_pow(self, rhs: Self) -> DualResult<Self> {
                primitive::pow("pow", self, rhs)
            }
        }
    };
}

impl_scalar_real!(f32);
impl_scalar_real!(f64);

impl<F: Float> Scalar for Dual<F> {
    type Float = F;

    #[inline]
    fn from_f(val: F) -> Self {
        Dual::constant(val)
    }

    #[inline]
    fn value(&self) -> F {
        self.re
    }

    #[inline]
    fn try_div(self, rhs: Self) -> DualResult<Self> {
        Dual::try_div(self, rhs)
    }

    #[inline]
    fn try_pow(self, rhs: Self) -> DualResult<Self> {
        self.powd(rhs)
    }
}
