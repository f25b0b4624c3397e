use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dual::Dual;
use crate::error::DualResult;
use crate::float::Float;

// ──────────────────────────────────────────────
//  Dual<F> ⊕ Dual<F>
// ──────────────────────────────────────────────

impl<F: Float> Add for Dual<F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dual {
            re: self.re + rhs.re,
            eps: self.eps + rhs.eps,
        }
    }
}

impl<F: Float> Sub for Dual<F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dual {
            re: self.re - rhs.re,
            eps: self.eps - rhs.eps,
        }
    }
}

impl<F: Float> Mul for Dual<F> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dual {
            re: self.re * rhs.re,
            eps: self.re * rhs.eps + self.eps * rhs.re,
        }
    }
}

/// Division is checked: the output is a [`DualResult`].
///
/// ```
/// use dualnum::{Dual, ErrorKind};
///
/// let q = (Dual::new(1.0_f64, 1.0) / Dual::new(2.0, 0.0)).unwrap();
/// assert_eq!(q, Dual::new(0.5, 0.5));
///
/// let err = (Dual::new(4.0_f64, 0.0) / Dual::new(0.0, 0.0)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
impl<F: Float> Div for Dual<F> {
    type Output = DualResult<Self>;
    #[inline]
    fn div(self, rhs: Self) -> DualResult<Self> {
        self.try_div(rhs)
    }
}

impl<F: Float> Neg for Dual<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Dual {
            re: -self.re,
            eps: -self.eps,
        }
    }
}

impl<F: Float> AddAssign for Dual<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for Dual<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> MulAssign for Dual<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> PartialEq for Dual<F> {
    /// Exact equality of both components.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.eps == other.eps
    }
}

// Lookup-key use. As with the underlying floats, a NaN component is never equal to itself.
impl<F: Float> Eq for Dual<F> {}

// Mixed ops: Dual<F> with primitive floats, in both operand positions.
// We generate these for f32 and f64 via a macro.
macro_rules! impl_dual_scalar_ops {
    ($f:ty) => {
        impl Add<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re + rhs,
                    eps: self.eps,
                }
            }
        }

        impl Add<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self + rhs.re,
                    eps: rhs.eps,
                }
            }
        }

        impl Sub<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re - rhs,
                    eps: self.eps,
                }
            }
        }

        impl Sub<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self - rhs.re,
                    eps: -rhs.eps,
                }
            }
        }

        impl Mul<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> Dual<$f> {
                Dual {
                    re: self.re * rhs,
                    eps: self.eps * rhs,
                }
            }
        }

        impl Mul<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    re: self * rhs.re,
                    eps: self * rhs.eps,
                }
            }
        }

        impl Div<$f> for Dual<$f> {
            type Output = DualResult<Dual<$f>>;
            #[inline]
            fn div(self, rhs: $f) -> DualResult<Dual<$f>> {
                self.try_div_scalar(rhs)
            }
        }

        impl Div<Dual<$f>> for $f {
            type Output = DualResult<Dual<$f>>;
            #[inline]
            fn div(self, rhs: Dual<$f>) -> DualResult<Dual<$f>> {
                Dual::scalar_div(self, rhs)
            }
        }

        impl AddAssign<$f> for Dual<$f> {
            #[inline]
            fn add_assign(&mut self, rhs: $f) {
                self.re += rhs;
            }
        }

        impl SubAssign<$f> for Dual<$f> {
            #[inline]
            fn sub_assign(&mut self, rhs: $f) {
                self.re -= rhs;
            }
        }

        impl MulAssign<$f> for Dual<$f> {
            #[inline]
            fn mul_assign(&mut self, rhs: $f) {
                *self = *self * rhs;
            }
        }

        /// A plain scalar compares against the value part only.
        impl PartialEq<$f> for Dual<$f> {
            #[inline]
            fn eq(&self, other: &$f) -> bool {
                self.re == *other
            }
        }

        impl PartialEq<Dual<$f>> for $f {
            #[inline]
            fn eq(&self, other: &Dual<$f>) -> bool {
                *self == other.re
            }
        }
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);
