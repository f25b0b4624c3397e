use num_traits::{FromPrimitive, Inv, NumCast, One, Pow, ToPrimitive, Zero};

use crate::dual::Dual;
use crate::error::DualResult;
use crate::float::Float;

impl<F: Float> Zero for Dual<F> {
    #[inline]
    fn zero() -> Self {
        Dual::constant(F::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.eps.is_zero()
    }
}

impl<F: Float> One for Dual<F> {
    #[inline]
    fn one() -> Self {
        Dual::constant(F::one())
    }
}

impl<F: Float> FromPrimitive for Dual<F> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        F::from_i64(n).map(Dual::constant)
    }
    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        F::from_u64(n).map(Dual::constant)
    }
    #[inline]
    fn from_f32(n: f32) -> Option<Self> {
        F::from_f32(n).map(Dual::constant)
    }
    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        F::from_f64(n).map(Dual::constant)
    }
}

impl<F: Float> ToPrimitive for Dual<F> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.re.to_i64()
    }
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.re.to_u64()
    }
    #[inline]
    fn to_f32(&self) -> Option<f32> {
        self.re.to_f32()
    }
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.re.to_f64()
    }
}

impl<F: Float> NumCast for Dual<F> {
    #[inline]
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        <F as NumCast>::from(n).map(Dual::constant)
    }
}

/// Checked reciprocal; fails when the value part is zero.
impl<F: Float> Inv for Dual<F> {
    type Output = DualResult<Self>;
    #[inline]
    fn inv(self) -> DualResult<Self> {
        Dual::scalar_div(F::one(), self)
    }
}

impl<F: Float> Pow<Dual<F>> for Dual<F> {
    type Output = DualResult<Self>;
    #[inline]
    fn pow(self, rhs: Dual<F>) -> DualResult<Self> {
        self.powd(rhs)
    }
}

macro_rules! impl_dual_scalar_pow {
    ($f:ty) => {
        impl Pow<$f> for Dual<$f> {
            type Output = DualResult<Dual<$f>>;
            #[inline]
            fn pow(self, rhs: $f) -> DualResult<Dual<$f>> {
                self.powf(rhs)
            }
        }

        impl Pow<Dual<$f>> for $f {
            type Output = DualResult<Dual<$f>>;
            #[inline]
            fn pow(self, rhs: Dual<$f>) -> DualResult<Dual<$f>> {
                Dual::scalar_powd(self, rhs)
            }
        }
    };
}

impl_dual_scalar_pow!(f32);
impl_dual_scalar_pow!(f64);
