use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

/// Marker trait for the primitive float types a [`Dual`](crate::Dual) is built on
/// (`f32`, `f64`).
///
/// Bundles the numeric and utility traits needed throughout dualnum.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
    /// Widen to `f64` for error context and logging.
    fn to_f64_lossy(self) -> f64;
}

impl Float for f32 {
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }
}

impl Float for f64 {
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}
