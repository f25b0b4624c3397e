pub mod api;
pub mod compare;
pub mod dual;
pub mod elementary;
pub mod error;
pub mod float;
mod primitive;
pub mod scalar;
mod traits;

pub use api::{derivative, directional, value_and_derivative};
pub use compare::{near_eq, near_eq_default, NEAR_EQ_EPS};
pub use dual::Dual;
pub use elementary::{
    acos, asin, atan, cbrt, cos, cosh, exp, expm1, hypot, log, log10, log1p, log2, sin, sinh,
    sqrt, tan, tanh, Elementary, Hypot,
};
pub use error::{DualError, DualResult, ErrorKind, ParseDualError};
pub use float::Float;
pub use scalar::Scalar;

/// Type alias for forward-mode dual numbers over `f64`.
pub type Dual64 = Dual<f64>;
/// Type alias for forward-mode dual numbers over `f32`.
pub type Dual32 = Dual<f32>;
