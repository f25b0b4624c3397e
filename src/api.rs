use crate::dual::Dual;
use crate::error::DualResult;
use crate::float::Float;

/// Derivative of a scalar function `f : R → R` at `x` using forward mode.
///
/// ```
/// let d = dualnum::derivative(|x| Ok(x * x + 3.0 * x), 2.0_f64).unwrap();
/// assert_eq!(d, 7.0);
/// ```
pub fn derivative<F: Float>(
    f: impl FnOnce(Dual<F>) -> DualResult<Dual<F>>,
    x: F,
) -> DualResult<F> {
    f(Dual::variable(x)).map(|y| y.eps)
}

/// `(f(x), f'(x))` from a single forward pass.
pub fn value_and_derivative<F: Float>(
    f: impl FnOnce(Dual<F>) -> DualResult<Dual<F>>,
    x: F,
) -> DualResult<(F, F)> {
    f(Dual::variable(x)).map(|y| (y.re, y.eps))
}

/// Directional derivative: evaluates `f` at `x` with the input tangent seeded to `dx`.
///
/// Returns `(f(x), f'(x)·dx)`.
pub fn directional<F: Float>(
    f: impl FnOnce(Dual<F>) -> DualResult<Dual<F>>,
    x: F,
    dx: F,
) -> DualResult<(F, F)> {
    f(Dual::new(x, dx)).map(|y| (y.re, y.eps))
}
