//! Error types for checked dual-number arithmetic.
//!
//! This module provides:
//! - `DualError`: failures raised by operators and elementary functions
//! - `ErrorKind`: the field-less category of a `DualError`
//! - `ParseDualError`: failures parsing the textual rendering of a dual number

use thiserror::Error;

use crate::float::Float;

/// Result alias used by every fallible operation in the crate.
pub type DualResult<T> = Result<T, DualError>;

/// A mathematical operation was evaluated where it has no finite real result.
///
/// # Examples
/// ```
/// use dualnum::{sqrt, Dual, ErrorKind};
///
/// let err = sqrt(Dual::new(-1.0_f64, 1.0)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Domain);
/// assert!(err.to_string().contains("sqrt"));
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum DualError {
    /// Argument lies outside the real-valued domain of the operation.
    #[error("math domain error in {op}: argument {arg}")]
    Domain {
        /// Operation that failed
        op: &'static str,
        /// The offending argument, widened to `f64`
        arg: f64,
    },

    /// A denominator's value component was exactly zero.
    #[error("division by zero in {op}")]
    DivisionByZero {
        /// Operation that failed
        op: &'static str,
    },

    /// A finite argument produced an infinite value or derivative.
    #[error("numerical overflow in {op}: argument {arg}")]
    Overflow {
        /// Operation that failed
        op: &'static str,
        /// The offending argument, widened to `f64`
        arg: f64,
    },
}

/// Category of a [`DualError`], without context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`DualError::Domain`].
    Domain,
    /// See [`DualError::DivisionByZero`].
    DivisionByZero,
    /// See [`DualError::Overflow`].
    Overflow,
}

impl DualError {
    #[cold]
    pub(crate) fn domain<F: Float>(op: &'static str, arg: F) -> Self {
        tracing::debug!(target: "dualnum", op, arg = %arg, "domain error");
        DualError::Domain {
            op,
            arg: arg.to_f64_lossy(),
        }
    }

    #[cold]
    pub(crate) fn division_by_zero(op: &'static str) -> Self {
        tracing::debug!(target: "dualnum", op, "division by zero");
        DualError::DivisionByZero { op }
    }

    #[cold]
    pub(crate) fn overflow<F: Float>(op: &'static str, arg: F) -> Self {
        tracing::debug!(target: "dualnum", op, arg = %arg, "overflow");
        DualError::Overflow {
            op,
            arg: arg.to_f64_lossy(),
        }
    }

    /// The error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DualError::Domain { .. } => ErrorKind::Domain,
            DualError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            DualError::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            DualError::Domain { op, .. }
            | DualError::DivisionByZero { op }
            | DualError::Overflow { op, .. } => op,
        }
    }
}

/// Failure parsing a dual number from its `"<re> + <eps>ε"` rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseDualError {
    /// Input was empty or whitespace.
    #[error("cannot parse dual number from empty string")]
    Empty,

    /// A component was not a valid float.
    #[error("invalid {component} component: {text:?}")]
    InvalidNumber {
        /// `"value"` or `"derivative"`
        component: &'static str,
        /// The text that failed to parse
        text: String,
    },

    /// The infinitesimal term had no `+`/`-` separator from the value.
    #[error("missing separator before infinitesimal term in {0:?}")]
    MissingSeparator(String),
}
