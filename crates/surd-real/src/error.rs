//! Error type for algebraic number construction and arithmetic.

use surd_rings::Q;
use thiserror::Error;

/// Errors from constructing or operating on real algebraic numbers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RealError {
    /// The endpoints of an isolating interval are out of order.
    #[error("invalid isolating interval: ({0}, {1}]")]
    InvalidInterval(Q, Q),
    /// The zero polynomial has every number as a root and isolates none.
    #[error("zero polynomial has no isolated roots")]
    ZeroPolynomial,
    /// A rational value was required but the number is algebraic.
    #[error("number is not represented as a rational")]
    NotRational,
    /// Division by zero or inversion of zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Square root of a negative number.
    #[error("square root of a negative number")]
    NegativeSqrt,
    /// Even root of a negative number.
    #[error("even root of a negative number")]
    NegativeEvenRoot,
    /// The zeroth root is undefined.
    #[error("zeroth root is undefined")]
    ZerothRoot,
    /// Root taking expected exactly one candidate root.
    #[error("expected exactly one root, found {0}")]
    AmbiguousRoot(usize),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RealError>;
