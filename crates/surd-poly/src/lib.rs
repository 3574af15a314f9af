//! # surd-poly
//!
//! Dense univariate polynomials over the rings of `surd-rings`, plus the
//! classical algorithms exact real arithmetic is built from:
//!
//! - [`Poly`]: coefficient-vector polynomials with ring/field arithmetic,
//!   pseudo-division and composition
//! - [`algorithms::gcd`]: Euclidean gcd with per-step normalization
//! - [`algorithms::squarefree`]: square-free parts
//! - [`algorithms::resultant`]: resultants and discriminants over any
//!   Euclidean coefficient domain, including nested polynomials
//! - [`algorithms::remainder_sequence`]: the four classical polynomial
//!   remainder sequences
//! - [`algorithms::sturm`]: Sturm chains and real root counting
//!
//! Polynomials are generic over the coefficient ring, so the same
//! machinery runs over `Z`, `Q` and `Poly<Q>` (for eliminating a variable
//! of a bivariate polynomial).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use algorithms::sturm::SturmSequence;
pub use dense::Poly;
