//! Exact arithmetic on real algebraic numbers.
//!
//! The central type is [`AlgebraicReal`]: a real root of a rational
//! polynomial, stored as a monic square-free defining polynomial plus a
//! half-open isolating interval. Arithmetic, comparison and root taking
//! are exact; intervals are bisected on demand and every symbolic
//! question goes through Sturm sequences and resultants from
//! `surd-poly`.
//!
//! ```
//! use surd_real::{real_roots, AlgebraicReal};
//! use surd_rings::{Q, Ring};
//! use surd_poly::Poly;
//!
//! // The positive root of x^2 - 2.
//! let f = Poly::new(vec![Q::from_integer(-2), Q::zero(), Q::one()]);
//! let sqrt2 = real_roots(&f).unwrap().pop().unwrap();
//! assert_eq!(sqrt2.clone() * sqrt2, AlgebraicReal::from(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebraic;
pub mod error;
pub mod interval;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use algebraic::AlgebraicReal;
pub use error::{RealError, Result};
pub use interval::Interval;
pub use roots::{real_roots, real_roots_between};
