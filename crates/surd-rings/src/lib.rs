//! # surd-rings
//!
//! The algebraic backbone of the surd workspace:
//!
//! - a small trait tower ([`Ring`] through [`Field`], plus [`OrderedRing`])
//!   that the polynomial and real layers are generic over
//! - [`Z`]: the ring of integers
//! - [`Q`]: the field of rationals
//! - [`Extended`]: a number line completed with two infinities, used to
//!   phrase unbounded root searches
//!
//! The traits deliberately stop at what exact real arithmetic needs. There
//! is no factorization machinery here, only divisibility and order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod extended;
pub mod integers;
pub mod rationals;
pub mod traits;

pub use extended::Extended;
pub use integers::Z;
pub use rationals::Q;
pub use traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};
