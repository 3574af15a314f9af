//! # surd-integers
//!
//! Arbitrary-precision scalar arithmetic for the surd workspace:
//!
//! - [`Integer`]: a signed big integer backed by `dashu`
//! - [`Rational`]: an exact fraction of two [`Integer`]s, always stored in
//!   lowest terms with a positive denominator
//!
//! Every value is exact. There is no rounding anywhere in this crate, which
//! is what makes the root isolation layers built on top of it sound.
//!
//! ## Performance Notes
//!
//! The newtypes add no overhead over the underlying `dashu` values. Cloning
//! is proportional to the magnitude of the number, so the polynomial layers
//! prefer to borrow where they can.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
