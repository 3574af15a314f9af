//! # Surd
//!
//! Exact arithmetic on real algebraic numbers.
//!
//! A surd is represented by a monic square-free defining polynomial
//! together with an isolating interval, never by a floating-point
//! approximation. Comparison, field arithmetic, powers and root taking
//! all stay exact; intervals are only refined, never trusted beyond
//! what Sturm sequences and resultants certify.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: rationals over big integers throughout
//! - **Algebraic Structures**: ring and field traits shared by every layer
//! - **Polynomial Arithmetic**: dense polynomials with Karatsuba
//!   multiplication, gcds, resultants and Sturm sequences
//! - **Exact Real Roots**: isolation, refinement and arithmetic on
//!   algebraic numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use surd::prelude::*;
//!
//! // The positive root of x^2 - 2.
//! let f = Poly::new(vec![Q::from_integer(-2), Q::zero(), Q::one()]);
//! let sqrt2 = real_roots(&f).unwrap().pop().unwrap();
//!
//! assert!(sqrt2 > AlgebraicReal::from(1));
//! assert_eq!(sqrt2.clone() * sqrt2, AlgebraicReal::from(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use surd_integers as integers;
pub use surd_poly as poly;
pub use surd_real as real;
pub use surd_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use surd_integers::{Integer, Rational};
    pub use surd_poly::{Poly, SturmSequence};
    pub use surd_real::{real_roots, real_roots_between, AlgebraicReal, Interval, RealError};
    pub use surd_rings::{Extended, Field, OrderedRing, Ring, Q, Z};
}
