//! Polynomial algorithms: gcd, square-free decomposition, resultants,
//! polynomial remainder sequences and Sturm chains.

pub mod gcd;
pub mod remainder_sequence;
pub mod resultant;
pub mod squarefree;
pub mod sturm;
