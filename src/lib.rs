//! # An exact dictionary simplex solver
//!
//! Linear programs are solved using the dictionary (tableau) form of the Simplex Method with
//! exact rational arithmetic. A dictionary expresses every basic variable, and the maximized
//! objective, in terms of the non-basic variables. Pivots exchange one basic and one non-basic
//! variable until no objective coefficient is positive.
//!
//! No feasible starting basis is searched for: the caller provides the starting dictionary, and
//! when the optimal dictionary turns out to have a negative basic variable, this is reported.
#![warn(missing_docs)]

pub use relp_num::{RB, RationalBig};

pub use crate::algorithm::OptimizationResult;
pub use crate::algorithm::simplex::{Simplex, SimplexConfig, run};
pub use crate::data::dictionary::Dictionary;
pub use crate::data::linear_expression::{LinearExpression, LinearTerm};

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
