//! # Strategies
//!
//! Choices the simplex method can make differently without changing the algorithm.
pub mod pivot_rule;
