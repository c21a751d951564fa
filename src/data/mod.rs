//! # Storing of dictionaries in memory
//!
//! This module provides the data structures the simplex method operates on. The algorithm itself
//! lives in `algorithm`.
pub mod dictionary;
pub mod linear_expression;
pub mod number_types;
pub mod solution;
