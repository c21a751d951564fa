//! # Integration tests that require a look inside the crate.
//!
//! Each problem module provides the starting dictionary as `fn dictionary()`, the dictionaries
//! reached after each pivot as `fn after_pivot_n()`, and tests running the solver on them.
pub mod problem_1;
pub mod problem_2;
