//! # Number types
//!
//! Every coefficient and constant in a dictionary is an exact number. The algorithms are written
//! against the `Field` bound from the `traits` module, so any exact ordered field can be used. The
//! arbitrary precision rational from `relp-num` is the default.
pub mod traits;

pub use relp_num::RationalBig;
