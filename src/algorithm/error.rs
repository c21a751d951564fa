//! # Failures of the simplex method
//!
//! Pivot steps don't panic when they can't proceed; they return one of the errors below, after
//! which the driver stops.
use thiserror::Error;

/// Why a run of the simplex method was aborted.
#[derive(Error, Eq, PartialEq, Clone, Debug)]
pub enum Failure {
    /// No entering variable or no leaving row could be chosen.
    #[error("selection failed: {0}")]
    Selection(#[from] SelectionError),
    /// The entering variable couldn't be eliminated from a row where it must appear.
    #[error("substitution failed: {0}")]
    Substitution(#[from] SubstitutionError),
    /// The configured maximum number of pivots was reached before the dictionary was optimal.
    #[error("no optimum within {0} pivots")]
    IterationLimit(usize),
}

impl Failure {
    /// Whether a pivot variable or row couldn't be selected.
    ///
    /// An unbounded objective also ends up here.
    pub fn is_selection_failure(&self) -> bool {
        matches!(self, Failure::Selection(_))
    }

    /// Whether the entering variable was missing from the objective.
    pub fn is_substitution_failure(&self) -> bool {
        matches!(self, Failure::Substitution(_))
    }
}

/// Pivot selection failures.
#[derive(Error, Eq, PartialEq, Clone, Debug)]
pub enum SelectionError {
    /// The objective has no term with a positive coefficient.
    #[error("no variable with a positive objective coefficient")]
    NoEnteringVariable,
    /// No basis row bounds the entering variable from above.
    #[error("no row bounds x_{entering}")]
    NoLeavingRow {
        /// Variable that was selected to enter the basis.
        entering: usize,
    },
    /// The pivot row doesn't contain the entering variable.
    #[error("x_{entering} has no nonzero coefficient in the row of x_{leaving}")]
    ZeroPivot {
        /// Variable that was selected to enter the basis.
        entering: usize,
        /// Basic variable of the pivot row.
        leaving: usize,
    },
    /// The pivot row doesn't define a basic variable.
    #[error("basis row at position {position} doesn't define a variable")]
    UnlabeledRow {
        /// Position of the row in the basis.
        position: usize,
    },
}

/// Elimination failures.
#[derive(Error, Eq, PartialEq, Clone, Debug)]
pub enum SubstitutionError {
    /// The objective doesn't contain the entering variable.
    #[error("x_{entering} doesn't appear in the objective")]
    MissingInObjective {
        /// Variable that was selected to enter the basis.
        entering: usize,
    },
}
