//! # Algorithms
use crate::algorithm::error::Failure;
use crate::data::dictionary::Dictionary;
use crate::data::number_types::traits::Field;
use crate::data::solution::Solution;

pub mod error;
pub mod simplex;
pub mod strategy;

/// Outcome of running the simplex method on a dictionary.
///
/// An unbounded objective is not recognized separately, it shows up as a selection failure.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum OptimizationResult<F> {
    /// No objective coefficient is positive and all basic variables are nonnegative.
    Optimal(Dictionary<F>),
    /// No objective coefficient is positive, but a basic variable is negative.
    Infeasible(Dictionary<F>),
    /// The computation was aborted.
    Failed(Failure),
}

impl<F: Field> OptimizationResult<F> {
    /// Whether an optimal, feasible dictionary was found.
    pub fn is_optimal(&self) -> bool {
        matches!(self, OptimizationResult::Optimal(_))
    }

    /// The terminal dictionary, unless the computation failed.
    pub fn dictionary(&self) -> Option<&Dictionary<F>> {
        match self {
            OptimizationResult::Optimal(dictionary) | OptimizationResult::Infeasible(dictionary) => {
                Some(dictionary)
            },
            OptimizationResult::Failed(_) => None,
        }
    }

    /// Value of the objective at the optimum.
    pub fn objective_value(&self) -> Option<&F> {
        match self {
            OptimizationResult::Optimal(dictionary) => Some(dictionary.objective_value()),
            _ => None,
        }
    }

    /// The optimal solution.
    pub fn solution(&self) -> Option<Solution<F>> {
        match self {
            OptimizationResult::Optimal(dictionary) => Some(dictionary.solution()),
            _ => None,
        }
    }
}
