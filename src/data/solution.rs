//! # Representation of basic solutions
//!
//! Once a dictionary is optimal, the values of the variables are read off: basic variables take
//! the constant of their row, non-basic variables are zero.
use std::fmt::{Display, Formatter};
use std::fmt;

use crate::data::number_types::traits::Field;

/// Values of all variables in a basic solution, together with the objective value.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Solution<F> {
    objective_value: F,
    /// (variable index, value) tuples, sorted by index.
    values: Vec<(usize, F)>,
}

impl<F: Field> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Value of the objective row.
    /// * `values`: Variable values, sorted by variable index.
    pub fn new(objective_value: F, values: Vec<(usize, F)>) -> Self {
        debug_assert!(values.windows(2).all(|pair| pair[0].0 < pair[1].0));

        Self { objective_value, values }
    }

    /// Value of the objective.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// All (variable index, value) tuples, sorted by index.
    pub fn values(&self) -> &[(usize, F)] {
        &self.values
    }

    /// Value of a single variable, if it is known to this solution.
    pub fn value_of(&self, variable: usize) -> Option<&F> {
        self.values
            .binary_search_by_key(&variable, |&(index, _)| index)
            .ok()
            .map(|position| &self.values[position].1)
    }
}

impl<F: Field> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        for (variable, value) in &self.values {
            writeln!(f, "x_{} = {}", variable, value)?;
        }

        Ok(())
    }
}
