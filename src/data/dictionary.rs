//! # Dictionaries
//!
//! The state of the simplex method: an objective row and one row per basic variable, each
//! expressed in the non-basic variables only.
use std::collections::{BTreeMap, HashSet};
use std::fmt::{Display, Formatter};
use std::fmt;

use log::debug;
use thiserror::Error;

use crate::algorithm::error::{Failure, SelectionError, SubstitutionError};
use crate::data::linear_expression::LinearExpression;
use crate::data::number_types::traits::Field;
use crate::data::solution::Solution;

/// A linear program in dictionary (tableau) form.
///
/// The objective row is maximized. Every basis row defines one basic variable in terms of the
/// non-basic variables, which are held at zero.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Dictionary<F> {
    objective: LinearExpression<F>,
    /// Rows in order; the order matters for the ratio test.
    basis: Vec<LinearExpression<F>>,
}

/// A violation of the dictionary form, found by `Dictionary::try_new`.
#[allow(missing_docs)]
#[derive(Error, Eq, PartialEq, Clone, Debug)]
pub enum DictionaryError {
    #[error("variable index 0 is reserved for the objective")]
    ZeroVariableIndex,
    #[error("basis row at position {position} doesn't define a variable")]
    UnlabeledRow { position: usize },
    #[error("x_{0} is defined by more than one basis row")]
    DuplicateBasicVariable(usize),
    #[error("x_{0} is both the objective and a basic variable")]
    ObjectiveIndexInBasis(usize),
    #[error("x_{variable} appears more than once in the same expression")]
    DuplicateTerm { variable: usize },
    #[error("basic variable x_{variable} appears in the row of x_{row}")]
    BasicVariableInRow { row: usize, variable: usize },
    #[error("basic variable x_{0} appears in the objective")]
    BasicVariableInObjective(usize),
}

impl<F: Field> Dictionary<F> {
    /// Create a new dictionary without checking it.
    ///
    /// Inconsistencies will show up as failures while pivoting.
    pub fn new(objective: LinearExpression<F>, basis: Vec<LinearExpression<F>>) -> Self {
        Self { objective, basis }
    }

    /// Create a new dictionary, checking that it is in dictionary form.
    pub fn try_new(
        objective: LinearExpression<F>,
        basis: Vec<LinearExpression<F>>,
    ) -> Result<Self, DictionaryError> {
        let dictionary = Self::new(objective, basis);
        dictionary.check()?;
        Ok(dictionary)
    }

    fn check(&self) -> Result<(), DictionaryError> {
        let mut basic = HashSet::with_capacity(self.basis.len());
        for (position, row) in self.basis.iter().enumerate() {
            match row.index() {
                None => return Err(DictionaryError::UnlabeledRow { position }),
                Some(0) => return Err(DictionaryError::ZeroVariableIndex),
                Some(index) => if !basic.insert(index) {
                    return Err(DictionaryError::DuplicateBasicVariable(index));
                },
            }
        }
        if let Some(index) = self.objective.index() {
            if basic.contains(&index) {
                return Err(DictionaryError::ObjectiveIndexInBasis(index));
            }
        }

        Self::check_terms(&self.objective, &basic, DictionaryError::BasicVariableInObjective)?;
        for row in &self.basis {
            let index = row.index().unwrap_or_default();
            Self::check_terms(row, &basic, |variable| DictionaryError::BasicVariableInRow {
                row: index,
                variable,
            })?;
        }

        Ok(())
    }

    fn check_terms(
        expression: &LinearExpression<F>,
        basic: &HashSet<usize>,
        in_basis: impl Fn(usize) -> DictionaryError,
    ) -> Result<(), DictionaryError> {
        let mut seen = HashSet::with_capacity(expression.terms().len());
        for term in expression.terms() {
            let variable = term.variable();
            if variable == 0 {
                return Err(DictionaryError::ZeroVariableIndex);
            }
            if !seen.insert(variable) {
                return Err(DictionaryError::DuplicateTerm { variable });
            }
            if basic.contains(&variable) {
                return Err(in_basis(variable));
            }
        }

        Ok(())
    }

    /// Whether the dictionary-form invariant holds.
    ///
    /// Every basis row defines a distinct variable, no expression mentions a basic variable and
    /// no expression mentions a variable twice.
    pub fn is_in_dictionary_form(&self) -> bool {
        self.check().is_ok()
    }

    /// The objective row.
    pub fn objective(&self) -> &LinearExpression<F> {
        &self.objective
    }

    /// The basis rows, in order.
    pub fn basis(&self) -> &[LinearExpression<F>] {
        &self.basis
    }

    /// Number of basis rows.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    fn rows(&self) -> impl Iterator<Item=&LinearExpression<F>> {
        std::iter::once(&self.objective).chain(self.basis.iter())
    }

    /// Indices of the basic variables, in row order.
    pub fn basic_variables(&self) -> impl Iterator<Item=usize> + '_ {
        self.basis.iter().filter_map(LinearExpression::index)
    }

    /// Whether a variable is currently basic.
    pub fn is_basic(&self, variable: usize) -> bool {
        self.basic_variables().any(|index| index == variable)
    }

    /// The defining row of a basic variable.
    pub fn row_of(&self, variable: usize) -> Option<&LinearExpression<F>> {
        self.basis.iter().find(|row| row.index() == Some(variable))
    }

    /// Value of the objective while all non-basic variables are zero.
    pub fn objective_value(&self) -> &F {
        self.objective.constant()
    }

    /// Value of a variable in the current basic solution.
    ///
    /// Basic variables take the constant of their row, all other variables are zero.
    pub fn value_of(&self, variable: usize) -> F {
        self.row_of(variable)
            .map_or_else(F::zero, |row| row.constant().clone())
    }

    /// Whether the current basic solution is feasible, that is, no basic variable is negative.
    pub fn is_feasible(&self) -> bool {
        self.basis.iter().all(|row| !row.constant().is_negative())
    }

    /// The current basic solution.
    ///
    /// Contains every variable mentioned anywhere in the dictionary.
    pub fn solution(&self) -> Solution<F> {
        let mut values = BTreeMap::new();
        for expression in self.rows() {
            for term in expression.terms() {
                values.entry(term.variable()).or_insert_with(F::zero);
            }
        }
        for row in &self.basis {
            if let Some(index) = row.index() {
                values.insert(index, row.constant().clone());
            }
        }

        Solution::new(self.objective_value().clone(), values.into_iter().collect())
    }

    /// Find the row to pivot on once the entering variable is known.
    ///
    /// Only rows with a negative coefficient `c` on the entering variable bound it from above, by
    /// `constant / -c`. Rows with a positive coefficient bound it from below and are only
    /// reported. The first bounding row is selected, and afterwards any row with a negative bound
    /// replaces the current selection. This is not the minimum ratio test.
    ///
    /// # Return value
    ///
    /// Position of the selected row in the basis, or `None` if no row bounds the entering
    /// variable from above.
    pub fn select_primal_pivot_row(&self, entering: usize) -> Option<usize> {
        let mut selected = None;
        for (position, row) in self.basis.iter().enumerate() {
            let Some(coefficient) = row.coefficient_of(entering) else { continue };
            if coefficient.is_zero() {
                continue;
            }

            let bound = row.constant().clone() / &-coefficient.clone();
            if coefficient.is_negative() {
                debug!("{} : <= {}", Label(row), bound);
                if selected.is_none() || bound.is_negative() {
                    selected = Some(position);
                }
            } else {
                debug!("{} : >= {}", Label(row), bound);
            }
        }

        selected
    }

    /// Pivot: bring `entering` into the basis, replacing the basic variable of the row at
    /// position `row`.
    ///
    /// The row is solved for `entering`, after which `entering` is substituted in the objective
    /// and in every other basis row. The old row is removed and the new one appended.
    ///
    /// # Errors
    ///
    /// When the row doesn't define a variable or has no nonzero coefficient for `entering`, or
    /// when the objective doesn't contain `entering`. The dictionary is unchanged in that case.
    pub fn bring_into_basis(&mut self, entering: usize, row: usize) -> Result<(), Failure> {
        debug_assert!(row < self.basis.len());
        let was_in_dictionary_form = cfg!(debug_assertions) && self.is_in_dictionary_form();

        let leaving_row = &self.basis[row];
        let leaving = leaving_row.index()
            .ok_or(SelectionError::UnlabeledRow { position: row })?;
        let definition = leaving_row.solve_for(entering, leaving)
            .ok_or(SelectionError::ZeroPivot { entering, leaving })?;
        let objective = self.objective.substituted(entering, &definition)
            .ok_or(SubstitutionError::MissingInObjective { entering })?;

        let mut basis = self.basis.iter()
            .enumerate()
            .filter(|&(position, _)| position != row)
            .map(|(_, expression)| {
                if expression.index() == Some(entering) {
                    expression.clone()
                } else {
                    expression.substituted(entering, &definition)
                        .unwrap_or_else(|| expression.clone())
                }
            })
            .collect::<Vec<_>>();
        basis.push(definition);

        self.objective = objective;
        self.basis = basis;

        debug_assert!(!was_in_dictionary_form || self.is_in_dictionary_form());
        Ok(())
    }
}

/// Renders the left hand side of a row.
struct Label<'a, F>(&'a LinearExpression<F>);

impl<F: Field> Display for Label<'_, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (self.0.name(), self.0.index()) {
            (Some(name), _) => f.write_str(name),
            (None, Some(index)) => write!(f, "x_{}", index),
            (None, None) => f.write_str("?"),
        }
    }
}

impl<F: Field> Display for Dictionary<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.objective.name().is_none() && self.objective.index().is_none() {
            write!(f, "z = ")?;
        }
        writeln!(f, "{}", self.objective)?;
        writeln!(f, "----------------------")?;
        for row in &self.basis {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}
