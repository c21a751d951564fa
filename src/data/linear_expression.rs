//! # Linear expressions
//!
//! The rows of a dictionary. Each row is a constant plus a sparse combination of variables, and
//! the basis rows additionally carry the index of the basic variable they define.
use std::fmt::{Display, Formatter};
use std::fmt;
use std::iter;

use itertools::Itertools;

use crate::data::number_types::traits::Field;

/// A single monomial `coefficient * x_variable`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct LinearTerm<F> {
    variable: usize,
    coefficient: F,
}

impl<F> LinearTerm<F> {
    /// Create a new term.
    pub fn new(variable: usize, coefficient: F) -> Self {
        Self { variable, coefficient }
    }

    /// Index of the variable this term multiplies.
    pub fn variable(&self) -> usize {
        self.variable
    }

    /// Coefficient of the variable.
    pub fn coefficient(&self) -> &F {
        &self.coefficient
    }
}

impl<F: Display> Display for LinearTerm<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} x_{}", self.coefficient, self.variable)
    }
}

/// A constant term plus a combination of variables.
///
/// The objective row and every basis row of a `Dictionary` are of this type. A basis row carries
/// the index of the variable it defines, the objective row usually a name.
///
/// Terms are kept in insertion order and no coefficient is ever zero: terms that would get a zero
/// coefficient are pruned. No two terms may share a variable index; this is not checked while
/// building, see `Dictionary::try_new`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct LinearExpression<F> {
    /// Variable defined by this expression, if it is a basis row.
    index: Option<usize>,
    /// Display name, takes precedence over the index when rendering.
    name: Option<String>,
    constant: F,
    terms: Vec<LinearTerm<F>>,
}

impl<F: Field> LinearExpression<F> {
    /// Create an expression without terms.
    pub fn new(constant: F) -> Self {
        Self {
            index: None,
            name: None,
            constant,
            terms: Vec::new(),
        }
    }

    /// Create a basis row `x_index = constant`, without terms.
    pub fn row(index: usize, constant: F) -> Self {
        Self::new(constant).with_index(index)
    }

    /// Create an objective row named `z` with a zero constant.
    pub fn objective() -> Self {
        Self::new(F::zero()).with_name("z")
    }

    /// Mark this expression as the defining row of variable `index`.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Give this expression a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a term.
    ///
    /// A zero coefficient is not stored. The variable should not already appear in this
    /// expression.
    #[must_use]
    pub fn with_term(mut self, variable: usize, coefficient: F) -> Self {
        if !coefficient.is_zero() {
            self.terms.push(LinearTerm::new(variable, coefficient));
        }
        self
    }

    /// Variable defined by this expression, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The constant term.
    ///
    /// For a basis row this is the value of the basic variable, for the objective row the
    /// objective value, while all non-basic variables are held at zero.
    pub fn constant(&self) -> &F {
        &self.constant
    }

    /// All terms, in insertion order.
    pub fn terms(&self) -> &[LinearTerm<F>] {
        &self.terms
    }

    /// Coefficient of a variable, if it appears in this expression.
    pub fn coefficient_of(&self, variable: usize) -> Option<&F> {
        self.position_of(variable).map(|position| &self.terms[position].coefficient)
    }

    /// Whether a variable appears in this expression.
    pub fn contains(&self, variable: usize) -> bool {
        self.position_of(variable).is_some()
    }

    fn position_of(&self, variable: usize) -> Option<usize> {
        self.terms.iter().position(|term| term.variable == variable)
    }

    /// Add `delta` to the coefficient of `variable`.
    ///
    /// A new term is appended if the variable doesn't appear yet, and the term is removed if its
    /// coefficient becomes zero.
    pub fn add_to_coefficient(&mut self, variable: usize, delta: F) {
        match self.position_of(variable) {
            Some(position) => {
                self.terms[position].coefficient += delta;
                if self.terms[position].coefficient.is_zero() {
                    self.terms.remove(position);
                }
            },
            None => if !delta.is_zero() {
                self.terms.push(LinearTerm::new(variable, delta));
            },
        }
    }

    /// Rewrite the equation `x_label = self` such that `variable` is on the left hand side.
    ///
    /// With `c` the coefficient of `variable`, every other coefficient and the constant are
    /// divided by `-c`, and a term `1 / c x_label` is appended.
    ///
    /// # Return value
    ///
    /// The defining row of `variable`, or `None` if `variable` has no nonzero coefficient in this
    /// expression.
    pub fn solve_for(&self, variable: usize, label: usize) -> Option<Self> {
        let position = self.position_of(variable)?;
        let coefficient = &self.terms[position].coefficient;
        if coefficient.is_zero() {
            return None;
        }

        let divisor = -coefficient.clone();
        let terms = self.terms.iter()
            .enumerate()
            .filter(|&(i, _)| i != position)
            .map(|(_, term)| LinearTerm::new(term.variable, term.coefficient.clone() / &divisor))
            .chain(iter::once(LinearTerm::new(label, F::one() / coefficient)))
            .collect();

        Some(Self {
            index: Some(variable),
            name: None,
            constant: self.constant.clone() / &divisor,
            terms,
        })
    }

    /// Replace `variable` by its defining expression.
    ///
    /// With `k` the coefficient of `variable` in this expression, its term is removed, `k` times
    /// the constant of `definition` is added to the constant, and `k` times each term of
    /// `definition` is added to the matching term (which is appended if it doesn't exist yet).
    ///
    /// # Return value
    ///
    /// The substituted expression, or `None` if `variable` doesn't appear in this expression.
    pub fn substituted(&self, variable: usize, definition: &Self) -> Option<Self> {
        let position = self.position_of(variable)?;

        let mut result = self.clone();
        let LinearTerm { coefficient: factor, .. } = result.terms.remove(position);
        result.constant += factor.clone() * &definition.constant;
        for term in &definition.terms {
            result.add_to_coefficient(term.variable, factor.clone() * &term.coefficient);
        }

        Some(result)
    }

    /// Whether any coefficient is strictly positive.
    pub fn has_positive_coefficient(&self) -> bool {
        self.terms.iter().any(|term| term.coefficient.is_positive())
    }
}

impl<F: Field> Display for LinearExpression<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{} = ", name)?;
        } else if let Some(index) = self.index {
            write!(f, "x_{} = ", index)?;
        }

        let constant = if !self.constant.is_zero() || self.terms.is_empty() {
            Some(self.constant.to_string())
        } else { None };
        let rendered = constant.into_iter()
            .chain(self.terms.iter().map(LinearTerm::to_string))
            .join(" + ");

        f.write_str(&rendered)
    }
}
