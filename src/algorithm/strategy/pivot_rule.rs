//! # Pivot rules
//!
//! Strategies for choosing the variable that enters the basis.
use crate::data::linear_expression::LinearExpression;
use crate::data::number_types::traits::Field;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide which non-basic variable to increase. The pivot
/// rule describes that behavior.
///
/// Once the entering variable has been selected, a row needs to be found. This decision is made
/// independent of the strategy, see `Dictionary::select_primal_pivot_row`.
pub trait PivotRule {
    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a variable with a positive coefficient in the objective, or `None` if there is no
    /// such variable. In that case the objective is optimal.
    fn select_primal_pivot_column<F: Field>(
        &mut self,
        objective: &LinearExpression<F>,
    ) -> Option<usize>;
}

/// Pivot on the variable with the largest index among those with a positive objective
/// coefficient.
///
/// This is neither Bland's rule (which takes the smallest index) nor the steepest coefficient, and
/// it doesn't guarantee that cycling is avoided.
#[derive(Copy, Clone, Debug, Default)]
pub struct LargestIndex;
impl PivotRule for LargestIndex {
    fn select_primal_pivot_column<F: Field>(
        &mut self,
        objective: &LinearExpression<F>,
    ) -> Option<usize> {
        objective.terms().iter()
            .filter(|term| term.coefficient().is_positive())
            .map(|term| term.variable())
            .max()
    }
}

/// Simply pivot on the first term of the objective, which has a positive coefficient.
#[derive(Copy, Clone, Debug, Default)]
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn select_primal_pivot_column<F: Field>(
        &mut self,
        objective: &LinearExpression<F>,
    ) -> Option<usize> {
        objective.terms().iter()
            .find(|term| term.coefficient().is_positive())
            .map(|term| term.variable())
    }
}
