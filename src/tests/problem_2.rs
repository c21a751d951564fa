//! Two variable maximization with a degenerate starting row.
//!
//! Maximize 2 x_1 - x_2 subject to x_1 - x_2 <= 0 and x_2 <= 10, with slacks x_3 and x_4.
use relp_num::{RB, RationalBig};

use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::{Simplex, SimplexConfig, run};
use crate::data::dictionary::Dictionary;
use crate::data::linear_expression::LinearExpression;

type T = RationalBig;

pub fn dictionary() -> Dictionary<T> {
    Dictionary::new(
        LinearExpression::objective()
            .with_term(1, RB!(2))
            .with_term(2, RB!(-1)),
        vec![
            LinearExpression::row(3, RB!(0)).with_term(1, RB!(-1)).with_term(2, RB!(1)),
            LinearExpression::row(4, RB!(10)).with_term(2, RB!(-1)),
        ],
    )
}

/// x_1 entered, x_3 left, without changing the objective value.
pub fn after_pivot_1() -> Dictionary<T> {
    Dictionary::new(
        LinearExpression::objective()
            .with_term(2, RB!(1))
            .with_term(3, RB!(-2)),
        vec![
            LinearExpression::row(4, RB!(10)).with_term(2, RB!(-1)),
            LinearExpression::row(1, RB!(0)).with_term(2, RB!(1)).with_term(3, RB!(-1)),
        ],
    )
}

/// x_2 entered, x_4 left.
pub fn after_pivot_2() -> Dictionary<T> {
    Dictionary::new(
        LinearExpression::new(RB!(10)).with_name("z")
            .with_term(3, RB!(-2))
            .with_term(4, RB!(-1)),
        vec![
            LinearExpression::row(1, RB!(10)).with_term(3, RB!(-1)).with_term(4, RB!(-1)),
            LinearExpression::row(2, RB!(10)).with_term(4, RB!(-1)),
        ],
    )
}

#[test]
fn pivot_path() {
    let mut simplex = Simplex::new(SimplexConfig::default());
    let mut dictionary = dictionary();

    assert!(simplex.iterate(&mut dictionary).is_ok());
    assert_eq!(dictionary, after_pivot_1());
    assert!(simplex.iterate(&mut dictionary).is_ok());
    assert_eq!(dictionary, after_pivot_2());
}

#[test]
fn solve() {
    let result = run(dictionary(), true);
    assert_eq!(result, OptimizationResult::Optimal(after_pivot_2()));
    assert_eq!(result.objective_value(), Some(&RB!(10)));

    let solution = result.solution().unwrap();
    assert_eq!(solution.value_of(1), Some(&RB!(10)));
    assert_eq!(solution.value_of(2), Some(&RB!(10)));
    assert_eq!(solution.value_of(3), Some(&RB!(0)));
}

#[test]
fn terminates_within_a_few_pivots() {
    let config = SimplexConfig { max_pivots: Some(10), ..SimplexConfig::default() };
    assert!(Simplex::new(config).run(dictionary()).is_optimal());
}
