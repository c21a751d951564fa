//! Classic three constraint maximization.
//!
//! Maximize 3 x_1 + 2 x_2 subject to x_1 + x_2 <= 5, 2 x_1 + x_2 <= 6 and x_1 <= 2, with slacks
//! x_3, x_4 and x_5.
use relp_num::{RB, RationalBig};

use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::{Simplex, SimplexConfig, is_optimal, run};
use crate::algorithm::strategy::pivot_rule::FirstProfitable;
use crate::data::dictionary::Dictionary;
use crate::data::linear_expression::LinearExpression;

type T = RationalBig;

pub fn dictionary() -> Dictionary<T> {
    Dictionary::new(
        LinearExpression::objective()
            .with_term(1, RB!(3))
            .with_term(2, RB!(2)),
        vec![
            LinearExpression::row(3, RB!(5)).with_term(1, RB!(-1)).with_term(2, RB!(-1)),
            LinearExpression::row(4, RB!(6)).with_term(1, RB!(-2)).with_term(2, RB!(-1)),
            LinearExpression::row(5, RB!(2)).with_term(1, RB!(-1)),
        ],
    )
}

/// x_2 entered, x_3 left.
pub fn after_pivot_1() -> Dictionary<T> {
    Dictionary::new(
        LinearExpression::new(RB!(10)).with_name("z")
            .with_term(1, RB!(1))
            .with_term(3, RB!(-2)),
        vec![
            LinearExpression::row(4, RB!(1)).with_term(1, RB!(-1)).with_term(3, RB!(1)),
            LinearExpression::row(5, RB!(2)).with_term(1, RB!(-1)),
            LinearExpression::row(2, RB!(5)).with_term(1, RB!(-1)).with_term(3, RB!(-1)),
        ],
    )
}

/// x_1 entered, x_4 left.
pub fn after_pivot_2() -> Dictionary<T> {
    Dictionary::new(
        LinearExpression::new(RB!(11)).with_name("z")
            .with_term(3, RB!(-1))
            .with_term(4, RB!(-1)),
        vec![
            LinearExpression::row(5, RB!(1)).with_term(3, RB!(-1)).with_term(4, RB!(1)),
            LinearExpression::row(2, RB!(4)).with_term(3, RB!(-2)).with_term(4, RB!(1)),
            LinearExpression::row(1, RB!(1)).with_term(3, RB!(1)).with_term(4, RB!(-1)),
        ],
    )
}

#[test]
fn pivot_path() {
    let mut simplex = Simplex::new(SimplexConfig::default());
    let mut dictionary = dictionary();
    assert!(dictionary.is_in_dictionary_form());

    assert!(simplex.iterate(&mut dictionary).is_ok());
    assert_eq!(dictionary, after_pivot_1());
    assert!(!is_optimal(&dictionary));

    assert!(simplex.iterate(&mut dictionary).is_ok());
    assert_eq!(dictionary, after_pivot_2());
    assert!(is_optimal(&dictionary));
}

#[test]
fn objective_is_non_decreasing() {
    let values = [dictionary(), after_pivot_1(), after_pivot_2()]
        .iter()
        .map(|dictionary| dictionary.objective_value().clone())
        .collect::<Vec<_>>();
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn solve() {
    let result = run(dictionary(), true);
    assert_eq!(result, OptimizationResult::Optimal(after_pivot_2()));

    let solution = result.solution().unwrap();
    assert_eq!(solution.objective_value(), &RB!(11));
    assert_eq!(solution.values(), &[
        (1, RB!(1)),
        (2, RB!(4)),
        (3, RB!(0)),
        (4, RB!(0)),
        (5, RB!(1)),
    ]);
}

/// Entering on x_1 first, the row of x_3 is selected although x_5 bounds x_1 more tightly.
#[test]
fn first_profitable_ends_infeasible() {
    let mut simplex = Simplex::with_rule(SimplexConfig::default(), FirstProfitable);
    match simplex.run(dictionary()) {
        OptimizationResult::Infeasible(dictionary) => {
            assert_eq!(dictionary.objective_value(), &RB!(15));
            assert_eq!(dictionary.value_of(1), RB!(5));
            assert_eq!(dictionary.value_of(4), RB!(-4));
            assert_eq!(dictionary.value_of(5), RB!(-3));
        },
        other => panic!("expected an infeasible dictionary, got {:?}", other),
    }
}
