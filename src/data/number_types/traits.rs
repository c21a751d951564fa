//! # Traits
//!
//! The simplex method only needs the operations of an ordered field. Floating point types are
//! deliberately not supported: the termination and feasibility checks compare against zero
//! exactly.
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

use num_traits::{One, Zero};

/// Operations done on coefficients and constants of a dictionary.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Field:
    Zero +
    One +
    Neg<Output=Self> +

    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    AddAssign +
    for<'r> AddAssign<&'r Self> +

    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +

    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    MulAssign +
    for<'r> MulAssign<&'r Self> +

    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +

    Eq +
    Ord +

    Clone +
    Debug +
    Display +
{
    /// Whether the value is strictly larger than zero.
    fn is_positive(&self) -> bool {
        self > &Self::zero()
    }

    /// Whether the value is strictly smaller than zero.
    fn is_negative(&self) -> bool {
        self < &Self::zero()
    }
}

impl<T> Field for T
where
    T: Zero + One + Neg<Output=T> +
        Add<T, Output=T> + for<'r> Add<&'r T, Output=T> + AddAssign + for<'r> AddAssign<&'r T> +
        Sub<T, Output=T> + for<'r> Sub<&'r T, Output=T> +
        Mul<T, Output=T> + for<'r> Mul<&'r T, Output=T> + MulAssign + for<'r> MulAssign<&'r T> +
        Div<T, Output=T> + for<'r> Div<&'r T, Output=T> +
        Eq + Ord + Clone + Debug + Display,
{
}

#[cfg(test)]
mod test {
    use relp_num::{RB, RationalBig};

    use crate::data::number_types::traits::Field;

    #[test]
    fn signs() {
        fn test<F: Field>(positive: F, negative: F) {
            assert!(positive.is_positive());
            assert!(!positive.is_negative());
            assert!(negative.is_negative());
            assert!(!negative.is_positive());
            assert!(!F::zero().is_positive());
            assert!(!F::zero().is_negative());
        }

        test::<RationalBig>(RB!(1, 3), RB!(-2));
        test::<RationalBig>(RB!(5), RB!(-7, 4));
    }

    #[test]
    fn thirds_sum_exactly() {
        let third = RB!(1, 3);
        let sum = third.clone() + &third + &third;
        assert_eq!(sum, RB!(1));
    }
}
