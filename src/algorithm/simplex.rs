//! # The dictionary simplex method
//!
//! Repeatedly selects an entering variable and a leaving row, and pivots, until no objective
//! coefficient is positive.
use log::{Level, debug, log, warn};

use crate::algorithm::OptimizationResult;
use crate::algorithm::error::{Failure, SelectionError};
use crate::algorithm::strategy::pivot_rule::{LargestIndex, PivotRule};
use crate::data::dictionary::Dictionary;
use crate::data::number_types::traits::Field;

/// Settings of a `Simplex` run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SimplexConfig {
    /// Log the full dictionary before and after every pivot at `info` level instead of `trace`.
    pub verbose: bool,
    /// Give up after this many pivots. Without a limit, a cycling instance never returns.
    pub max_pivots: Option<usize>,
}

/// Whether no objective coefficient is strictly positive.
pub fn is_optimal<F: Field>(dictionary: &Dictionary<F>) -> bool {
    !dictionary.objective().has_positive_coefficient()
}

/// Solve a dictionary with the default pivot rule.
///
/// # Arguments
///
/// * `dictionary`: Starting point; it doesn't need to be feasible, but infeasibility is only
/// detected, not repaired.
/// * `verbose`: Whether to log every intermediate dictionary at `info` level.
pub fn run<F: Field>(dictionary: Dictionary<F>, verbose: bool) -> OptimizationResult<F> {
    Simplex::new(SimplexConfig { verbose, ..SimplexConfig::default() }).run(dictionary)
}

/// Driver of the simplex method.
#[derive(Debug, Default)]
pub struct Simplex<PR = LargestIndex> {
    config: SimplexConfig,
    rule: PR,
}

impl Simplex<LargestIndex> {
    /// Create a driver using the largest index pivot rule.
    pub fn new(config: SimplexConfig) -> Self {
        Self::with_rule(config, LargestIndex)
    }
}

impl<PR: PivotRule> Simplex<PR> {
    /// Create a driver with a specific pivot rule.
    pub fn with_rule(config: SimplexConfig, rule: PR) -> Self {
        Self { config, rule }
    }

    /// The settings of this driver.
    pub fn config(&self) -> &SimplexConfig {
        &self.config
    }

    /// Do a single pivot.
    ///
    /// # Errors
    ///
    /// If there is no entering variable (the dictionary is optimal), if no row bounds the entering
    /// variable (which includes an unbounded objective), or if the pivot itself fails. The
    /// dictionary is unchanged in those cases.
    pub fn iterate<F: Field>(&mut self, dictionary: &mut Dictionary<F>) -> Result<(), Failure> {
        let entering = self.rule.select_primal_pivot_column(dictionary.objective())
            .ok_or(SelectionError::NoEnteringVariable)?;
        debug!("Selected x_{} to enter the basis, constraint bounds:", entering);

        let row = dictionary.select_primal_pivot_row(entering)
            .ok_or(SelectionError::NoLeavingRow { entering })?;
        if let Some(leaving) = dictionary.basis()[row].index() {
            debug!("Selected x_{} to leave the basis", leaving);
        }

        dictionary.bring_into_basis(entering, row)
    }

    /// Pivot until the dictionary is optimal.
    ///
    /// # Return value
    ///
    /// The optimal dictionary if all basic variables are nonnegative, the optimal but infeasible
    /// dictionary otherwise, or the reason the computation stopped.
    pub fn run<F: Field>(&mut self, mut dictionary: Dictionary<F>) -> OptimizationResult<F> {
        let mut nr_pivots = 0;
        while !is_optimal(&dictionary) {
            if let Some(limit) = self.config.max_pivots {
                if nr_pivots >= limit {
                    warn!("Reached the limit of {} pivots; halting", limit);
                    return OptimizationResult::Failed(Failure::IterationLimit(limit));
                }
            }

            self.log_dictionary(&dictionary);
            if let Err(failure) = self.iterate(&mut dictionary) {
                warn!("Pivot {} failed: {}; halting", nr_pivots + 1, failure);
                return OptimizationResult::Failed(failure);
            }
            nr_pivots += 1;
            self.log_dictionary(&dictionary);
        }
        debug!("Optimal after {} pivots", nr_pivots);

        if dictionary.is_feasible() {
            OptimizationResult::Optimal(dictionary)
        } else {
            OptimizationResult::Infeasible(dictionary)
        }
    }

    fn log_dictionary<F: Field>(&self, dictionary: &Dictionary<F>) {
        let level = if self.config.verbose { Level::Info } else { Level::Trace };
        log!(level, "\n{}", dictionary);
    }
}
