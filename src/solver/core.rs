use log::{debug, info, warn};
use rayon::prelude::*;

use crate::expression::{Expression, Value};
use crate::iterator::{exprs, results};
use crate::lazy::LazySeq;
use crate::solver::constants::LARGE_INPUT_THRESHOLD;
use crate::solver::errors::SolverError;
use crate::utils::{is_sub_multiset, subbags};

/// How candidate expressions are produced and checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Build every tree, then evaluate it under the naive rules
    Naive,
    /// Build and evaluate together under the canonical rules
    #[default]
    Optimized,
}

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub strategy: Strategy,
}

/// Finds every expression over a set of numbers that reaches a target
pub struct CountdownSolver {
    config: SolverConfig,
}

impl CountdownSolver {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Every solution, ordered by subbag, then split point, then operator.
    ///
    /// Work happens only as the returned sequence is consumed, so taking a
    /// prefix is cheap compared to draining it.
    pub fn solve(&self, numbers: &[Value], target: Value) -> LazySeq<'static, Expression> {
        info!(
            "Searching for {} from {:?} ({:?} strategy)",
            target, numbers, self.config.strategy
        );
        if numbers.len() > LARGE_INPUT_THRESHOLD {
            warn!(
                "{} numbers given, the search space grows factorially beyond {}",
                numbers.len(),
                LARGE_INPUT_THRESHOLD
            );
        }

        let strategy = self.config.strategy;
        subbags(numbers).flat_map(move |bag| search_bag(&bag, target, strategy))
    }

    /// Same solutions in the same order as [`CountdownSolver::solve`], with
    /// subbags searched on the rayon thread pool.
    ///
    /// The whole result is collected before returning.
    pub fn solve_parallel(&self, numbers: &[Value], target: Value) -> Vec<Expression> {
        info!(
            "Searching for {} from {:?} in parallel ({:?} strategy)",
            target, numbers, self.config.strategy
        );

        let strategy = self.config.strategy;
        let bags: Vec<Vec<Value>> = subbags(numbers).collect();
        let solutions: Vec<Expression> = bags
            .into_par_iter()
            .flat_map_iter(|bag| search_bag(&bag, target, strategy))
            .collect();

        info!("Found {} solutions", solutions.len());
        solutions
    }

    /// Check that `expr` only uses available numbers and evaluates to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the leaves are not drawn from `numbers`, if the
    /// expression has no value, or if its value is not `target`.
    pub fn verify(
        &self,
        expr: &Expression,
        numbers: &[Value],
        target: Value,
    ) -> Result<(), SolverError> {
        let leaves = expr.leaves();
        if !is_sub_multiset(&leaves, numbers) {
            return Err(SolverError::NotASubBag { leaves });
        }

        let actual = expr.try_evaluate()?;
        if actual != target {
            return Err(SolverError::WrongValue {
                expected: target,
                actual,
            });
        }
        Ok(())
    }
}

impl Default for CountdownSolver {
    fn default() -> Self {
        Self::new()
    }
}

fn search_bag(bag: &[Value], target: Value, strategy: Strategy) -> LazySeq<'static, Expression> {
    debug!("Searching subbag {:?}", bag);

    match strategy {
        Strategy::Optimized => results(bag)
            .filter(move |item| item.value == target)
            .map(|item| item.expression),
        Strategy::Naive => exprs(bag).filter(move |expr| expr.evaluate() == Some(target)),
    }
}
