/*!
Failed assumptions, the explanation of why a formula is unsatisfiable given some assumptions.

# Overview

When a context is found to be unsatisfiable given the assumptions (or the constraint), the *failed* assumptions are some subset of the assumptions which is, together with the formula, itself unsatisfiable.

Failed assumptions are found on request, by a call to [failed](Context::failed) or [failed_assumptions](Context::failed_assumptions), and are not found again until the assumptions (or constraint) change.

# Analysis

The falsified assumptions are first [classified](classify).
- If some assumption is false on the root level, that assumption fails alone.
- If some assumption clashes with an earlier assumption of its negation, the two assumptions fail.
- Otherwise, the implication graph is walked from the falsified assumption on the lowest level, and each assumption reached fails.

If the constraint failed, the implication graph is instead walked from the negation of each literal in the constraint, and no classification is made.

The walk is breadth first when chains are not required, and depth first otherwise (see [Config](crate::config::Config)).

# Derived clauses

Each analysis derives a clause from the negation of every failed assumption, which is [checked](crate::checker) if checking is configured.
If a proof is being recorded, the clause is added and immediately deleted, as the clause has no use beyond the proof.

For a failed constraint, a clause is derived for each literal of the constraint, extending the clause made from the failed assumptions.
When chains are built a clause whose chain is empty is a tautology, and is skipped.

# Example

```rust
# use otter_failing::context::Context;
# use otter_failing::config::Config;
let mut the_context = Context::from_config(Config::default());
let [p, q, r] = the_context.fresh_literals(3).unwrap()[..] else { panic!() };

assert!(the_context.add_clause(vec![-p, -q]).is_ok());

assert!(the_context.assume(p).is_ok());
assert!(the_context.assume(r).is_ok());
assert!(the_context.assume(q).is_ok());
assert!(the_context.assert_assumptions().is_ok());

assert_eq!(the_context.failed(p), Ok(true));
assert_eq!(the_context.failed(q), Ok(true));
assert_eq!(the_context.failed(r), Ok(false));
```
*/

mod analysis;
mod classify;
mod emit;
pub use classify::{classify, FailedCase};

use std::time::Instant;

use crate::{
    context::{Context, ContextState, Unsatisfiable},
    failing_buffer::{FailingScope, Purpose},
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{ErrorKind, FailingError},
};

impl Context {
    /// Whether `literal` is a failed assumption.
    ///
    /// The failed assumptions are found on the first call after the assumptions (or constraint) change, and read back on any further call.
    /// Requires the context to be unsatisfiable, if the failed assumptions are not already known.
    ///
    /// ```rust
    /// # use otter_failing::context::Context;
    /// # use otter_failing::config::Config;
    /// # use otter_failing::types::err::{ErrorKind, FailingError};
    /// let mut the_context = Context::from_config(Config::default());
    /// let p = the_context.fresh_atom().unwrap() as i32;
    ///
    /// assert!(the_context.assume(p).is_ok());
    /// assert_eq!(the_context.failed(p), Err(ErrorKind::Failing(FailingError::NotUnsatisfiable)));
    /// ```
    pub fn failed(&mut self, literal: CLiteral) -> Result<bool, ErrorKind> {
        if !self.marked_failed {
            self.failing()?;
            self.marked_failed = true;
        }
        Ok(self.flag_db.is_failed(literal))
    }

    /// The failed assumptions, in the order the assumptions were made.
    pub fn failed_assumptions(&mut self) -> Result<Vec<CLiteral>, ErrorKind> {
        if !self.marked_failed {
            self.failing()?;
            self.marked_failed = true;
        }

        Ok(self
            .literal_db
            .assumptions()
            .iter()
            .filter(|assumption| self.flag_db.is_failed(**assumption))
            .copied()
            .collect())
    }

    /// Finds and marks the failed assumptions of an unsatisfiable context.
    ///
    /// Prefer [failed](Context::failed), which calls this method only when required.
    ///
    /// # Panics
    /// If some invariant of the trail is broken, e.g. a decision reached during the analysis is not an assumption.
    pub fn failing(&mut self) -> Result<(), ErrorKind> {
        let ContextState::Unsatisfiable(unsatisfiable) = self.state else {
            log::error!(target: targets::FAILING, "Failing assumptions requested in state {}", self.state);
            return Err(FailingError::NotUnsatisfiable.into());
        };

        log::debug!(target: targets::FAILING, "Analyzing failing assumptions");
        self.counters.failing_analyses += 1;
        let start = Instant::now();

        let structured = self.config.structured_proofs();
        let result = {
            let mut scope = FailingScope::new(
                &self.atom_db,
                &mut self.clause_db,
                &mut self.flag_db,
                &mut self.failing_buffer,
                self.checker.as_mut(),
                Purpose::Failing,
            );

            match unsatisfiable {
                Unsatisfiable::Formula => {
                    log::debug!(target: targets::FAILING, "Formula unsatisfiable, so no assumption fails");
                    Ok(0)
                }

                Unsatisfiable::Assumptions => {
                    scope.analyze_assumptions(self.literal_db.assumptions(), structured)
                }

                Unsatisfiable::Constraint => {
                    scope.analyze_constraint(self.literal_db.constraint(), structured)
                }
            }
        };

        self.counters.analysis_time += start.elapsed();
        let failed_count = result?;
        self.counters.failed_assumptions = failed_count;

        let assumption_count = self.literal_db.assumptions().len();
        let percent = match assumption_count {
            0 => 0.0,
            count => 100.0 * failed_count as f64 / count as f64,
        };
        log::info!(target: targets::FAILING, "Found {failed_count} failed assumptions {percent:.0}%");

        Ok(())
    }
}
