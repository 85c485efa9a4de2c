use crate::{
    db::atom::Reason,
    failing_buffer::FailingScope,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{ErrorKind, FailingError},
};

use super::{classify, FailedCase};

impl FailingScope<'_> {
    /// Marks the failed assumptions given the falsified `assumptions`, certifying the failing clause.
    ///
    /// Returns a count of the failed assumptions.
    pub fn analyze_assumptions(
        &mut self,
        assumptions: &[CLiteral],
        structured: bool,
    ) -> Result<usize, ErrorKind> {
        let Some(case) = classify(self.atom_db(), assumptions) else {
            log::error!(target: targets::FAILING, "No assumption is falsified");
            return Err(FailingError::NoFailedAssumption.into());
        };

        match case {
            FailedCase::RootFalsified(assumption) => {
                log::debug!(target: targets::FAILING, "Assumption {assumption} falsified on the root level");
                self.flag_db.mark_failed(assumption);
                Ok(1)
            }

            FailedCase::Clashing(assumption) => {
                log::debug!(target: targets::FAILING, "Assumption {assumption} clashes with its negation");
                self.flag_db.mark_failed(assumption);
                self.flag_db.mark_failed(assumption.negate());
                Ok(2)
            }

            FailedCase::MinimumLevel(assumption, level) => {
                log::debug!(target: targets::FAILING, "Analyzing assumption {assumption} falsified on level {level}");
                self.flag_db.mark_failed(assumption);

                let implied = assumption.negate();
                self.mark_analyzed(implied);
                self.buffer.clause.push(implied);

                match structured {
                    true => {
                        let Reason::Clause(reason) = self.atom_db().reason_of(implied.atom()) else {
                            panic!("! Assumption {assumption} falsified on level {level} without a clause");
                        };
                        self.analyze_reason(implied, reason)?;
                    }
                    false => self.walk_breadth_first()?,
                }
                self.clear_analyzed();

                let count = self.buffer.clause.len();
                self.certify_failing_clause(structured)?;
                Ok(count)
            }
        }
    }

    /// Marks the failed assumptions given the falsified `constraint`, certifying a failing clause for each literal of the constraint.
    ///
    /// Returns a count of the failed assumptions.
    pub fn analyze_constraint(
        &mut self,
        constraint: &[CLiteral],
        structured: bool,
    ) -> Result<usize, ErrorKind> {
        log::debug!(target: targets::FAILING, "Analyzing the constraint {constraint:?}");

        match structured {
            true => self.build_constraint_chains(constraint)?,

            false => {
                for &literal in constraint {
                    self.mark_analyzed(literal.negate());
                }
                self.walk_breadth_first()?;
                self.clear_analyzed();
            }
        }

        let count = self.buffer.clause.len();
        self.certify_constraint_clauses(constraint, structured)?;
        Ok(count)
    }
}
