use crate::{
    failing_buffer::FailingScope,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{ErrorKind, FailingError},
};

impl FailingScope<'_> {
    /// Checks the clause under construction, if a checker is present.
    fn check_failing_clause(&mut self) -> Result<(), ErrorKind> {
        if let Some(checker) = &mut self.checker {
            if let Err(e) = checker.check_learned_clause(&self.buffer.clause) {
                log::error!(target: targets::FAILING, "Failing clause check failed: {e:?}");
                return Err(FailingError::CheckFailed.into());
            }
        }
        Ok(())
    }

    /// Adds the clause under construction to the proof, with the chain under construction if `structured`, and immediately deletes the clause.
    fn emit_failing_clause(&mut self, structured: bool) -> Result<(), ErrorKind> {
        let id = self.clause_db.fresh_id()?;
        let chain = match structured {
            true => Some(self.buffer.chain.as_slice()),
            false => None,
        };

        log::trace!(target: targets::FAILING, "Failing clause {id}: {:?}", self.buffer.clause);
        self.clause_db
            .add_derived_clause(id, &self.buffer.clause, chain);
        self.clause_db.delete_clause(id, &self.buffer.clause);
        Ok(())
    }

    /// Certifies the failing clause of an analysis of assumptions.
    pub(super) fn certify_failing_clause(&mut self, structured: bool) -> Result<(), ErrorKind> {
        self.check_failing_clause()?;
        if self.clause_db.proof_active() {
            self.emit_failing_clause(structured)?;
        }
        Ok(())
    }

    /// Certifies the failing clause of an analysis of a constraint extended with the negation of each literal of the constraint.
    ///
    /// With chains, an extension whose chain is empty is a tautology, and is skipped.
    pub(super) fn certify_constraint_clauses(
        &mut self,
        constraint: &[CLiteral],
        structured: bool,
    ) -> Result<(), ErrorKind> {
        for &literal in constraint {
            self.buffer.clause.push(literal.negate());
            self.check_failing_clause()?;

            if self.clause_db.proof_active() {
                match structured {
                    true => {
                        if !self.constraint_chain(literal).is_empty() {
                            std::mem::swap(
                                &mut self.buffer.chain,
                                &mut self.buffer.constraint_chains[literal.index()],
                            );
                            let emitted = self.emit_failing_clause(true);
                            std::mem::swap(
                                &mut self.buffer.chain,
                                &mut self.buffer.constraint_chains[literal.index()],
                            );
                            emitted?;
                        } else {
                            log::trace!(target: targets::FAILING, "Skipping tautological clause for {literal}");
                        }
                    }

                    false => self.emit_failing_clause(false)?,
                }
            }

            self.buffer.clause.pop();
        }
        Ok(())
    }
}
