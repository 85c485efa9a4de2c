/*!
Conflicts found while asserting assumptions, and on the root level.

# Conflicts above the root level

A conflict found after asserting some assumption is resolved by learning a clause made from the negation of each decision which led to the conflict.
The decisions are found by a depth first walk from each literal of the conflict, which also builds a chain for the learnt clause.

As every decision is an assumption, the learnt clause is the negation of some subset of the assumptions, and:
- The assertion backjumps to the second highest level of any literal in the clause.
- The literal of the clause on the highest level is then asserted, with the clause as its reason.

Assertion then continues from the first assumption.
In turn, any later falsification of an assumption by the learnt clause is explained by the (stored) learnt clause, and failure analysis walks through the learnt clause as any other.

# Conflicts on the root level

A conflict on the root level is resolved by deriving the empty clause, with a chain of the unit clauses which falsify each literal of the conflict, followed by the conflict.
The formula is then unsatisfiable, regardless of the assumptions.
*/

use crate::{
    context::{Context, ContextState, Unsatisfiable},
    db::{atom::Reason, ClauseId, LevelIndex},
    failing_buffer::{FailingScope, Purpose},
    misc::log::targets::{self},
    structures::{clause::ClauseSource, literal::Literal},
    types::err::{ErrorKind, FailingError},
};

impl Context {
    /// Resolves a conflict on the clause `conflict`, found after asserting some assumption.
    pub fn resolve_assumption_conflict(&mut self, conflict: ClauseId) -> Result<(), ErrorKind> {
        self.counters.assumption_conflicts += 1;

        if self.atom_db.level() == 0 {
            let chain = self.root_chain(conflict, None)?;
            return self.derive_empty_clause(chain);
        }

        let (learnt, chain) = {
            let mut scope = FailingScope::new(
                &self.atom_db,
                &mut self.clause_db,
                &mut self.flag_db,
                &mut self.failing_buffer,
                None,
                Purpose::Learning,
            );
            scope.analyze_conflict(conflict)?;
            (scope.buffer.clause.clone(), scope.buffer.chain.clone())
        };

        if learnt.is_empty() {
            return self.derive_empty_clause(chain);
        }

        if let Some(checker) = &mut self.checker {
            if let Err(e) = checker.check_learned_clause(&learnt) {
                log::error!(target: targets::PROPAGATION, "Learnt clause check failed: {e:?}");
                return Err(FailingError::CheckFailed.into());
            }
            checker.add_clause(&learnt);
        }

        let mut asserting = learnt[0];
        let mut asserting_level = self.atom_db.level_of(asserting.atom());
        let mut backjump_level: LevelIndex = 0;
        for &literal in &learnt[1..] {
            let level = self.atom_db.level_of(literal.atom());
            if level > asserting_level {
                backjump_level = asserting_level;
                asserting = literal;
                asserting_level = level;
            } else if level > backjump_level {
                backjump_level = level;
            }
        }

        let chain = match self.config.structured_proofs() {
            true => Some(chain.as_slice()),
            false => None,
        };
        let id = self
            .clause_db
            .store_derived(learnt, ClauseSource::Decisions, chain)?;

        log::debug!(target: targets::PROPAGATION, "Learnt {id}, asserting {asserting} on level {backjump_level}");

        self.atom_db.backjump(backjump_level);
        self.atom_db
            .assign(asserting, backjump_level, Reason::Clause(id));
        if backjump_level == 0 {
            self.atom_db.set_unit_id(asserting, id);
        }

        Ok(())
    }

    /// Resolves a conflict on the clause `conflict`, found on the root level.
    pub fn resolve_root_conflict(&mut self, conflict: ClauseId) -> Result<(), ErrorKind> {
        let chain = self.root_chain(conflict, None)?;
        self.derive_empty_clause(chain)
    }

    /// Derives the empty clause, and notes the formula is unsatisfiable.
    fn derive_empty_clause(&mut self, chain: Vec<ClauseId>) -> Result<(), ErrorKind> {
        if let Some(checker) = &mut self.checker {
            if let Err(e) = checker.check_learned_clause(&[]) {
                log::error!(target: targets::PROPAGATION, "Empty clause check failed: {e:?}");
                return Err(FailingError::CheckFailed.into());
            }
        }

        let chain = match self.config.structured_proofs() {
            true => Some(chain.as_slice()),
            false => None,
        };
        let id = self.clause_db.fresh_id()?;
        self.clause_db.add_derived_clause(id, &[], chain);

        log::info!(target: targets::PROPAGATION, "Formula unsatisfiable, with the empty clause derived as {id}");
        self.state = ContextState::Unsatisfiable(Unsatisfiable::Formula);
        Ok(())
    }
}
