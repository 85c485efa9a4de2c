use crate::{
    db::{atom::Reason, ClauseId},
    structures::literal::{CLiteral, Literal},
    types::err::{AtomDBError, ErrorKind},
};

use super::FailingScope;

impl FailingScope<'_> {
    /// Walks the implication graph depth first from `literal`, which must be false, building a chain in post-order.
    ///
    /// If the atom of `literal` has been seen, nothing happens.
    /// Otherwise, the atom is marked as seen, and:
    /// - If `literal` is false on the root level, the id of the unit clause on the negation of `literal` is added to the chain.
    /// - If `literal` is false due to some clause, each literal in the clause is analyzed, and then the id of the clause is added to the chain.
    /// - If `literal` is false due to a decision, `literal` is added to the clause under construction.
    ///
    /// So, each id in the chain follows the ids of every clause used to falsify the literals of the clause.
    pub fn analyze_literal(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        if !self.mark_analyzed(literal) {
            return Ok(());
        }

        assert_eq!(
            self.atom_db.value(literal),
            Some(false),
            "! Depth first walk from {literal}, which is not false"
        );

        let atom = literal.atom();
        if self.atom_db.level_of(atom) == 0 {
            let unit = literal.negate();
            let id = self
                .atom_db
                .unit_id(unit)
                .ok_or(AtomDBError::MissingUnit(unit))?;
            self.buffer.chain.push(id);
            return Ok(());
        }

        match self.atom_db.reason_of(atom) {
            Reason::Clause(id) => {
                let size = self.clause_db.get(id)?.clause().len();
                for index in 0..size {
                    let other = self.clause_db.get(id)?.clause()[index];
                    self.analyze_literal(other)?;
                }
                self.buffer.chain.push(id);
            }

            Reason::Decision => self.note_decision(literal),

            Reason::External => panic!("! Depth first walk reached {literal}, without a clause as a reason"),
        }

        Ok(())
    }

    /// Analyzes each literal of the clause `reason` other than `literal`, and then adds `reason` to the chain.
    ///
    /// `literal` is expected to be true, with `reason` as the reason.
    pub fn analyze_reason(&mut self, literal: CLiteral, reason: ClauseId) -> Result<(), ErrorKind> {
        let size = self.clause_db.get(reason)?.clause().len();
        for index in 0..size {
            let other = self.clause_db.get(reason)?.clause()[index];
            if other != literal {
                self.analyze_literal(other)?;
            }
        }
        self.buffer.chain.push(reason);
        Ok(())
    }

    /// Analyzes each literal of the falsified clause `conflict`, and then adds `conflict` to the chain.
    pub fn analyze_conflict(&mut self, conflict: ClauseId) -> Result<(), ErrorKind> {
        let size = self.clause_db.get(conflict)?.clause().len();
        for index in 0..size {
            let literal = self.clause_db.get(conflict)?.clause()[index];
            self.analyze_literal(literal)?;
        }
        self.buffer.chain.push(conflict);
        Ok(())
    }

    /// Ensures there is a chain for each literal.
    pub(crate) fn ensure_constraint_chains(&mut self) {
        let required = 2 * (self.atom_db.max_atom() as usize + 1);
        if self.buffer.constraint_chains.len() < required {
            self.buffer.constraint_chains.resize_with(required, Vec::new);
        }
    }

    /// Builds a chain for each literal of `constraint`, each recorded against the literal.
    ///
    /// Each literal of the clause under construction is marked as seen before the walk from a constraint literal.
    /// So, the chain for a constraint literal derives the clause under construction extended with the negation of the literal.
    pub fn build_constraint_chains(&mut self, constraint: &[CLiteral]) -> Result<(), ErrorKind> {
        self.ensure_constraint_chains();

        for &literal in constraint {
            for index in 0..self.buffer.clause.len() {
                let ignored = self.buffer.clause[index];
                self.mark_analyzed(ignored);
            }

            self.analyze_literal(literal)?;
            self.clear_analyzed();

            let chain = &mut self.buffer.constraint_chains[literal.index()];
            assert!(chain.is_empty(), "! Constraint literal {literal} analyzed twice");
            std::mem::swap(chain, &mut self.buffer.chain);
        }

        Ok(())
    }

    /// The chain recorded for the constraint literal `literal`.
    pub fn constraint_chain(&self, literal: CLiteral) -> &[ClauseId] {
        match self.buffer.constraint_chains.get(literal.index()) {
            Some(chain) => chain,
            None => &[],
        }
    }
}
