use crate::{
    checker::Checker,
    db::{atom::AtomDB, clause::ClauseDB, flags::FlagDB},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

use super::FailingBuffer;

/// What a walk through the implication graph is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Purpose {
    /// Finding failed assumptions.
    ///
    /// Every decision reached is an assumption, and is marked as failed.
    Failing,

    /// Learning a clause of negated decisions from a conflict.
    Learning,
}

/// Everything read or written during an analysis, with the guarantee that scratch space is clear once the scope is dropped.
pub struct FailingScope<'ctx> {
    pub(super) atom_db: &'ctx AtomDB,
    pub(crate) clause_db: &'ctx mut ClauseDB,
    pub(crate) flag_db: &'ctx mut FlagDB,
    pub(crate) buffer: &'ctx mut FailingBuffer,
    pub(crate) checker: Option<&'ctx mut Checker>,
    pub(super) purpose: Purpose,
}

impl<'ctx> FailingScope<'ctx> {
    /// A fresh scope.
    ///
    /// # Panics
    /// If the buffer is not clear.
    pub fn new(
        atom_db: &'ctx AtomDB,
        clause_db: &'ctx mut ClauseDB,
        flag_db: &'ctx mut FlagDB,
        buffer: &'ctx mut FailingBuffer,
        checker: Option<&'ctx mut Checker>,
        purpose: Purpose,
    ) -> Self {
        assert!(buffer.is_clear(), "! Failing buffer in use");

        FailingScope {
            atom_db,
            clause_db,
            flag_db,
            buffer,
            checker,
            purpose,
        }
    }

    /// The atom database.
    pub fn atom_db(&self) -> &AtomDB {
        self.atom_db
    }

    /// Marks the atom of `literal` as seen and notes `literal` as analyzed, if the atom was not already seen.
    ///
    /// Returns true if the atom was not already seen.
    pub fn mark_analyzed(&mut self, literal: CLiteral) -> bool {
        match self.flag_db.mark_seen(literal.atom()) {
            true => {
                self.buffer.analyzed.push(literal);
                true
            }
            false => false,
        }
    }

    /// Clears the seen flag of each analyzed literal, and the record of analyzed literals.
    pub fn clear_analyzed(&mut self) {
        for literal in self.buffer.analyzed.drain(..) {
            self.flag_db.unmark_seen(literal.atom());
        }
    }

    /// Notes `literal`, false due to a decision, is part of the clause under construction.
    ///
    /// When finding failed assumptions the negation of `literal` must be assumed, and is marked as failed.
    pub(super) fn note_decision(&mut self, literal: CLiteral) {
        self.buffer.clause.push(literal);

        if self.purpose == Purpose::Failing {
            let assumption = literal.negate();
            assert!(
                self.flag_db.is_assumed(assumption),
                "! The decision {assumption} is not an assumption"
            );
            log::trace!(target: targets::FAILING, "Failed assumption {assumption}");
            self.flag_db.mark_failed(assumption);
        }
    }
}

impl Drop for FailingScope<'_> {
    fn drop(&mut self) {
        self.clear_analyzed();
        self.buffer.clause.clear();
        self.buffer.chain.clear();
        for chain in &mut self.buffer.constraint_chains {
            chain.clear();
        }

        debug_assert!(self.flag_db.seen_atoms().next().is_none());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_clears_scratch() {
        let mut atom_db = AtomDB::default();
        for _ in 0..3 {
            let _ = atom_db.fresh_atom();
        }
        let mut clause_db = ClauseDB::default();
        let mut flag_db = FlagDB::default();
        let mut buffer = FailingBuffer::default();

        {
            let mut scope = FailingScope::new(
                &atom_db,
                &mut clause_db,
                &mut flag_db,
                &mut buffer,
                None,
                Purpose::Learning,
            );

            assert!(scope.mark_analyzed(1));
            assert!(scope.mark_analyzed(-2));
            assert!(!scope.mark_analyzed(-1));
            scope.note_decision(-3);
            scope.buffer.chain.push(4);
            scope.buffer.constraint_chains.push(vec![5]);
        }

        assert!(buffer.is_clear());
        assert!(flag_db.seen_atoms().next().is_none());
    }

    #[test]
    #[should_panic]
    fn buffer_must_be_clear() {
        let atom_db = AtomDB::default();
        let mut clause_db = ClauseDB::default();
        let mut flag_db = FlagDB::default();
        let mut buffer = FailingBuffer::default();
        buffer.chain.push(1);

        let _scope = FailingScope::new(
            &atom_db,
            &mut clause_db,
            &mut flag_db,
            &mut buffer,
            None,
            Purpose::Failing,
        );
    }
}
