use crate::{
    db::atom::Reason,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

use super::FailingScope;

impl FailingScope<'_> {
    /// Walks the implication graph breadth first from each analyzed literal, without building a chain.
    ///
    /// Each analyzed literal must be true, and literals reached are analyzed in turn:
    /// - A root-level literal is skipped.
    /// - A literal with a clause as its reason analyzes the negation of each other literal in the clause.
    /// - A decision adds its negation to the clause under construction.
    ///
    /// On completion every analyzed literal remains marked as seen, so a later walk does not revisit them until [clear_analyzed](FailingScope::clear_analyzed).
    pub fn walk_breadth_first(&mut self) -> Result<(), ErrorKind> {
        let mut next = 0;

        while next < self.buffer.analyzed.len() {
            let literal = self.buffer.analyzed[next];
            next += 1;

            assert_eq!(
                self.atom_db.value(literal),
                Some(true),
                "! Breadth first walk from {literal}, which is not true"
            );

            let atom = literal.atom();
            if self.atom_db.level_of(atom) == 0 {
                continue;
            }

            match self.atom_db.reason_of(atom) {
                Reason::Clause(id) => {
                    let size = self.clause_db.get(id)?.clause().len();
                    for index in 0..size {
                        let other: CLiteral = self.clause_db.get(id)?.clause()[index];
                        if other.atom() != atom {
                            self.mark_analyzed(other.negate());
                        }
                    }
                }

                Reason::Decision => {
                    log::trace!(target: targets::FAILING, "Reached decision {literal}");
                    self.note_decision(literal.negate());
                }

                Reason::External => panic!("! Breadth first walk reached {literal}, without a clause as a reason"),
            }
        }

        Ok(())
    }
}
