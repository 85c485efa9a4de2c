//! The constraint, a clause which must hold for a single assertion.
//!
//! The constraint is built one literal at a time through [constrain](Context::constrain), and closed by the `0` literal.
//! Adding a literal to a closed constraint begins a fresh constraint.
//!
//! If every literal of a (closed) constraint is false once the assumptions are asserted, the constraint has failed, and failure analysis explains the failure of the constraint rather than the assumptions.

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        atom::ATOM_MAX,
        literal::{CLiteral, Literal},
    },
    types::err::{AtomDBError, ErrorKind},
};

impl Context {
    /// Adds `literal` to the constraint, or closes the constraint if `literal` is `0`.
    pub fn constrain(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        if literal.atom() > ATOM_MAX {
            return Err(AtomDBError::AtomsExhausted.into());
        }
        self.reset_for_input();

        if literal == 0 {
            log::trace!(target: targets::ASSUMPTIONS, "Closed constraint {:?}", self.literal_db.constraint_literals());
            self.literal_db.extend_constraint(0);
            self.marked_failed = false;
            return Ok(());
        }

        self.ensure_atom(literal.atom())?;
        if self.literal_db.constraint_is_closed() {
            self.reset_constraint();
        }

        if self.literal_db.extend_constraint(literal) {
            self.atom_db.freeze(literal);
        }
        self.marked_failed = false;

        Ok(())
    }

    /// True if the constraint failed on the most recent assertion.
    pub fn constraint_failed(&self) -> bool {
        self.literal_db.constraint_failed()
    }

    /// Removes the constraint, melting each literal of the constraint.
    pub fn reset_constraint(&mut self) {
        for &literal in self.literal_db.constraint_literals() {
            self.atom_db.melt(literal);
        }
        self.literal_db.clear_constraint();
        self.marked_failed = true;
    }
}
