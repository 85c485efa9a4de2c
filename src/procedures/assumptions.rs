//! Assumptions
//!
//! # Overview
//!
//! Assumptions are *made* through the [assume](Context::assume) method, and *asserted* through the [assert_assumptions](Context::assert_assumptions) method.
//!
//! Each assumption is made at most once, though a literal and its negation may both be assumed.
//! The atom of each assumption is [frozen](crate::db::atom::AtomDB::freeze) until the assumptions are [reset](Context::reset_assumptions).
//!
//! # Assertion
//!
//! Assumptions are stacked, so a fresh level is made for each assumption, and propagation follows each assumption.
//! - An assumption which is already true is skipped.
//! - An assumption which is already false ends the assertion, and the context is unsatisfiable given the assumptions.
//! - A conflict is [resolved](Context::resolve_assumption_conflict) by learning a clause, after which assertion begins again.
//!
//! If every assumption is asserted, and a constraint is present, the constraint is then checked.
//!
//! # Resetting
//!
//! Making an assumption, adding to the constraint, or adding a clause after assumptions have been asserted first resets the assumptions (and the constraint).
//! So, the failed assumptions of one assertion are never mixed with those of another.

use crate::{
    context::{Context, ContextState, Unsatisfiable},
    db::atom::Reason,
    misc::log::targets::{self},
    structures::{
        atom::ATOM_MAX,
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{AssumptionError, AtomDBError, BCPError, ErrorKind},
};

impl Context {
    /// The assumptions, in the order made.
    pub fn assumptions(&self) -> &[CLiteral] {
        self.literal_db.assumptions()
    }

    /// Makes `assumption`.
    ///
    /// Assuming a literal already assumed has no effect.
    /// Otherwise, the assumption is pushed to the assumption stack, its atom is frozen, and any failed assumptions are to be found again.
    pub fn assume(&mut self, assumption: CLiteral) -> Result<(), ErrorKind> {
        if assumption == 0 {
            return Err(AssumptionError::ZeroLiteral.into());
        }
        if assumption.atom() > ATOM_MAX {
            return Err(AtomDBError::AtomsExhausted.into());
        }
        self.reset_for_input();
        self.ensure_atom(assumption.atom())?;

        if !self.flag_db.set_assumed(assumption) {
            log::trace!(target: targets::ASSUMPTIONS, "Ignored repeat assumption {assumption}");
            return Ok(());
        }

        log::trace!(target: targets::ASSUMPTIONS, "Assumed {assumption}");
        self.literal_db.push_assumption(assumption);
        self.atom_db.freeze(assumption);
        self.marked_failed = false;

        Ok(())
    }

    /// Removes every assumption, together with any note of which assumptions failed.
    ///
    /// Valuations made above the root level are cleared.
    pub fn reset_assumptions(&mut self) {
        let assumptions = self.literal_db.take_assumptions();
        for &assumption in &assumptions {
            self.flag_db.clear_assumption(assumption);
            self.atom_db.melt(assumption);
        }
        log::trace!(target: targets::ASSUMPTIONS, "Reset {} assumptions", assumptions.len());

        self.atom_db.backjump(0);
        self.marked_failed = true;

        match self.state {
            ContextState::Asserted
            | ContextState::Unsatisfiable(Unsatisfiable::Assumptions)
            | ContextState::Unsatisfiable(Unsatisfiable::Constraint) => {
                self.state = ContextState::Input
            }
            _ => {}
        }
    }

    /// Resets the assumptions and constraint, if assumptions have been asserted.
    pub(crate) fn reset_for_input(&mut self) {
        match self.state {
            ContextState::Asserted
            | ContextState::Unsatisfiable(Unsatisfiable::Assumptions)
            | ContextState::Unsatisfiable(Unsatisfiable::Constraint) => {
                self.reset_assumptions();
                self.reset_constraint();
            }
            _ => {}
        }
    }

    /// Asserts each assumption, in the order made.
    ///
    /// On completion, the context is either [Asserted](ContextState::Asserted) or [Unsatisfiable](ContextState::Unsatisfiable).
    pub fn assert_assumptions(&mut self) -> Result<(), ErrorKind> {
        if let ContextState::Unsatisfiable(_) = self.state {
            log::debug!(target: targets::ASSUMPTIONS, "Assertion skipped, as the context is unsatisfiable");
            return Ok(());
        }

        self.atom_db.backjump(0);

        let assumptions = self.literal_db.assumptions().to_vec();
        let mut index = 0;

        while index < assumptions.len() {
            let assumption = assumptions[index];

            match self.atom_db.value(assumption) {
                Some(true) => index += 1,

                Some(false) => {
                    log::debug!(target: targets::ASSUMPTIONS, "Assumption {assumption} is false");
                    self.state = ContextState::Unsatisfiable(Unsatisfiable::Assumptions);
                    return Ok(());
                }

                None => {
                    let level = self.atom_db.push_level();
                    log::trace!(target: targets::ASSUMPTIONS, "Asserting {assumption} on level {level}");
                    self.atom_db.assign(assumption, level, Reason::Decision);

                    loop {
                        match self.bcp() {
                            Ok(()) => break,

                            Err(ErrorKind::BCP(BCPError::Conflict(conflict))) => {
                                self.resolve_assumption_conflict(conflict)?;
                                if self.state == ContextState::Unsatisfiable(Unsatisfiable::Formula) {
                                    return Ok(());
                                }
                                index = 0;
                            }

                            Err(e) => return Err(e),
                        }
                    }
                }
            }
        }

        if self.literal_db.constraint_is_present()
            && self
                .literal_db
                .constraint()
                .unsatisfiable_on(self.atom_db.valuation())
        {
            log::debug!(target: targets::ASSUMPTIONS, "Constraint is false");
            self.literal_db.set_constraint_failed(true);
            self.state = ContextState::Unsatisfiable(Unsatisfiable::Constraint);
            return Ok(());
        }

        self.state = ContextState::Asserted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn repeat_assumption() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(-1).is_ok());

        assert_eq!(ctx.literal_db.assumptions(), &[1, -1]);
        assert!(ctx.atom_db.is_frozen(1));
    }

    #[test]
    fn zero_assumption() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.assume(0),
            Err(ErrorKind::Assumption(AssumptionError::ZeroLiteral))
        );
    }

    #[test]
    fn out_of_range_assumption() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.assume(i32::MIN),
            Err(ErrorKind::AtomDB(AtomDBError::AtomsExhausted))
        );
        assert!(ctx.literal_db.assumptions().is_empty());
        assert_eq!(ctx.atom_db.max_atom(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![-1, -2]).is_ok());
        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(2).is_ok());
        assert!(ctx.assert_assumptions().is_ok());
        assert_eq!(ctx.failed(1), Ok(true));

        ctx.reset_assumptions();

        assert!(ctx.literal_db.assumptions().is_empty());
        for literal in [1, -1, 2, -2] {
            assert!(!ctx.flag_db.is_assumed(literal));
            assert!(!ctx.flag_db.is_failed(literal));
        }
        assert!(!ctx.atom_db.is_frozen(1));
        assert!(!ctx.atom_db.is_frozen(2));
        assert_eq!(ctx.state, ContextState::Input);
    }

    #[test]
    fn satisfiable_assertion() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![-1, 2]).is_ok());
        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(2).is_ok());
        assert!(ctx.assert_assumptions().is_ok());

        assert_eq!(ctx.state, ContextState::Asserted);
        assert_eq!(ctx.atom_db.level(), 1);
    }
}
