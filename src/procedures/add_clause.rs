//! Adding clauses to a context.
//!
//! Clauses are added on the root level only, and any assumptions asserted are reset before a clause is added.
//!
//! On addition, a clause is:
//! - Deduplicated, and ignored if a tautology.
//! - Stored, and passed to the checker (if present).
//! - Propagated, if unit, together with any consequences on the root level.

use crate::{
    context::{Context, ContextState, Unsatisfiable},
    db::{
        atom::{AtomValue, Reason},
        ClauseId,
    },
    misc::log::targets::{self},
    structures::{
        clause::{deduplicate, CClause, Clause},
        literal::Literal,
    },
    types::err::{AtomDBError, BCPError, ClauseDBError, ErrorKind},
};

impl Context {
    /// Adds `clause` to the context, returning the id of the clause if stored, and None if the clause is a tautology.
    ///
    /// ```rust
    /// # use otter_failing::context::Context;
    /// # use otter_failing::config::Config;
    /// # use otter_failing::reports::Report;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// assert!(the_context.add_clause(vec![1, -2]).is_ok());
    /// assert_eq!(the_context.add_clause(vec![1, -1]), Ok(None));
    /// assert!(the_context.add_clause(vec![-1]).is_ok());
    /// assert!(the_context.add_clause(vec![2]).is_ok());
    ///
    /// assert_eq!(the_context.report(), Report::Unsatisfiable);
    /// ```
    pub fn add_clause(&mut self, clause: CClause) -> Result<Option<ClauseId>, ErrorKind> {
        self.reset_for_input();

        if self.atom_db.level() > 0 {
            log::error!(target: targets::CLAUSE_DB, "Clause added after a decision");
            return Err(ClauseDBError::DecisionMade.into());
        }

        let mut clause = clause;
        for literal in &clause {
            if *literal == 0 {
                return Err(AtomDBError::ZeroAtom.into());
            }
            self.ensure_atom(literal.atom())?;
        }

        if deduplicate(&mut clause) {
            log::trace!(target: targets::CLAUSE_DB, "Ignored tautology {}", clause.as_dimacs(false));
            return Ok(None);
        }
        if clause.is_empty() {
            return Err(ClauseDBError::EmptyClause.into());
        }

        if let Some(checker) = &mut self.checker {
            checker.add_clause(&clause);
        }

        let unit = match clause.as_slice() {
            [literal] => Some(*literal),
            _ => None,
        };
        let id = self.clause_db.store_original(clause)?;

        if self.state == ContextState::Unsatisfiable(Unsatisfiable::Formula) {
            return Ok(Some(id));
        }

        if let Some(literal) = unit {
            match self.atom_db.assign(literal, 0, Reason::Clause(id)) {
                AtomValue::NotSet => self.atom_db.set_unit_id(literal, id),
                AtomValue::Same => {}
                AtomValue::Different => {
                    self.resolve_root_conflict(id)?;
                    return Ok(Some(id));
                }
            }
        }

        match self.bcp() {
            Ok(()) => {}
            Err(ErrorKind::BCP(BCPError::Conflict(conflict))) => {
                self.resolve_root_conflict(conflict)?
            }
            Err(e) => return Err(e),
        }

        Ok(Some(id))
    }
}
