/*!
A database of clause related things.

Each clause is identified by a [ClauseId], issued in sequence.
Ids are never reused, including the ids of clauses which are derived only to certify some claim and never stored.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.

# Proofs

The clause database is the point at which steps of a proof are made.
Callbacks may be set for the addition of an original clause, the addition of a derived clause (with an optional chain of clause ids justifying the derivation), and the deletion of a clause.
Proof logging is said to be active if a callback is set for the addition of derived clauses or the deletion of clauses.
*/

mod callbacks;
mod db_clause;
pub use db_clause::DBClause;

use std::collections::HashMap;

use crate::{
    db::ClauseId,
    context::callbacks::{CallbackOnClause, CallbackOnDerivation},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause, ClauseSource},
        literal::CLiteral,
    },
    types::err::ClauseDBError,
};

/// A database of clause related things.
#[derive(Default)]
pub struct ClauseDB {
    /// The most recently issued id.
    last_id: ClauseId,

    /// Stored clauses, by id.
    clauses: HashMap<ClauseId, DBClause>,

    /// Ids of stored clauses, in order of storage.
    stored: Vec<ClauseId>,

    /// Original clauses are passed in.
    callback_original: Option<Box<CallbackOnClause>>,

    /// Derived clauses are passed in, together with a chain, if one is given.
    callback_addition: Option<Box<CallbackOnDerivation>>,

    /// Deleted clauses are passed in.
    callback_delete: Option<Box<CallbackOnClause>>,
}

impl ClauseDB {
    /// A fresh id.
    pub fn fresh_id(&mut self) -> Result<ClauseId, ClauseDBError> {
        match self.last_id.checked_add(1) {
            Some(id) => {
                self.last_id = id;
                Ok(id)
            }
            None => Err(ClauseDBError::StorageExhausted),
        }
    }

    /// The most recently issued id.
    pub fn last_id(&self) -> ClauseId {
        self.last_id
    }

    /// A count of stored clauses.
    pub fn count(&self) -> usize {
        self.stored.len()
    }

    /// Stores an original clause, and returns the id of the clause.
    pub fn store_original(&mut self, clause: CClause) -> Result<ClauseId, ClauseDBError> {
        if clause.is_empty() {
            return Err(ClauseDBError::EmptyClause);
        }
        let id = self.fresh_id()?;
        self.make_callback_original(id, &clause);
        self.store(DBClause::new(id, clause, ClauseSource::Original));
        Ok(id)
    }

    /// Stores a derived clause, and returns the id of the clause.
    ///
    /// The derivation is passed to the addition callback, with the chain if one is given.
    pub fn store_derived(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        chain: Option<&[ClauseId]>,
    ) -> Result<ClauseId, ClauseDBError> {
        let id = self.fresh_id()?;
        self.add_derived_clause(id, &clause, chain);
        self.store(DBClause::new(id, clause, source));
        Ok(id)
    }

    /// Notes the derivation of `clause` with `id`, without storing the clause.
    pub fn add_derived_clause(&mut self, id: ClauseId, clause: &[CLiteral], chain: Option<&[ClauseId]>) {
        log::trace!(target: targets::CLAUSE_DB, "Derived {id}: {}", clause.as_dimacs(false));
        self.make_callback_addition(id, clause, chain);
    }

    /// Notes the deletion of `clause` with `id`, and removes the clause if stored.
    pub fn delete_clause(&mut self, id: ClauseId, clause: &[CLiteral]) {
        log::trace!(target: targets::CLAUSE_DB, "Deleted {id}: {}", clause.as_dimacs(false));
        if self.clauses.remove(&id).is_some() {
            self.stored.retain(|stored_id| *stored_id != id);
        }
        self.make_callback_delete(id, clause);
    }

    /// The clause stored with `id`.
    pub fn get(&self, id: ClauseId) -> Result<&DBClause, ClauseDBError> {
        self.clauses.get(&id).ok_or(ClauseDBError::Missing(id))
    }

    /// An iterator over all stored clauses, in order of storage.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> + '_ {
        self.stored.iter().filter_map(|id| self.clauses.get(id))
    }

    /// Ids of all stored clauses, in order of storage.
    pub fn stored_ids(&self) -> &[ClauseId] {
        &self.stored
    }

    fn store(&mut self, clause: DBClause) {
        let id = clause.id();
        self.clauses.insert(id, clause);
        self.stored.push(id);
    }
}
