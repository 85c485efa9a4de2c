use crate::{
    context::callbacks::{CallbackOnClause, CallbackOnDerivation},
    db::ClauseId,
    structures::literal::CLiteral,
};

use super::ClauseDB;

impl ClauseDB {
    /// Set a callback to be made when an original clause is added to the context.
    pub fn set_callback_original(&mut self, callback: Box<CallbackOnClause>) {
        self.callback_original = Some(callback);
    }

    /// Set a callback to be made when a clause is derived.
    pub fn set_callback_addition(&mut self, callback: Box<CallbackOnDerivation>) {
        self.callback_addition = Some(callback);
    }

    /// Set a callback to be made when a clause is deleted.
    pub fn set_callback_delete(&mut self, callback: Box<CallbackOnClause>) {
        self.callback_delete = Some(callback);
    }

    /// True if derivations or deletions are passed to some callback.
    pub fn proof_active(&self) -> bool {
        self.callback_addition.is_some() || self.callback_delete.is_some()
    }
}

impl ClauseDB {
    /// Make the callback to be made when an original clause is added to the context.
    pub fn make_callback_original(&mut self, id: ClauseId, clause: &[CLiteral]) {
        if let Some(callback) = &mut self.callback_original {
            callback(id, clause);
        }
    }

    /// Make the callback to be made when a clause is derived.
    pub fn make_callback_addition(
        &mut self,
        id: ClauseId,
        clause: &[CLiteral],
        chain: Option<&[ClauseId]>,
    ) {
        if let Some(callback) = &mut self.callback_addition {
            callback(id, clause, chain);
        }
    }

    /// Make the callback to be made when a clause is deleted.
    pub fn make_callback_delete(&mut self, id: ClauseId, clause: &[CLiteral]) {
        if let Some(callback) = &mut self.callback_delete {
            callback(id, clause);
        }
    }
}
