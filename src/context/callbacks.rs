/*!
Types of callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.

For the methods to set callbacks see [ClauseDB](crate::db::clause::ClauseDB).
*/

use crate::{db::ClauseId, structures::literal::CLiteral};

/// A callback made with a clause and its id.
pub type CallbackOnClause = dyn FnMut(ClauseId, &[CLiteral]);

/// A callback made with a derived clause, its id, and the chain of ids justifying the derivation, if given.
pub type CallbackOnDerivation = dyn FnMut(ClauseId, &[CLiteral], Option<&[ClauseId]>);
