//! Databases for holding information relevant to a failure analysis.
//!
//! - [The atom database](crate::db::atom)
//!   + The current valuation, together with the decision level and reason of each valued atom.
//!   + Frozen counts, and the ids of unit clauses which fixed an atom on the root level.
//! - [The flag database](crate::db::flags)
//!   + Whether a literal is assumed, whether it has failed, and whether an atom has been seen during an analysis.
//! - [The clause database](crate::db::clause)
//!   + Every clause, indexed by a [ClauseId].
//!     Original clauses are added to the context from some external source.
//!     Other clauses are derived, and each has a note of how.
//! - [The literal database](crate::db::literal)
//!   + The assumption stack and constraint.

pub mod atom;
pub mod clause;
pub mod flags;
pub mod literal;

/// The identifier of a clause.
///
/// Identifiers are issued in sequence from 1, are never reused, and so are suitable for use in LRAT and FRAT proofs.
pub type ClauseId = u64;

/// The index of a decision level.
///
/// Level 0 is the root level, at which atoms are valued without any decision.
pub type LevelIndex = u32;
