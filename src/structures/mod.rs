//! Abstract elements of a failure analysis and their representation.
//!
//! - [Atoms](atom), aka. variables.
//! - [Literals](literal), an atom paired with a polarity.
//! - [Clauses](clause), a disjunction of literals.

pub mod atom;
pub mod clause;
pub mod literal;
