//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod add_clause;
pub mod assumptions;
pub mod bcp;
pub mod conflict;
pub mod constraint;
pub mod failing;
