//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical implementation of the literal trait is an integer, with sign indicating polarity, as is common in other solvers and in the DIMACS format.
//!
//! ```rust
//! # use otter_failing::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate(), -79);
//! ```
//!
//! Each literal also has an [index](Literal::index), so structures which store something for each polarity of an atom may be flat vectors.

mod int_literal;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;

    /// A dense index of the literal, unique to the atom and polarity.
    ///
    /// Negative literals have even indicies and positive literals odd indicies, so the index of any literal on atom *a* is less than `2 * (a + 1)`.
    fn index(&self) -> usize;
}

/// The canonical implementation of a literal.
pub type CLiteral = int_literal::IntLiteral;

pub use int_literal::IntLiteral;
