//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use otter_failing::structures::clause::Clause;
//! let clause: Vec<i32> = vec![23, -41, -3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//!
//! let mut valuation = vec![Some(true); 42];
//! assert!(!clause.unsatisfiable_on(&valuation));
//!
//! valuation[23] = Some(false);
//! assert!(clause.unsatisfiable_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

mod source;
pub use source::ClauseSource;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Returns whether the clause is unsatisfiable on the given valuation.
    ///
    /// Atoms not present in the valuation are treated as having no value.
    fn unsatisfiable_on(&self, valuation: &[Option<bool>]) -> bool;
}

/// The implementation of a clause as a vector of literals.
pub type CClause = Vec<CLiteral>;

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn unsatisfiable_on(&self, valuation: &[Option<bool>]) -> bool {
        self.iter().all(|literal| {
            matches!(valuation.get(literal.atom() as usize), Some(Some(value)) if *value != literal.polarity())
        })
    }
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn unsatisfiable_on(&self, valuation: &[Option<bool>]) -> bool {
        self.as_slice().unsatisfiable_on(valuation)
    }
}

/// Removes duplicate literals from a clause, preserving the order of first occurrence.
///
/// Returns true if the clause contains some literal and its negation.
pub fn deduplicate(clause: &mut CClause) -> bool {
    let mut tautology = false;
    let mut index = 0;
    while index < clause.len() {
        let literal = clause[index];
        if clause[..index].contains(&literal) {
            clause.remove(index);
            continue;
        }
        if clause[..index].contains(&literal.negate()) {
            tautology = true;
        }
        index += 1;
    }
    tautology
}
