//! A database of literal indexed things.
//!
//! For the moment, this amounts to the assumption stack and the constraint.
//!
//! # The assumption stack
//!
//! Assumptions are literals to be held true for a single solve, stored in the order they were made.
//! Each literal appears at most once on the stack, though a literal and its negation may both appear.
//! Order matters only when breaking ties between failed assumptions.
//!
//! # The constraint
//!
//! A single clause which must also hold for a solve.
//! The constraint is built one literal at a time, and closed by the `0` literal.
//! If the constraint is found to fail, failure analysis is made with respect to the constraint, rather than the assumptions.

use crate::structures::literal::CLiteral;

/// A struct abstracting over assumptions and the constraint.
#[derive(Default)]
pub struct LiteralDB {
    /// Assumptions, in the order made.
    assumptions: Vec<CLiteral>,

    /// Literals of the constraint.
    constraint: Vec<CLiteral>,

    /// Whether the constraint has been closed by a `0` literal.
    constraint_closed: bool,

    /// Whether the constraint was found to be unsatisfiable.
    unsat_constraint: bool,
}

impl LiteralDB {
    /// The assumptions, in the order made.
    pub fn assumptions(&self) -> &[CLiteral] {
        &self.assumptions
    }

    /// Pushes an assumption to the stack.
    ///
    /// No check is made on whether the assumption is already on the stack.
    pub fn push_assumption(&mut self, assumption: CLiteral) {
        self.assumptions.push(assumption);
    }

    /// Removes all assumptions, returning the assumptions, in the order made.
    pub fn take_assumptions(&mut self) -> Vec<CLiteral> {
        std::mem::take(&mut self.assumptions)
    }

    /// The literals of the constraint, if closed.
    pub fn constraint(&self) -> &[CLiteral] {
        match self.constraint_closed {
            true => &self.constraint,
            false => &[],
        }
    }

    /// Every literal added to the constraint, whether or not the constraint is closed.
    pub fn constraint_literals(&self) -> &[CLiteral] {
        &self.constraint
    }

    /// True if the constraint has been closed.
    pub fn constraint_is_closed(&self) -> bool {
        self.constraint_closed
    }

    /// True if a closed constraint is present.
    pub fn constraint_is_present(&self) -> bool {
        self.constraint_closed && !self.constraint.is_empty()
    }

    /// Adds `literal` to the constraint, or closes the constraint if `literal` is `0`.
    ///
    /// Adding a literal to a closed constraint begins a fresh constraint.
    /// Returns false if the literal was already part of the constraint, and true otherwise.
    pub fn extend_constraint(&mut self, literal: CLiteral) -> bool {
        if literal == 0 {
            self.constraint_closed = true;
            return true;
        }
        if self.constraint_closed {
            self.clear_constraint();
        }
        match self.constraint.contains(&literal) {
            true => false,
            false => {
                self.constraint.push(literal);
                true
            }
        }
    }

    /// Removes the constraint.
    pub fn clear_constraint(&mut self) {
        self.constraint.clear();
        self.constraint_closed = false;
        self.unsat_constraint = false;
    }

    /// True if the constraint was found to be unsatisfiable.
    pub fn constraint_failed(&self) -> bool {
        self.unsat_constraint
    }

    /// Notes whether the constraint was found to be unsatisfiable.
    pub fn set_constraint_failed(&mut self, failed: bool) {
        self.unsat_constraint = failed;
    }
}
