/*!
An independent checker of derived clauses.

The checker keeps its own copy of each clause it is given, and checks a clause is implied by those clauses through reverse unit propagation.
That is, the negation of each literal in the clause is assumed, and unit propagation over the known clauses must lead to a conflict.

The checker shares no structure with the [context](crate::context), and so a successful check does not rest on any valuation or reason recorded during a solve.

```rust
# use otter_failing::checker::Checker;
let mut checker = Checker::default();
checker.add_clause(&[-1, 2]);
checker.add_clause(&[-2, 3]);

assert!(checker.check_learned_clause(&[-1, 3]).is_ok());
assert!(checker.check_learned_clause(&[3]).is_err());
```

Propagation is naive, and each check is linear in the size of the known clauses for each propagated literal.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::CheckerError,
};

/// A reverse unit propagation checker.
#[derive(Default)]
pub struct Checker {
    /// Every clause known to the checker.
    clauses: Vec<CClause>,

    /// Scratch valuation, with no atom valued between checks.
    valuation: Vec<Option<bool>>,

    /// Atoms valued during the current check.
    valued: Vec<Atom>,

    /// A count of successful checks.
    checks: usize,
}

impl Checker {
    /// Ensures the checker can value each atom up to and including `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.valuation.len() < required {
            self.valuation.resize(required, None);
        }
    }

    /// Adds a clause to those known to the checker.
    pub fn add_clause(&mut self, clause: &[CLiteral]) {
        for atom in clause.atoms() {
            self.ensure_atom(atom);
        }
        self.clauses.push(clause.to_vec());
    }

    /// A count of clauses known to the checker.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of successful checks.
    pub fn checks(&self) -> usize {
        self.checks
    }

    /// Checks `clause` is implied by the known clauses, through reverse unit propagation.
    pub fn check_learned_clause(&mut self, clause: &[CLiteral]) -> Result<(), CheckerError> {
        for atom in clause.atoms() {
            self.ensure_atom(atom);
        }

        let implied = self.implied(clause);

        for atom in self.valued.drain(..) {
            self.valuation[atom as usize] = None;
        }

        match implied {
            true => {
                self.checks += 1;
                log::trace!(target: targets::CHECKER, "Checked: {}", clause.as_dimacs(false));
                Ok(())
            }
            false => {
                log::error!(target: targets::CHECKER, "Failed to check: {}", clause.as_dimacs(false));
                Err(CheckerError::NotImplied(clause.to_vec()))
            }
        }
    }

    fn value(&self, literal: CLiteral) -> Option<bool> {
        self.valuation[literal.atom() as usize].map(|value| value == literal.polarity())
    }

    fn assign(&mut self, literal: CLiteral) {
        self.valuation[literal.atom() as usize] = Some(literal.polarity());
        self.valued.push(literal.atom());
    }

    /// True if the negation of the clause leads to a conflict by unit propagation.
    fn implied(&mut self, clause: &[CLiteral]) -> bool {
        for literal in clause {
            match self.value(literal.negate()) {
                None => self.assign(literal.negate()),
                Some(true) => {}
                // The clause contains a literal and its negation.
                Some(false) => return true,
            }
        }

        loop {
            let mut propagated = false;

            for index in 0..self.clauses.len() {
                let mut satisfied = false;
                let mut unvalued = None;
                let mut unvalued_count = 0;

                for literal in &self.clauses[index] {
                    match self.value(*literal) {
                        Some(true) => {
                            satisfied = true;
                            break;
                        }
                        Some(false) => {}
                        None => {
                            unvalued_count += 1;
                            unvalued = Some(*literal);
                        }
                    }
                }

                if satisfied {
                    continue;
                }

                match (unvalued_count, unvalued) {
                    (0, _) => return true,
                    (1, Some(literal)) => {
                        self.assign(literal);
                        propagated = true;
                    }
                    _ => {}
                }
            }

            if !propagated {
                return false;
            }
        }
    }
}
