/*!
The context --- to which clauses and assumptions are added, and within which failure analysis takes place.

# Example
```rust
# use otter_failing::context::Context;
# use otter_failing::config::Config;
# use otter_failing::reports::Report;
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_atom().unwrap() as i32;
let q = the_context.fresh_atom().unwrap() as i32;

assert!(the_context.add_clause(vec![-p, q]).is_ok());
assert!(the_context.add_clause(vec![-q]).is_ok());

assert!(the_context.assume(p).is_ok());
assert!(the_context.assert_assumptions().is_ok());
assert_eq!(the_context.report(), Report::Unsatisfiable);

assert_eq!(the_context.failed(p), Ok(true));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use crate::{
    checker::Checker,
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, flags::FlagDB, literal::LiteralDB},
    failing_buffer::FailingBuffer,
    misc::log::targets::{self},
    reports::Report,
    structures::atom::{Atom, ATOM_MAX},
    types::err::{AtomDBError, ErrorKind},
};

/// Why a context is unsatisfiable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsatisfiable {
    /// The formula is unsatisfiable, regardless of any assumption or constraint.
    Formula,

    /// The formula is unsatisfiable given the assumptions.
    Assumptions,

    /// The formula is unsatisfiable given the constraint (and the assumptions).
    Constraint,
}

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// Assumptions have been asserted without conflict, though satisfiability is unknown.
    Asserted,

    /// The context is known to be unsatisfiable.
    Unsatisfiable(Unsatisfiable),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Asserted => write!(f, "Asserted"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The flag database.
    /// See [db::flags](crate::db::flags) for details.
    pub flag_db: FlagDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The literal database.
    /// See [db::literal](crate::db::literal) for details.
    pub literal_db: LiteralDB,

    /// Scratch space for failure analysis.
    pub failing_buffer: FailingBuffer,

    /// An independent checker of derived clauses, if checking is configured.
    pub checker: Option<Checker>,

    /// The status of the context.
    pub state: ContextState,

    /// Whether the failed flags are known to be up to date with the assumptions.
    pub(crate) marked_failed: bool,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        let checker = match config.check.value {
            true => Some(Checker::default()),
            false => None,
        };

        Context {
            atom_db: AtomDB::default(),
            flag_db: FlagDB::default(),
            clause_db: ClauseDB::default(),
            literal_db: LiteralDB::default(),
            failing_buffer: FailingBuffer::default(),
            checker,

            config,
            counters: Counters::default(),
            state: ContextState::Configuration,

            marked_failed: true,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// A fresh atom.
    pub fn fresh_atom(&mut self) -> Result<Atom, AtomDBError> {
        let atom = self.atom_db.fresh_atom()?;
        self.flag_db.ensure_atom(atom);
        if let Some(checker) = &mut self.checker {
            checker.ensure_atom(atom);
        }
        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }
        Ok(atom)
    }

    /// Ensures `atom` is part of the language of the context, adding fresh atoms as needed.
    ///
    /// An atom beyond [ATOM_MAX] is never part of the language, and no atom is added.
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        if atom == 0 {
            return Err(AtomDBError::ZeroAtom.into());
        }
        if atom > ATOM_MAX {
            log::error!(target: targets::VALUATION, "Atom {atom} exceeds the maximum atom");
            return Err(AtomDBError::AtomsExhausted.into());
        }
        while self.atom_db.max_atom() < atom {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// Fresh literals, each positive on a fresh atom.
    pub fn fresh_literals(&mut self, count: usize) -> Result<Vec<i32>, AtomDBError> {
        (0..count)
            .map(|_| self.fresh_atom().map(|atom| atom as i32))
            .collect()
    }
}
