use crate::db::ClauseId;

/// The reason an atom was valued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// No reason, as the value was a decision (or an assumption).
    Decision,

    /// The value was forced by the clause with the given id.
    Clause(ClauseId),

    /// The value was forced by some external propagator, whose clause has not (yet) been given.
    External,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decision => write!(f, "decision"),
            Self::Clause(id) => write!(f, "clause {id}"),
            Self::External => write!(f, "external reason"),
        }
    }
}
