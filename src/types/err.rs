//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some are external --- e.g. a context may return a `NotUnsatisfiable` error to highlight a request for failed assumptions was made before assumptions were found to fail.
//! - Breaking an invariant of a failure analysis (e.g. some literal being marked as failed twice) is not an error, and leads to a panic.
//!   For, this is only possible given some defect in the trail, and there is nothing to be done.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{
    db::ClauseId,
    structures::literal::CLiteral,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Assumption(AssumptionError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    Checker(CheckerError),
    ClauseDB(ClauseDBError),
    Failing(FailingError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assumption(e) => write!(f, "Assumption error: {e:?}"),
            Self::AtomDB(e) => write!(f, "Atom database error: {e:?}"),
            Self::BCP(e) => write!(f, "BCP error: {e:?}"),
            Self::Checker(e) => write!(f, "Checker error: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database error: {e:?}"),
            Self::Failing(e) => write!(f, "Failing error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when making assumptions or adding to a constraint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssumptionError {
    /// The zero literal was given as an assumption.
    ZeroLiteral,
}

impl From<AssumptionError> for ErrorKind {
    fn from(e: AssumptionError) -> Self {
        ErrorKind::Assumption(e)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// The zero atom is reserved, and was used.
    ZeroAtom,

    /// A root-level literal has no record of the unit clause which fixed it.
    MissingUnit(CLiteral),
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// The clause with the given id is falsified on the current valuation.
    Conflict(ClauseId),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors from the independent checker.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CheckerError {
    /// The clause is not implied by unit propagation on the clauses known to the checker.
    NotImplied(Vec<CLiteral>),
}

impl From<CheckerError> for ErrorKind {
    fn from(e: CheckerError) -> Self {
        ErrorKind::Checker(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// A clause was requested by an id with no stored clause.
    Missing(ClauseId),

    /// A clause was added after some decision has been made.
    DecisionMade,

    /// All possible ids have been used.
    StorageExhausted,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Noted errors during a failure analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailingError {
    /// Failed assumptions were requested while the context is not known to be unsatisfiable.
    NotUnsatisfiable,

    /// No assumption was found to be falsified, though the assumptions were the reason for unsatisfiability.
    NoFailedAssumption,

    /// The independent check of the failing clause did not succeed.
    CheckFailed,
}

impl From<FailingError> for ErrorKind {
    fn from(e: FailingError) -> Self {
        ErrorKind::Failing(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// No file was found.
    NoFile,

    /// A clause was not terminated by a `0` before the input ended.
    UnterminatedClause,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
