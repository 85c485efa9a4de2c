use crate::{
    db::ClauseId,
    structures::{
        clause::{CClause, ClauseSource},
        literal::CLiteral,
    },
};

/// A clause together with some metadata.
#[derive(Clone, Debug)]
pub struct DBClause {
    /// The id of the clause.
    id: ClauseId,

    /// The clause.
    clause: CClause,

    /// How the clause was obtained.
    source: ClauseSource,
}

impl DBClause {
    pub fn new(id: ClauseId, clause: CClause, source: ClauseSource) -> Self {
        DBClause { id, clause, source }
    }

    /// The id of the clause.
    pub fn id(&self) -> ClauseId {
        self.id
    }

    /// The clause.
    pub fn clause(&self) -> &[CLiteral] {
        &self.clause
    }

    /// How the clause was obtained.
    pub fn source(&self) -> ClauseSource {
        self.source
    }
}
