/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [assumptions](crate::procedures::assumptions)
    pub const ASSUMPTIONS: &str = "assumptions";

    /// Logs related to [failure analysis](crate::procedures::failing)
    pub const FAILING: &str = "failing";

    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to the [independent checker](crate::checker)
    pub const CHECKER: &str = "checker";

    /// Logs related to [FRAT transcription](crate::reports::frat)
    pub const FRAT: &str = "frat";
}
