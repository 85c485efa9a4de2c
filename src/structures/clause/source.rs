/// The source of a stored clause.
///
/// Failing clauses and the empty clause are never stored, and so have no source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A *unit* clause derived by propagation on the root level.
    Unit,

    /// A clause of negated decisions, learnt when asserting an assumption led to a conflict.
    Decisions,
}
