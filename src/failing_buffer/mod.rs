/*!
Scratch space for failure analysis, and the scope within which the scratch space is used.

# Scratch

A [FailingBuffer] holds:
- The literals analyzed during a walk through the implication graph, each on an atom marked as seen in the [flag database](crate::db::flags).
  During a breadth first walk, these double as the queue of the walk.
- The clause under construction, made of the negation of each failed assumption found.
- The chain of clause ids under construction, justifying the clause.
- A chain for each literal of a constraint, indexed by [literal index](crate::structures::literal::Literal::index).

The buffer is kept between analyses, to avoid fresh allocations, though each part of the buffer is empty between analyses.

# Scope

A [FailingScope] borrows the buffer together with everything read or written during an analysis.
Dropping the scope clears every part of the buffer and every seen flag, so each analysis begins and ends with clear scratch space regardless of how the analysis ends.

The two walks through the implication graph are methods on a scope:
- [walk_breadth_first](FailingScope::walk_breadth_first), which does not build a chain.
- [analyze_literal](FailingScope::analyze_literal), which walks depth first and builds a chain in post-order.
*/

mod breadth;
mod depth;
mod scope;
pub use scope::{FailingScope, Purpose};

use crate::{
    db::ClauseId,
    structures::{clause::CClause, literal::CLiteral},
};

/// Scratch space for failure analysis.
#[derive(Default)]
pub struct FailingBuffer {
    /// Literals analyzed, each on a seen atom.
    pub(crate) analyzed: Vec<CLiteral>,

    /// The clause under construction.
    pub(crate) clause: CClause,

    /// The chain under construction.
    pub(crate) chain: Vec<ClauseId>,

    /// Chains for each literal of a constraint.
    pub(crate) constraint_chains: Vec<Vec<ClauseId>>,
}

impl FailingBuffer {
    /// True if every part of the buffer is empty.
    pub fn is_clear(&self) -> bool {
        self.analyzed.is_empty()
            && self.clause.is_empty()
            && self.chain.is_empty()
            && self.constraint_chains.iter().all(|chain| chain.is_empty())
    }

    /// The literals analyzed.
    pub fn analyzed(&self) -> &[CLiteral] {
        &self.analyzed
    }

    /// The clause under construction.
    pub fn clause(&self) -> &[CLiteral] {
        &self.clause
    }

    /// The chain under construction.
    pub fn chain(&self) -> &[ClauseId] {
        &self.chain
    }
}
