/*!
Classification of the falsified assumptions of an unsatisfiable context.

Assumptions are scanned in the order made, skipping any assumption which is not false.
Of the falsified assumptions, one of three cases is found, in order of priority:

1. Some assumption is false on the root level.
   The first such assumption is the sole failed assumption, as the formula alone falsifies the assumption.
2. Some assumption is false without a reason, i.e. the negation of the assumption is itself an assumption, asserted earlier.
   The first such assumption and its negation are the failed assumptions.
3. Otherwise, the falsified assumption on the lowest level, with ties broken by the order the assumptions were made.
   The failed assumptions are then found by a walk through the implication graph from the assumption.

Scanning stops early on the first root-level falsification, while a clash ends consideration of levels though scanning continues in search of a root-level falsification.
*/

use crate::{
    db::{
        atom::{AtomDB, Reason},
        LevelIndex,
    },
    structures::literal::{CLiteral, Literal},
};

/// A classification of the falsified assumptions of an unsatisfiable context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailedCase {
    /// An assumption false on the root level.
    RootFalsified(CLiteral),

    /// An assumption false due to the (earlier) assumption of its negation.
    Clashing(CLiteral),

    /// The first falsified assumption on the lowest level of any falsified assumption, together with the level.
    MinimumLevel(CLiteral, LevelIndex),
}

/// Classifies the falsified `assumptions` of the valuation in `atom_db`, or returns None if no assumption is false.
///
/// # Panics
/// If a falsified assumption not on the root level has an external reason.
pub fn classify(atom_db: &AtomDB, assumptions: &[CLiteral]) -> Option<FailedCase> {
    let mut clashing: Option<CLiteral> = None;
    let mut first_failed: Option<(CLiteral, LevelIndex)> = None;

    for &assumption in assumptions {
        if atom_db.value(assumption) != Some(false) {
            continue;
        }

        let atom = assumption.atom();
        let level = atom_db.level_of(atom);
        if level == 0 {
            return Some(FailedCase::RootFalsified(assumption));
        }

        if clashing.is_some() {
            continue;
        }

        match atom_db.reason_of(atom) {
            Reason::Decision => clashing = Some(assumption),

            Reason::Clause(_) => match first_failed {
                Some((_, minimum)) if minimum <= level => {}
                _ => first_failed = Some((assumption, level)),
            },

            Reason::External => {
                panic!("! Falsified assumption {assumption} has an external reason")
            }
        }
    }

    match clashing {
        Some(assumption) => Some(FailedCase::Clashing(assumption)),
        None => first_failed.map(|(assumption, level)| FailedCase::MinimumLevel(assumption, level)),
    }
}
