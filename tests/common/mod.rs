#![allow(dead_code)]

use std::collections::HashMap;

use crossbeam::channel::{unbounded, Receiver};
use otter_failing::{
    config::Config,
    context::Context,
    db::ClauseId,
    structures::literal::{CLiteral, Literal},
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A config with chains built for each derived clause.
pub fn lrat_config() -> Config {
    let mut config = Config::default();
    config.lrat.value = true;
    config
}

/// A step of a proof, as passed to the clause database callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Original(ClauseId, Vec<CLiteral>),
    Addition(ClauseId, Vec<CLiteral>, Option<Vec<ClauseId>>),
    Deletion(ClauseId, Vec<CLiteral>),
}

/// Sends each proof step made by `ctx` to the returned receiver.
pub fn record_steps(ctx: &mut Context) -> Receiver<Step> {
    let (tx, rx) = unbounded();

    let original_tx = tx.clone();
    ctx.clause_db
        .set_callback_original(Box::new(move |id: ClauseId, clause: &[CLiteral]| {
            let _ = original_tx.send(Step::Original(id, clause.to_vec()));
        }));

    let addition_tx = tx.clone();
    ctx.clause_db.set_callback_addition(Box::new(
        move |id: ClauseId, clause: &[CLiteral], chain: Option<&[ClauseId]>| {
            let _ = addition_tx.send(Step::Addition(
                id,
                clause.to_vec(),
                chain.map(|chain| chain.to_vec()),
            ));
        },
    ));

    ctx.clause_db
        .set_callback_delete(Box::new(move |id: ClauseId, clause: &[CLiteral]| {
            let _ = tx.send(Step::Deletion(id, clause.to_vec()));
        }));

    rx
}

/// Whether unit propagation over the clauses cited by `chain`, in order, on the negation of `clause`, reaches a conflict.
pub fn chain_implies(
    clauses: &HashMap<ClauseId, Vec<CLiteral>>,
    clause: &[CLiteral],
    chain: &[ClauseId],
) -> bool {
    let mut assignment: HashMap<u32, bool> = HashMap::default();
    for literal in clause {
        if let Some(value) = assignment.insert(literal.atom(), !literal.polarity()) {
            if value == literal.polarity() {
                return true;
            }
        }
    }

    for id in chain {
        let Some(cited) = clauses.get(id) else {
            return false;
        };

        let mut open = Vec::default();
        for literal in cited {
            match assignment.get(&literal.atom()) {
                Some(value) if *value == literal.polarity() => return false,
                Some(_) => {}
                None => open.push(*literal),
            }
        }

        match open.as_slice() {
            [] => return true,
            [unit] => {
                assignment.insert(unit.atom(), unit.polarity());
            }
            _ => return false,
        }
    }

    false
}

/// Replays `steps`, returning the count of additions whose chain was checked.
///
/// # Panics
/// If some chain does not imply the clause it is given with.
pub fn check_chains(steps: &[Step]) -> usize {
    let mut clauses: HashMap<ClauseId, Vec<CLiteral>> = HashMap::default();
    let mut checked = 0;

    for step in steps {
        match step {
            Step::Original(id, clause) => {
                clauses.insert(*id, clause.clone());
            }

            Step::Addition(id, clause, chain) => {
                if let Some(chain) = chain {
                    assert!(
                        chain_implies(&clauses, clause, chain),
                        "Chain {chain:?} does not imply {id}: {clause:?}"
                    );
                    checked += 1;
                }
                clauses.insert(*id, clause.clone());
            }

            Step::Deletion(id, _) => {
                clauses.remove(id);
            }
        }
    }

    checked
}

/// The derived clauses which were immediately deleted, i.e. the failing clauses.
pub fn failing_clauses(steps: &[Step]) -> Vec<(Vec<CLiteral>, Option<Vec<ClauseId>>)> {
    let mut failing = Vec::default();
    for (index, step) in steps.iter().enumerate() {
        if let Step::Addition(id, clause, chain) = step {
            if let Some(Step::Deletion(deleted, _)) = steps.get(index + 1) {
                if deleted == id {
                    failing.push((clause.clone(), chain.clone()));
                }
            }
        }
    }
    failing
}
