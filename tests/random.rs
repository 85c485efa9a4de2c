mod common;

use common::*;
use otter_failing::{
    config::Config,
    context::{Context, ContextState, Unsatisfiable},
    structures::literal::{CLiteral, Literal},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ATOMS: u32 = 12;

fn random_literal(rng: &mut StdRng) -> CLiteral {
    CLiteral::new(rng.random_range(1..=ATOMS), rng.random_bool(0.5))
}

fn random_clauses(rng: &mut StdRng, count: usize) -> Vec<Vec<CLiteral>> {
    (0..count)
        .map(|_| {
            let size = rng.random_range(2..=3);
            (0..size).map(|_| random_literal(rng)).collect()
        })
        .collect()
}

/// Builds a context from `clauses` and `assumptions`, asserts the assumptions, and returns the failed assumptions if unsatisfiable given the assumptions.
fn analyse(
    config: Config,
    clauses: &[Vec<CLiteral>],
    assumptions: &[CLiteral],
) -> (Option<Vec<CLiteral>>, Vec<Step>) {
    let mut ctx = Context::from_config(config);
    let steps = record_steps(&mut ctx);

    for clause in clauses {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }
    for assumption in assumptions {
        assert!(ctx.assume(*assumption).is_ok());
    }
    assert!(ctx.assert_assumptions().is_ok());

    let failed = match ctx.state {
        ContextState::Unsatisfiable(Unsatisfiable::Assumptions) => {
            let failed = ctx.failed_assumptions().expect("analysis failed");
            assert!(ctx.failing_buffer.is_clear());
            assert!(!failed.is_empty());
            for literal in &failed {
                assert!(ctx.assumptions().contains(literal));
            }
            Some(failed)
        }
        _ => None,
    };

    (failed, steps.try_iter().collect())
}

/// As [analyse], with `constraint` closed after the assumptions, returning the failed assumptions if the constraint failed.
fn analyse_constraint(
    config: Config,
    clauses: &[Vec<CLiteral>],
    assumptions: &[CLiteral],
    constraint: &[CLiteral],
) -> (Option<Vec<CLiteral>>, Vec<Step>) {
    let mut ctx = Context::from_config(config);
    let steps = record_steps(&mut ctx);

    for clause in clauses {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }
    for assumption in assumptions {
        assert!(ctx.assume(*assumption).is_ok());
    }
    for literal in constraint.iter().chain([0].iter()) {
        assert!(ctx.constrain(*literal).is_ok());
    }
    assert!(ctx.assert_assumptions().is_ok());

    let failed = match ctx.state {
        ContextState::Unsatisfiable(Unsatisfiable::Constraint) => {
            assert!(ctx.constraint_failed());
            let failed = ctx.failed_assumptions().expect("analysis failed");
            assert!(ctx.failing_buffer.is_clear());
            assert!(ctx.flag_db.seen_atoms().next().is_none());
            for literal in &failed {
                assert!(ctx.assumptions().contains(literal));
            }
            Some(failed)
        }
        _ => None,
    };

    (failed, steps.try_iter().collect())
}

mod random_formulas {
    use super::*;

    #[test]
    fn cores_are_sound() {
        init_logger();
        let mut unsatisfiable = 0;

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let clauses = random_clauses(&mut rng, 24);
            let assumptions: Vec<CLiteral> = (0..6).map(|_| random_literal(&mut rng)).collect();

            let (breadth, _) = analyse(Config::default(), &clauses, &assumptions);
            let (depth, steps) = analyse(lrat_config(), &clauses, &assumptions);

            assert_eq!(breadth, depth, "Walks disagree on seed {seed}");
            check_chains(&steps);

            if let Some(failed) = depth {
                unsatisfiable += 1;

                match failing_clauses(&steps).last() {
                    // The failing clause is the negation of the failed assumptions.
                    Some((failing, _)) => {
                        let mut failing = failing.clone();
                        failing.sort();
                        let mut negation: Vec<CLiteral> =
                            failed.iter().map(|literal| literal.negate()).collect();
                        negation.sort();
                        assert_eq!(failing, negation, "Seed {seed}");
                    }

                    // Otherwise, an assumption is false on the root level, or two assumptions clash.
                    None => match failed.as_slice() {
                        [_] => {}
                        [a, b] => assert_eq!(*a, b.negate(), "Seed {seed}"),
                        _ => panic!("Unexpected core {failed:?} on seed {seed}"),
                    },
                }
            }
        }

        assert!(unsatisfiable > 0);
    }

    #[test]
    fn constraint_cores_are_sound() {
        let mut failed_constraints = 0;

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let clauses = random_clauses(&mut rng, 24);
            let assumptions: Vec<CLiteral> = (0..6).map(|_| random_literal(&mut rng)).collect();

            // Some constraint literals negate an assumption, so the constraint often fails.
            let constraint: Vec<CLiteral> = (0..3)
                .map(|_| match rng.random_bool(0.5) {
                    true => assumptions[rng.random_range(0..assumptions.len())].negate(),
                    false => random_literal(&mut rng),
                })
                .collect();

            let (breadth, _) = analyse_constraint(Config::default(), &clauses, &assumptions, &constraint);
            let (depth, steps) = analyse_constraint(lrat_config(), &clauses, &assumptions, &constraint);

            assert_eq!(breadth, depth, "Walks disagree on seed {seed}");
            check_chains(&steps);

            if let Some(failed) = depth {
                failed_constraints += 1;

                let mut negation: Vec<CLiteral> =
                    failed.iter().map(|literal| literal.negate()).collect();
                negation.sort();

                // Each failing clause extends the negated failed assumptions by the negation of a constraint literal.
                for (failing, chain) in failing_clauses(&steps) {
                    assert!(chain.is_some(), "Seed {seed}");
                    let Some((extension, rest)) = failing.split_last() else {
                        panic!("Empty failing clause on seed {seed}")
                    };
                    assert!(constraint.contains(&extension.negate()), "Seed {seed}");
                    let mut rest = rest.to_vec();
                    rest.sort();
                    assert_eq!(rest, negation, "Seed {seed}");
                }
            }
        }

        assert!(failed_constraints > 0);
    }
}
