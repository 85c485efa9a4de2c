mod common;

use common::*;
use otter_failing::{
    config::Config,
    context::{Context, ContextState, Unsatisfiable},
};

/// Clauses a -> -x and b -> -y, with a and b assumed, and the constraint x or y.
fn failing_constraint(ctx: &mut Context, constraint: &[i32]) {
    assert!(ctx.add_clause(vec![-1, -3]).is_ok());
    assert!(ctx.add_clause(vec![-2, -4]).is_ok());

    assert!(ctx.assume(1).is_ok());
    assert!(ctx.assume(2).is_ok());
    for literal in constraint {
        assert!(ctx.constrain(*literal).is_ok());
    }
    assert!(ctx.constrain(0).is_ok());

    assert!(ctx.assert_assumptions().is_ok());
    assert_eq!(
        ctx.state,
        ContextState::Unsatisfiable(Unsatisfiable::Constraint)
    );
    assert!(ctx.constraint_failed());
}

mod constraint_failure {
    use super::*;

    #[test]
    fn breadth_first() {
        init_logger();
        let mut ctx = Context::from_config(Config::default());
        let steps = record_steps(&mut ctx);
        failing_constraint(&mut ctx, &[3, 4]);

        assert_eq!(ctx.failed_assumptions(), Ok(vec![1, 2]));

        let steps: Vec<Step> = steps.try_iter().collect();
        let failing = failing_clauses(&steps);
        assert_eq!(failing.len(), 2);
        for (clause, chain) in &failing {
            assert!(chain.is_none());
            assert!(clause.contains(&-1) && clause.contains(&-2));
        }
        assert!(failing[0].0.contains(&-3));
        assert!(failing[1].0.contains(&-4));
    }

    #[test]
    fn depth_first() {
        let mut ctx = Context::from_config(lrat_config());
        let steps = record_steps(&mut ctx);
        failing_constraint(&mut ctx, &[3, 4]);

        assert_eq!(ctx.failed_assumptions(), Ok(vec![1, 2]));

        let steps: Vec<Step> = steps.try_iter().collect();
        assert_eq!(
            failing_clauses(&steps),
            vec![
                (vec![-1, -2, -3], Some(vec![1])),
                (vec![-1, -2, -4], Some(vec![2])),
            ]
        );
        assert_eq!(check_chains(&steps), 2);
    }

    #[test]
    fn tautologies_skipped() {
        let mut ctx = Context::from_config(lrat_config());
        let steps = record_steps(&mut ctx);
        failing_constraint(&mut ctx, &[3, -1]);

        assert_eq!(ctx.failed_assumptions(), Ok(vec![1]));
        assert_eq!(ctx.failed(2), Ok(false));

        let steps: Vec<Step> = steps.try_iter().collect();
        assert_eq!(
            failing_clauses(&steps),
            vec![(vec![-1, -3], Some(vec![1]))]
        );
    }

    #[test]
    fn no_literal_failed_twice() {
        // Each constraint literal is falsified through the same assumption.
        for config in [Config::default(), lrat_config()] {
            let mut ctx = Context::from_config(config);
            assert!(ctx.add_clause(vec![-1, -3]).is_ok());
            assert!(ctx.add_clause(vec![-1, -4]).is_ok());
            assert!(ctx.add_clause(vec![-3, -5]).is_ok());

            assert!(ctx.assume(1).is_ok());
            for literal in [3, 4, 0] {
                assert!(ctx.constrain(literal).is_ok());
            }
            assert!(ctx.assert_assumptions().is_ok());

            assert_eq!(ctx.failed_assumptions(), Ok(vec![1]));
            assert!(ctx.failing_buffer.is_clear());
        }
    }
}

mod constraint_lifecycle {
    use super::*;

    #[test]
    fn satisfied_constraint() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![-1, -3]).is_ok());
        assert!(ctx.assume(1).is_ok());
        for literal in [3, 4, 0] {
            assert!(ctx.constrain(literal).is_ok());
        }
        assert!(ctx.assert_assumptions().is_ok());

        assert_eq!(ctx.state, ContextState::Asserted);
        assert!(!ctx.constraint_failed());
    }

    #[test]
    fn open_constraint_ignored() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![-1, -3]).is_ok());
        assert!(ctx.assume(1).is_ok());
        assert!(ctx.constrain(3).is_ok());
        assert!(ctx.assert_assumptions().is_ok());

        assert_eq!(ctx.state, ContextState::Asserted);
    }

    #[test]
    fn reset_constraint() {
        let mut ctx = Context::from_config(Config::default());
        failing_constraint(&mut ctx, &[3, 4]);

        ctx.reset_constraint();
        assert!(!ctx.constraint_failed());
        assert!(!ctx.atom_db.is_frozen(3));

        // The assumptions remain, and alone are satisfiable.
        ctx.reset_assumptions();
        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(2).is_ok());
        assert!(ctx.assert_assumptions().is_ok());
        assert_eq!(ctx.state, ContextState::Asserted);
    }
}
