mod common;

use common::*;
use otter_failing::{
    config::Config,
    context::{Context, ContextState, Unsatisfiable},
    reports::Report,
    types::err::{ErrorKind, FailingError},
};

mod failing_cases {
    use super::*;

    #[test]
    fn clashing_assumptions() {
        init_logger();
        for config in [Config::default(), lrat_config()] {
            let mut ctx = Context::from_config(config);

            for assumption in [1, 2, -1] {
                assert!(ctx.assume(assumption).is_ok());
            }
            assert!(ctx.assert_assumptions().is_ok());
            assert_eq!(
                ctx.state,
                ContextState::Unsatisfiable(Unsatisfiable::Assumptions)
            );

            assert_eq!(ctx.failed(1), Ok(true));
            assert_eq!(ctx.failed(-1), Ok(true));
            assert_eq!(ctx.failed(2), Ok(false));
            assert_eq!(ctx.failed_assumptions(), Ok(vec![1, -1]));
            assert_eq!(ctx.counters.failed_assumptions, 2);

            assert!(ctx.failing_buffer.is_clear());
            assert!(ctx.flag_db.seen_atoms().next().is_none());
        }
    }

    #[test]
    fn root_falsified() {
        for config in [Config::default(), lrat_config()] {
            let mut ctx = Context::from_config(config);
            let [x, y] = ctx.fresh_literals(2).unwrap()[..] else {
                panic!()
            };

            assert!(ctx.add_clause(vec![-x]).is_ok());
            assert!(ctx.assume(y).is_ok());
            assert!(ctx.assume(x).is_ok());
            assert!(ctx.assert_assumptions().is_ok());

            assert_eq!(ctx.failed_assumptions(), Ok(vec![x]));
            assert_eq!(ctx.failed(y), Ok(false));

            assert!(ctx.failing_buffer.is_clear());
            assert!(ctx.flag_db.seen_atoms().next().is_none());
        }
    }

    #[test]
    fn root_before_clash() {
        let mut ctx = Context::from_config(Config::default());
        let [x, y] = ctx.fresh_literals(2).unwrap()[..] else {
            panic!()
        };

        assert!(ctx.add_clause(vec![-x]).is_ok());
        for assumption in [y, -y, x] {
            assert!(ctx.assume(assumption).is_ok());
        }
        assert!(ctx.assert_assumptions().is_ok());

        // Assertion ends on -y, though x is false on the root level.
        assert_eq!(ctx.failed_assumptions(), Ok(vec![x]));
    }

    #[test]
    fn lowest_level_chosen() {
        let mut ctx = Context::from_config(Config::default());
        let literals = ctx.fresh_literals(7).unwrap();
        let decisions = &literals[..5];
        let (x5, x3) = (literals[5], literals[6]);

        assert!(ctx.add_clause(vec![-decisions[4], -x5]).is_ok());
        assert!(ctx.add_clause(vec![-decisions[2], -x3]).is_ok());

        for assumption in decisions.iter().chain([x5, x3].iter()) {
            assert!(ctx.assume(*assumption).is_ok());
        }
        assert!(ctx.assert_assumptions().is_ok());
        assert_eq!(ctx.atom_db.level_of(x5 as u32), 5);
        assert_eq!(ctx.atom_db.level_of(x3 as u32), 3);

        assert_eq!(ctx.failed_assumptions(), Ok(vec![decisions[2], x3]));
        assert_eq!(ctx.failed(x5), Ok(false));
        assert_eq!(ctx.failed(decisions[4]), Ok(false));
    }

    #[test]
    fn level_ties_by_order() {
        let mut ctx = Context::from_config(Config::default());
        let literals = ctx.fresh_literals(6).unwrap();
        let decisions = &literals[..4];
        let (x, y) = (literals[4], literals[5]);

        assert!(ctx.add_clause(vec![-decisions[3], -x]).is_ok());
        assert!(ctx.add_clause(vec![-decisions[3], -y]).is_ok());

        for assumption in decisions.iter().chain([x, y].iter()) {
            assert!(ctx.assume(*assumption).is_ok());
        }
        assert!(ctx.assert_assumptions().is_ok());

        assert_eq!(ctx.failed_assumptions(), Ok(vec![decisions[3], x]));
        assert_eq!(ctx.failed(y), Ok(false));
    }

    #[test]
    fn implication_chain() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r, s, t] = ctx.fresh_literals(5).unwrap()[..] else {
            panic!()
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q, r]).is_ok());
        assert!(ctx.add_clause(vec![-r, s]).is_ok());
        assert!(ctx.add_clause(vec![-s, -t]).is_ok());

        for assumption in [r, p, t] {
            assert!(ctx.assume(assumption).is_ok());
        }
        assert!(ctx.assert_assumptions().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);

        // r alone suffices, and p is not reached as r is asserted first.
        assert_eq!(ctx.failed_assumptions(), Ok(vec![r, t]));
    }

    #[test]
    fn after_a_learnt_clause() {
        let mut ctx = Context::from_config(Config::default());
        let [a, b, c] = ctx.fresh_literals(3).unwrap()[..] else {
            panic!()
        };

        assert!(ctx.add_clause(vec![-a, -b, c]).is_ok());
        assert!(ctx.add_clause(vec![-a, -b, -c]).is_ok());

        assert!(ctx.assume(a).is_ok());
        assert!(ctx.assume(b).is_ok());
        assert!(ctx.assert_assumptions().is_ok());

        assert_eq!(ctx.counters.assumption_conflicts, 1);
        assert_eq!(ctx.failed_assumptions(), Ok(vec![a, b]));
    }

    #[test]
    fn formula_unsatisfiable() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![1, 2]).is_ok());
        assert!(ctx.add_clause(vec![-1]).is_ok());
        assert!(ctx.add_clause(vec![-2]).is_ok());
        assert!(ctx.assume(3).is_ok());
        assert!(ctx.assert_assumptions().is_ok());

        assert_eq!(
            ctx.state,
            ContextState::Unsatisfiable(Unsatisfiable::Formula)
        );
        assert_eq!(ctx.failed_assumptions(), Ok(vec![]));
        assert_eq!(ctx.counters.failed_assumptions, 0);
    }
}

mod failing_queries {
    use super::*;

    #[test]
    fn not_unsatisfiable() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![-1, 2]).is_ok());
        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assert_assumptions().is_ok());

        assert_eq!(ctx.state, ContextState::Asserted);
        assert_eq!(
            ctx.failed(1),
            Err(ErrorKind::Failing(FailingError::NotUnsatisfiable))
        );
    }

    #[test]
    fn analysis_is_cached() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![-1, -2]).is_ok());
        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(2).is_ok());
        assert!(ctx.assert_assumptions().is_ok());

        for _ in 0..3 {
            assert_eq!(ctx.failed(1), Ok(true));
            assert_eq!(ctx.failed(2), Ok(true));
        }
        assert_eq!(ctx.failed_assumptions(), Ok(vec![1, 2]));
        assert_eq!(ctx.counters.failing_analyses, 1);
    }

    #[test]
    fn fresh_assumptions_fresh_analysis() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause(vec![-1, -2]).is_ok());
        assert!(ctx.add_clause(vec![-3, -4]).is_ok());

        assert!(ctx.assume(1).is_ok());
        assert!(ctx.assume(2).is_ok());
        assert!(ctx.assert_assumptions().is_ok());
        assert_eq!(ctx.failed_assumptions(), Ok(vec![1, 2]));

        // Assuming after an assertion resets the assumptions.
        assert!(ctx.assume(3).is_ok());
        assert!(ctx.assume(4).is_ok());
        assert_eq!(ctx.assumptions(), &[3, 4]);
        assert!(ctx.assert_assumptions().is_ok());

        assert_eq!(ctx.failed_assumptions(), Ok(vec![3, 4]));
        assert_eq!(ctx.failed(1), Ok(false));
        assert_eq!(ctx.counters.failing_analyses, 2);
    }

    #[test]
    fn scratch_is_clear() {
        for config in [Config::default(), lrat_config()] {
            let mut ctx = Context::from_config(config);

            assert!(ctx.add_clause(vec![-1, 2]).is_ok());
            assert!(ctx.add_clause(vec![-2, 3]).is_ok());
            assert!(ctx.add_clause(vec![-3, -4]).is_ok());
            for assumption in [1, 4] {
                assert!(ctx.assume(assumption).is_ok());
            }
            assert!(ctx.assert_assumptions().is_ok());
            assert_eq!(ctx.failed_assumptions(), Ok(vec![1, 4]));

            assert!(ctx.failing_buffer.is_clear());
            assert!(ctx.flag_db.seen_atoms().next().is_none());
        }
    }

    #[test]
    fn walks_agree() {
        let clauses = vec![
            vec![-1, 5],
            vec![-2, 6],
            vec![-5, -6, 7],
            vec![-3, 8],
            vec![-7, -8, -9],
        ];

        let mut cores = Vec::default();
        for config in [Config::default(), lrat_config()] {
            let mut ctx = Context::from_config(config);
            for clause in &clauses {
                assert!(ctx.add_clause(clause.clone()).is_ok());
            }
            for assumption in [1, 4, 2, 3, 9] {
                assert!(ctx.assume(assumption).is_ok());
            }
            assert!(ctx.assert_assumptions().is_ok());
            cores.push(ctx.failed_assumptions().unwrap());
        }

        assert_eq!(cores[0], vec![1, 2, 3, 9]);
        assert_eq!(cores[0], cores[1]);
    }
}
