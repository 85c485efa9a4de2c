//! A library for finding the failed assumptions of a boolean formula written in conjunctive normal form.
//!
//! otter_failing is a library for explaining why a formula is unsatisfiable under some assumptions, or some constraint.
//! The explanation is a subset of the assumptions, the *failed* assumptions, which together with the formula is itself unsatisfiable.
//!
//! The analysis follows that of conflict-driven clause-learning solvers with incremental solves: failed assumptions are found by walking the implication graph of a trail built by asserting the assumptions.
//! Each analysis derives a clause made from the negation of the failed assumptions, which may be checked by an independent checker and/or recorded in a proof, with a chain of clause ids justifying the derivation.
//!
//! # Orientation
//!
//! The library is design around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Clauses may be added though the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_clause).
//!
//! Internally, an analysis reads from and writes to a handful of databases:
//! - A formula is stored in a [clause database](db::clause), which issues an id for each clause.
//! - A valuation, together with the level and reason of each value, is stored in an [atom database](db::atom).
//! - The assumptions and the constraint are stored in a [literal database](db::literal).
//! - Whether a literal is assumed or failed, and whether an atom has been seen during an analysis, is stored in a [flag database](db::flags).
//!
//! Useful starting points, then, may be:
//! - The [failing procedure](crate::procedures::failing) to inspect the analysis.
//! - The [assumption procedures](crate::procedures::assumptions) to see how a trail is built.
//! - The [failing buffer](crate::failing_buffer) to see the walks through the implication graph.
//!
//! # Examples
//!
//! + Find the failed assumptions of a small formula.
//!
//! ```rust
//! # use otter_failing::config::Config;
//! # use otter_failing::context::Context;
//! # use otter_failing::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! let [p, q, r, s] = the_context.fresh_literals(4).unwrap()[..] else { panic!() };
//!
//! // p and q together imply not r, and s is independent.
//! assert!(the_context.add_clause(vec![-p, -q, -r]).is_ok());
//!
//! for assumption in [s, p, q, r] {
//!     assert!(the_context.assume(assumption).is_ok());
//! }
//! assert!(the_context.assert_assumptions().is_ok());
//! assert_eq!(the_context.report(), Report::Unsatisfiable);
//!
//! assert_eq!(the_context.failed_assumptions(), Ok(vec![p, q, r]));
//! ```
//!
//! + Record chains of clause ids for each derived clause.
//!
//! ```rust
//! # use otter_failing::config::Config;
//! # use otter_failing::context::Context;
//! let mut config = Config::default();
//! config.lrat.value = true;
//!
//! let mut the_context = Context::from_config(config);
//! let chains = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
//!
//! let chains_cb = chains.clone();
//! the_context.clause_db.set_callback_addition(Box::new(
//!     move |_: u64, clause: &[i32], chain: Option<&[u64]>| {
//!         chains_cb.borrow_mut().push((clause.to_vec(), chain.map(|c| c.to_vec())));
//!     },
//! ));
//!
//! assert!(the_context.add_clause(vec![-1, 2]).is_ok());
//! assert!(the_context.assume(1).is_ok());
//! assert!(the_context.assume(-2).is_ok());
//! assert!(the_context.assert_assumptions().is_ok());
//! assert_eq!(the_context.failed(1), Ok(true));
//!
//! assert_eq!(chains.borrow().last(), Some(&(vec![2, -1], Some(vec![1]))));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are lists in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [failure analysis](crate::procedures::failing) can be filtered with `RUST_LOG=failing …` or,
//! - A summary of each analysis can be found with `RUST_LOG=failing=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod checker;
pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;
pub mod failing_buffer;

pub mod misc;
pub mod reports;
