//! A library for computing the maximum satisfaction probability of stochastic boolean formulas written in conjunctive normal form.
//!
//! A stochastic formula partitions its variables into existentially quantified *choice* variables, whose values the solver is free to pick, and randomly quantified *chance* variables, each true with some fixed probability, independent of every other variable.
//! The variables are read in declaration order, and maximal runs of same-kind variables form the quantifier blocks of the formula.
//! A solve establishes the probability that the formula is satisfied when every choice variable is valued by a best-possible policy and every chance variable resolves according to its distribution.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context::Context).
//!
//! Contexts are built with a [configuration](crate::config), and formulas are added either through the [.ssat](crate::context::Context::read_ssat) representation of an instance or [programatically](crate::builder).
//!
//! Internally, and at a high-level, a solve is viewed in terms of branches over a handful of structures:
//! - The quantifiers of the formula are stored in a [variable database](crate::db::variable::VariableDB), fixed for the lifetime of the context.
//! - The clauses, the occurrence index, and the valuation of a branch are bundled as a [formula](crate::db::formula::Formula), cloned whenever the search splits on a variable.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [propagation procedure](crate::procedures::propagate) to inspect how a valued variable resolves clauses.
//! - The [configuration](crate::config) to see which simplifications and branching heuristics are supported.
//!
//! # Example
//!
//! ```rust
//! # use stoat_lib::config::Config;
//! # use stoat_lib::context::Context;
//! # use stoat_lib::structures::literal::Literal;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let x = the_context.fresh_choice();
//! let y = the_context.fresh_chance(0.5).expect("a probability");
//!
//! let x_or_y = vec![Literal::new(x, true), Literal::new(y, true)];
//! assert!(the_context.add_clause(x_or_y).is_ok());
//!
//! // Valuing x true satisfies the single clause, whatever happens to y.
//! assert_eq!(the_context.solve(), 1.0);
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod procedures;
pub mod structures;
pub mod types;

mod misc;
