//! The context --- to which instances are added and within which solves take place, etc.
//!
//! A context owns the configuration of a solve, the variable database, the pristine formula built while reading an instance, and counters over the course of a solve.
//!
//! # Example
//! ```rust
//! # use stoat_lib::context::Context;
//! # use stoat_lib::config::Config;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let instance = "
//! variables
//! 1 -1
//! 2 0.3
//!
//! clauses
//! -1 2 0
//! 1 0
//! ";
//!
//! assert!(the_context.read_ssat(instance.as_bytes()).is_ok());
//!
//! // The unit clause forces the choice variable true, and the chance
//! // variable must then resolve true --- which happens with probability 0.3.
//! assert_eq!(the_context.solve(), 0.3);
//! ```

mod counters;
pub use counters::Counters;

use crate::{config::Config, db::formula::Formula, db::variable::VariableDB};

/// The context: a variable database and pristine formula, with the configuration and counters of a solve.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The variables of the instance, in declaration order.
    pub variable_db: VariableDB,

    /// The pristine formula, as read --- solves work on clones.
    pub formula: Formula,

    /// Counters over the course of a solve.
    pub counters: Counters,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            variable_db: VariableDB::default(),
            formula: Formula::default(),
            counters: Counters::default(),
        }
    }
}
