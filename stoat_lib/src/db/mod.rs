//! Databases of things established during a solve.
//!
//! - The [variable database](crate::db::variable::VariableDB) fixes the quantifier of each variable for the lifetime of a context.
//! - A [formula](crate::db::formula::Formula) bundles the mutable state of one branch of the search: clauses, the occurrence index, and a valuation.

pub mod formula;
pub mod variable;
