//! Procedures of a solve.
//!
//! - [propagate](crate::procedures::propagate) --- the consequences of valuing a variable for clauses and the occurrence index.
//! - [simplify](crate::procedures::simplify) --- detection of forced unit literals and pure choice literals.
//! - [choice](crate::procedures::choice) --- selection of the decision variable from the leftmost open quantifier block.
//! - [solve](crate::procedures::solve) --- the search itself, branch by branch.

pub mod choice;
pub mod propagate;
pub mod simplify;
pub mod solve;
