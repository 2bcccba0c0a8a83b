//! Methods for building a context --- fresh variables and clauses, declared directly or read from the `.ssat` representation of an instance.
//!
//! Variable declaration order is significant: it fixes the quantifier blocks of the instance.
//! Every variable of a clause must be declared before the clause is added.

mod ssat;

use crate::{
    config::Probability,
    context::Context,
    structures::{atom::Atom, literal::Literal, variable::Quantifier},
    types::err,
};

impl Context {
    /// Declares a fresh existentially quantified variable.
    pub fn fresh_choice(&mut self) -> Atom {
        self.formula.fresh_atom_slot();
        self.variable_db.fresh_variable(Quantifier::Choice)
    }

    /// Declares a fresh randomly quantified variable, true with the given probability.
    pub fn fresh_chance(&mut self, probability: Probability) -> Result<Atom, err::BuildError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(err::BuildError::ProbabilityRange);
        }
        self.formula.fresh_atom_slot();
        Ok(self.variable_db.fresh_variable(Quantifier::Chance(probability)))
    }

    /// Adds a clause over already-declared variables to the formula.
    ///
    /// Exact duplicate literals are collapsed.
    /// A variable occurring in both polarities is kept as is --- each occurrence is examined independently during propagation.
    /// An empty clause is accepted, though as the empty disjunction cannot be satisfied any solve will conclude 0.
    pub fn add_clause(&mut self, clause: Vec<Literal>) -> Result<(), err::BuildError> {
        let mut literals: Vec<Literal> = Vec::with_capacity(clause.len());
        for literal in clause {
            if literal.atom() as usize >= self.variable_db.count() {
                return Err(err::BuildError::OutOfRangeAtom);
            }
            if !literals.contains(&literal) {
                literals.push(literal);
            }
        }
        self.formula.add_clause(literals);
        Ok(())
    }
}
