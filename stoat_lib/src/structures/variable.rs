//! Variables are atoms together with their quantifier.

use crate::config::Probability;

/// The quantifier attached to a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantifier {
    /// Existentially quantified --- the solver values the variable to maximise the probability of satisfaction.
    Choice,

    /// Randomly quantified --- true with the given probability, independent of every other variable.
    Chance(Probability),
}

impl Quantifier {
    pub fn is_choice(&self) -> bool {
        matches!(self, Quantifier::Choice)
    }
}

impl std::fmt::Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Choice => write!(f, "choice"),
            Self::Chance(probability) => write!(f, "chance {probability}"),
        }
    }
}
