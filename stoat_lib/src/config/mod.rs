//! The configuration of a solve --- which simplifications run, and how the next decision variable is found.
//!
//! No configuration changes the probability a solve concludes with, only the order and cost of the search.

pub mod defaults;

/// The probability of some event, in the unit interval.
pub type Probability = f64;

/// The configuration of a context.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which simplifications to apply before splitting on a variable.
    pub switch: Switches,

    /// How to pick the variable to split on.
    pub heuristic: Heuristic,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            switch: Switches::default(),
            heuristic: defaults::HEURISTIC,
        }
    }
}

/// Boolean valued solver configurations.
///
/// When set to true things related to the identifier are enabled.
#[derive(Debug, Clone)]
pub struct Switches {
    /// Settle the sole surviving literal of a unit clause before splitting.
    pub unit_propagation: bool,

    /// Settle unvalued choice variables whose surviving occurrences all share a polarity.
    pub pure_elimination: bool,
}

impl Default for Switches {
    fn default() -> Self {
        Switches {
            unit_propagation: defaults::UNIT_PROPAGATION,
            pure_elimination: defaults::PURE_ELIMINATION,
        }
    }
}

/// How the decision variable is picked from the leftmost quantifier block with unvalued variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// The first unvalued variable, in declaration order.
    DeclarationOrder,

    /// A variable of the block occurring in the shortest surviving clause.
    ShortestClause,

    /// The variable of the block with the most surviving occurrences, ties to the first found.
    OccurrenceCount,

    /// The variable of the block maximising max(positive weight, negative weight), where the occurrence counts of a chance variable are scaled by the probability the matching polarity resolves true.
    WeightedPolarity,
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeclarationOrder => write!(f, "DeclarationOrder"),
            Self::ShortestClause => write!(f, "ShortestClause"),
            Self::OccurrenceCount => write!(f, "OccurrenceCount"),
            Self::WeightedPolarity => write!(f, "WeightedPolarity"),
        }
    }
}
