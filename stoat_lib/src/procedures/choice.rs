//! Selection of the decision variable.
//!
//! A decision must fall on an unvalued variable of the leftmost quantifier block with unvalued variables --- within the block, the configured heuristic is free to order candidates however it likes.

use crate::{
    config::Heuristic,
    context::Context,
    db::formula::Formula,
    structures::{atom::Atom, variable::Quantifier},
};

impl Context {
    /// The atom to split on, per the configured heuristic, or none when every variable is valued.
    pub fn select_decision_atom(&self, formula: &Formula) -> Option<Atom> {
        let first = formula.first_unvalued()?;

        let selection = match self.config.heuristic {
            Heuristic::DeclarationOrder => first,
            Heuristic::ShortestClause => self.in_shortest_clause(formula, first),
            Heuristic::OccurrenceCount => self.most_occurrences(formula, first),
            Heuristic::WeightedPolarity => self.weightiest_polarity(formula, first),
        };

        Some(selection)
    }

    /// The block variable occurring in the shortest surviving clause.
    fn in_shortest_clause(&self, formula: &Formula, first: Atom) -> Atom {
        let mut selected = first;
        let mut shortest = usize::MAX;

        for atom in self.variable_db.block(first) {
            if formula.value_of(atom).is_some() {
                continue;
            }
            for occurrence in formula.occurrences_of(atom) {
                let length = formula.clause(occurrence.clause).size();
                if length < shortest {
                    shortest = length;
                    selected = atom;
                }
            }
        }

        selected
    }

    /// The block variable with the most surviving occurrences, ties to the first found.
    fn most_occurrences(&self, formula: &Formula, first: Atom) -> Atom {
        let mut selected = first;
        let mut most = 0;

        for atom in self.variable_db.block(first) {
            if formula.value_of(atom).is_some() {
                continue;
            }
            let count = formula.occurrences_of(atom).len();
            if count > most {
                most = count;
                selected = atom;
            }
        }

        selected
    }

    /// The block variable maximising max(positive weight, negative weight).
    ///
    /// Occurrence counts of a chance variable are scaled by the probability the matching polarity resolves true, so the weight of a variable estimates the clauses one well-chosen (or likely) assignment settles.
    fn weightiest_polarity(&self, formula: &Formula, first: Atom) -> Atom {
        let mut selected = first;
        let mut weightiest = 0.0;

        for atom in self.variable_db.block(first) {
            if formula.value_of(atom).is_some() {
                continue;
            }

            let mut positive = 0.0;
            let mut negative = 0.0;
            for occurrence in formula.occurrences_of(atom) {
                match occurrence.polarity {
                    true => positive += 1.0,
                    false => negative += 1.0,
                }
            }

            if let Quantifier::Chance(probability) = self.variable_db.quantifier(atom) {
                positive *= probability;
                negative *= 1.0 - probability;
            }

            let weight = f64::max(positive, negative);
            if weight > weightiest {
                weightiest = weight;
                selected = atom;
            }
        }

        selected
    }
}
