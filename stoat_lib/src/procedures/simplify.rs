//! Detection of forced simplifications --- unit literals and pure choice literals.
//!
//! Neither changes the probability a solve concludes with: a unit literal is forced (the alternative conflicts its clause), and valuing a pure choice variable against its occurrences can satisfy no clause the pure polarity does not.

use crate::{
    db::{formula::Formula, variable::VariableDB},
    structures::{
        atom::Atom,
        clause::ClauseStatus,
        literal::Literal,
    },
};

impl Formula {
    /// The sole surviving literal of the first unit clause, if any clause is unit.
    pub fn unit_literal(&self) -> Option<Literal> {
        for clause in &self.clauses {
            if clause.status() == ClauseStatus::Unresolved && clause.size() == 1 {
                return clause.literals().first().copied();
            }
        }
        None
    }

    /// A literal settling the first pure choice variable, if any choice variable is pure.
    ///
    /// A choice variable is pure when unvalued with every surviving occurrence of one polarity.
    /// Chance variables are never settled this way --- their weight is owed whichever polarity is explored.
    pub fn pure_choice_literal(&self, variable_db: &VariableDB) -> Option<Literal> {
        'atom_loop: for atom in 0..variable_db.count() as Atom {
            if self.value_of(atom).is_some() || !variable_db.quantifier(atom).is_choice() {
                continue 'atom_loop;
            }

            let occurrences = self.occurrences_of(atom);
            let Some(first) = occurrences.first() else {
                continue 'atom_loop;
            };

            if occurrences.iter().all(|occurrence| occurrence.polarity == first.polarity) {
                return Some(Literal::new(atom, first.polarity));
            }
        }
        None
    }
}
