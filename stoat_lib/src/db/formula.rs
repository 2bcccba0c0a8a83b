//! The mutable state of one branch of the search.

use crate::structures::{
    atom::Atom,
    clause::{Clause, ClauseStatus},
    literal::Literal,
};

/// An occurrence of an atom in a clause, tagged with the polarity of the occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// The index of the clause the atom occurs in.
    pub clause: usize,

    /// The polarity of the literal the atom occurs as.
    pub polarity: bool,
}

/// The aggregate status of the clauses of a formula on some branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaStatus {
    /// Some clause is unresolved.
    Open,

    /// Every clause is satisfied --- vacuously so, for a formula without clauses.
    Satisfied,

    /// Some clause is conflicted.
    Conflicted,
}

/// The clauses, occurrence index, and valuation of one branch of the search.
///
/// A context owns the pristine formula built while reading an instance.
/// A solve clones the pristine formula, and each split of the search clones again, one copy per polarity --- no branch ever observes the mutations of a sibling.
///
/// The occurrence index holds an entry for an (atom, clause) pair exactly as long as the clause is unresolved and a literal of the atom survives in it.
#[derive(Debug, Clone, Default)]
pub struct Formula {
    pub(crate) clauses: Vec<Clause>,
    pub(crate) occurrences: Vec<Vec<Occurrence>>,
    pub(crate) valuation: Vec<Option<bool>>,
}

impl Formula {
    /// A count of the clauses of the formula, resolved or not.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clause at the given index.
    pub fn clause(&self, index: usize) -> &Clause {
        &self.clauses[index]
    }

    /// The value of the given atom on this branch, if valued.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The surviving occurrences of the given atom.
    pub fn occurrences_of(&self, atom: Atom) -> &[Occurrence] {
        &self.occurrences[atom as usize]
    }

    /// The first unvalued atom, in declaration order --- an atom of the leftmost open quantifier block.
    pub fn first_unvalued(&self) -> Option<Atom> {
        self.valuation
            .iter()
            .position(|value| value.is_none())
            .map(|index| index as Atom)
    }

    /// The aggregate status of the clauses of the formula.
    pub fn status(&self) -> FormulaStatus {
        let mut open = false;
        for clause in &self.clauses {
            match clause.status() {
                ClauseStatus::Conflicted => return FormulaStatus::Conflicted,
                ClauseStatus::Unresolved => open = true,
                ClauseStatus::Satisfied => {}
            }
        }
        match open {
            true => FormulaStatus::Open,
            false => FormulaStatus::Satisfied,
        }
    }

    /// Extends the occurrence index and valuation for a fresh atom.
    pub(crate) fn fresh_atom_slot(&mut self) {
        self.occurrences.push(Vec::new());
        self.valuation.push(None);
    }

    /// Stores a clause and indexes its occurrences.
    pub(crate) fn add_clause(&mut self, literals: Vec<Literal>) {
        let index = self.clauses.len();
        for literal in &literals {
            self.occurrences[literal.atom() as usize].push(Occurrence {
                clause: index,
                polarity: literal.polarity(),
            });
        }
        self.clauses.push(Clause::from_literals(literals));
    }
}
