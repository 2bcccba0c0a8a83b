//! A database of variables, in declaration order.

use crate::structures::{atom::Atom, variable::Quantifier};

/// The variables of an instance, fixed once the instance has been read.
///
/// Declaration order doubles as quantifier order: maximal runs of same-kind variables form the quantifier blocks of the instance.
/// Blocks are a property derived from the declaration sequence, queried through [block](VariableDB::block), and are never stored.
#[derive(Debug, Clone, Default)]
pub struct VariableDB {
    quantifiers: Vec<Quantifier>,
}

impl VariableDB {
    /// A count of the variables declared.
    pub fn count(&self) -> usize {
        self.quantifiers.len()
    }

    /// The quantifier of the given atom.
    pub fn quantifier(&self, atom: Atom) -> Quantifier {
        self.quantifiers[atom as usize]
    }

    /// Declares a fresh variable and returns its atom.
    pub(crate) fn fresh_variable(&mut self, quantifier: Quantifier) -> Atom {
        let atom = self.quantifiers.len() as Atom;
        self.quantifiers.push(quantifier);
        atom
    }

    /// The quantifier block containing `from`, truncated to start at `from`.
    ///
    /// That is, the atoms of the maximal run of variables sharing `from`'s quantifier kind, from `from` on.
    pub fn block(&self, from: Atom) -> impl Iterator<Item = Atom> + '_ {
        let choice_block = self.quantifiers[from as usize].is_choice();
        (from..self.quantifiers.len() as Atom)
            .take_while(move |atom| self.quantifiers[*atom as usize].is_choice() == choice_block)
    }
}
