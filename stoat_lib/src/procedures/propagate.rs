//! Propagation --- the consequences of valuing a variable.

use crate::{
    db::formula::Formula,
    misc::log::targets::{self},
    structures::{clause::ClauseStatus, literal::Literal},
};

impl Formula {
    /// Values the atom of `literal` with `literal`'s polarity and realises the consequences across the branch.
    ///
    /// Every unresolved clause in which the atom occurs with matching polarity is satisfied, and every occurrence entry referencing such a clause is dropped --- the clause no longer constrains the search.
    /// Every unresolved clause in which the atom occurs with opposite polarity has that literal stripped, along with its occurrence entry, and a clause stripped of its last literal is conflicted.
    ///
    /// An atom occurring in both polarities in one clause satisfies the clause: each occurrence is examined independently, and the matching occurrence settles the matter.
    pub fn settle(&mut self, literal: Literal) {
        let atom = literal.atom();
        self.valuation[atom as usize] = Some(literal.polarity());

        'clause_loop: for index in 0..self.clauses.len() {
            if self.clauses[index].status() != ClauseStatus::Unresolved {
                continue 'clause_loop;
            }

            let mut now_true = false;
            let mut now_false = false;
            for clause_literal in self.clauses[index].literals() {
                if clause_literal.atom() == atom {
                    match clause_literal.polarity() == literal.polarity() {
                        true => now_true = true,
                        false => now_false = true,
                    }
                }
            }

            if now_true {
                let survivors = self.clauses[index].literals().to_vec();
                for survivor in survivors {
                    self.remove_occurrence(survivor, index);
                }
                self.clauses[index].set_satisfied();
            } else if now_false {
                self.remove_occurrence(!literal, index);
                if self.clauses[index].strip(!literal) == ClauseStatus::Conflicted {
                    log::trace!(target: targets::PROPAGATION, "{literal} conflicts clause {index}");
                }
            }
        }
    }

    /// Drops the occurrence entry pairing `literal`'s atom and polarity with the given clause, if present.
    fn remove_occurrence(&mut self, literal: Literal, clause: usize) {
        let list = &mut self.occurrences[literal.atom() as usize];
        if let Some(position) = list
            .iter()
            .position(|occurrence| occurrence.clause == clause && occurrence.polarity == literal.polarity())
        {
            list.swap_remove(position);
        }
    }
}
