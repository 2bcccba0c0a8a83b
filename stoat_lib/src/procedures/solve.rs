//! The solve procedure.
//!
//! A depth-first search over branches of the formula, driven by an explicit task stack rather than call recursion --- branching depth is bounded only by the variable count, and large instances would otherwise gnaw through the call stack.
//!
//! Probabilities combine on the way back up:
//! - a forced literal passes its sub-result through unweighted for a choice variable, and weighted by the probability of the forced outcome for a chance variable;
//! - a split on a choice variable takes the better polarity, and a split on a chance variable the expectation over both.

use std::time::Instant;

use crate::{
    config::Probability,
    context::Context,
    db::formula::{Formula, FormulaStatus},
    misc::log::targets::{self},
    structures::{atom::Atom, literal::Literal, variable::Quantifier},
};

/// A task on the solve stack.
enum Task {
    /// Establish the probability of satisfying the given branch state.
    Explore(Formula),

    /// Weight the probability of the completed branch by the given factor.
    Scale(Probability),

    /// Combine the probabilities of both polarities of the given atom.
    Combine(Atom),
}

impl Context {
    /// The maximum probability that the formula is satisfied, under the configured search.
    ///
    /// Always a value in the unit interval --- a solve has no failure mode once an instance is read.
    pub fn solve(&mut self) -> Probability {
        let this_total_time = Instant::now();

        // Each explored branch nets exactly one result: a scale pops one and
        // pushes one, and a combine pops the results of both polarities of a
        // split.  The stacks stay in step, and one result remains at the end.
        let mut tasks = vec![Task::Explore(self.formula.clone())];
        let mut results: Vec<Probability> = Vec::new();

        'task_loop: while let Some(task) = tasks.pop() {
            match task {
                Task::Scale(factor) => {
                    let probability = results.pop().expect("a scale follows its branch");
                    results.push(probability * factor);
                }

                Task::Combine(atom) => {
                    let true_probability = results.pop().expect("a combine follows both polarities");
                    let false_probability = results.pop().expect("a combine follows both polarities");

                    let combined = match self.variable_db.quantifier(atom) {
                        Quantifier::Choice => Probability::max(false_probability, true_probability),
                        Quantifier::Chance(probability) => {
                            true_probability * probability + false_probability * (1.0 - probability)
                        }
                    };
                    results.push(combined);
                }

                Task::Explore(mut formula) => {
                    match formula.status() {
                        FormulaStatus::Conflicted => {
                            results.push(0.0);
                            continue 'task_loop;
                        }
                        FormulaStatus::Satisfied => {
                            results.push(1.0);
                            continue 'task_loop;
                        }
                        FormulaStatus::Open => {}
                    }

                    if self.config.switch.unit_propagation {
                        if let Some(literal) = formula.unit_literal() {
                            self.counters.propagations += 1;
                            log::trace!(target: targets::PROPAGATION, "Unit {literal}");

                            // The branch explores only the outcome consistent
                            // with the forced literal, so a chance variable
                            // weights the sub-result by that outcome alone.
                            match self.variable_db.quantifier(literal.atom()) {
                                Quantifier::Choice => {}
                                Quantifier::Chance(probability) => {
                                    let weight = match literal.polarity() {
                                        true => probability,
                                        false => 1.0 - probability,
                                    };
                                    tasks.push(Task::Scale(weight));
                                }
                            }

                            formula.settle(literal);
                            tasks.push(Task::Explore(formula));
                            continue 'task_loop;
                        }
                    }

                    if self.config.switch.pure_elimination {
                        if let Some(literal) = formula.pure_choice_literal(&self.variable_db) {
                            self.counters.eliminations += 1;
                            log::trace!(target: targets::ELIMINATION, "Pure {literal}");

                            formula.settle(literal);
                            tasks.push(Task::Explore(formula));
                            continue 'task_loop;
                        }
                    }

                    // An open formula has an unresolved clause, whose surviving
                    // literals reference unvalued atoms.
                    let atom = self
                        .select_decision_atom(&formula)
                        .expect("an open formula has an unvalued atom");
                    self.counters.decisions += 1;
                    log::trace!(target: targets::DECISION, "Decision {}", atom + 1);

                    let mut false_formula = formula.clone();
                    false_formula.settle(Literal::new(atom, false));
                    formula.settle(Literal::new(atom, true));

                    tasks.push(Task::Combine(atom));
                    tasks.push(Task::Explore(formula));
                    tasks.push(Task::Explore(false_formula));
                }
            }
        }

        self.counters.time = this_total_time.elapsed();

        let probability = results.pop().expect("a solve concludes with a result");
        log::info!(
            target: targets::SOLVE,
            "Solved to {probability} with {} decisions in {:?}",
            self.counters.decisions,
            self.counters.time,
        );
        probability
    }
}
