use stoat_lib::{
    config::{Config, Heuristic, Switches},
    context::Context,
};

// Every strategy concludes with the same probability, at its own cost.
fn main() {
    let instance = "
variables
1 -1
2 -1
3 0.5
4 0.5

clauses
1 3 0
-1 4 0
2 -3 0
-2 -4 0
";

    let strategies = [
        ("naive", Switches { unit_propagation: false, pure_elimination: false }, Heuristic::DeclarationOrder),
        ("unit", Switches { unit_propagation: true, pure_elimination: false }, Heuristic::DeclarationOrder),
        ("pure", Switches { unit_propagation: false, pure_elimination: true }, Heuristic::DeclarationOrder),
        ("both", Switches { unit_propagation: true, pure_elimination: true }, Heuristic::DeclarationOrder),
        ("h1", Switches { unit_propagation: true, pure_elimination: true }, Heuristic::ShortestClause),
        ("h2", Switches { unit_propagation: true, pure_elimination: true }, Heuristic::OccurrenceCount),
        ("h3", Switches { unit_propagation: true, pure_elimination: true }, Heuristic::WeightedPolarity),
    ];

    for (name, switch, heuristic) in strategies {
        let mut the_context = Context::from_config(Config { switch, heuristic });

        the_context
            .read_ssat(instance.as_bytes())
            .expect("a readable instance");

        let probability = the_context.solve();

        println!(
            "{name:>5}: {probability} with {} decisions, {} propagations, {} eliminations",
            the_context.counters.decisions,
            the_context.counters.propagations,
            the_context.counters.eliminations,
        );
    }
}
