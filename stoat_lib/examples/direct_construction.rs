use stoat_lib::{config::Config, context::Context, structures::literal::Literal};

fn main() {
    let mut the_context = Context::from_config(Config::default());

    // One controllable switch and two unreliable sensors: engaging the switch
    // leans on the second sensor, leaving it alone leans on the first.
    let switch = the_context.fresh_choice();
    let first_sensor = the_context.fresh_chance(0.9).expect("a probability");
    let second_sensor = the_context.fresh_chance(0.6).expect("a probability");

    let disengaged = vec![Literal::new(switch, true), Literal::new(first_sensor, true)];
    let engaged = vec![Literal::new(switch, false), Literal::new(second_sensor, true)];

    assert!(the_context.add_clause(disengaged).is_ok());
    assert!(the_context.add_clause(engaged).is_ok());

    let probability = the_context.solve();

    println!("The best policy succeeds with probability {probability}");
    println!(
        "({} decisions, {} propagations, {} eliminations in {:?})",
        the_context.counters.decisions,
        the_context.counters.propagations,
        the_context.counters.eliminations,
        the_context.counters.time,
    );

    assert_eq!(probability, 0.9);
}
