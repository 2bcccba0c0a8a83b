use clap::ArgMatches;

use stoat_lib::config::{Config, Heuristic};

pub fn config_from_args(matches: &ArgMatches) -> Config {
    let strategy = matches
        .get_one::<String>("strategy")
        .expect("strategy is required");

    let mut config = Config::default();

    match strategy.as_str() {
        "n" => {
            config.switch.unit_propagation = false;
            config.switch.pure_elimination = false;
        }
        "u" => config.switch.pure_elimination = false,
        "p" => config.switch.unit_propagation = false,
        "b" => {}
        "1" => config.heuristic = Heuristic::ShortestClause,
        "2" => config.heuristic = Heuristic::OccurrenceCount,
        "3" => config.heuristic = Heuristic::WeightedPolarity,
        _ => unreachable!("the strategy parser admits no other value"),
    };

    config
}
