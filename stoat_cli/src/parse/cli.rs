use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

pub fn cli() -> Command {
    Command::new("stoat_sat")
        .about("Computes the maximum satisfaction probability of a stochastic CNF formula")

        .arg(Arg::new("strategy")
            .required(true)
            .num_args(1)
            .value_parser(["n", "u", "p", "b", "1", "2", "3"])
            .help("The solving strategy.")
            .long_help("The solving strategy.

  - n: split on variables in declaration order, with no simplification
  - u: as n, settling unit clauses first
  - p: as n, settling pure choice variables first
  - b: as n, with both simplifications
  - 1: as b, splitting on the block variable in the shortest surviving clause
  - 2: as b, splitting on the block variable with the most surviving occurrences
  - 3: as b, splitting on the block variable with the weightiest polarity

Every strategy concludes with the same probability --- they differ only in the cost of getting there."))

        .arg(Arg::new("path")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The .ssat instance to solve (.xz files are decompressed transparently)."))
}
