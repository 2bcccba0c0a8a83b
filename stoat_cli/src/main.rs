#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use stoat_lib::context::Context;

mod misc;
mod parse;

use crate::misc::load_ssat;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = parse::config::config_from_args(&matches);
    let path = matches
        .get_one::<PathBuf>("path")
        .expect("path is required")
        .clone();

    let mut the_context = Context::from_config(config);

    println!("c reading {}", path.display());
    match load_ssat(&mut the_context, &path) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("c error reading instance: {e:?}");
            std::process::exit(1);
        }
    };
    println!(
        "c {} variables over {} clauses",
        the_context.variable_db.count(),
        the_context.formula.clause_count()
    );

    let probability = the_context.solve();

    println!("s {probability}");
    println!(
        "c {} decisions, {} propagations, {} eliminations",
        the_context.counters.decisions,
        the_context.counters.propagations,
        the_context.counters.eliminations
    );
    println!("c solved in {:?}", the_context.counters.time);
}
