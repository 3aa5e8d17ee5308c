//! Arena Headless Balance Simulator
//!
//! Plays complete games with an autopilot instead of a player and reports
//! win rates, where heroes die and which upgrades get picked.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N         Number of games (default: 100)
//!   --seed N         Base RNG seed, game i uses seed + i (default: 42)
//!   --strategy S     Upgrade picks: first | random | greedy (default: first)
//!   --json           Print the report as JSON
//!   --verbose        Per-run debug logging to stderr
//!   --quiet          Only the final summary line

use arena::build_info;
use arena::simulator::{run_simulation, SimCommand, SimConfig};
use arena::utils::init_stderr_logging;

fn print_usage() {
    eprintln!(
        "Arena Headless Balance Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of games (default: 100)\n\
         \x20 --seed N        Base RNG seed, game i uses seed + i (default: 42)\n\
         \x20 --strategy S    Upgrade picks: first | random | greedy (default: first)\n\
         \x20 --json          Print the report as JSON\n\
         \x20 --verbose       Per-run debug logging to stderr\n\
         \x20 --quiet         Only the final summary line\n\
         \x20 --version, -v   Show version information\n\
         \x20 --help, -h      Show this help"
    );
}

fn parse_args() -> SimConfig {
    match SimConfig::from_args(std::env::args().skip(1)) {
        Ok(SimCommand::Run(config)) => config,
        Ok(SimCommand::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(SimCommand::Version) => {
            println!("{}", build_info::version_string("simulator"));
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn main() {
    let config = parse_args();
    init_stderr_logging(if config.verbose { "debug" } else { "warn" });

    if !config.quiet && !config.json {
        println!(
            "Simulating {} games (seed {}, strategy {})...\n",
            config.runs, config.seed, config.strategy
        );
    }

    let report = run_simulation(&config);

    if config.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else if config.quiet {
        println!("{}", report.summary_line());
    } else {
        report.print_summary();
    }
}
