//! `marcher <image> <mode>`: draw the least-energy path across an image.

use clap::Parser;
use log::debug;

use marcher_lib::{Cli, RunConfig, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli);

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            debug!("run failed: {e:?}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
