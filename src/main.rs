use std::env;
use std::process;

use peplint::{Config, ConfigError};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "peplint=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = Config::build(&args).unwrap_or_else(|err| {
        match err {
            ConfigError::HelpRequested => {
                println!("{}", peplint::config::help());
                process::exit(0);
            }
            ConfigError::MissingInput => println!("{}", peplint::config::help()),
            ConfigError::InvalidFlag(_) => println!("{err}\n\n{}", peplint::config::help()),
        }
        process::exit(1);
    });
    init_logging(config.verbose);

    match peplint::run(&config) {
        Ok(reports) => {
            print!("{}", peplint::render(&reports));
            process::exit(peplint::exit_status(&reports));
        }
        Err(e) => {
            println!("Error: {e}");
            process::exit(1);
        }
    }
}
