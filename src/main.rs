use std::io;
use std::process;

use clap::Parser;

use instructor_queue::args::Args;
use instructor_queue::Config;

fn main() {
    let args = Args::parse();

    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not parse arguments: {err}");
        process::exit(1);
    });

    // RUST_LOG still takes precedence over the verbosity flag
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = instructor_queue::run(&config, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }
}
