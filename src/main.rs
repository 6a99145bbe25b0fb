use anyhow::Result;
use clap::Parser;
use primecount::logging::{init_tracing_subscriber, LogOptions};
use primecount::{count_primes, Config};

/// Count the prime numbers below a bound using several worker threads
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log nothing
    #[arg(short, long, conflicts_with = "verbose")]
    silent: bool,
}

fn main() {
    let cli = Cli::parse();
    let options = LogOptions {
        verbosity: cli.verbose,
        silent: cli.silent,
    };

    if let Err(err) = init_tracing_subscriber(options) {
        eprintln!("Failed to set up logging: {err}");
        std::process::exit(1);
    }

    if let Err(err) = run(&cli.config) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let count = count_primes(config)?;
    println!("Found {count} prime numbers.");
    Ok(())
}
