use std::env;
use std::io::{self, IsTerminal};

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

const LOG_FILTER: &str = "RUST_LOG";

/// Verbosity requested on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOptions {
    pub verbosity: u8,
    pub silent: bool,
}

impl LogOptions {
    /// Level forced by the options, if any, which takes priority over `RUST_LOG`
    pub fn level_filter(&self) -> Option<LevelFilter> {
        if self.silent {
            return Some(LevelFilter::OFF);
        }

        match self.verbosity {
            0 => None,
            1 => Some(LevelFilter::DEBUG),
            _ => Some(LevelFilter::TRACE),
        }
    }
}

/**
Install a global subscriber writing to stderr

Standard output is left to the result line alone.
`RUST_LOG` selects what gets logged, defaulting to `info`.
*/
pub fn init_tracing_subscriber(options: LogOptions) -> anyhow::Result<()> {
    let env_filter = match env::var_os(LOG_FILTER) {
        Some(_) => EnvFilter::try_from_default_env()?,
        None => EnvFilter::new("info"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false);

    let result = match options.level_filter() {
        Some(level_filter) => builder.with_max_level(level_filter).try_init(),
        None => builder.try_init(),
    };

    result.map_err(|err| anyhow::anyhow!(err))
}
