use clap::{Args, ValueEnum};

/// Exclusive upper limit searched when nothing else is asked for
pub const DEFAULT_BOUND: u32 = 200_000;

/// Number of workers used when nothing else is asked for
pub const DEFAULT_WORKERS: usize = 2;

/// Largest number of workers accepted, every worker is its own OS thread
pub const MAX_WORKERS: usize = 1024;

/// How the counts found by each worker end up in a single total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Strategy {
    /// Every worker counts privately, the totals are summed after joining
    #[default]
    Local,
    /// Every prime found is added to a shared atomic counter
    Atomic,
    /// Every prime found is added to a shared counter behind a mutex
    Mutex,
    /// Every worker sends its count to the orchestrator over a channel
    Channel,
    /// Every prime found is added with a separate load and store (updates can be lost)
    Unsynchronized,
}

impl Strategy {
    /// Whether the total is guaranteed to be the same on every run
    pub fn is_deterministic(self) -> bool {
        !matches!(self, Strategy::Unsynchronized)
    }
}

/**
What to count, and how

The defaults reproduce the classic behaviour: two workers scanning everything below 200 000.

```
# use primecount::{Config, Strategy};
let config = Config::default();
assert_eq!(config.bound, 200_000);
assert_eq!(config.workers, 2);
assert_eq!(config.strategy, Strategy::Local);
```
*/
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct Config {
    /// Exclusive upper limit of the search
    #[arg(long, default_value_t = DEFAULT_BOUND)]
    pub bound: u32,

    /// Number of worker threads splitting the search
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// How partial counts are combined
    #[arg(long, value_enum, default_value_t = Strategy::default())]
    pub strategy: Strategy,
}

impl Config {
    pub fn new(bound: u32, workers: usize, strategy: Strategy) -> Self {
        Self {
            bound,
            workers,
            strategy,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BOUND, DEFAULT_WORKERS, Strategy::default())
    }
}
