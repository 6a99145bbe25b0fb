use std::num::NonZeroUsize;
use std::ops::Range;
use std::thread::{Scope, ScopedJoinHandle};
use std::time::Instant;

use tracing::{debug, debug_span, info, warn};

use crate::tally::{AtomicTally, MutexTally, SharedTally, UnsynchronizedTally};
use crate::{is_prime, partition, Config, CountError, Strategy, MAX_WORKERS};

/**
Count the primes in `[2, config.bound)` using `config.workers` threads

The search space is split with [`partition::split`], every range gets its own scoped thread,
and the partial results are combined as decided by `config.strategy`.
The orchestrating thread only spawns and joins.

```
# use primecount::{count_primes, Config, Strategy};
let config = Config::new(20, 2, Strategy::Local);
assert_eq!(count_primes(&config), Ok(8));
```
*/
pub fn count_primes(config: &Config) -> Result<usize, CountError> {
    let workers = NonZeroUsize::new(config.workers).ok_or(CountError::NoWorkers)?;
    if workers.get() > MAX_WORKERS {
        return Err(CountError::TooManyWorkers {
            workers: workers.get(),
            max: MAX_WORKERS,
        });
    }

    let ranges = partition::split(config.bound, workers);
    debug!(bound = config.bound, ?ranges, "Partitioned search space");
    if !config.strategy.is_deterministic() {
        warn!(strategy = ?config.strategy, "Increments may be lost, the total can come out low");
    }

    let start = Instant::now();
    let total = match config.strategy {
        Strategy::Local => count_local(&ranges)?,
        Strategy::Atomic => count_shared(&ranges, AtomicTally::new())?,
        Strategy::Mutex => count_shared(&ranges, MutexTally::new())?,
        Strategy::Channel => count_channel(&ranges)?,
        Strategy::Unsynchronized => count_shared(&ranges, UnsynchronizedTally::new())?,
    };

    let elapsed = start.elapsed();
    info!(total, strategy = ?config.strategy, ?elapsed, "Counted primes");
    Ok(total)
}

/// Shorthand for [`count_primes`] without building a [`Config`] first
pub fn count_primes_with(
    bound: u32,
    workers: usize,
    strategy: Strategy,
) -> Result<usize, CountError> {
    count_primes(&Config::new(bound, workers, strategy))
}

/// Count the primes in `range` on the current thread
pub fn count_primes_in(range: Range<u32>) -> usize {
    range.filter(|&n| is_prime(n)).count()
}

// -------------------------------------

fn count_local(ranges: &[Range<u32>]) -> Result<usize, CountError> {
    std::thread::scope(|s| {
        let handles = spawn_workers(s, ranges, count_primes_in);
        Ok(join_all(handles)?.into_iter().sum())
    })
}

fn count_shared(ranges: &[Range<u32>], tally: impl SharedTally) -> Result<usize, CountError> {
    let tally = &tally;
    std::thread::scope(|s| {
        let handles = spawn_workers(s, ranges, |range| {
            for n in range {
                if is_prime(n) {
                    tally.increment();
                }
            }
        });
        join_all(handles)
    })?;

    Ok(tally.total())
}

fn count_channel(ranges: &[Range<u32>]) -> Result<usize, CountError> {
    let (sender, receiver) = crossbeam_channel::unbounded();

    std::thread::scope(|s| {
        let handles = spawn_workers(s, ranges, |range| {
            sender
                .send(count_primes_in(range))
                .map_err(|_| CountError::ChannelClosed)
        });
        join_all(handles)?.into_iter().collect::<Result<(), _>>()
    })?;

    drop(sender);
    let partials: Vec<usize> = receiver.iter().collect();
    if partials.len() != ranges.len() {
        return Err(CountError::ChannelClosed);
    }

    Ok(partials.into_iter().sum())
}

// -------------------------------------

fn spawn_workers<'scope, 'env, F, T>(
    s: &'scope Scope<'scope, 'env>,
    ranges: &[Range<u32>],
    work: F,
) -> Vec<ScopedJoinHandle<'scope, T>>
where
    F: Fn(Range<u32>) -> T + Copy + Send + 'scope,
    T: Send + 'scope,
{
    ranges
        .iter()
        .cloned()
        .enumerate()
        .map(|(worker, range)| {
            s.spawn(move || {
                let _span = debug_span!("worker", worker).entered();
                debug!(?range, "Scanning");
                work(range)
            })
        })
        .collect()
}

/// Join every handle before reporting the first worker that panicked
fn join_all<T>(handles: Vec<ScopedJoinHandle<'_, T>>) -> Result<Vec<T>, CountError> {
    let results: Vec<_> = handles.into_iter().map(ScopedJoinHandle::join).collect();
    results
        .into_iter()
        .enumerate()
        .map(|(worker, result)| result.map_err(|_| CountError::WorkerPanicked { worker }))
        .collect()
}
