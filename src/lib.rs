/*!
Count prime numbers below a bound by splitting the search across worker threads

The search space `[2, bound)` is partitioned into one contiguous range per worker.
Every worker scans its own range with a deliberately naive trial division ([`is_prime`]),
and the partial results are combined into a single total once every worker has been joined.

By default two workers search everything below 200 000:

```
# use primecount::{count_primes, Config};
# let config = Config { bound: 2_000, ..Config::default() };
let total = count_primes(&config)?;
# assert_eq!(total, 303);
# Ok::<(), primecount::CountError>(())
```

# Strategies

How the partial results are combined is decided by a [`Strategy`]:

- [`Local`](Strategy::Local): every worker counts on its own and returns its count when joined.
  Nothing is shared while scanning.
- [`Atomic`](Strategy::Atomic): a shared atomic counter, incremented once per prime found.
- [`Mutex`](Strategy::Mutex): a shared counter behind a lock, incremented once per prime found.
- [`Channel`](Strategy::Channel): every worker sends its count to the orchestrating thread.
- [`Unsynchronized`](Strategy::Unsynchronized): a shared counter incremented by a separate load
  and store. Increments from different workers can overwrite each other, so the total may come
  out too low. This is kept around to observe exactly that.

All strategies except the last one give the same result on every run.
*/

mod config;
mod count;
mod error;
mod prime;
mod sync;

pub mod logging;
pub mod partition;
pub mod tally;

pub use crate::config::{Config, Strategy, DEFAULT_BOUND, DEFAULT_WORKERS, MAX_WORKERS};
pub use crate::count::{count_primes, count_primes_in, count_primes_with};
pub use crate::error::CountError;
pub use crate::prime::is_prime;

/// Smallest number ever handed to [`is_prime`] by a scan
pub const FIRST_CANDIDATE: u32 = 2;
