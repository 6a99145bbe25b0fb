//! Counters that several workers can feed at once
//!
//! Only the strategies that keep a counter shared between the workers live here.
//! [`Strategy::Local`](crate::Strategy::Local) and [`Strategy::Channel`](crate::Strategy::Channel)
//! never share a counter during the scan, and are handled directly by
//! [`count_primes`](crate::count_primes).

use std::sync::PoisonError;

use crate::sync::{AtomicUsize, Mutex, Ordering};

/// A counter shared by reference between all workers
pub trait SharedTally: Send + Sync {
    /// Add `n` to the total
    fn add(&self, n: usize);

    /// Read the total
    ///
    /// Only meaningful once every worker has been joined.
    fn total(&self) -> usize;

    fn increment(&self) {
        self.add(1);
    }
}

// -------------------------------------

/// Counter based on a single atomic `fetch_add`
pub struct AtomicTally(AtomicUsize);

impl AtomicTally {
    pub fn new() -> Self {
        Self(AtomicUsize::new(0))
    }
}

impl Default for AtomicTally {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedTally for AtomicTally {
    fn add(&self, n: usize) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    fn total(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

// -------------------------------------

/// Counter guarded by a mutex
pub struct MutexTally(Mutex<usize>);

impl MutexTally {
    pub fn new() -> Self {
        Self(Mutex::new(0))
    }
}

impl Default for MutexTally {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedTally for MutexTally {
    fn add(&self, n: usize) {
        // The guarded value is a plain integer, so a poisoned lock is still consistent
        let mut count = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        *count += n;
    }

    fn total(&self) -> usize {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// -------------------------------------

/**
Counter updated with a separate load and store

Two workers can both load the same value and both store that value plus one, in which case
one of the updates is lost. The final total can therefore come out lower than the number of
increments. Every individual access is still atomic, so this is a race condition and never a
data race.
*/
pub struct UnsynchronizedTally(AtomicUsize);

impl UnsynchronizedTally {
    pub fn new() -> Self {
        Self(AtomicUsize::new(0))
    }
}

impl Default for UnsynchronizedTally {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedTally for UnsynchronizedTally {
    fn add(&self, n: usize) {
        let current = self.0.load(Ordering::Relaxed);
        self.0.store(current + n, Ordering::Relaxed);
    }

    fn total(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}
