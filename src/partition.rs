use std::num::NonZeroUsize;
use std::ops::Range;

use crate::FIRST_CANDIDATE;

/**
Split `[2, bound)` into one contiguous range per worker

Boundary `i` is `i * bound / workers`, clamped so that nothing below
[`FIRST_CANDIDATE`] is ever scanned. With two workers the split point is therefore exactly
`bound / 2`:

```
# use std::num::NonZeroUsize;
# use primecount::partition::split;
let workers = NonZeroUsize::new(2).unwrap();
assert_eq!(split(200_000, workers), [2..100_000, 100_000..200_000]);
```

The ranges never overlap and together cover exactly `[2, bound)`.
Ranges may be empty if the bound is small compared to the number of workers.
*/
pub fn split(bound: u32, workers: NonZeroUsize) -> Vec<Range<u32>> {
    let n = workers.get() as u64;
    let boundary = |i: u64| -> u32 {
        // i <= n, so the quotient is at most `bound`
        let raw = (i * u64::from(bound) / n) as u32;
        raw.max(FIRST_CANDIDATE)
    };

    (0..n).map(|i| boundary(i)..boundary(i + 1)).collect()
}
