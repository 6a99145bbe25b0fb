/**
Decide whether `n` is prime by trial division

Every candidate divisor from `2` up to and including `n / 2` is tried, even ones included.

Note that `0` and `1` are reported as prime, since the divisor range is empty for them.
Scans that go through [`count_primes`](crate::count_primes) always start at
[`FIRST_CANDIDATE`](crate::FIRST_CANDIDATE), so this never shows up in a count.

```
# use primecount::is_prime;
assert!(is_prime(2));
assert!(is_prime(7919));
assert!(!is_prime(7917));

// Known defect, kept as is
assert!(is_prime(1));
```
*/
pub fn is_prime(n: u32) -> bool {
    (2..=n / 2).all(|i| n % i != 0)
}
