#![cfg(not(loom))]

use std::process::Command;

use primecount::{count_primes, count_primes_in, count_primes_with, Config, Strategy};

#[test]
fn classic_two_worker_count() {
    assert_eq!(count_primes(&Config::default()), Ok(17_984));
}

#[test]
fn halves_add_up() {
    let lower = count_primes_in(2..100_000);
    let upper = count_primes_in(100_000..200_000);
    assert_eq!((lower, upper), (9_592, 8_392));
    assert_eq!(lower + upper, 17_984);
}

#[test]
fn small_bound_every_strategy() {
    let strategies = [
        Strategy::Local,
        Strategy::Atomic,
        Strategy::Mutex,
        Strategy::Channel,
    ];
    for strategy in strategies {
        for workers in 1..=8 {
            assert_eq!(count_primes_with(20, workers, strategy), Ok(8));
        }
    }
}

#[test]
fn unsynchronized_small_bound() {
    // Too few primes per worker to observe a lost update reliably
    let total = count_primes_with(20, 2, Strategy::Unsynchronized).unwrap();
    assert!((1..=8).contains(&total), "Total was {total}");
}

#[test]
fn worker_count_does_not_change_result() {
    let expected = count_primes_in(2..50_000);
    assert_eq!(expected, 5_133);
    for workers in [1, 2, 3, 7, 16] {
        assert_eq!(count_primes_with(50_000, workers, Strategy::Local), Ok(expected));
    }
}

// -------------------------------------

fn primecount() -> Command {
    Command::new(env!("CARGO_BIN_EXE_primecount"))
}

#[test]
fn prints_single_line() {
    let output = primecount()
        .args(["--bound", "20", "--silent"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Found 8 prime numbers.\n");
}

#[test]
fn default_run() {
    let output = primecount().env_remove("RUST_LOG").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Found 17984 prime numbers.\n"
    );

    // Logs never end up on stdout
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Counted primes"), "stderr was {stderr:?}");
}

#[test]
fn huge_worker_count_fails() {
    let output = primecount()
        .args(["--workers", "18446744073709551615", "--bound", "20"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("at most 1024"), "stderr was {stderr:?}");
}

#[test]
fn zero_workers_fails() {
    let output = primecount()
        .args(["--workers", "0"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("at least one worker"), "stderr was {stderr:?}");
}
