use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

use zipf::ZipfDistribution;

/// Input patterns for testing and benchmarking sorts. Currently limited to i32 values.
///
/// All random patterns derive from one seed per process, so a failing run can be replayed by
/// passing the printed seed back in through the `OVERRIDE_SEED` environment variable.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let directions = random_uniform((len / chunk_len) + 1, 0..=1);

    for (chunk, direction) in vals.chunks_mut(chunk_len).zip(directions) {
        if direction == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    vals[..len / 2].sort();
    vals[len / 2..].sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Pairs of `(key, occurrence)`, keys drawn from `0..key_count`. The occurrence counts how often
/// that key was seen before, so after a stable sort by key the pairs are fully ascending.
pub fn keyed_occurrences(len: usize, key_count: i32) -> Vec<(i32, i32)> {
    let mut counts = vec![0; key_count.max(1) as usize];

    random_uniform(len, 0..key_count.max(1))
        .into_iter()
        .map(|key| {
            counts[key as usize] += 1;
            (key, counts[key as usize])
        })
        .collect()
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values. By default `patterns::random(4)` yields the same values per process invocation, for
/// benchmarks it's advised to call this function.
pub fn use_random_seed_each_time() {
    RANDOM_EACH_TIME.store(true, AtomicOrdering::Release);
}

/// The seed all random patterns derive from, stable for the lifetime of the process.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn new_rng() -> StdRng {
    if RANDOM_EACH_TIME.load(AtomicOrdering::Acquire) {
        return StdRng::seed_from_u64(thread_rng().gen());
    }

    // Same seed for every call, so equal arguments yield equal patterns within one process.
    StdRng::seed_from_u64(random_init_seed())
}
