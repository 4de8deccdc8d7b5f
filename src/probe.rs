//! Runtime detection of whether a [`NativeSort`] is stable.
//!
//! The probe is a heuristic, not a proof. It sorts a synthetic input large enough to get past the
//! small-input insertion sorts most implementations start with, and with few enough distinct keys
//! that an unstable partition is very likely to swap equal elements. Sort implementations that
//! only turn unstable above some larger size threshold will go unnoticed, `ProbeConfig::len` is
//! tunable for that reason.

use std::env;
use std::str::FromStr;

use log::{debug, warn};
use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::native::NativeSort;

/// Some native sorts switch strategy above 512 elements, stay clear of that threshold.
pub const DEFAULT_PROBE_LEN: usize = 600;

/// Number of distinct keys, also the multiplier that packs the original index above the key.
pub const DEFAULT_KEY_RANGE: u32 = 4;

pub const PROBE_LEN_VAR: &str = "PROBESORT_PROBE_LEN";
pub const PROBE_KEY_RANGE_VAR: &str = "PROBESORT_PROBE_KEY_RANGE";
pub const PROBE_SEED_VAR: &str = "PROBESORT_PROBE_SEED";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    len: usize,
    key_range: u32,
    seed: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_PROBE_LEN,
            key_range: DEFAULT_KEY_RANGE,
            seed: None,
        }
    }
}

impl ProbeConfig {
    /// `len` and `key_range` are clamped to at least 2, anything smaller can't observe a swap.
    pub fn new(len: usize, key_range: u32) -> Self {
        Self {
            len: len.max(2),
            key_range: key_range.max(2),
            seed: None,
        }
    }

    pub fn with_len(self, len: usize) -> Self {
        Self {
            len: len.max(2),
            ..self
        }
    }

    pub fn with_key_range(self, key_range: u32) -> Self {
        Self {
            key_range: key_range.max(2),
            ..self
        }
    }

    /// Makes the synthetic keys reproducible. Without a seed they come from OS entropy.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Defaults, overridden by `PROBESORT_PROBE_LEN`, `PROBESORT_PROBE_KEY_RANGE` and
    /// `PROBESORT_PROBE_SEED` where set. Malformed values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(len) = env_override::<usize>(PROBE_LEN_VAR) {
            config = config.with_len(len);
        }
        if let Some(key_range) = env_override::<u32>(PROBE_KEY_RANGE_VAR) {
            config = config.with_key_range(key_range);
        }
        if let Some(seed) = env_override::<u64>(PROBE_SEED_VAR) {
            config = config.with_seed(seed);
        }

        config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn key_range(&self) -> u32 {
        self.key_range
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

fn env_override<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;

    match raw.trim().parse::<T>() {
        Ok(val) => Some(val),
        Err(_) => {
            warn!("Ignoring {name}={raw:?}, expected an unsigned integer.");
            None
        }
    }
}

/// Returns `true` if `native` kept every pair of equal keys in order on the synthetic input.
///
/// Each value is `index * key_range + key`, the comparison only looks at `key`. A panic inside
/// `native` propagates to the caller.
pub fn probe_stability<N: NativeSort>(native: &N, config: &ProbeConfig) -> bool {
    let key_range = u64::from(config.key_range);
    let mut v = probe_input(config);

    native.sort_by(&mut v, |a, b| (a % key_range).cmp(&(b % key_range)));

    let violation = first_violation(&v, key_range);

    match violation {
        None => debug!(
            "{} is stable on probe input, len: {} key_range: {}",
            native.name(),
            config.len,
            config.key_range
        ),
        Some(idx) => debug!(
            "{} is unstable on probe input, len: {} key_range: {} first violation at: {idx}",
            native.name(),
            config.len,
            config.key_range
        ),
    }

    violation.is_none()
}

fn probe_input(config: &ProbeConfig) -> Vec<u64> {
    let key_range = u64::from(config.key_range);
    let key_dist = Uniform::new(0, key_range);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..config.len as u64)
        .map(|idx| idx * key_range + key_dist.sample(&mut rng))
        .collect()
}

// Adjacent equal keys must still be in original index order.
fn first_violation(sorted: &[u64], key_range: u64) -> Option<usize> {
    sorted.windows(2).position(|w| {
        w[0] % key_range == w[1] % key_range && w[0] / key_range > w[1] / key_range
    })
}

/// Lazily computed answer to "is the native sort stable".
///
/// The first [`StabilityFlag::get_or_probe`] runs the probe, concurrent first callers block until
/// it finishes and all observe the same value. If the probe panics the flag stays empty and the
/// next caller retries.
#[derive(Debug, Default)]
pub struct StabilityFlag {
    cell: OnceCell<bool>,
}

impl StabilityFlag {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// A flag that never probes.
    pub fn forced(is_stable: bool) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(is_stable);

        Self { cell }
    }

    pub fn get(&self) -> Option<bool> {
        self.cell.get().copied()
    }

    pub fn get_or_probe(&self, probe: impl FnOnce() -> bool) -> bool {
        *self.cell.get_or_init(probe)
    }

    /// Forgets the cached value, returning it.
    pub fn reset(&mut self) -> Option<bool> {
        self.cell.take()
    }
}
