use std::cmp::Ordering;

use log::trace;
use once_cell::sync::Lazy;

use crate::comparator::Comparator;
use crate::merge::merge_sort_by;
use crate::native::{NativeSort, StdStable};
use crate::probe::{probe_stability, ProbeConfig, StabilityFlag};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// The native sort passed the stability probe.
    Native,
    MergeFallback,
}

/// Stable sort over a native sort primitive of unknown stability.
///
/// The native sort is used once the probe has confirmed it keeps equal elements in order,
/// otherwise every sort goes through [`merge_sort_by`]. The probe runs at most once per engine,
/// lazily, on the first sort that has more than one element.
#[derive(Debug)]
pub struct Engine<N> {
    native: N,
    config: ProbeConfig,
    flag: StabilityFlag,
}

impl<N: NativeSort> Engine<N> {
    pub fn new(native: N) -> Self {
        Self::with_config(native, ProbeConfig::default())
    }

    pub fn with_config(native: N, config: ProbeConfig) -> Self {
        Self {
            native,
            config,
            flag: StabilityFlag::new(),
        }
    }

    /// Uses `flag` as is. Pass [`StabilityFlag::forced`] to pin a strategy without probing.
    pub fn with_flag(native: N, flag: StabilityFlag) -> Self {
        Self {
            native,
            config: ProbeConfig::default(),
            flag,
        }
    }

    pub fn native(&self) -> &N {
        &self.native
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// The cached probe result, `None` if no probe has completed yet.
    pub fn probed_stability(&self) -> Option<bool> {
        self.flag.get()
    }

    pub fn is_native_stable(&self) -> bool {
        self.flag
            .get_or_probe(|| probe_stability(&self.native, &self.config))
    }

    pub fn strategy(&self) -> Strategy {
        if self.is_native_stable() {
            Strategy::Native
        } else {
            Strategy::MergeFallback
        }
    }

    /// Forgets the probe result, the next sort probes again.
    pub fn reset_probe(&mut self) -> Option<bool> {
        self.flag.reset()
    }

    pub fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if v.len() < 2 {
            return;
        }

        let strategy = self.strategy();
        trace!("sorting len: {} via {strategy:?}", v.len());

        match strategy {
            Strategy::Native => self.native.sort_by(v, compare),
            Strategy::MergeFallback => merge_sort_by(v, compare),
        }
    }

    pub fn sort_with<T, C>(&self, v: &mut [T], comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.sort_by(v, |a, b| comparator.compare(a, b));
    }
}

static DEFAULT_ENGINE: Lazy<Engine<StdStable>> =
    Lazy::new(|| Engine::with_config(StdStable, ProbeConfig::from_env()));

/// The process-wide engine behind the crate level sort functions.
pub fn default_engine() -> &'static Engine<StdStable> {
    &DEFAULT_ENGINE
}
