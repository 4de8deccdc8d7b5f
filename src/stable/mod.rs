// The default engine, probing the standard library stable sort.
pub mod probesort_engine;

// The merge sort fallback on its own, no probe involved.
pub mod probesort_merge;

// An engine over the standard library unstable sort. The probe is expected to reject it, so this
// exercises probe + fallback end to end.
pub mod probesort_probed_ipnsort;

// Baseline for the benchmarks.
pub mod rust_std;
