#![no_main]

use libfuzzer_sys::fuzz_target;

use probesort::merge_sort_by;

fuzz_target!(|data: &[u8]| {
    // Few distinct keys, so there are plenty of ties to keep in order.
    let mut v: Vec<(u8, usize)> = data
        .iter()
        .enumerate()
        .map(|(idx, byte)| (byte % 8, idx))
        .collect();

    let mut expected = v.clone();
    expected.sort_by_key(|e| e.0);

    merge_sort_by(&mut v, |a, b| a.0.cmp(&b.0));

    assert_eq!(v, expected);
});
