//! Fuzz target: `RequestReader::feed`
//!
//! Splits arbitrary bytes at a fuzzer-chosen point and feeds both halves
//! into a small reader.  It must never panic, never exceed capacity, and
//! must report the same framing as a single-shot feed.
//!
//! cargo fuzz run fuzz_request_reader

#![no_main]

use greenhouse::http::request::{Progress, RequestReader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&split, data)) = data.split_first() else {
        return;
    };
    let split = usize::from(split).min(data.len());

    let mut whole: RequestReader<256> = RequestReader::new();
    let (_, expected) = whole.feed(data);

    let mut halves: RequestReader<256> = RequestReader::new();
    let (used, mut progress) = halves.feed(&data[..split]);
    assert!(used <= split);
    if progress == Progress::Pending {
        progress = halves.feed(&data[split..]).1;
    }

    assert_eq!(progress, expected);
    assert_eq!(halves.as_str(), whole.as_str());
    assert!(halves.len() <= 256);
    let _ = halves.request_line();
});
