#![no_main]

use libfuzzer_sys::fuzz_target;
use voltahash::HashState;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let chunk_size = (data[0] as usize % 255) + 1;
    let reference = voltahash::hash(data, 0);

    let mut state = HashState::new(0);
    for chunk in data.chunks(chunk_size) {
        state.update(chunk);
    }

    assert_eq!(
        reference,
        state.digest(),
        "streaming and one-shot digests differ"
    );
});
