use bolero::check;
use voltahash::{hash, HashState};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let expected = hash(data, 0);

        // Single update.
        let mut state = HashState::new(0);
        state.update(data);
        assert_eq!(state.digest(), expected, "single-update mismatch");

        // Byte-by-byte, for small inputs only.
        if data.len() < 256 {
            let mut state = HashState::new(0);
            for b in data {
                state.update(&[*b]);
            }
            assert_eq!(state.digest(), expected, "byte-by-byte mismatch");
        }

        // Arbitrary split points.
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let (first, second) = data.split_at(split_idx);
                let mut state = HashState::new(0);
                state.update(first);
                state.update(second);
                assert_eq!(state.digest(), expected, "split at {split_idx} mismatch");
            }
        }
    });
}
