//! Seed-dependence tests.

use voltahash::{hash, HashState};

#[test]
fn different_seeds_diverge() {
    let data = b"Seed Test Data for Avalanche Check";
    let h1 = hash(data, 0x1234_5678_9ABC_DEF0);
    let h2 = hash(data, 0x1234_5678_9ABC_DEF1);
    assert_ne!(h1, h2, "different seeds must produce different digests");
}

#[test]
fn seed_zero_is_reproducible() {
    let data = b"Compatibility Check";
    assert_eq!(hash(data, 0), hash(data, 0));
}

#[test]
fn streaming_seeding_diverges() {
    let data = b"Streaming Seed Test";

    let mut s1 = HashState::new(1);
    s1.update(data);

    let mut s2 = HashState::new(2);
    s2.update(data);

    assert_ne!(s1.digest(), s2.digest());
}
