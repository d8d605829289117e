//! Basic usage example.
//!
//! Minimal usage: `let digest = voltahash::hash(&data, seed);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let data = b"Hello, World!";
    let digest = voltahash::hash(data, 0);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Digest: {digest:#018x}");
    println!("Backend: {}", voltahash::active_backend());
}
