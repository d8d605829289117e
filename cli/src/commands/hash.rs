//! Hash command.
//!
//! Hashes each file in turn, streaming it through [`voltahash::HashState`]
//! so large files don't need to be buffered whole.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Hash `files` under `seed`, printing `<hex digest>  <path>` per file.
pub fn hash_files(files: &[PathBuf], seed: u64) -> Result<()> {
    let mut failed = 0usize;

    for file_path in files {
        match hash_one(file_path, seed) {
            Ok(digest_hex) => println!("{digest_hex}  {}", file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {e}", file_path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }
    Ok(())
}

fn hash_one(file_path: &PathBuf, seed: u64) -> Result<String> {
    let mut file = std::fs::File::open(file_path)
        .with_context(|| format!("Failed to open: {}", file_path.display()))?;

    let mut state = voltahash::HashState::new(seed);
    let mut buffer = [0u8; 128 * 1024];

    loop {
        let n = std::io::Read::read(&mut file, &mut buffer)?;
        if n == 0 {
            break;
        }
        state.update(&buffer[..n]);
    }

    Ok(hex::encode(state.digest().to_be_bytes()))
}
