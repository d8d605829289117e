//! Visual randomness example.
//!
//! Hashes each pixel's coordinates and renders the low bytes of the digest
//! as RGB, once through the short (≤64-byte) path and once through the wide
//! path, as a quick eyeball check that both paths produce avalanching
//! output rather than visible structure.
//!
//! Generates:
//! - `voltahash_randomness_short.bmp`
//! - `voltahash_randomness_wide.bmp`

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> std::io::Result<()> {
    let width = 1024;
    let height = 1024;

    println!("Generating short-path randomness map (16 bytes)...");
    generate_image("voltahash_randomness_short.bmp", width, height, |x, y| {
        let mut buf = [0u8; 16];
        buf[0..8].copy_from_slice(&u64::from(x).to_le_bytes());
        buf[8..16].copy_from_slice(&u64::from(y).to_le_bytes());
        voltahash::hash(&buf, 0)
    })?;

    println!("Generating wide-path randomness map (256 bytes)...");
    generate_image("voltahash_randomness_wide.bmp", width, height, |x, y| {
        let mut buf = [0u8; 256];
        buf[0..8].copy_from_slice(&u64::from(x).to_le_bytes());
        buf[8..16].copy_from_slice(&u64::from(y).to_le_bytes());
        buf[128..136].copy_from_slice(&u64::from(x).to_le_bytes());
        buf[136..144].copy_from_slice(&u64::from(y).to_le_bytes());
        voltahash::hash(&buf, 0)
    })?;

    println!("Done. Generated two images.");
    Ok(())
}

fn generate_image<F>(filename: &str, width: u32, height: u32, hasher: F) -> std::io::Result<()>
where
    F: Fn(u32, u32) -> u64,
{
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    let file_size = 54 + (width * height * 3);
    let offset = 54u32;
    let header_size = 40u32;
    let planes = 1u16;
    let bpp = 24u16;
    let image_size = width * height * 3;

    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(&offset.to_le_bytes())?;

    writer.write_all(&header_size.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(-(height as i32)).to_le_bytes())?;
    writer.write_all(&planes.to_le_bytes())?;
    writer.write_all(&bpp.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(&image_size.to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?;

    for y in 0..height {
        for x in 0..width {
            let digest = hasher(x, y).to_le_bytes();
            writer.write_all(&[digest[2], digest[1], digest[0]])?;
        }
    }

    Ok(())
}
