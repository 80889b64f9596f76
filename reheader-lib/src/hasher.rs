//! Streaming CRC32 hashing for ROM files.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// Compute the CRC32 of a reader's remaining bytes as an 8-character
/// lowercase hex string (most significant byte first).
pub fn crc32_hex(reader: &mut impl Read) -> io::Result<String> {
    let mut hasher = crc32fast::Hasher::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:08x}", hasher.finalize()))
}

/// Compute the CRC32 of a file, streamed in fixed-size chunks to bound
/// memory on large inputs.
pub fn crc32_of_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    crc32_hex(&mut file)
}
