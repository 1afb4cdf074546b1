use adler2::Adler32;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

pub fn file_size(path: &Path) -> Result<u64> {
    let md = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    Ok(md.len())
}

/// Adler-32 of `bytes` as 8 lowercase hex digits.
pub fn adler32_hex_bytes(bytes: &[u8]) -> String {
    format!("{:08x}", adler2::adler32_slice(bytes))
}

/// Adler-32 of a file's content as 8 lowercase hex digits, streamed in 64 KiB reads.
pub fn adler32_hex(path: &Path) -> Result<String> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut rdr = BufReader::with_capacity(64 * 1024, f);
    let mut hasher = Adler32::new();
    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let n = rdr.read(&mut buf).with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.write_slice(&buf[..n]);
    }
    Ok(format!("{:08x}", hasher.checksum()))
}
