use std::fs::{self, File};
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::UTF_8;
use log::debug;
use sha2::{Digest, Sha256};

use crate::error::ReadError;

/// Reads `path` in one go and decodes it as strict UTF-8 into lines.
///
/// `\r\n` and lone `\r` are translated to `\n` first, so every returned line
/// ends with `\n` except possibly the last one.
pub fn read_lines(path: &Path) -> std::result::Result<Vec<String>, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = UTF_8
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or_else(|| ReadError::Decode {
            path: path.to_path_buf(),
        })?;

    let lines = split_lines(&normalize_eol(&text));
    debug!("{}: {} lines", path.display(), lines.len());
    Ok(lines)
}

pub fn normalize_eol(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

/// Byte-exact equality: sizes first, then SHA-256 of the full contents.
pub fn file_bytes_equal(p1: &Path, p2: &Path) -> Result<bool> {
    let len1 = fs::metadata(p1)
        .with_context(|| format!("cannot stat {}", p1.display()))?
        .len();
    let len2 = fs::metadata(p2)
        .with_context(|| format!("cannot stat {}", p2.display()))?
        .len();
    if len1 != len2 {
        debug!("sizes differ: {len1} vs {len2} bytes");
        return Ok(false);
    }

    let h1 = hash_file(p1)?;
    let h2 = hash_file(p2)?;
    debug!("sha256 {} {}", hex::encode(&h1), p1.display());
    debug!("sha256 {} {}", hex::encode(&h2), p2.display());
    Ok(h1 == h2)
}

fn hash_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).with_context(|| format!("cannot read {}", path.display()))?;
    Ok(hasher.finalize().to_vec())
}

/// Name shown in the `---`/`+++` header lines: the last path component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
