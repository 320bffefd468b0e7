use sha2::{Digest, Sha256};
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

use crate::error::{Result, SlipError};

const CHUNK_SIZE: usize = 8192;

/// Streams the file through SHA-256 and returns the lowercase hex digest.
pub fn sha256_file(path: &Path) -> Result<String> {
    let access = |source| SlipError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(access)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buffer).map_err(access)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    let hash = format!("{:x}", hasher.finalize());
    debug!(path = %path.display(), %hash, "hashed slip image");
    Ok(hash)
}
