//! Sketch loading and encoding
//!
//! Validates the local sketch file and embeds its bytes in a
//! `data:<mime>;base64,<payload>` URL for the chat request. Validation runs
//! to completion before any network activity happens.

use crate::{Error, Result};
use base64::Engine as _;
use std::fs;
use std::path::Path;

/// A sketch encoded and ready to embed in a message part.
#[derive(Debug, Clone)]
pub struct EncodedSketch {
    pub data_url: String,
    pub size_bytes: u64,
}

/// Validate the sketch at `path` and encode it as a data URL.
///
/// Fails when the file is missing or its size exceeds `max_bytes`. The MIME
/// type is declared by the caller, not sniffed from the bytes.
pub fn load_sketch(path: &Path, mime: &str, max_bytes: u64) -> Result<EncodedSketch> {
    if !path.exists() {
        return Err(Error::ImageNotFound(path.to_path_buf()));
    }

    let metadata = fs::metadata(path)?;
    let size = metadata.len();
    if size > max_bytes {
        return Err(Error::ImageTooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);

    Ok(EncodedSketch {
        data_url: format!("data:{};base64,{}", mime, encoded),
        size_bytes: size,
    })
}
