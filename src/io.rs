//! Reading raw input text from files or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use log::debug;

/// Opens `path` for buffered reading, decompressing `.gz` files on the fly.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        debug!("Reading {} as gzip", path.display());
        Ok(Box::new(BufReader::with_capacity(1 << 16, MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::with_capacity(1 << 16, file)))
    }
}

/// Reads the whole input as UTF-8 text. The path `-` means stdin.
pub fn read_raw_input(path: &Path) -> Result<String> {
    let mut text = String::new();
    if path == Path::new("-") {
        io::stdin().lock().read_to_string(&mut text).context("Failed to read stdin")?;
    } else {
        open_reader(path)?
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;
    }
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
