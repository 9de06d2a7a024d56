use std::io::{Read, Write};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExportError;

/// Render `doc` fully, then hand it to `sink` in one `write_all`.
///
/// On error the sink may hold a truncated document and must be discarded.
pub fn write_document<T: Serialize, W: Write>(doc: &T, mut sink: W) -> Result<usize, ExportError> {
    let bytes = serde_json::to_vec_pretty(doc)?;
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(bytes.len())
}

pub fn read_document<T: DeserializeOwned, R: Read>(source: R) -> Result<T, ExportError> {
    Ok(serde_json::from_reader(source)?)
}
