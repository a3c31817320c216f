use std::io::Read;
use std::sync::Arc;

use crate::error::Result;

/// Read a compressed archive stream to its end and keep the bytes.
pub(crate) fn drain<R: Read>(mut reader: R) -> Result<Arc<[u8]>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf.into())
}
