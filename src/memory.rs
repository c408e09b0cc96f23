//! Bounds-safe reads from VM linear memory
//!
//! LOG operands may reference a region that extends past the logical
//! memory length; reads past the end observe zeros, so the copy here
//! pads rather than truncates.

use thiserror::Error;

/// Rejected memory range.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("offset or size must not be negative (offset: {offset}, size: {size})")]
pub struct RangeError {
    pub offset: i64,
    pub size: i64,
}

/// Copy `size` bytes starting at `offset` from `mem`, zero-filling any
/// positions past the end of `mem`.
///
/// The result is always exactly `size` bytes long. Negative `offset` or
/// `size` is rejected outright, never clamped.
pub fn copy_padded(mem: &[u8], offset: i64, size: i64) -> Result<Vec<u8>, RangeError> {
    if offset < 0 || size < 0 {
        return Err(RangeError { offset, size });
    }
    let mut out = vec![0u8; size as usize];
    let len = mem.len() as u64;
    let start = (offset as u64).min(len);
    let end = (offset as u64).saturating_add(size as u64).min(len);
    out[..(end - start) as usize].copy_from_slice(&mem[start as usize..end as usize]);
    Ok(out)
}
