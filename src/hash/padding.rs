//! Message framing: turns an arbitrary byte sequence into whole 64-byte blocks.
//!
//! # Format
//!
//! ```text
//! [MESSAGE (L bytes)] [0x80] [0x00 * n] [BIT LENGTH (8 bytes, big-endian)]
//! ```
//!
//! `n` is the smallest count that makes the total a multiple of [`BLOCK_SIZE`].
//! When fewer than 9 bytes remain in the last message block, the padding
//! spills into one extra block.

use tracing::trace;

use super::{BLOCK_SIZE, DigestError, LENGTH_FIELD_SIZE, MAX_INPUT_LEN, Result};

/// Marker byte carrying the single appended `1` bit.
const PAD_MARKER: u8 = 0x80;

/// Size in bytes of the framed message for an input of `len` bytes.
///
/// Returns `None` when `8 * len` does not fit the 64-bit length field.
#[must_use]
pub const fn padded_len(len: u64) -> Option<u64> {
    if len > MAX_INPUT_LEN {
        return None;
    }
    let block = BLOCK_SIZE as u64;
    let unpadded = len + 1 + LENGTH_FIELD_SIZE as u64;
    Some(unpadded.div_ceil(block) * block)
}

/// Frame a complete message.
///
/// # Errors
///
/// Returns [`DigestError::InputTooLong`] past [`MAX_INPUT_LEN`] and
/// [`DigestError::AllocationFailed`] if the padded buffer cannot be reserved.
pub fn pad_message(data: &[u8]) -> Result<Vec<u8>> {
    pad_tail(data, data.len() as u64)
}

/// Frame the unprocessed tail of a message whose total length is `total_len`.
///
/// Everything before `tail` must already have been consumed as whole blocks,
/// so `total_len - tail.len()` is a multiple of [`BLOCK_SIZE`]. The length
/// suffix always encodes `total_len`, never the tail length.
///
/// # Errors
///
/// Same as [`pad_message`].
pub fn pad_tail(tail: &[u8], total_len: u64) -> Result<Vec<u8>> {
    let tail_len = tail.len() as u64;
    debug_assert!(tail_len <= total_len);
    debug_assert_eq!((total_len - tail_len) % BLOCK_SIZE as u64, 0);

    if total_len > MAX_INPUT_LEN {
        return Err(DigestError::InputTooLong {
            len: total_len,
            max: MAX_INPUT_LEN,
        });
    }
    let framed = padded_len(tail_len).ok_or(DigestError::InputTooLong {
        len: tail_len,
        max: MAX_INPUT_LEN,
    })?;
    let size =
        usize::try_from(framed).map_err(|_| DigestError::AllocationFailed { bytes: framed })?;
    let mut buf = reserve(size)?;

    buf.extend_from_slice(tail);
    buf.push(PAD_MARKER);
    buf.resize(size - LENGTH_FIELD_SIZE, 0);
    buf.extend_from_slice(&(total_len * 8).to_be_bytes());

    trace!(
        tail_len,
        total_len,
        padded = size,
        blocks = size / BLOCK_SIZE,
        "framed message"
    );
    Ok(buf)
}

/// Empty buffer with room for at least `size` bytes.
fn reserve(size: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(size)
        .map_err(|_| DigestError::AllocationFailed { bytes: size as u64 })?;
    Ok(buf)
}
