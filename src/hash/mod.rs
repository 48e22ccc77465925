//! SHA-256 core
//!
//! Framing, schedule expansion, compression and serialization, plus the
//! one-shot [`digest`] entry point and the incremental [`Sha256`] hasher.

pub mod compress;
mod error;
mod hasher;
mod output;
pub mod padding;
pub mod schedule;

pub use error::{DigestError, Result};
pub use hasher::Sha256;
pub use output::Digest;

use tracing::instrument;

/// Block size in bytes (512 bits)
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Words in the running hash state
pub const STATE_WORDS: usize = 8;

/// Words in the per-block message schedule (one per round)
pub const SCHEDULE_WORDS: usize = 64;

/// Size of the big-endian bit-length suffix
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Longest accepted input in bytes: its bit length must fit in 64 bits
pub const MAX_INPUT_LEN: u64 = (1 << 61) - 1;

/// Compute the SHA-256 digest of `data` in one pass.
///
/// The input is framed into an owned padded buffer, then every block is
/// compressed into a fresh state. Each call is independent; nothing is shared
/// across calls except the constant tables.
///
/// # Errors
///
/// Returns [`DigestError::AllocationFailed`] if the padded buffer cannot be
/// allocated, or [`DigestError::InputTooLong`] past [`MAX_INPUT_LEN`].
#[instrument(level = "trace", skip(data), fields(len = data.len()))]
pub fn digest(data: &[u8]) -> Result<Digest> {
    let padded = padding::pad_message(data)?;
    let mut state = compress::INITIAL_STATE;
    absorb(&mut state, &padded);
    Ok(Digest::from_state(&state))
}

/// Compress every whole block of `blocks` into `state`, in order.
fn absorb(state: &mut [u32; STATE_WORDS], blocks: &[u8]) {
    debug_assert_eq!(blocks.len() % BLOCK_SIZE, 0);
    let mut block = [0u8; BLOCK_SIZE];
    for chunk in blocks.chunks_exact(BLOCK_SIZE) {
        block.copy_from_slice(chunk);
        compress::process_block(state, &block);
    }
}
