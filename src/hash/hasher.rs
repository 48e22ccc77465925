//! Incremental SHA-256 hasher.

use std::io;

use bytes::Buf;
use tracing::trace;

use super::compress::{self, INITIAL_STATE};
use super::{BLOCK_SIZE, Digest, DigestError, MAX_INPUT_LEN, Result, STATE_WORDS, absorb, padding};

/// Streaming hasher; feeding a message in any number of pieces yields the
/// same digest as [`digest`](super::digest) over the concatenation.
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    byte_len: u64,
}

impl Sha256 {
    /// Fresh hasher holding the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            byte_len: 0,
        }
    }

    /// Total bytes fed so far.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.byte_len
    }

    /// Whether nothing has been fed yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.byte_len == 0
    }

    /// Feed more message bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InputTooLong`] once the running total passes
    /// [`MAX_INPUT_LEN`]; the hasher is left unchanged in that case.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }

        let added = data.len() as u64;
        self.byte_len = self
            .byte_len
            .checked_add(added)
            .filter(|&total| total <= MAX_INPUT_LEN)
            .ok_or(DigestError::InputTooLong {
                len: self.byte_len.saturating_add(added),
                max: MAX_INPUT_LEN,
            })?;

        let mut remaining = data;
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(remaining.len());
            let (head, tail) = remaining.split_at(take);
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(head);
            self.buffer_len += take;
            remaining = tail;

            if self.buffer_len < BLOCK_SIZE {
                return Ok(());
            }
            compress::process_block(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        let whole = remaining.len() - remaining.len() % BLOCK_SIZE;
        let (blocks, rest) = remaining.split_at(whole);
        absorb(&mut self.state, blocks);

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
        Ok(())
    }

    /// Feed every remaining chunk of a [`Buf`], consuming it.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update); bytes before the failing chunk stay fed.
    pub fn update_buf<B: Buf>(&mut self, mut buf: B) -> Result<()> {
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let n = chunk.len();
            self.update(chunk)?;
            buf.advance(n);
        }
        Ok(())
    }

    /// Pad the buffered tail once, compress it, and serialize the state.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::AllocationFailed`] if the final padding block
    /// cannot be allocated.
    pub fn finalize(mut self) -> Result<Digest> {
        let tail = padding::pad_tail(&self.buffer[..self.buffer_len], self.byte_len)?;
        absorb(&mut self.state, &tail);
        trace!(
            total_len = self.byte_len,
            tail_blocks = tail.len() / BLOCK_SIZE,
            "finalized digest"
        );
        Ok(Digest::from_state(&self.state))
    }

    /// One-shot convenience over [`new`](Self::new), [`update`](Self::update) and
    /// [`finalize`](Self::finalize).
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update) and [`finalize`](Self::finalize).
    pub fn digest(data: &[u8]) -> Result<Digest> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha256")
            .field("len", &self.byte_len)
            .finish_non_exhaustive()
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
