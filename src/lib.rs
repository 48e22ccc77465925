//! SHA-256 digest (FIPS 180-4)
//!
//! A self-contained SHA-256: message framing, schedule expansion, the 64-round
//! compression function and big-endian digest serialization, with a one-shot
//! entry point and an incremental hasher.
//!
//! # Quick Start
//!
//! ```rust
//! use sha256_digest::{Sha256, digest};
//!
//! // One shot
//! let d = digest(b"abc")?;
//! assert_eq!(
//!     format!("{d:#x}"),
//!     "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! // Incremental, any chunking
//! let mut hasher = Sha256::new();
//! hasher.update(b"a")?;
//! hasher.update(b"bc")?;
//! assert_eq!(hasher.finalize()?, d);
//! # Ok::<(), sha256_digest::DigestError>(())
//! ```
//!
//! # Features
//!
//! - **No shared mutable state** - every computation owns its state; the
//!   constant tables are read-only, so independent inputs hash in parallel freely
//! - **Explicit limits** - inputs longer than [`MAX_INPUT_LEN`] are rejected,
//!   allocation failure is reported as an error
//! - **`serde`** (optional) - `Digest` serializes as its hex string

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod hash;

pub use hash::{
    BLOCK_SIZE, DIGEST_SIZE, Digest, DigestError, MAX_INPUT_LEN, Result, Sha256, digest,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
