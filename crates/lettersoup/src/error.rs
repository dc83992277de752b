// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors raised by Marvin and LetterSoup.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterSoupError {
    /// Nonce does not fit in one block.
    #[error("invalid nonce length: {len} bytes (at most 12)")]
    InvalidNonceLength {
        /// Length of the rejected nonce.
        len: usize,
    },

    /// Operation called out of order (e.g. `tag` before `encrypt`).
    #[error("invalid sequence: session state not initialized for this operation")]
    InvalidSequence,

    /// Cipher block size is not 96 bits.
    #[error("unsupported block size: {bits} bits (expected 96)")]
    UnsupportedBlockSize {
        /// Block size reported by the cipher.
        bits: usize,
    },

    /// Computed and received tags differ.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailure,

    /// Tag size is not a whole number of bytes in `8..=96`.
    #[error("invalid tag size: {bits} bits")]
    InvalidTagSize {
        /// Requested tag size.
        bits: usize,
    },

    /// Cipher key schedule rejected the key.
    #[error("invalid key size: {bits} bits")]
    InvalidKeySize {
        /// Requested key size.
        bits: usize,
    },

    /// Input longer than the 32-bit length field can encode.
    #[error("input too long: length must fit in 32 bits")]
    MessageTooLong,
}
