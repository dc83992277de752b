// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared constants for Marvin and LetterSoup.

/// Cipher block size in bits. Only 96-bit ciphers are supported.
pub const BLOCK_BITS: usize = 96;

/// Cipher block size in bytes.
pub const BLOCK_SIZE: usize = BLOCK_BITS / 8;

/// Longest nonce accepted by `set_iv` (one block).
pub const MAX_NONCE_SIZE: usize = BLOCK_SIZE;

/// Full-block tag size in bits.
pub const DEFAULT_TAG_BITS: usize = BLOCK_BITS;

/// Domain-separation byte placed in the last position of the block that
/// seeds a standalone Marvin session.
pub const MARVIN_SEED_CONSTANT: u8 = 0x2A;

/// Second byte of the finalization marker block.
pub(crate) const MARKER_PAD: u8 = 0x80;

/// Number of trailing block bytes holding a big-endian length.
pub(crate) const LENGTH_FIELD_SIZE: usize = 4;
