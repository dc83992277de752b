// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block-level helpers shared by Marvin and LetterSoup.

use crate::consts::{BLOCK_BITS, BLOCK_SIZE, LENGTH_FIELD_SIZE, MARKER_PAD};
use crate::error::LetterSoupError;
use crate::traits::{Block, BlockCipher};

/// `dst ^= src`
#[inline(always)]
pub(crate) fn xor_in_place(dst: &mut Block, src: &Block) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// Checks that `tag_bits` is a whole number of bytes in `8..=96` and
/// returns the tag length in bytes.
#[inline]
pub(crate) fn tag_len(tag_bits: usize) -> Result<usize, LetterSoupError> {
    if tag_bits == 0 || tag_bits > BLOCK_BITS || tag_bits % 8 != 0 {
        return Err(LetterSoupError::InvalidTagSize { bits: tag_bits });
    }

    Ok(tag_bits / 8)
}

/// Rejects lengths the 32-bit length field cannot encode.
#[inline]
pub(crate) fn check_length(len: usize) -> Result<(), LetterSoupError> {
    u32::try_from(len)
        .map(|_| ())
        .map_err(|_| LetterSoupError::MessageTooLong)
}

/// XORs the marker `[96 - tag_bits, 0x80, 0, ..]` into `block`.
///
/// `tag_bits` must already be validated by [`tag_len`].
#[inline]
pub(crate) fn xor_marker(block: &mut Block, tag_bits: usize) {
    block[0] ^= (BLOCK_BITS - tag_bits) as u8;
    block[1] ^= MARKER_PAD;
}

/// XORs `len` as a big-endian `u32` into the last four bytes of `block`.
///
/// `len` must already be validated by [`check_length`].
#[inline]
pub(crate) fn xor_length(block: &mut Block, len: usize) {
    let be = (len as u32).to_be_bytes();
    for (d, s) in block[BLOCK_SIZE - LENGTH_FIELD_SIZE..].iter_mut().zip(be.iter()) {
        *d ^= s;
    }
}

/// Copies the last `tag.len()` bytes of `full` into `tag`.
#[inline]
pub(crate) fn truncate_into(full: &Block, tag: &mut [u8]) {
    tag.copy_from_slice(&full[BLOCK_SIZE - tag.len()..]);
}

/// Copies up to one block of `src` into `dst`, zero-padding the rest.
#[inline]
pub(crate) fn load_padded(dst: &mut Block, src: &[u8]) {
    debug_assert!(src.len() <= BLOCK_SIZE);

    dst[..src.len()].copy_from_slice(src);
    dst[src.len()..].fill(0);
}

/// Rejects ciphers whose block is not 96 bits.
#[inline]
pub(crate) fn check_block_size<C: BlockCipher + ?Sized>(cipher: &C) -> Result<(), LetterSoupError> {
    match cipher.block_bits() {
        BLOCK_BITS => Ok(()),
        bits => Err(LetterSoupError::UnsupportedBlockSize { bits }),
    }
}
