// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block cipher boundary.

use crate::consts::BLOCK_SIZE;
use crate::error::LetterSoupError;

/// One 96-bit cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// Capabilities a 96-bit block cipher must expose to Marvin and LetterSoup.
///
/// Implementations own their key schedule. `encrypt_block` and `sct` must be
/// deterministic functions of the current key and input.
pub trait BlockCipher {
    /// Block size in bits. Marvin and LetterSoup reject anything but 96.
    fn block_bits(&self) -> usize;

    /// Initialize the key schedule from `key_bits` bits of `key`.
    fn make_key(&mut self, key: &[u8], key_bits: usize) -> Result<(), LetterSoupError>;

    /// Forward block encryption under the current key.
    fn encrypt_block(&self, input: &Block, output: &mut Block);

    /// Auxiliary keyed transform, distinct from `encrypt_block`.
    ///
    /// Used as an independent PRF for per-block hashing and for the
    /// short-final-block contribution.
    fn sct(&self, input: &Block, output: &mut Block);
}

impl<C: BlockCipher + ?Sized> BlockCipher for &mut C {
    #[inline]
    fn block_bits(&self) -> usize {
        (**self).block_bits()
    }

    #[inline]
    fn make_key(&mut self, key: &[u8], key_bits: usize) -> Result<(), LetterSoupError> {
        (**self).make_key(key, key_bits)
    }

    #[inline]
    fn encrypt_block(&self, input: &Block, output: &mut Block) {
        (**self).encrypt_block(input, output)
    }

    #[inline]
    fn sct(&self, input: &Block, output: &mut Block) {
        (**self).sct(input, output)
    }
}
