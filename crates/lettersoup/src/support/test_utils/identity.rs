// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Identity cipher: `encrypt(x) = x`, `sct(x) = x`.

use crate::consts::BLOCK_BITS;
use crate::error::LetterSoupError;
use crate::traits::{Block, BlockCipher};

/// Cipher whose transforms are both the identity.
///
/// Pins down the XOR structure of Marvin and LetterSoup: every cipher call
/// disappears, leaving offsets, markers and lengths directly observable.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCipher;

impl BlockCipher for IdentityCipher {
    fn block_bits(&self) -> usize {
        BLOCK_BITS
    }

    fn make_key(&mut self, _key: &[u8], _key_bits: usize) -> Result<(), LetterSoupError> {
        Ok(())
    }

    fn encrypt_block(&self, input: &Block, output: &mut Block) {
        output.copy_from_slice(input);
    }

    fn sct(&self, input: &Block, output: &mut Block) {
        output.copy_from_slice(input);
    }
}
