// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed toy permutation.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_BITS, BLOCK_SIZE};
use crate::error::LetterSoupError;
use crate::traits::{Block, BlockCipher};

const ROUNDS: usize = 6;

const ENCRYPT_CONSTANTS: [u8; ROUNDS] = [0x1d, 0x3b, 0x76, 0xec, 0xc5, 0x97];
const SCT_CONSTANTS: [u8; ROUNDS] = [0x5c, 0xb8, 0x71, 0xe2, 0xd9, 0xaf];

/// Keyed byte-wise permutation of the 96-bit block.
///
/// Each round XORs the key, then updates every byte with a rotated copy of
/// its (already updated) left neighbour. Every round is invertible, so both
/// transforms are permutations: distinct inputs always give distinct
/// outputs. `encrypt_block` and `sct` use different constants and
/// rotations.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct ToyCipher {
    key: Block,
}

impl ToyCipher {
    /// Cipher keyed with `key`.
    pub fn with_key(key: &Block) -> Self {
        Self { key: *key }
    }

    fn permute(&self, input: &Block, output: &mut Block, constants: &[u8; ROUNDS], rot: u32) {
        output.copy_from_slice(input);

        for c in constants {
            for (o, k) in output.iter_mut().zip(self.key.iter()) {
                *o ^= k;
            }

            for i in 0..BLOCK_SIZE {
                let left = output[(i + BLOCK_SIZE - 1) % BLOCK_SIZE];
                output[i] = output[i].wrapping_add(left.rotate_left(rot) ^ c);
            }
        }
    }
}

impl BlockCipher for ToyCipher {
    fn block_bits(&self) -> usize {
        BLOCK_BITS
    }

    /// Accepts 8..=96 bits in whole bytes; shorter keys are repeated to fill
    /// the block.
    fn make_key(&mut self, key: &[u8], key_bits: usize) -> Result<(), LetterSoupError> {
        let len = key_bits / 8;
        if key_bits == 0 || key_bits % 8 != 0 || key_bits > BLOCK_BITS || key.len() < len {
            return Err(LetterSoupError::InvalidKeySize { bits: key_bits });
        }

        for (dst, src) in self.key.iter_mut().zip(key[..len].iter().cycle()) {
            *dst = *src;
        }

        Ok(())
    }

    fn encrypt_block(&self, input: &Block, output: &mut Block) {
        self.permute(input, output, &ENCRYPT_CONSTANTS, 3);
    }

    fn sct(&self, input: &Block, output: &mut Block) {
        self.permute(input, output, &SCT_CONSTANTS, 5);
    }
}

impl core::fmt::Debug for ToyCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ToyCipher {{ [protected] }}")
    }
}
