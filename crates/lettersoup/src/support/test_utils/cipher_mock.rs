// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock cipher for testing.

use core::cell::Cell;

use crate::consts::BLOCK_BITS;
use crate::error::LetterSoupError;
use crate::traits::{Block, BlockCipher};

use super::toy::ToyCipher;

/// Mock failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMockBehaviour {
    /// No failure.
    None,
    /// Report this block size instead of 96 bits.
    ReportBlockBits(usize),
    /// Fail make_key at call index (0-indexed).
    FailMakeKeyAt(usize),
}

/// Mock cipher backed by [`ToyCipher`], counting every call.
#[derive(Debug)]
pub struct CipherMock {
    backend: ToyCipher,
    behaviour: CipherMockBehaviour,
    make_key_count: Cell<usize>,
    encrypt_count: Cell<usize>,
    sct_count: Cell<usize>,
}

impl CipherMock {
    /// Mock with the given behaviour.
    pub fn new(behaviour: CipherMockBehaviour) -> Self {
        Self {
            backend: ToyCipher::default(),
            behaviour,
            make_key_count: Cell::new(0),
            encrypt_count: Cell::new(0),
            sct_count: Cell::new(0),
        }
    }

    /// Number of `encrypt_block` calls so far.
    #[inline]
    pub fn encrypt_calls(&self) -> usize {
        self.encrypt_count.get()
    }

    /// Number of `sct` calls so far.
    #[inline]
    pub fn sct_calls(&self) -> usize {
        self.sct_count.get()
    }

    /// Resets both transform counters.
    pub fn reset_counters(&self) {
        self.encrypt_count.set(0);
        self.sct_count.set(0);
    }
}

impl BlockCipher for CipherMock {
    fn block_bits(&self) -> usize {
        match self.behaviour {
            CipherMockBehaviour::ReportBlockBits(bits) => bits,
            _ => BLOCK_BITS,
        }
    }

    fn make_key(&mut self, key: &[u8], key_bits: usize) -> Result<(), LetterSoupError> {
        let current = self.make_key_count.get();
        self.make_key_count.set(current + 1);

        if let CipherMockBehaviour::FailMakeKeyAt(idx) = self.behaviour {
            if current == idx {
                return Err(LetterSoupError::InvalidKeySize { bits: key_bits });
            }
        }

        self.backend.make_key(key, key_bits)
    }

    fn encrypt_block(&self, input: &Block, output: &mut Block) {
        self.encrypt_count.set(self.encrypt_count.get() + 1);
        self.backend.encrypt_block(input, output);
    }

    fn sct(&self, input: &Block, output: &mut Block) {
        self.sct_count.set(self.sct_count.get() + 1);
        self.backend.sct(input, output);
    }
}
