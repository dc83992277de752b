// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Offset sequence generator.
//!
//! A 96-bit byte-oriented shift register. Each step rotates the register
//! left by one byte and feeds the byte shifted out back into bytes 9 and 10.
//! The map is linear and invertible, so the all-zero register is its only
//! fixed point and any non-zero seed walks a long non-repeating orbit.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::BLOCK_SIZE;
use crate::traits::Block;

/// Offset register, advanced once per processed block.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Offset {
    register: Block,
}

impl Offset {
    /// Seeds the register.
    #[inline]
    pub fn new(seed: &Block) -> Self {
        Self { register: *seed }
    }

    /// Current register value.
    #[inline]
    pub fn current(&self) -> &Block {
        &self.register
    }

    /// Advances the register and returns the new value.
    #[inline]
    pub fn advance(&mut self) -> &Block {
        step(&mut self.register);
        &self.register
    }
}

/// One register step. Shifts are logical on `u8`; no sign extension.
#[inline(always)]
pub(crate) fn step(o: &mut Block) {
    let o0 = o[0];
    o.copy_within(1..BLOCK_SIZE, 0);
    o[9] ^= o0 ^ (o0 >> 3) ^ (o0 >> 5);
    o[10] ^= (o0 << 5) ^ (o0 << 3);
    o[11] = o0;
}

impl core::fmt::Debug for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Offset {{ [protected] }}")
    }
}
