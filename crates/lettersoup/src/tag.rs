// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Authentication tag with constant-time comparison.

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::truncate_into;
use crate::consts::BLOCK_SIZE;
use crate::error::LetterSoupError;
use crate::traits::Block;

/// Truncated authentication tag, between 1 and 12 bytes.
///
/// Equality is constant-time over the tag bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Tag {
    bytes: Block,
    len: usize,
}

impl Tag {
    /// Keeps the last `len` bytes of `full`.
    pub(crate) fn from_block(full: &Block, len: usize) -> Self {
        debug_assert!(len > 0 && len <= BLOCK_SIZE);

        let mut bytes = [0u8; BLOCK_SIZE];
        truncate_into(full, &mut bytes[..len]);

        Self { bytes, len }
    }

    /// Tag bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Tag size in bits.
    #[inline]
    pub fn bits(&self) -> usize {
        self.len * 8
    }

    /// Compares against a received tag in constant time.
    pub fn verify(&self, received: &[u8]) -> Result<(), LetterSoupError> {
        if bool::from(self.as_slice().ct_eq(received)) {
            Ok(())
        } else {
            Err(LetterSoupError::AuthenticationFailure)
        }
    }
}

impl ConstantTimeEq for Tag {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_slice().ct_eq(other.as_slice())
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Tag {}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tag {{ bits: {}, [protected] }}", self.bits())
    }
}
