// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Marvin message authentication code.
//!
//! Marvin XOR-folds `sct(M_i ^ O_i)` for every (zero-padded) block `M_i`
//! into a 96-bit accumulator, with `O_i` drawn from the offset sequence.
//! Two surfaces are exposed:
//!
//! - [`Marvin`]: the standalone MAC. Seeds itself from the cipher and
//!   finalizes with the length/marker block, one encryption and truncation.
//! - [`MarvinAccumulator`]: the embedded mode LetterSoup builds on. Seeded
//!   by the caller and finished into the raw accumulator, leaving
//!   finalization to the caller.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::block::{
    check_block_size, check_length, tag_len, xor_in_place, xor_length, xor_marker,
};
use crate::consts::{BLOCK_SIZE, MARVIN_SEED_CONSTANT};
use crate::error::LetterSoupError;
use crate::offset::Offset;
use crate::tag::Tag;
use crate::traits::{Block, BlockCipher};

/// Unfinalized Marvin accumulator (embedded mode).
///
/// Input may be fed in arbitrary pieces; a trailing partial block is held
/// back and zero-padded by [`finish`](Self::finish).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MarvinAccumulator {
    offset: Offset,
    acc: Block,
    buffer: Block,
    buffer_len: usize,
    processed: usize,
    masked: Block,
    contribution: Block,
}

impl MarvinAccumulator {
    /// Seeds the offset chain directly with `seed`.
    pub fn new(seed: &Block) -> Self {
        Self {
            offset: Offset::new(seed),
            acc: [0; BLOCK_SIZE],
            buffer: [0; BLOCK_SIZE],
            buffer_len: 0,
            processed: 0,
            masked: [0; BLOCK_SIZE],
            contribution: [0; BLOCK_SIZE],
        }
    }

    /// Bytes absorbed so far, excluding direct [`fold`](Self::fold)s.
    #[inline]
    pub fn processed_len(&self) -> usize {
        self.processed
    }

    /// Absorbs `data`.
    ///
    /// Fails with [`LetterSoupError::MessageTooLong`] once the total length
    /// no longer fits the 32-bit length field.
    pub fn update<C: BlockCipher + ?Sized>(
        &mut self,
        cipher: &C,
        data: &[u8],
    ) -> Result<(), LetterSoupError> {
        let total = self
            .processed
            .checked_add(data.len())
            .ok_or(LetterSoupError::MessageTooLong)?;
        check_length(total)?;
        self.processed = total;

        let mut input = data;

        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(input.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&input[..take]);
            self.buffer_len += take;
            input = &input[take..];

            if self.buffer_len < BLOCK_SIZE {
                return Ok(());
            }

            self.absorb_buffer(cipher);
        }

        let mut blocks = input.chunks_exact(BLOCK_SIZE);
        for block in blocks.by_ref() {
            absorb(
                cipher,
                &mut self.offset,
                &mut self.acc,
                &mut self.masked,
                &mut self.contribution,
                block,
            );
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();

        Ok(())
    }

    /// Absorbs one full block: advance the offset, `acc ^= sct(block ^ O)`.
    ///
    /// Fails with [`LetterSoupError::InvalidSequence`] while a partial block
    /// from [`update`](Self::update) is pending, and with
    /// [`LetterSoupError::MessageTooLong`] past the 32-bit length bound.
    pub fn absorb_block<C: BlockCipher + ?Sized>(
        &mut self,
        cipher: &C,
        block: &Block,
    ) -> Result<(), LetterSoupError> {
        if self.buffer_len != 0 {
            return Err(LetterSoupError::InvalidSequence);
        }

        let total = self
            .processed
            .checked_add(BLOCK_SIZE)
            .ok_or(LetterSoupError::MessageTooLong)?;
        check_length(total)?;

        absorb(
            cipher,
            &mut self.offset,
            &mut self.acc,
            &mut self.masked,
            &mut self.contribution,
            block,
        );
        self.processed = total;

        Ok(())
    }

    /// XORs `contribution` straight into the accumulator, without offset or
    /// transform.
    #[inline]
    pub fn fold(&mut self, contribution: &Block) {
        xor_in_place(&mut self.acc, contribution);
    }

    /// Pads and absorbs any pending partial block, then returns the raw
    /// accumulator.
    pub fn finish<C: BlockCipher + ?Sized>(mut self, cipher: &C) -> Block {
        if self.buffer_len > 0 {
            self.buffer[self.buffer_len..].fill(0);
            self.absorb_buffer(cipher);
        }

        self.acc
    }

    fn absorb_buffer<C: BlockCipher + ?Sized>(&mut self, cipher: &C) {
        absorb(
            cipher,
            &mut self.offset,
            &mut self.acc,
            &mut self.masked,
            &mut self.contribution,
            &self.buffer,
        );
        self.buffer.zeroize();
        self.buffer_len = 0;
    }
}

impl core::fmt::Debug for MarvinAccumulator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "MarvinAccumulator {{ [protected] }}")
    }
}

#[inline(always)]
fn absorb<C: BlockCipher + ?Sized>(
    cipher: &C,
    offset: &mut Offset,
    acc: &mut Block,
    masked: &mut Block,
    contribution: &mut Block,
    block: &[u8],
) {
    debug_assert_eq!(block.len(), BLOCK_SIZE);

    let o = offset.advance();
    for ((m, b), o) in masked.iter_mut().zip(block.iter()).zip(o.iter()) {
        *m = b ^ o;
    }

    cipher.sct(masked, contribution);
    xor_in_place(acc, contribution);

    masked.zeroize();
    contribution.zeroize();
}

struct MarvinSession {
    r: Zeroizing<Block>,
    accumulator: MarvinAccumulator,
}

/// Standalone Marvin MAC.
///
/// ```text
/// init() -> update(..)* -> tag(..)
/// ```
///
/// `tag` consumes the session; call [`init`](Self::init) again for the next
/// message.
pub struct Marvin<C: BlockCipher> {
    cipher: C,
    session: Option<MarvinSession>,
}

impl<C: BlockCipher> Marvin<C> {
    /// Binds `cipher`, rejecting anything but a 96-bit block.
    pub fn new(cipher: C) -> Result<Self, LetterSoupError> {
        check_block_size(&cipher)?;

        Ok(Self {
            cipher,
            session: None,
        })
    }

    /// Underlying cipher.
    #[inline]
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Delegates to the cipher key schedule and drops any open session.
    pub fn set_key(&mut self, key: &[u8], key_bits: usize) -> Result<(), LetterSoupError> {
        self.session = None;
        self.cipher.make_key(key, key_bits)
    }

    /// Starts a new message: `R = E(P) ^ P` with
    /// `P = [0, .., 0, MARVIN_SEED_CONSTANT]`.
    pub fn init(&mut self) {
        let mut seed_block = [0u8; BLOCK_SIZE];
        seed_block[BLOCK_SIZE - 1] = MARVIN_SEED_CONSTANT;

        let mut r = Zeroizing::new([0u8; BLOCK_SIZE]);
        self.cipher.encrypt_block(&seed_block, &mut r);
        xor_in_place(&mut r, &seed_block);

        let accumulator = MarvinAccumulator::new(&r);
        self.session = Some(MarvinSession { r, accumulator });
    }

    /// Absorbs `data` into the open session.
    pub fn update(&mut self, data: &[u8]) -> Result<(), LetterSoupError> {
        let session = self
            .session
            .as_mut()
            .ok_or(LetterSoupError::InvalidSequence)?;

        session.accumulator.update(&self.cipher, data)
    }

    /// Finalizes the session into a `tag_bits`-bit tag.
    ///
    /// `T = E(acc ^ R ^ [96 - tag_bits, 0x80, 0..] ^ be32(len))`, truncated
    /// to its last `tag_bits / 8` bytes.
    pub fn tag(&mut self, tag_bits: usize) -> Result<Tag, LetterSoupError> {
        let len = tag_len(tag_bits)?;
        let MarvinSession { r, accumulator } = self
            .session
            .take()
            .ok_or(LetterSoupError::InvalidSequence)?;

        let processed = accumulator.processed_len();
        let mut acc = Zeroizing::new(accumulator.finish(&self.cipher));
        xor_in_place(&mut acc, &r);
        xor_marker(&mut acc, tag_bits);
        xor_length(&mut acc, processed);

        let mut full = Zeroizing::new([0u8; BLOCK_SIZE]);
        self.cipher.encrypt_block(&acc, &mut full);

        Ok(Tag::from_block(&full, len))
    }
}

impl<C: BlockCipher> core::fmt::Debug for Marvin<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Marvin {{ [protected] }}")
    }
}
