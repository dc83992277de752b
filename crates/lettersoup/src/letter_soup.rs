// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! LetterSoup AEAD.
//!
//! Session lifecycle:
//!
//! ```text
//! set_iv(N) -> [update(H)] -> encrypt(M) -> tag(..)
//!           -> [update(H)] -> decrypt_verified(C, T)
//! ```
//!
//! - `R = E(N) ^ N`, with `N` left-padded to one block.
//! - Keystream: `C_i = E(O_i) ^ M_i`, `O_i` advanced from `R`.
//! - Ciphertext accumulator `A`: Marvin seeded with `R` over full `C_i`,
//!   plus `sct(pad(M_last))` for a short final block.
//! - AAD accumulator `D`: Marvin seeded with `L = E(0)` over `H`.
//! - `T = E(A ^ R ^ mark ^ len(M) [^ sct(D ^ L ^ mark ^ len(H))])`,
//!   truncated to its last `tag_bits / 8` bytes.

use zeroize::{Zeroize, Zeroizing};

use crate::block::{
    check_block_size, check_length, load_padded, tag_len, xor_in_place, xor_length, xor_marker,
};
use crate::consts::{BLOCK_BITS, BLOCK_SIZE, MAX_NONCE_SIZE};
use crate::error::LetterSoupError;
use crate::marvin::MarvinAccumulator;
use crate::offset::Offset;
use crate::tag::Tag;
use crate::traits::{Block, BlockCipher};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

struct AadDigest {
    l: Zeroizing<Block>,
    d: Zeroizing<Block>,
    len: usize,
}

struct MessageState {
    r: Zeroizing<Block>,
    a: Zeroizing<Block>,
    len: usize,
}

/// LetterSoup AEAD bound to one 96-bit block cipher.
///
/// Nonce uniqueness per key is the caller's responsibility.
pub struct LetterSoup<C: BlockCipher> {
    cipher: C,
    nonce: Option<Zeroizing<Block>>,
    aad: Option<AadDigest>,
    message: Option<MessageState>,
}

impl<C: BlockCipher> LetterSoup<C> {
    /// Binds `cipher`, rejecting anything but a 96-bit block.
    pub fn new(cipher: C) -> Result<Self, LetterSoupError> {
        check_block_size(&cipher)?;

        Ok(Self {
            cipher,
            nonce: None,
            aad: None,
            message: None,
        })
    }

    /// Underlying cipher.
    #[inline]
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Replaces the cipher and drops all session state.
    pub fn set_cipher(&mut self, cipher: C) -> Result<(), LetterSoupError> {
        check_block_size(&cipher)?;

        self.cipher = cipher;
        self.reset();

        Ok(())
    }

    /// Delegates to the cipher key schedule and drops all session state.
    pub fn set_key(&mut self, key: &[u8], key_bits: usize) -> Result<(), LetterSoupError> {
        self.reset();
        self.cipher.make_key(key, key_bits)
    }

    /// Starts a new session for `nonce` (at most 12 bytes).
    ///
    /// Discards `R`, the accumulators and length counters of any previous
    /// session.
    pub fn set_iv(&mut self, nonce: &[u8]) -> Result<(), LetterSoupError> {
        if nonce.len() > MAX_NONCE_SIZE {
            return Err(LetterSoupError::InvalidNonceLength { len: nonce.len() });
        }

        let mut padded = Zeroizing::new([0u8; BLOCK_SIZE]);
        padded[BLOCK_SIZE - nonce.len()..].copy_from_slice(nonce);

        self.reset();
        self.nonce = Some(padded);

        Ok(())
    }

    /// Hashes associated data for the current session.
    ///
    /// Optional. A second call replaces the first.
    pub fn update(&mut self, aad: &[u8]) -> Result<(), LetterSoupError> {
        if self.nonce.is_none() {
            return Err(LetterSoupError::InvalidSequence);
        }
        check_length(aad.len())?;

        let mut l = Zeroizing::new([0u8; BLOCK_SIZE]);
        self.cipher.encrypt_block(&[0u8; BLOCK_SIZE], &mut l);

        let mut accumulator = MarvinAccumulator::new(&l);
        accumulator.update(&self.cipher, aad)?;
        let d = Zeroizing::new(accumulator.finish(&self.cipher));

        self.aad = Some(AadDigest {
            l,
            d,
            len: aad.len(),
        });

        Ok(())
    }

    /// Encrypts `data` in place and records the ciphertext accumulator for
    /// [`tag`](Self::tag).
    pub fn encrypt(&mut self, data: &mut [u8]) -> Result<(), LetterSoupError> {
        check_length(data.len())?;
        let r = self.derive_r()?;

        let mut accumulator = MarvinAccumulator::new(&r);
        self.crypt(&r, data, Direction::Encrypt, Some(&mut accumulator))?;
        let a = Zeroizing::new(accumulator.finish(&self.cipher));

        self.message = Some(MessageState {
            r,
            a,
            len: data.len(),
        });

        Ok(())
    }

    /// Decrypts `data` in place. Does NOT authenticate.
    ///
    /// Plaintext from this call must not be released before the tag has been
    /// checked; [`decrypt_verified`](Self::decrypt_verified) does both.
    pub fn decrypt(&self, data: &mut [u8]) -> Result<(), LetterSoupError> {
        let r = self.derive_r()?;
        self.crypt(&r, data, Direction::Decrypt, None)?;

        Ok(())
    }

    /// Computes the `tag_bits`-bit tag of the last [`encrypt`](Self::encrypt).
    ///
    /// Consumes the ciphertext accumulator; a second call fails with
    /// [`LetterSoupError::InvalidSequence`].
    pub fn tag(&mut self, tag_bits: usize) -> Result<Tag, LetterSoupError> {
        let len = tag_len(tag_bits)?;
        let message = self
            .message
            .take()
            .ok_or(LetterSoupError::InvalidSequence)?;

        Ok(self.finalize(&message, tag_bits, len))
    }

    /// Decrypts `data` in place and checks it against `tag`.
    ///
    /// The tag size is taken from `tag.len()`. On mismatch `data` is zeroized
    /// and [`LetterSoupError::AuthenticationFailure`] is returned.
    pub fn decrypt_verified(&mut self, data: &mut [u8], tag: &[u8]) -> Result<(), LetterSoupError> {
        let tag_bits = tag.len() * 8;
        let len = tag_len(tag_bits)?;
        check_length(data.len())?;
        let r = self.derive_r()?;

        let mut accumulator = MarvinAccumulator::new(&r);
        self.crypt(&r, data, Direction::Decrypt, Some(&mut accumulator))?;
        let message = MessageState {
            a: Zeroizing::new(accumulator.finish(&self.cipher)),
            r,
            len: data.len(),
        };

        let expected = self.finalize(&message, tag_bits, len);
        if let Err(e) = expected.verify(tag) {
            data.zeroize();
            return Err(e);
        }

        Ok(())
    }

    /// One-shot encryption: `set_iv`, `update` (skipped for empty `aad`),
    /// `encrypt`, then writes a `tag_out.len()`-byte tag.
    pub fn seal(
        &mut self,
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag_out: &mut [u8],
    ) -> Result<(), LetterSoupError> {
        let tag_bits = tag_out.len() * 8;
        tag_len(tag_bits)?;

        self.begin(nonce, aad)?;
        self.encrypt(data)?;

        let tag = self.tag(tag_bits)?;
        tag_out.copy_from_slice(tag.as_slice());

        Ok(())
    }

    /// One-shot verified decryption, the inverse of [`seal`](Self::seal).
    pub fn open(
        &mut self,
        nonce: &[u8],
        aad: &[u8],
        data: &mut [u8],
        tag: &[u8],
    ) -> Result<(), LetterSoupError> {
        self.begin(nonce, aad)?;
        self.decrypt_verified(data, tag)
    }

    fn begin(&mut self, nonce: &[u8], aad: &[u8]) -> Result<(), LetterSoupError> {
        self.set_iv(nonce)?;
        if !aad.is_empty() {
            self.update(aad)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.nonce = None;
        self.aad = None;
        self.message = None;
    }

    /// `R = E(N) ^ N`
    fn derive_r(&self) -> Result<Zeroizing<Block>, LetterSoupError> {
        let nonce = self
            .nonce
            .as_ref()
            .ok_or(LetterSoupError::InvalidSequence)?;

        let mut r = Zeroizing::new([0u8; BLOCK_SIZE]);
        self.cipher.encrypt_block(nonce, &mut r);
        xor_in_place(&mut r, nonce);

        Ok(r)
    }

    /// Offset keystream over `data`, optionally accumulating into
    /// `accumulator`.
    ///
    /// Full blocks fold their ciphertext through the accumulator. A short
    /// final block folds `sct(pad(plaintext))` directly instead.
    fn crypt(
        &self,
        r: &Block,
        data: &mut [u8],
        direction: Direction,
        mut accumulator: Option<&mut MarvinAccumulator>,
    ) -> Result<(), LetterSoupError> {
        let mut offset = Offset::new(r);
        let mut keystream = Zeroizing::new([0u8; BLOCK_SIZE]);

        let mut blocks = data.chunks_exact_mut(BLOCK_SIZE);
        for block in blocks.by_ref() {
            self.cipher.encrypt_block(offset.advance(), &mut keystream);

            if let Some(acc) = accumulator.as_deref_mut() {
                if direction == Direction::Decrypt {
                    absorb_slice(acc, &self.cipher, block)?;
                }
                xor_keystream(block, &keystream);
                if direction == Direction::Encrypt {
                    absorb_slice(acc, &self.cipher, block)?;
                }
            } else {
                xor_keystream(block, &keystream);
            }
        }

        let tail = blocks.into_remainder();
        if tail.is_empty() {
            return Ok(());
        }

        self.cipher.encrypt_block(offset.advance(), &mut keystream);

        let Some(acc) = accumulator else {
            xor_keystream(tail, &keystream);
            return Ok(());
        };

        let mut padded = Zeroizing::new([0u8; BLOCK_SIZE]);
        let mut contribution = Zeroizing::new([0u8; BLOCK_SIZE]);

        if direction == Direction::Encrypt {
            load_padded(&mut padded, tail);
            xor_keystream(tail, &keystream);
        } else {
            xor_keystream(tail, &keystream);
            load_padded(&mut padded, tail);
        }

        self.cipher.sct(&padded, &mut contribution);
        acc.fold(&contribution);

        Ok(())
    }

    fn finalize(&self, message: &MessageState, tag_bits: usize, len: usize) -> Tag {
        debug_assert!(tag_bits <= BLOCK_BITS);

        let mut x = Zeroizing::new(*message.a);
        xor_in_place(&mut x, &message.r);
        xor_marker(&mut x, tag_bits);
        xor_length(&mut x, message.len);

        if let Some(aad) = &self.aad {
            let mut y = Zeroizing::new(*aad.d);
            xor_in_place(&mut y, &aad.l);
            xor_marker(&mut y, tag_bits);
            xor_length(&mut y, aad.len);

            let mut mixed = Zeroizing::new([0u8; BLOCK_SIZE]);
            self.cipher.sct(&y, &mut mixed);
            xor_in_place(&mut x, &mixed);
        }

        let mut full = Zeroizing::new([0u8; BLOCK_SIZE]);
        self.cipher.encrypt_block(&x, &mut full);

        Tag::from_block(&full, len)
    }
}

impl<C: BlockCipher> core::fmt::Debug for LetterSoup<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LetterSoup {{ [protected] }}")
    }
}

#[inline(always)]
fn xor_keystream(data: &mut [u8], keystream: &Block) {
    for (d, k) in data.iter_mut().zip(keystream.iter()) {
        *d ^= k;
    }
}

#[inline(always)]
fn absorb_slice<C: BlockCipher + ?Sized>(
    acc: &mut MarvinAccumulator,
    cipher: &C,
    block: &[u8],
) -> Result<(), LetterSoupError> {
    let mut full = Zeroizing::new([0u8; BLOCK_SIZE]);
    full.copy_from_slice(block);
    acc.absorb_block(cipher, &full)
}
