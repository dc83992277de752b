// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! LetterSoup AEAD and the Marvin MAC over 96-bit block ciphers.
//!
//! Both constructions run on top of any cipher implementing [`BlockCipher`]
//! with a 12-byte block. LetterSoup reuses Marvin's unfinalized accumulator
//! ([`MarvinAccumulator`]) for both associated data and ciphertext, and
//! finalizes the two together into a single tag.
//!
//! ```
//! use lettersoup::{Block, BlockCipher, LetterSoup, LetterSoupError};
//!
//! # #[derive(Default)]
//! # struct XorCipher([u8; 12]);
//! #
//! # impl BlockCipher for XorCipher {
//! #     fn block_bits(&self) -> usize { 96 }
//! #     fn make_key(&mut self, key: &[u8], _key_bits: usize) -> Result<(), LetterSoupError> {
//! #         self.0.copy_from_slice(&key[..12]);
//! #         Ok(())
//! #     }
//! #     fn encrypt_block(&self, input: &Block, output: &mut Block) {
//! #         for i in 0..12 { output[i] = input[i] ^ self.0[i]; }
//! #     }
//! #     fn sct(&self, input: &Block, output: &mut Block) {
//! #         for i in 0..12 { output[i] = input[i].rotate_left(1) ^ self.0[i]; }
//! #     }
//! # }
//! #
//! let mut aead = LetterSoup::new(XorCipher::default()).expect("Failed to new(..)");
//! aead.set_key(&[0x42; 12], 96).expect("Failed to set_key(..)");
//!
//! let nonce = [0x24u8; 12];
//! let mut data = *b"attack at dawn";
//! let mut tag = [0u8; 12];
//!
//! aead.seal(&nonce, b"header", &mut data, &mut tag)
//!     .expect("Failed to seal(..)");
//! aead.open(&nonce, b"header", &mut data, &tag)
//!     .expect("Failed to open(..)");
//!
//! assert_eq!(&data, b"attack at dawn");
//! ```
//!
//! The cipher itself is not part of this crate. The `test-utils` feature
//! exposes deterministic stand-ins which are NOT secure.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod block;
mod consts;
mod error;
mod letter_soup;
mod marvin;
mod offset;
mod tag;
mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use consts::{BLOCK_BITS, BLOCK_SIZE, DEFAULT_TAG_BITS, MARVIN_SEED_CONSTANT, MAX_NONCE_SIZE};
pub use error::LetterSoupError;
pub use letter_soup::LetterSoup;
pub use marvin::{Marvin, MarvinAccumulator};
pub use offset::Offset;
pub use tag::Tag;
pub use traits::{Block, BlockCipher};
