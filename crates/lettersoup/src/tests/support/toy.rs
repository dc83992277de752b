// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::LetterSoupError;
use crate::support::test_utils::ToyCipher;
use crate::traits::{Block, BlockCipher};

fn encrypt(cipher: &ToyCipher, input: &Block) -> Block {
    let mut out = [0u8; 12];
    cipher.encrypt_block(input, &mut out);
    out
}

fn sct(cipher: &ToyCipher, input: &Block) -> Block {
    let mut out = [0u8; 12];
    cipher.sct(input, &mut out);
    out
}

// =============================================================================
// make_key()
// =============================================================================

#[test]
fn test_make_key_rejects_invalid_sizes() {
    let mut cipher = ToyCipher::default();
    let key = [0xaa; 16];

    for bits in [0, 4, 12, 100, 104, 128] {
        assert_eq!(
            cipher.make_key(&key, bits),
            Err(LetterSoupError::InvalidKeySize { bits })
        );
    }
}

#[test]
fn test_make_key_rejects_short_buffer() {
    let mut cipher = ToyCipher::default();

    assert_eq!(
        cipher.make_key(&[0xaa; 4], 64),
        Err(LetterSoupError::InvalidKeySize { bits: 64 })
    );
}

#[test]
fn test_make_key_repeats_short_key() {
    let mut short = ToyCipher::default();
    short
        .make_key(&[1, 2, 3, 4], 32)
        .expect("Failed to make_key(..)");

    let repeated = ToyCipher::with_key(&[1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);

    assert_eq!(encrypt(&short, &[7; 12]), encrypt(&repeated, &[7; 12]));
}

#[test]
fn test_make_key_uses_only_key_bits() {
    let mut a = ToyCipher::default();
    a.make_key(&[1, 2, 3, 4, 5, 6], 32)
        .expect("Failed to make_key(..)");

    let mut b = ToyCipher::default();
    b.make_key(&[1, 2, 3, 4, 9, 9], 32)
        .expect("Failed to make_key(..)");

    assert_eq!(encrypt(&a, &[0; 12]), encrypt(&b, &[0; 12]));
}

// =============================================================================
// encrypt_block() / sct()
// =============================================================================

#[test]
fn test_transforms_are_distinct() {
    let cipher = ToyCipher::with_key(b"toy-key-0001");

    for input in [[0u8; 12], [0xff; 12], *b"distinctness"] {
        assert_ne!(encrypt(&cipher, &input), sct(&cipher, &input));
    }
}

#[test]
fn test_key_changes_output() {
    let a = ToyCipher::with_key(b"toy-key-0001");
    let b = ToyCipher::with_key(b"toy-key-0002");

    assert_ne!(encrypt(&a, &[0; 12]), encrypt(&b, &[0; 12]));
    assert_ne!(sct(&a, &[0; 12]), sct(&b, &[0; 12]));
}

#[test]
fn test_single_byte_inputs_do_not_collide() {
    let cipher = ToyCipher::with_key(b"toy-key-0001");
    let mut seen = Vec::new();

    for pos in 0..12 {
        for value in 0..=255u8 {
            let mut input = [0u8; 12];
            input[pos] = value;
            if pos > 0 && value == 0 {
                continue;
            }

            let out = encrypt(&cipher, &input);
            assert!(!seen.contains(&out), "collision at {pos}/{value}");
            seen.push(out);
        }
    }
}

#[test]
fn test_debug_is_redacted() {
    let cipher = ToyCipher::with_key(b"toy-key-0001");

    assert_eq!(format!("{:?}", cipher), "ToyCipher { [protected] }");
}
