// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::IdentityCipher;
use crate::traits::BlockCipher;

#[test]
fn test_identity_transforms() {
    let mut cipher = IdentityCipher;
    cipher
        .make_key(&[], 0)
        .expect("Failed to make_key(..)");

    let input = *b"identity-blk";
    let mut out = [0u8; 12];

    cipher.encrypt_block(&input, &mut out);
    assert_eq!(out, input);

    out = [0; 12];
    cipher.sct(&input, &mut out);
    assert_eq!(out, input);
    assert_eq!(cipher.block_bits(), 96);
}
