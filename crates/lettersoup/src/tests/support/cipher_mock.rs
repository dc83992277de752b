// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::LetterSoupError;
use crate::support::test_utils::{CipherMock, CipherMockBehaviour, ToyCipher};
use crate::traits::BlockCipher;

#[test]
fn test_behaviour_none_reports_96_bits() {
    let mock = CipherMock::new(CipherMockBehaviour::None);

    assert_eq!(mock.block_bits(), 96);
}

#[test]
fn test_behaviour_report_block_bits() {
    let mock = CipherMock::new(CipherMockBehaviour::ReportBlockBits(128));

    assert_eq!(mock.block_bits(), 128);
}

#[test]
fn test_behaviour_fail_make_key_at() {
    let mut mock = CipherMock::new(CipherMockBehaviour::FailMakeKeyAt(1));
    let key = [0x11u8; 12];

    assert!(mock.make_key(&key, 96).is_ok());
    assert_eq!(
        mock.make_key(&key, 96),
        Err(LetterSoupError::InvalidKeySize { bits: 96 })
    );
    assert!(mock.make_key(&key, 96).is_ok());
}

#[test]
fn test_counts_calls_and_resets() {
    let mock = CipherMock::new(CipherMockBehaviour::None);
    let mut out = [0u8; 12];

    mock.encrypt_block(&[0; 12], &mut out);
    mock.encrypt_block(&[1; 12], &mut out);
    mock.sct(&[0; 12], &mut out);

    assert_eq!(mock.encrypt_calls(), 2);
    assert_eq!(mock.sct_calls(), 1);

    mock.reset_counters();
    assert_eq!(mock.encrypt_calls(), 0);
    assert_eq!(mock.sct_calls(), 0);
}

#[test]
fn test_delegates_to_toy_cipher() {
    let key = *b"mock-backend";
    let mut mock = CipherMock::new(CipherMockBehaviour::None);
    mock.make_key(&key, 96).expect("Failed to make_key(..)");
    let toy = ToyCipher::with_key(&key);

    let input = *b"plain block!";
    let mut from_mock = [0u8; 12];
    let mut from_toy = [0u8; 12];

    mock.encrypt_block(&input, &mut from_mock);
    toy.encrypt_block(&input, &mut from_toy);
    assert_eq!(from_mock, from_toy);

    mock.sct(&input, &mut from_mock);
    toy.sct(&input, &mut from_toy);
    assert_eq!(from_mock, from_toy);
}
