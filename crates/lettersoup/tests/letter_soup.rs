// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod letter_soup_tests {
    use lettersoup::support::test_utils::ToyCipher;
    use lettersoup::{BlockCipher, DEFAULT_TAG_BITS, LetterSoup, LetterSoupError};

    fn keyed_aead() -> LetterSoup<ToyCipher> {
        let mut aead = LetterSoup::new(ToyCipher::default()).expect("Failed to new(..)");
        aead.set_key(b"public-api-k", 96)
            .expect("Failed to set_key(..)");
        aead
    }

    #[test]
    fn test_step_by_step_roundtrip() {
        let mut aead = keyed_aead();
        let original = b"The quick brown fox jumps over the lazy dog".to_vec();
        let mut data = original.clone();

        aead.set_iv(b"iv-0000001").expect("Failed to set_iv(..)");
        aead.update(b"header").expect("Failed to update(..)");
        aead.encrypt(&mut data).expect("Failed to encrypt(..)");
        let tag = aead.tag(DEFAULT_TAG_BITS).expect("Failed to tag(..)");

        assert_ne!(data, original);
        assert_eq!(tag.bits(), DEFAULT_TAG_BITS);

        aead.set_iv(b"iv-0000001").expect("Failed to set_iv(..)");
        aead.update(b"header").expect("Failed to update(..)");
        aead.decrypt_verified(&mut data, tag.as_ref())
            .expect("Failed to decrypt_verified(..)");

        assert_eq!(data, original);
    }

    #[test]
    fn test_seal_open_every_tag_size() {
        let mut aead = keyed_aead();

        for tag_bytes in 1..=12 {
            let original = vec![0xc3u8; 37];
            let mut data = original.clone();
            let mut tag = vec![0u8; tag_bytes];

            aead.seal(b"nonce", b"aad", &mut data, &mut tag)
                .expect("Failed to seal(..)");
            aead.open(b"nonce", b"aad", &mut data, &tag)
                .expect("Failed to open(..)");

            assert_eq!(data, original);
        }
    }

    #[test]
    fn test_open_with_wrong_key_fails_and_wipes() {
        let mut sender = keyed_aead();
        let mut data = b"for the right key only".to_vec();
        let mut tag = [0u8; 12];
        sender
            .seal(b"nonce", b"", &mut data, &mut tag)
            .expect("Failed to seal(..)");

        let mut receiver = LetterSoup::new(ToyCipher::with_key(b"public-api-x"))
            .expect("Failed to new(..)");

        assert_eq!(
            receiver.open(b"nonce", b"", &mut data, &tag),
            Err(LetterSoupError::AuthenticationFailure)
        );
        assert!(data.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_raw_decrypt_does_not_authenticate() {
        let mut aead = keyed_aead();
        let mut data = *b"unauthenticated";

        aead.set_iv(b"nonce").expect("Failed to set_iv(..)");
        aead.encrypt(&mut data).expect("Failed to encrypt(..)");
        data[0] ^= 0x01;
        aead.decrypt(&mut data).expect("Failed to decrypt(..)");

        assert_eq!(&data[1..], b"nauthenticated");
        assert_eq!(data[0], b'u' ^ 0x01);
    }

    #[test]
    fn test_cipher_accessor() {
        let aead = keyed_aead();

        assert_eq!(aead.cipher().block_bits(), 96);
    }
}
