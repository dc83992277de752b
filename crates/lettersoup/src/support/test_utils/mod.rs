// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic stand-in ciphers. NOT secure; for tests and benchmarks only.

mod cipher_mock;
mod identity;
mod toy;

pub use cipher_mock::{CipherMock, CipherMockBehaviour};
pub use identity::IdentityCipher;
pub use toy::ToyCipher;
