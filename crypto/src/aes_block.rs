/*++

Licensed under the Apache-2.0 license.

File Name:

    aes_block.rs

Abstract:

    File contains the AES key schedule and single block encryption used as
    the block cipher primitive of the GCM mode.

--*/

use crate::Block;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes256};
use core::fmt;
use zvk_error::{ZvkError, ZvkResult};

/// Supported AES key lengths.
///
/// AES-192 is not supported: a 192-bit key is rejected when the
/// length is parsed, before any key material is touched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AesKeyLen {
    _128,
    _256,
}

impl AesKeyLen {
    /// Key length in bits.
    pub const fn bits(self) -> usize {
        match self {
            Self::_128 => 128,
            Self::_256 => 256,
        }
    }

    /// Key length in bytes.
    pub const fn key_size(self) -> usize {
        self.bits() / 8
    }
}

impl TryFrom<usize> for AesKeyLen {
    type Error = ZvkError;

    /// Converts a declared key length in bits.
    fn try_from(bits: usize) -> ZvkResult<Self> {
        match bits {
            128 => Ok(Self::_128),
            256 => Ok(Self::_256),
            _ => Err(ZvkError::GCM_UNSUPPORTED_KEY_SIZE),
        }
    }
}

/// Single block encryption under a fixed key.
///
/// Implementations hold no state between calls. Only the forward direction
/// is needed by counter mode.
pub trait BlockCipher {
    fn encrypt_block(&self, dst: &mut Block, src: &Block);
}

/// Expanded AES round keys. Round keys are wiped when dropped.
#[derive(Clone)]
pub enum ExpandedKey {
    Aes128(Aes128),
    Aes256(Aes256),
}

impl ExpandedKey {
    /// Expand a raw key.
    ///
    /// # Arguments
    ///
    /// * `key` - Raw key bytes, exactly `key_len.key_size()` long
    /// * `key_len` - Declared key length
    pub fn new(key: &[u8], key_len: AesKeyLen) -> ZvkResult<Self> {
        if key.len() != key_len.key_size() {
            Err(ZvkError::GCM_INVALID_KEY_LENGTH)?;
        }
        let expanded = match key_len {
            AesKeyLen::_128 => Aes128::new_from_slice(key).map(Self::Aes128),
            AesKeyLen::_256 => Aes256::new_from_slice(key).map(Self::Aes256),
        };
        expanded.map_err(|_| ZvkError::GCM_INVALID_KEY_LENGTH)
    }

    /// Declared key length of this schedule.
    pub fn key_len(&self) -> AesKeyLen {
        match self {
            Self::Aes128(_) => AesKeyLen::_128,
            Self::Aes256(_) => AesKeyLen::_256,
        }
    }
}

impl BlockCipher for ExpandedKey {
    fn encrypt_block(&self, dst: &mut Block, src: &Block) {
        match self {
            Self::Aes128(cipher) => cipher.encrypt_block_b2b(src.into(), dst.into()),
            Self::Aes256(cipher) => cipher.encrypt_block_b2b(src.into(), dst.into()),
        }
    }
}

impl fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandedKey")
            .field("key_len", &self.key_len())
            .finish_non_exhaustive()
    }
}
