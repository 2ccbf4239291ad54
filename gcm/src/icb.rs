/*++

Licensed under the Apache-2.0 license.

File Name:

    icb.rs

Abstract:

    File contains the GCM counter block and the derivation of the initial
    counter block (ICB) from an IV of any length.

--*/

use crate::accumulator::{bit_len, AuthAccumulator};
use zeroize::Zeroize;
use zvk_crypto::{Block, Ghash, AES_BLOCK_SIZE};

/// IV length that takes the fast path (96 bits).
pub const GCM_IV_FAST_PATH_SIZE: usize = 12;

/// 128-bit counter block. The last 4 bytes hold a big-endian 32-bit counter;
/// the leading 12 bytes never change after derivation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CounterBlock(Block);

impl CounterBlock {
    /// Derive the initial counter block for `iv`.
    ///
    /// # Arguments
    ///
    /// * `iv` - IV of any length, including empty
    /// * `ghash` - GHASH primitive keyed with the operation's H
    pub fn derive<G: Ghash>(iv: &[u8], ghash: &G) -> Self {
        match <&[u8; GCM_IV_FAST_PATH_SIZE]>::try_from(iv) {
            Ok(iv) => Self::from_96_bit_iv(iv),
            Err(_) => Self::from_iv_hash(iv, ghash),
        }
    }

    /// ICB = IV || 0x00000001
    pub fn from_96_bit_iv(iv: &[u8; GCM_IV_FAST_PATH_SIZE]) -> Self {
        let mut block = [0u8; AES_BLOCK_SIZE];
        block[..GCM_IV_FAST_PATH_SIZE].copy_from_slice(iv);
        block[AES_BLOCK_SIZE - 1] = 1;
        Self(block)
    }

    /// ICB = GHASH(IV || 0-pad || 0^64 || be64(bitlen(IV)))
    ///
    /// Used by [`CounterBlock::derive`] for every IV that is not 96 bits
    /// long. Runs on its own accumulator; nothing is shared with the
    /// AAD/ciphertext pass.
    pub fn from_iv_hash<G: Ghash>(iv: &[u8], ghash: &G) -> Self {
        let mut acc = AuthAccumulator::new(ghash);
        acc.absorb_padded(iv);
        acc.absorb_lengths(0, bit_len(iv.len()));
        Self(acc.finish())
    }

    /// Add one to the 32-bit counter, wrapping modulo 2^32 without carrying
    /// into the upper 96 bits.
    pub fn increment(&mut self) {
        let next = self.counter().wrapping_add(1);
        self.0[12..].copy_from_slice(&next.to_be_bytes());
    }

    /// Current value of the 32-bit counter field.
    pub fn counter(&self) -> u32 {
        u32::from_be_bytes([self.0[12], self.0[13], self.0[14], self.0[15]])
    }

    pub fn as_block(&self) -> &Block {
        &self.0
    }
}

impl Zeroize for CounterBlock {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl From<Block> for CounterBlock {
    fn from(block: Block) -> Self {
        Self(block)
    }
}
