/*++

Licensed under the Apache-2.0 license.

File Name:

    accumulator.rs

Abstract:

    File contains the running GHASH accumulator shared by counter block
    derivation and tag computation.

--*/

use zeroize::Zeroize;
use zvk_crypto::{Block, Ghash, AES_BLOCK_SIZE};

/// Running GHASH state `Y` over one GHASH primitive.
pub(crate) struct AuthAccumulator<'a, G: Ghash> {
    ghash: &'a G,
    y: Block,
}

impl<'a, G: Ghash> AuthAccumulator<'a, G> {
    /// Start from the all-zero block.
    pub(crate) fn new(ghash: &'a G) -> Self {
        Self {
            ghash,
            y: [0u8; AES_BLOCK_SIZE],
        }
    }

    /// Absorb at most one block, zero padding anything shorter than 16 bytes.
    pub(crate) fn absorb_partial(&mut self, data: &[u8]) {
        debug_assert!(data.len() <= AES_BLOCK_SIZE);
        let mut block = [0u8; AES_BLOCK_SIZE];
        block[..data.len()].copy_from_slice(data);
        self.ghash.absorb(&mut self.y, &block);
    }

    /// Absorb a byte string block by block; only the last block is padded.
    /// An empty string absorbs nothing.
    pub(crate) fn absorb_padded(&mut self, data: &[u8]) {
        for chunk in data.chunks(AES_BLOCK_SIZE) {
            self.absorb_partial(chunk);
        }
    }

    /// Absorb `be64(a_bits) || be64(c_bits)`.
    pub(crate) fn absorb_lengths(&mut self, a_bits: u64, c_bits: u64) {
        let mut block = [0u8; AES_BLOCK_SIZE];
        block[..8].copy_from_slice(&a_bits.to_be_bytes());
        block[8..].copy_from_slice(&c_bits.to_be_bytes());
        self.ghash.absorb(&mut self.y, &block);
    }

    /// Apply the primitive's flush step and return the final value.
    pub(crate) fn finish(mut self) -> Block {
        self.ghash.flush(&mut self.y);
        self.y
    }
}

impl<G: Ghash> Drop for AuthAccumulator<'_, G> {
    fn drop(&mut self) {
        self.y.zeroize();
    }
}

/// Length of `len` bytes in bits.
pub(crate) fn bit_len(len: usize) -> u64 {
    (len as u64).wrapping_mul(8)
}
