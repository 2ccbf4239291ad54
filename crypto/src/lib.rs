/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the block cipher and GHASH primitives used by
    the GCM mode construction.

--*/

#![cfg_attr(not(test), no_std)]

mod aes_block;
mod ghash;

pub use aes_block::AesKeyLen;
pub use aes_block::BlockCipher;
pub use aes_block::ExpandedKey;

pub use ghash::DeferredGhash;
pub use ghash::Ghash;
pub use ghash::SoftGhash;

/// AES block size in bytes. Also the GHASH block size.
pub const AES_BLOCK_SIZE: usize = 16;

/// One 128-bit block.
pub type Block = [u8; AES_BLOCK_SIZE];

/// XOR `src` into `dst`, over the shorter of the two slices.
pub fn xor_into(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
