/*++

Licensed under the Apache-2.0 license.

File Name:

    ghash.rs

Abstract:

    File contains the GHASH multipliers over GF(2^128) used for GCM
    authentication.

--*/

use crate::Block;
use zeroize::Zeroize;

/// R = 11100001 || 0^120, from NIST SP 800-38D, section 6.3.
const R: u128 = 0xe1 << 120;

/// GHASH primitive keyed by the hash subkey H.
///
/// A multiplier can only be obtained through [`Ghash::new`], so there is no
/// way to absorb data before H is loaded.
pub trait Ghash {
    /// Load the hash subkey.
    fn new(h: &Block) -> Self;

    /// Fold `x` into the accumulator `y`.
    fn absorb(&self, y: &mut Block, x: &Block);

    /// Finish the accumulator after the last absorbed block.
    fn flush(&self, _y: &mut Block) {}
}

/// Multiplication in GF(2^128) with the GCM bit ordering, where the most
/// significant bit of the big-endian value is the coefficient of x^0.
///
/// Runs in a fixed number of steps with no data dependent branches.
fn gf128_mul(x: u128, y: u128) -> u128 {
    let mut z = 0u128;
    let mut v = y;
    for i in (0..128).rev() {
        let bit = (x >> i) & 1;
        z ^= v & 0u128.wrapping_sub(bit);
        let lsb = v & 1;
        v = (v >> 1) ^ (R & 0u128.wrapping_sub(lsb));
    }
    z
}

/// GHASH step of NIST SP 800-38D: `Y = (Y xor X) * H`.
pub struct SoftGhash {
    h: u128,
}

impl Ghash for SoftGhash {
    fn new(h: &Block) -> Self {
        Self {
            h: u128::from_be_bytes(*h),
        }
    }

    fn absorb(&self, y: &mut Block, x: &Block) {
        let acc = u128::from_be_bytes(*y) ^ u128::from_be_bytes(*x);
        *y = gf128_mul(acc, self.h).to_be_bytes();
    }
}

impl Drop for SoftGhash {
    fn drop(&mut self) {
        self.h.zeroize();
    }
}

/// GHASH with the multiplication deferred by one block: `Y = Y * H xor X`.
///
/// This is the calling convention of the vector crypto GHASH instructions.
/// The accumulator always lags one multiplication behind the standard
/// definition, so [`Ghash::flush`] absorbs one all-zero block to catch up.
pub struct DeferredGhash {
    h: u128,
}

impl Ghash for DeferredGhash {
    fn new(h: &Block) -> Self {
        Self {
            h: u128::from_be_bytes(*h),
        }
    }

    fn absorb(&self, y: &mut Block, x: &Block) {
        let acc = gf128_mul(u128::from_be_bytes(*y), self.h);
        *y = (acc ^ u128::from_be_bytes(*x)).to_be_bytes();
    }

    fn flush(&self, y: &mut Block) {
        self.absorb(y, &[0u8; 16]);
    }
}

impl Drop for DeferredGhash {
    fn drop(&mut self) {
        self.h.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // H for the all-zero AES-128 key, GCM paper Test Case 2.
    const H: Block = [
        0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, 0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34, 0x2b,
        0x2e,
    ];

    #[test]
    fn test_mul_identity() {
        // x^0 is the most significant bit.
        let one = 1u128 << 127;
        let h = u128::from_be_bytes(H);
        assert_eq!(gf128_mul(one, h), h);
        assert_eq!(gf128_mul(h, one), h);
        assert_eq!(gf128_mul(0, h), 0);
    }

    #[test]
    fn test_mul_commutes() {
        let a = 0x0388dace60b6a392f328c2b971b2fe78u128;
        let b = u128::from_be_bytes(H);
        assert_eq!(gf128_mul(a, b), gf128_mul(b, a));
    }

    #[test]
    fn test_mul_reduces() {
        // x^127 * x = x^128 = x^7 + x^2 + x + 1
        assert_eq!(gf128_mul(1, 1u128 << 126), R);
    }

    #[test]
    fn test_soft_ghash_test_case_2() {
        // GCM paper Test Case 2: X1 = C * H, X2 = (X1 xor len) * H
        let ghash = SoftGhash::new(&H);
        let c = [
            0x03, 0x88, 0xda, 0xce, 0x60, 0xb6, 0xa3, 0x92, 0xf3, 0x28, 0xc2, 0xb9, 0x71, 0xb2,
            0xfe, 0x78,
        ];
        let mut len = [0u8; 16];
        len[8..].copy_from_slice(&128u64.to_be_bytes());

        let mut y = [0u8; 16];
        ghash.absorb(&mut y, &c);
        assert_eq!(
            y,
            [
                0x5e, 0x2e, 0xc7, 0x46, 0x91, 0x70, 0x62, 0x88, 0x2c, 0x85, 0xb0, 0x68, 0x53, 0x53,
                0xde, 0xb7
            ]
        );
        ghash.absorb(&mut y, &len);
        assert_eq!(
            y,
            [
                0xf3, 0x8c, 0xbb, 0x1a, 0xd6, 0x92, 0x23, 0xdc, 0xc3, 0x45, 0x7a, 0xe5, 0xb6, 0xb0,
                0xf8, 0x85
            ]
        );
        let before = y;
        ghash.flush(&mut y);
        assert_eq!(y, before);
    }

    #[test]
    fn test_deferred_matches_soft_after_flush() {
        let soft = SoftGhash::new(&H);
        let deferred = DeferredGhash::new(&H);
        let mut y_soft = [0u8; 16];
        let mut y_deferred = [0u8; 16];
        for i in 0..5u8 {
            let x = [i.wrapping_mul(37) ^ 0x5a; 16];
            soft.absorb(&mut y_soft, &x);
            deferred.absorb(&mut y_deferred, &x);

            let mut flushed = y_deferred;
            deferred.flush(&mut flushed);
            assert_eq!(flushed, y_soft);
        }
    }
}
