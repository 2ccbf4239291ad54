/*++

Licensed under the Apache-2.0 license.

File Name:

    gcm.rs

Abstract:

    File contains the AES-GCM mode (NIST SP 800-38D) built on a block
    cipher primitive and a GHASH primitive.

--*/

use crate::accumulator::{bit_len, AuthAccumulator};
use crate::icb::CounterBlock;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;
use zvk_crypto::{
    xor_into, AesKeyLen, Block, BlockCipher, ExpandedKey, Ghash, SoftGhash, AES_BLOCK_SIZE,
};
use zvk_error::{ZvkError, ZvkResult};

/// Largest tag, in bytes.
pub const GCM_TAG_SIZE_MAX: usize = AES_BLOCK_SIZE;

/// Largest plaintext, in bytes: 2^32 - 2 blocks (2^39 - 256 bits).
pub const GCM_MAX_DATA_SIZE: u64 = ((1u64 << 32) - 2) * AES_BLOCK_SIZE as u64;

/// Largest AAD, in bytes, so that its bit length fits in 64 bits.
pub const GCM_MAX_AAD_SIZE: u64 = u64::MAX / 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GcmOperation {
    Seal,
    Open,
}

/// Authentication tag of 1 to 16 bytes.
#[derive(Clone, Copy, Debug)]
pub struct GcmTag {
    bytes: Block,
    len: usize,
}

// Never empty: `truncate` rejects zero lengths.
#[allow(clippy::len_without_is_empty)]
impl GcmTag {
    /// Truncate a full tag block to `len` bytes.
    fn truncate(full: &Block, len: usize) -> ZvkResult<Self> {
        if len == 0 || len > GCM_TAG_SIZE_MAX {
            Err(ZvkError::GCM_INVALID_TAG_SIZE)?;
        }
        let mut bytes = [0u8; AES_BLOCK_SIZE];
        bytes[..len].copy_from_slice(&full[..len]);
        Ok(Self { bytes, len })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl PartialEq for GcmTag {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for GcmTag {}

impl PartialEq<[u8]> for GcmTag {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes().ct_eq(other).into()
    }
}

/// AES-GCM engine.
///
/// Holds the expanded key and the GHASH primitive keyed with
/// `H = E(K, 0^128)`. Counter and accumulator state live on the stack of each
/// call, so one engine may serve any number of operations, from any number
/// of threads.
pub struct AesGcm<C: BlockCipher = ExpandedKey, G: Ghash = SoftGhash> {
    cipher: C,
    ghash: G,
}

impl AesGcm {
    /// Create an engine from a raw AES-128 or AES-256 key.
    ///
    /// # Arguments
    ///
    /// * `key` - Raw key bytes
    /// * `key_len` - Declared key length
    pub fn new(key: &[u8], key_len: AesKeyLen) -> ZvkResult<Self> {
        Ok(Self::with_cipher(ExpandedKey::new(key, key_len)?))
    }
}

impl<C: BlockCipher, G: Ghash> AesGcm<C, G> {
    /// Create an engine around an already expanded block cipher.
    pub fn with_cipher(cipher: C) -> Self {
        let mut h = [0u8; AES_BLOCK_SIZE];
        cipher.encrypt_block(&mut h, &[0u8; AES_BLOCK_SIZE]);
        let ghash = G::new(&h);
        h.zeroize();
        Self { cipher, ghash }
    }

    /// Encrypt `plaintext` into `ciphertext` and return the tag.
    ///
    /// # Arguments
    ///
    /// * `iv` - IV of any length
    /// * `aad` - Additional authenticated data
    /// * `plaintext` - Data to encrypt
    /// * `ciphertext` - Output buffer, at least as long as `plaintext`
    /// * `tag_size` - Tag length in bytes, 1 to 16
    ///
    /// # Returns
    ///
    /// * `GcmTag` - Tag truncated to `tag_size`
    pub fn encrypt(
        &self,
        iv: &[u8],
        aad: &[u8],
        plaintext: &[u8],
        ciphertext: &mut [u8],
        tag_size: usize,
    ) -> ZvkResult<GcmTag> {
        if tag_size == 0 || tag_size > GCM_TAG_SIZE_MAX {
            Err(ZvkError::GCM_INVALID_TAG_SIZE)?;
        }
        if ciphertext.len() < plaintext.len() {
            Err(ZvkError::GCM_INVALID_SLICE)?;
        }
        let mut full = self.gcm_op(iv, aad, plaintext, ciphertext, GcmOperation::Seal)?;
        let tag = GcmTag::truncate(&full, tag_size);
        full.zeroize();
        tag
    }

    /// Decrypt `ciphertext` into `plaintext` and verify `tag`.
    ///
    /// The plaintext buffer is written even when verification fails; the
    /// caller must not release it unless this returns `Ok(true)`.
    ///
    /// # Arguments
    ///
    /// * `iv` - IV of any length
    /// * `aad` - Additional authenticated data
    /// * `ciphertext` - Data to decrypt
    /// * `plaintext` - Output buffer, at least as long as `ciphertext`
    /// * `tag` - Expected tag, 1 to 16 bytes
    ///
    /// # Returns
    ///
    /// * `bool` - Whether the tag verified
    pub fn decrypt(
        &self,
        iv: &[u8],
        aad: &[u8],
        ciphertext: &[u8],
        plaintext: &mut [u8],
        tag: &[u8],
    ) -> ZvkResult<bool> {
        self.open(iv, aad, ciphertext, plaintext, tag)
            .map(|(_, verified)| verified)
    }

    /// Decrypt and return the computed tag together with the verdict.
    pub(crate) fn open(
        &self,
        iv: &[u8],
        aad: &[u8],
        ciphertext: &[u8],
        plaintext: &mut [u8],
        tag: &[u8],
    ) -> ZvkResult<(GcmTag, bool)> {
        if plaintext.len() < ciphertext.len() {
            Err(ZvkError::GCM_INVALID_SLICE)?;
        }
        if tag.is_empty() || tag.len() > GCM_TAG_SIZE_MAX {
            Err(ZvkError::GCM_INVALID_TAG_SIZE)?;
        }
        let mut full = self.gcm_op(iv, aad, ciphertext, plaintext, GcmOperation::Open)?;
        let computed = GcmTag::truncate(&full, tag.len());
        full.zeroize();
        let computed = computed?;
        let verified = computed == *tag;
        Ok((computed, verified))
    }

    /// Run counter mode over `input` and return the full 16-byte tag block.
    fn gcm_op(
        &self,
        iv: &[u8],
        aad: &[u8],
        input: &[u8],
        output: &mut [u8],
        op: GcmOperation,
    ) -> ZvkResult<Block> {
        if input.len() as u64 > GCM_MAX_DATA_SIZE || aad.len() as u64 > GCM_MAX_AAD_SIZE {
            Err(ZvkError::GCM_MAX_DATA)?;
        }
        if input.len() > output.len() {
            Err(ZvkError::GCM_INVALID_SLICE)?;
        }
        let output = &mut output[..input.len()];

        let mut counter = CounterBlock::derive(iv, &self.ghash);
        // Block 0 only ever encrypts the tag.
        let mut tag_seed = counter;
        counter.increment();

        let mut acc = AuthAccumulator::new(&self.ghash);
        acc.absorb_padded(aad);

        let mut keystream = [0u8; AES_BLOCK_SIZE];
        for (src, dst) in input
            .chunks(AES_BLOCK_SIZE)
            .zip(output.chunks_mut(AES_BLOCK_SIZE))
        {
            if op == GcmOperation::Open {
                acc.absorb_partial(src);
            }
            self.cipher.encrypt_block(&mut keystream, counter.as_block());
            dst.copy_from_slice(src);
            xor_into(dst, &keystream);
            if op == GcmOperation::Seal {
                acc.absorb_partial(dst);
            }
            counter.increment();
        }
        keystream.zeroize();
        counter.zeroize();

        acc.absorb_lengths(bit_len(aad.len()), bit_len(input.len()));
        let mut s = acc.finish();

        let mut tag = [0u8; AES_BLOCK_SIZE];
        self.cipher.encrypt_block(&mut tag, tag_seed.as_block());
        tag_seed.zeroize();
        xor_into(&mut tag, &s);
        s.zeroize();
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zvk_crypto::DeferredGhash;

    const ZERO_KEY: [u8; 16] = [0u8; 16];

    #[test]
    fn test_case_1() {
        let gcm = AesGcm::new(&ZERO_KEY, AesKeyLen::_128).unwrap();
        let tag = gcm.encrypt(&[0u8; 12], &[], &[], &mut [], 16).unwrap();
        assert_eq!(
            tag.as_bytes(),
            &[
                0x58, 0xe2, 0xfc, 0xce, 0xfa, 0x7e, 0x30, 0x61, 0x36, 0x7f, 0x1d, 0x57, 0xa4, 0xe7,
                0x45, 0x5a
            ]
        );
    }

    #[test]
    fn test_case_2() {
        let gcm = AesGcm::new(&ZERO_KEY, AesKeyLen::_128).unwrap();
        let mut ct = [0u8; 16];
        let tag = gcm.encrypt(&[0u8; 12], &[], &[0u8; 16], &mut ct, 16).unwrap();
        assert_eq!(
            ct,
            [
                0x03, 0x88, 0xda, 0xce, 0x60, 0xb6, 0xa3, 0x92, 0xf3, 0x28, 0xc2, 0xb9, 0x71, 0xb2,
                0xfe, 0x78
            ]
        );
        assert_eq!(
            tag.as_bytes(),
            &[
                0xab, 0x6e, 0x47, 0xd4, 0x2c, 0xec, 0x13, 0xbd, 0xf5, 0x3a, 0x67, 0xb2, 0x12, 0x57,
                0xbd, 0xdf
            ]
        );

        let mut pt = [0xffu8; 16];
        assert!(gcm
            .decrypt(&[0u8; 12], &[], &ct, &mut pt, tag.as_bytes())
            .unwrap());
        assert_eq!(pt, [0u8; 16]);
    }

    #[test]
    fn test_empty_everything() {
        // ICB, AAD, text and length block are all zero, so the tag is E(K, 0) = H.
        let gcm = AesGcm::new(&ZERO_KEY, AesKeyLen::_128).unwrap();
        let tag = gcm.encrypt(&[], &[], &[], &mut [], 16).unwrap();
        assert_eq!(
            tag.as_bytes(),
            &[
                0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, 0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34,
                0x2b, 0x2e
            ]
        );
        assert_eq!(tag, gcm.encrypt(&[], &[], &[], &mut [], 16).unwrap());

        let deferred: AesGcm<ExpandedKey, DeferredGhash> =
            AesGcm::with_cipher(ExpandedKey::new(&ZERO_KEY, AesKeyLen::_128).unwrap());
        assert_eq!(tag, deferred.encrypt(&[], &[], &[], &mut [], 16).unwrap());
    }

    #[test]
    fn test_truncated_tag() {
        let gcm = AesGcm::new(&ZERO_KEY, AesKeyLen::_128).unwrap();
        let tag = gcm.encrypt(&[0u8; 12], &[], &[], &mut [], 12).unwrap();
        assert_eq!(tag.len(), 12);
        assert_eq!(
            tag.as_bytes(),
            &[0x58, 0xe2, 0xfc, 0xce, 0xfa, 0x7e, 0x30, 0x61, 0x36, 0x7f, 0x1d, 0x57]
        );
        assert!(gcm
            .decrypt(&[0u8; 12], &[], &[], &mut [], tag.as_bytes())
            .unwrap());

        // Verification covers exactly the supplied length.
        assert!(gcm
            .decrypt(&[0u8; 12], &[], &[], &mut [], &tag.as_bytes()[..4])
            .unwrap());
        let mut bad = [0u8; 12];
        bad.copy_from_slice(tag.as_bytes());
        bad[11] ^= 0x80;
        assert!(!gcm.decrypt(&[0u8; 12], &[], &[], &mut [], &bad).unwrap());
    }

    #[test]
    fn test_invalid_tag_size() {
        let gcm = AesGcm::new(&ZERO_KEY, AesKeyLen::_128).unwrap();
        assert_eq!(
            gcm.encrypt(&[0u8; 12], &[], &[], &mut [], 0).unwrap_err(),
            ZvkError::GCM_INVALID_TAG_SIZE
        );
        assert_eq!(
            gcm.encrypt(&[0u8; 12], &[], &[], &mut [], 17).unwrap_err(),
            ZvkError::GCM_INVALID_TAG_SIZE
        );
        assert_eq!(
            gcm.decrypt(&[0u8; 12], &[], &[], &mut [], &[]).unwrap_err(),
            ZvkError::GCM_INVALID_TAG_SIZE
        );
        assert_eq!(
            gcm.decrypt(&[0u8; 12], &[], &[], &mut [], &[0u8; 17])
                .unwrap_err(),
            ZvkError::GCM_INVALID_TAG_SIZE
        );
    }

    #[test]
    fn test_invalid_slice() {
        let gcm = AesGcm::new(&ZERO_KEY, AesKeyLen::_128).unwrap();
        let mut short = [0u8; 15];
        assert_eq!(
            gcm.encrypt(&[0u8; 12], &[], &[0u8; 16], &mut short, 16)
                .unwrap_err(),
            ZvkError::GCM_INVALID_SLICE
        );
        assert_eq!(
            gcm.decrypt(&[0u8; 12], &[], &[0u8; 16], &mut short, &[0u8; 16])
                .unwrap_err(),
            ZvkError::GCM_INVALID_SLICE
        );
    }

    #[test]
    fn test_oversized_output_is_untouched_past_input() {
        let gcm = AesGcm::new(&ZERO_KEY, AesKeyLen::_128).unwrap();
        let mut ct = [0xaau8; 20];
        gcm.encrypt(&[0u8; 12], &[], &[0u8; 16], &mut ct, 16).unwrap();
        assert_eq!(&ct[16..], &[0xaa; 4]);
    }

    #[test]
    fn test_unsupported_key_size() {
        assert_eq!(
            AesKeyLen::try_from(192).unwrap_err(),
            ZvkError::GCM_UNSUPPORTED_KEY_SIZE
        );
        assert_eq!(
            AesGcm::new(&[0u8; 24], AesKeyLen::_256).err(),
            Some(ZvkError::GCM_INVALID_KEY_LENGTH)
        );
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AesGcm>();
        assert_send_sync::<AesGcm<ExpandedKey, DeferredGhash>>();
    }
}
