/*++

Licensed under the Apache-2.0 license.

File Name:

    request.rs

Abstract:

    File contains the one-shot request/result interface to the GCM engine.

--*/

use crate::gcm::{AesGcm, GcmTag};
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;
use zvk_crypto::{AesKeyLen, ExpandedKey, Ghash, SoftGhash};
use zvk_error::ZvkResult;

/// Direction of a GCM request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GcmDirection<'a> {
    /// Encrypt and produce a tag of `tag_size` bytes.
    Seal { tag_size: usize },

    /// Decrypt and verify `tag`.
    Open { tag: &'a [u8] },
}

/// Immutable input of one GCM operation.
#[derive(Clone, Copy, Debug)]
pub struct GcmRequest<'a> {
    pub key: &'a [u8],
    pub key_bits: usize,
    pub iv: &'a [u8],
    pub aad: &'a [u8],
    pub data: &'a [u8],
    pub direction: GcmDirection<'a>,
}

/// Output of one GCM operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GcmResult {
    /// Ciphertext when sealing. Plaintext when opening, empty if the tag
    /// did not verify.
    pub data: Vec<u8>,

    /// Computed tag, truncated to the requested or supplied length.
    pub tag: GcmTag,

    /// Always true for seal; tag verdict for open.
    pub authenticated: bool,
}

impl GcmRequest<'_> {
    /// Run the request with the default GHASH primitive.
    pub fn process(&self) -> ZvkResult<GcmResult> {
        self.process_with::<SoftGhash>()
    }

    /// Run the request with GHASH primitive `G`.
    ///
    /// The key is expanded for this request only. Unsupported key sizes are
    /// rejected before any block cipher call.
    pub fn process_with<G: Ghash>(&self) -> ZvkResult<GcmResult> {
        let key_len = AesKeyLen::try_from(self.key_bits)?;
        let cipher = ExpandedKey::new(self.key, key_len)?;
        let gcm: AesGcm<ExpandedKey, G> = AesGcm::with_cipher(cipher);

        let mut data = vec![0u8; self.data.len()];
        match self.direction {
            GcmDirection::Seal { tag_size } => {
                let tag = gcm.encrypt(self.iv, self.aad, self.data, &mut data, tag_size)?;
                Ok(GcmResult {
                    data,
                    tag,
                    authenticated: true,
                })
            }
            GcmDirection::Open { tag } => {
                let (tag, authenticated) =
                    gcm.open(self.iv, self.aad, self.data, &mut data, tag)?;
                if !authenticated {
                    data.zeroize();
                    data.clear();
                }
                Ok(GcmResult {
                    data,
                    tag,
                    authenticated,
                })
            }
        }
    }
}
