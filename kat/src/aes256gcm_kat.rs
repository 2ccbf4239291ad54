/*++

Licensed under the Apache-2.0 license.

File Name:

    aes256gcm_kat.rs

Abstract:

    File contains the Known Answer Tests (KAT) for AES-256-GCM cryptography operations.

--*/

use zvk_error::{ZvkError, ZvkResult};
use zvk_gcm::{AesGcm, AesKeyLen};

// Taken from NIST test vectors: https://csrc.nist.gov/Projects/cryptographic-algorithm-validation-program/cavp-testing-block-cipher-modes#GCMVS

// KEY = f0eaf7b41b42f4500635bc05d9cede11a5363d59a6288870f527bcffeb4d6e04
// IV = 18f316781077a595c72d4c07
// CT = 7a1b61009dce6b7cd4d1ea0203b179f1219dd5ce7407e12ea0a4c56c71bb791b
// AAD = 42cade3a19204b7d4843628c425c2375
// Tag = 4419180b0b963b7289a4fa3f45c535a3
// PT = 400fb5ef32083b3abea957c4f068abad50c8d86bbf9351fa72e7da5171df38f9

const KEY: [u8; 32] = [
    0xf0, 0xea, 0xf7, 0xb4, 0x1b, 0x42, 0xf4, 0x50, 0x06, 0x35, 0xbc, 0x05, 0xd9, 0xce, 0xde, 0x11,
    0xa5, 0x36, 0x3d, 0x59, 0xa6, 0x28, 0x88, 0x70, 0xf5, 0x27, 0xbc, 0xff, 0xeb, 0x4d, 0x6e, 0x04,
];
const IV: [u8; 12] = [
    0x18, 0xf3, 0x16, 0x78, 0x10, 0x77, 0xa5, 0x95, 0xc7, 0x2d, 0x4c, 0x07,
];
const CT: [u8; 32] = [
    0x7a, 0x1b, 0x61, 0x00, 0x9d, 0xce, 0x6b, 0x7c, 0xd4, 0xd1, 0xea, 0x02, 0x03, 0xb1, 0x79, 0xf1,
    0x21, 0x9d, 0xd5, 0xce, 0x74, 0x07, 0xe1, 0x2e, 0xa0, 0xa4, 0xc5, 0x6c, 0x71, 0xbb, 0x79, 0x1b,
];
const AAD: [u8; 16] = [
    0x42, 0xca, 0xde, 0x3a, 0x19, 0x20, 0x4b, 0x7d, 0x48, 0x43, 0x62, 0x8c, 0x42, 0x5c, 0x23, 0x75,
];
const TAG: [u8; 16] = [
    0x44, 0x19, 0x18, 0x0b, 0x0b, 0x96, 0x3b, 0x72, 0x89, 0xa4, 0xfa, 0x3f, 0x45, 0xc5, 0x35, 0xa3,
];
const PT: [u8; 32] = [
    0x40, 0x0f, 0xb5, 0xef, 0x32, 0x08, 0x3b, 0x3a, 0xbe, 0xa9, 0x57, 0xc4, 0xf0, 0x68, 0xab, 0xad,
    0x50, 0xc8, 0xd8, 0x6b, 0xbf, 0x93, 0x51, 0xfa, 0x72, 0xe7, 0xda, 0x51, 0x71, 0xdf, 0x38, 0xf9,
];

#[derive(Default, Debug)]
pub struct Aes256GcmKat {}

impl Aes256GcmKat {
    /// This function executes the Known Answer Tests (aka KAT) for AES-256-GCM.
    ///
    /// Test vector source:
    /// NIST CAVP GCMVS
    ///
    /// # Returns
    ///
    /// * `ZvkResult` - Result denoting the KAT outcome.
    pub fn execute(&self) -> ZvkResult<()> {
        self.encrypt_decrypt()
    }

    fn encrypt_decrypt(&self) -> ZvkResult<()> {
        let gcm = AesGcm::new(&KEY, AesKeyLen::_256)?;
        let mut ciphertext = [0u8; 32];
        let tag = gcm.encrypt(&IV, &AAD, &PT, &mut ciphertext, TAG.len())?;

        if ciphertext != CT {
            Err(ZvkError::KAT_GCM_CIPHERTEXT_MISMATCH)?;
        }
        if tag != TAG[..] {
            Err(ZvkError::KAT_GCM_TAG_MISMATCH)?;
        }

        let mut plaintext = [0u8; 32];
        if !gcm.decrypt(&IV, &AAD, &CT, &mut plaintext, &TAG)? {
            Err(ZvkError::KAT_GCM_AUTH_OUTCOME_MISMATCH)?;
        }
        if plaintext != PT {
            Err(ZvkError::KAT_GCM_PLAINTEXT_MISMATCH)?;
        }

        Ok(())
    }
}
