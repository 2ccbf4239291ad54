/*++

Licensed under the Apache-2.0 license.

File Name:

    vectors.rs

Abstract:

    File contains the compiled-in AES-GCM test vectors and suites.

--*/

// Test Case numbers refer to the appendix of "The Galois/Counter Mode of
// Operation (GCM)", McGrew and Viega, as used by NIST:
// https://csrc.nist.rip/groups/ST/toolkit/BCM/documents/proposedmodes/gcm/gcm-spec.pdf

/// One AES-GCM test vector.
///
/// `encrypt` selects the direction. Seal vectors take `pt` as input and
/// are checked against `ct` and `tag`; open vectors take `ct` and `tag` as
/// input and are checked against `pt`. A vector with `expect_fail` set must
/// produce a tag that differs from `tag`.
#[derive(Clone, Copy, Debug)]
pub struct GcmTestVector {
    pub key: &'static [u8],
    pub iv: &'static [u8],
    pub aad: &'static [u8],

    /// Plaintext, or `None` when the vector does not pin it down. The text
    /// comparison is skipped for such vectors.
    pub pt: Option<&'static [u8]>,
    pub ct: &'static [u8],

    /// Expected tag; its length is the tag size under test.
    pub tag: &'static [u8],
    pub encrypt: bool,
    pub expect_fail: bool,
}

/// Named group of vectors sharing one key size.
#[derive(Clone, Copy, Debug)]
pub struct GcmTestSuite<'a> {
    pub name: &'a str,
    pub key_bits: usize,
    pub tests: &'a [GcmTestVector],
}

const KEY_ZERO_128: [u8; 16] = [0u8; 16];

const KEY_ZERO_256: [u8; 32] = [0u8; 32];

// Shared by GCM paper Test Cases 3 to 6.
const KEY_128: [u8; 16] = [
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c, 0x6d, 0x6a, 0x8f, 0x94, 0x67, 0x30, 0x83, 0x08,
];

// GCM paper Test Case 9.
const KEY_192: [u8; 24] = [
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c, 0x6d, 0x6a, 0x8f, 0x94, 0x67, 0x30, 0x83, 0x08,
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c,
];

// Shared by GCM paper Test Cases 15 and 16.
const KEY_256: [u8; 32] = [
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c, 0x6d, 0x6a, 0x8f, 0x94, 0x67, 0x30, 0x83, 0x08,
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c, 0x6d, 0x6a, 0x8f, 0x94, 0x67, 0x30, 0x83, 0x08,
];

const IV_ZERO: [u8; 12] = [0u8; 12];

const IV_96: [u8; 12] = [
    0xca, 0xfe, 0xba, 0xbe, 0xfa, 0xce, 0xdb, 0xad, 0xde, 0xca, 0xf8, 0x88,
];

// Test Case 5 IV, takes the GHASH derivation path.
const IV_64: [u8; 8] = [
    0xca, 0xfe, 0xba, 0xbe, 0xfa, 0xce, 0xdb, 0xad,
];

// Test Case 6 IV, takes the GHASH derivation path.
const IV_480: [u8; 60] = [
    0x93, 0x13, 0x22, 0x5d, 0xf8, 0x84, 0x06, 0xe5, 0x55, 0x90, 0x9c, 0x5a, 0xff, 0x52, 0x69, 0xaa,
    0x6a, 0x7a, 0x95, 0x38, 0x53, 0x4f, 0x7d, 0xa1, 0xe4, 0xc3, 0x03, 0xd2, 0xa3, 0x18, 0xa7, 0x28,
    0xc3, 0xc0, 0xc9, 0x51, 0x56, 0x80, 0x95, 0x39, 0xfc, 0xf0, 0xe2, 0x42, 0x9a, 0x6b, 0x52, 0x54,
    0x16, 0xae, 0xdb, 0xf5, 0xa0, 0xde, 0x6a, 0x57, 0xa6, 0x37, 0xb3, 0x9b,
];

const AAD: [u8; 20] = [
    0xfe, 0xed, 0xfa, 0xce, 0xde, 0xad, 0xbe, 0xef, 0xfe, 0xed, 0xfa, 0xce, 0xde, 0xad, 0xbe, 0xef,
    0xab, 0xad, 0xda, 0xd2,
];

const PT_ZERO: [u8; 16] = [0u8; 16];

const PT_64: [u8; 64] = [
    0xd9, 0x31, 0x32, 0x25, 0xf8, 0x84, 0x06, 0xe5, 0xa5, 0x59, 0x09, 0xc5, 0xaf, 0xf5, 0x26, 0x9a,
    0x86, 0xa7, 0xa9, 0x53, 0x15, 0x34, 0xf7, 0xda, 0x2e, 0x4c, 0x30, 0x3d, 0x8a, 0x31, 0x8a, 0x72,
    0x1c, 0x3c, 0x0c, 0x95, 0x95, 0x68, 0x09, 0x53, 0x2f, 0xcf, 0x0e, 0x24, 0x49, 0xa6, 0xb5, 0x25,
    0xb1, 0x6a, 0xed, 0xf5, 0xaa, 0x0d, 0xe6, 0x57, 0xba, 0x63, 0x7b, 0x39, 0x1a, 0xaf, 0xd2, 0x55,
];

// First 60 bytes of PT_64, used by Test Cases 4, 5, 6 and 16.
const PT_60: [u8; 60] = [
    0xd9, 0x31, 0x32, 0x25, 0xf8, 0x84, 0x06, 0xe5, 0xa5, 0x59, 0x09, 0xc5, 0xaf, 0xf5, 0x26, 0x9a,
    0x86, 0xa7, 0xa9, 0x53, 0x15, 0x34, 0xf7, 0xda, 0x2e, 0x4c, 0x30, 0x3d, 0x8a, 0x31, 0x8a, 0x72,
    0x1c, 0x3c, 0x0c, 0x95, 0x95, 0x68, 0x09, 0x53, 0x2f, 0xcf, 0x0e, 0x24, 0x49, 0xa6, 0xb5, 0x25,
    0xb1, 0x6a, 0xed, 0xf5, 0xaa, 0x0d, 0xe6, 0x57, 0xba, 0x63, 0x7b, 0x39,
];

const TC1_TAG: [u8; 16] = [
    0x58, 0xe2, 0xfc, 0xce, 0xfa, 0x7e, 0x30, 0x61, 0x36, 0x7f, 0x1d, 0x57, 0xa4, 0xe7, 0x45, 0x5a,
];

const TC2_CT: [u8; 16] = [
    0x03, 0x88, 0xda, 0xce, 0x60, 0xb6, 0xa3, 0x92, 0xf3, 0x28, 0xc2, 0xb9, 0x71, 0xb2, 0xfe, 0x78,
];

const TC2_TAG: [u8; 16] = [
    0xab, 0x6e, 0x47, 0xd4, 0x2c, 0xec, 0x13, 0xbd, 0xf5, 0x3a, 0x67, 0xb2, 0x12, 0x57, 0xbd, 0xdf,
];

const TC3_CT: [u8; 64] = [
    0x42, 0x83, 0x1e, 0xc2, 0x21, 0x77, 0x74, 0x24, 0x4b, 0x72, 0x21, 0xb7, 0x84, 0xd0, 0xd4, 0x9c,
    0xe3, 0xaa, 0x21, 0x2f, 0x2c, 0x02, 0xa4, 0xe0, 0x35, 0xc1, 0x7e, 0x23, 0x29, 0xac, 0xa1, 0x2e,
    0x21, 0xd5, 0x14, 0xb2, 0x54, 0x66, 0x93, 0x1c, 0x7d, 0x8f, 0x6a, 0x5a, 0xac, 0x84, 0xaa, 0x05,
    0x1b, 0xa3, 0x0b, 0x39, 0x6a, 0x0a, 0xac, 0x97, 0x3d, 0x58, 0xe0, 0x91, 0x47, 0x3f, 0x59, 0x85,
];

const TC3_TAG: [u8; 16] = [
    0x4d, 0x5c, 0x2a, 0xf3, 0x27, 0xcd, 0x64, 0xa6, 0x2c, 0xf3, 0x5a, 0xbd, 0x2b, 0xa6, 0xfa, 0xb4,
];

const TC4_CT: [u8; 60] = [
    0x42, 0x83, 0x1e, 0xc2, 0x21, 0x77, 0x74, 0x24, 0x4b, 0x72, 0x21, 0xb7, 0x84, 0xd0, 0xd4, 0x9c,
    0xe3, 0xaa, 0x21, 0x2f, 0x2c, 0x02, 0xa4, 0xe0, 0x35, 0xc1, 0x7e, 0x23, 0x29, 0xac, 0xa1, 0x2e,
    0x21, 0xd5, 0x14, 0xb2, 0x54, 0x66, 0x93, 0x1c, 0x7d, 0x8f, 0x6a, 0x5a, 0xac, 0x84, 0xaa, 0x05,
    0x1b, 0xa3, 0x0b, 0x39, 0x6a, 0x0a, 0xac, 0x97, 0x3d, 0x58, 0xe0, 0x91,
];

const TC4_TAG: [u8; 16] = [
    0x5b, 0xc9, 0x4f, 0xbc, 0x32, 0x21, 0xa5, 0xdb, 0x94, 0xfa, 0xe9, 0x5a, 0xe7, 0x12, 0x1a, 0x47,
];

const TC5_CT: [u8; 60] = [
    0x61, 0x35, 0x3b, 0x4c, 0x28, 0x06, 0x93, 0x4a, 0x77, 0x7f, 0xf5, 0x1f, 0xa2, 0x2a, 0x47, 0x55,
    0x69, 0x9b, 0x2a, 0x71, 0x4f, 0xcd, 0xc6, 0xf8, 0x37, 0x66, 0xe5, 0xf9, 0x7b, 0x6c, 0x74, 0x23,
    0x73, 0x80, 0x69, 0x00, 0xe4, 0x9f, 0x24, 0xb2, 0x2b, 0x09, 0x75, 0x44, 0xd4, 0x89, 0x6b, 0x42,
    0x49, 0x89, 0xb5, 0xe1, 0xeb, 0xac, 0x0f, 0x07, 0xc2, 0x3f, 0x45, 0x98,
];

const TC5_TAG: [u8; 16] = [
    0x36, 0x12, 0xd2, 0xe7, 0x9e, 0x3b, 0x07, 0x85, 0x56, 0x1b, 0xe1, 0x4a, 0xac, 0xa2, 0xfc, 0xcb,
];

const TC6_CT: [u8; 60] = [
    0x8c, 0xe2, 0x49, 0x98, 0x62, 0x56, 0x15, 0xb6, 0x03, 0xa0, 0x33, 0xac, 0xa1, 0x3f, 0xb8, 0x94,
    0xbe, 0x91, 0x12, 0xa5, 0xc3, 0xa2, 0x11, 0xa8, 0xba, 0x26, 0x2a, 0x3c, 0xca, 0x7e, 0x2c, 0xa7,
    0x01, 0xe4, 0xa9, 0xa4, 0xfb, 0xa4, 0x3c, 0x90, 0xcc, 0xdc, 0xb2, 0x81, 0xd4, 0x8c, 0x7c, 0x6f,
    0xd6, 0x28, 0x75, 0xd2, 0xac, 0xa4, 0x17, 0x03, 0x4c, 0x34, 0xae, 0xe5,
];

const TC6_TAG: [u8; 16] = [
    0x61, 0x9c, 0xc5, 0xae, 0xff, 0xfe, 0x0b, 0xfa, 0x46, 0x2a, 0xf4, 0x3c, 0x16, 0x99, 0xd0, 0x50,
];

const TC9_CT: [u8; 64] = [
    0x39, 0x80, 0xca, 0x0b, 0x3c, 0x00, 0xe8, 0x41, 0xeb, 0x06, 0xfa, 0xc4, 0x87, 0x2a, 0x27, 0x57,
    0x85, 0x9e, 0x1c, 0xea, 0xa6, 0xef, 0xd9, 0x84, 0x62, 0x85, 0x93, 0xb4, 0x0c, 0xa1, 0xe1, 0x9c,
    0x7d, 0x77, 0x3d, 0x00, 0xc1, 0x44, 0xc5, 0x25, 0xac, 0x61, 0x9d, 0x18, 0xc8, 0x4a, 0x3f, 0x47,
    0x18, 0xe2, 0x44, 0x8b, 0x2f, 0xe3, 0x24, 0xd9, 0xcc, 0xda, 0x27, 0x10, 0xac, 0xad, 0xe2, 0x56,
];

const TC9_TAG: [u8; 16] = [
    0x99, 0x24, 0xa7, 0xc8, 0x58, 0x73, 0x36, 0xbf, 0xb1, 0x18, 0x02, 0x4d, 0xb8, 0x67, 0x4a, 0x14,
];

const TC13_TAG: [u8; 16] = [
    0x53, 0x0f, 0x8a, 0xfb, 0xc7, 0x45, 0x36, 0xb9, 0xa9, 0x63, 0xb4, 0xf1, 0xc4, 0xcb, 0x73, 0x8b,
];

const TC14_CT: [u8; 16] = [
    0xce, 0xa7, 0x40, 0x3d, 0x4d, 0x60, 0x6b, 0x6e, 0x07, 0x4e, 0xc5, 0xd3, 0xba, 0xf3, 0x9d, 0x18,
];

const TC14_TAG: [u8; 16] = [
    0xd0, 0xd1, 0xc8, 0xa7, 0x99, 0x99, 0x6b, 0xf0, 0x26, 0x5b, 0x98, 0xb5, 0xd4, 0x8a, 0xb9, 0x19,
];

const TC15_CT: [u8; 64] = [
    0x52, 0x2d, 0xc1, 0xf0, 0x99, 0x56, 0x7d, 0x07, 0xf4, 0x7f, 0x37, 0xa3, 0x2a, 0x84, 0x42, 0x7d,
    0x64, 0x3a, 0x8c, 0xdc, 0xbf, 0xe5, 0xc0, 0xc9, 0x75, 0x98, 0xa2, 0xbd, 0x25, 0x55, 0xd1, 0xaa,
    0x8c, 0xb0, 0x8e, 0x48, 0x59, 0x0d, 0xbb, 0x3d, 0xa7, 0xb0, 0x8b, 0x10, 0x56, 0x82, 0x88, 0x38,
    0xc5, 0xf6, 0x1e, 0x63, 0x93, 0xba, 0x7a, 0x0a, 0xbc, 0xc9, 0xf6, 0x62, 0x89, 0x80, 0x15, 0xad,
];

const TC15_TAG: [u8; 16] = [
    0xb0, 0x94, 0xda, 0xc5, 0xd9, 0x34, 0x71, 0xbd, 0xec, 0x1a, 0x50, 0x22, 0x70, 0xe3, 0xcc, 0x6c,
];

const TC16_CT: [u8; 60] = [
    0x52, 0x2d, 0xc1, 0xf0, 0x99, 0x56, 0x7d, 0x07, 0xf4, 0x7f, 0x37, 0xa3, 0x2a, 0x84, 0x42, 0x7d,
    0x64, 0x3a, 0x8c, 0xdc, 0xbf, 0xe5, 0xc0, 0xc9, 0x75, 0x98, 0xa2, 0xbd, 0x25, 0x55, 0xd1, 0xaa,
    0x8c, 0xb0, 0x8e, 0x48, 0x59, 0x0d, 0xbb, 0x3d, 0xa7, 0xb0, 0x8b, 0x10, 0x56, 0x82, 0x88, 0x38,
    0xc5, 0xf6, 0x1e, 0x63, 0x93, 0xba, 0x7a, 0x0a, 0xbc, 0xc9, 0xf6, 0x62,
];

const TC16_TAG: [u8; 16] = [
    0x76, 0xfc, 0x6e, 0xce, 0x0f, 0x4e, 0x17, 0x68, 0xcd, 0xdf, 0x88, 0x53, 0xbb, 0x2d, 0x55, 0x1b,
];

// Corrupted copies of the vectors above.
const TC4_TAG_FLIPPED: [u8; 16] = [
    0x5a, 0xc9, 0x4f, 0xbc, 0x32, 0x21, 0xa5, 0xdb, 0x94, 0xfa, 0xe9, 0x5a, 0xe7, 0x12, 0x1a, 0x47,
];

const TC4_CT_FLIPPED: [u8; 60] = [
    0x42, 0x83, 0x1e, 0xc2, 0x21, 0x77, 0x74, 0x24, 0x4b, 0x72, 0x21, 0xb7, 0x84, 0xd0, 0xd4, 0x9c,
    0xe3, 0xaa, 0x21, 0x2f, 0x2c, 0x02, 0xa4, 0xe0, 0x35, 0xc1, 0x7e, 0x23, 0x29, 0xac, 0xa1, 0x2e,
    0x21, 0xd5, 0x14, 0xb2, 0x54, 0x66, 0x93, 0x1c, 0x7d, 0x8f, 0x6a, 0x5a, 0xac, 0x84, 0xaa, 0x05,
    0x1b, 0xa3, 0x0b, 0x39, 0x6a, 0x0a, 0xac, 0x97, 0x3d, 0x58, 0xe0, 0x11,
];

const AAD_FLIPPED: [u8; 20] = [
    0xfe, 0xed, 0xfa, 0xce, 0xde, 0xad, 0xbe, 0xef, 0xfe, 0xed, 0xfa, 0xce, 0xde, 0xad, 0xbe, 0xef,
    0xab, 0xad, 0xda, 0xd0,
];

const TC2_TAG_FLIPPED: [u8; 16] = [
    0xab, 0x6e, 0x47, 0xd4, 0x2c, 0xec, 0x13, 0xbd, 0xf5, 0x3a, 0x67, 0xb2, 0x12, 0x57, 0xbd, 0x9f,
];

const TC16_TAG_FLIPPED: [u8; 16] = [
    0x76, 0xfc, 0x6e, 0xce, 0x0f, 0x4e, 0x17, 0x68, 0xdd, 0xdf, 0x88, 0x53, 0xbb, 0x2d, 0x55, 0x1b,
];

// Truncated tags.
const TC4_TAG_96: [u8; 12] = [
    0x5b, 0xc9, 0x4f, 0xbc, 0x32, 0x21, 0xa5, 0xdb, 0x94, 0xfa, 0xe9, 0x5a,
];

const TC3_TAG_64: [u8; 8] = [
    0x4d, 0x5c, 0x2a, 0xf3, 0x27, 0xcd, 0x64, 0xa6,
];

pub const TEST_CASE_1: GcmTestVector = GcmTestVector {
    key: &KEY_ZERO_128,
    iv: &IV_ZERO,
    aad: &[],
    pt: None,
    ct: &[],
    tag: &TC1_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_2: GcmTestVector = GcmTestVector {
    key: &KEY_ZERO_128,
    iv: &IV_ZERO,
    aad: &[],
    pt: Some(&PT_ZERO),
    ct: &TC2_CT,
    tag: &TC2_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_3: GcmTestVector = GcmTestVector {
    key: &KEY_128,
    iv: &IV_96,
    aad: &[],
    pt: Some(&PT_64),
    ct: &TC3_CT,
    tag: &TC3_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_4: GcmTestVector = GcmTestVector {
    key: &KEY_128,
    iv: &IV_96,
    aad: &AAD,
    pt: Some(&PT_60),
    ct: &TC4_CT,
    tag: &TC4_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_5: GcmTestVector = GcmTestVector {
    key: &KEY_128,
    iv: &IV_64,
    aad: &AAD,
    pt: Some(&PT_60),
    ct: &TC5_CT,
    tag: &TC5_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_6: GcmTestVector = GcmTestVector {
    key: &KEY_128,
    iv: &IV_480,
    aad: &AAD,
    pt: Some(&PT_60),
    ct: &TC6_CT,
    tag: &TC6_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_9: GcmTestVector = GcmTestVector {
    key: &KEY_192,
    iv: &IV_96,
    aad: &[],
    pt: Some(&PT_64),
    ct: &TC9_CT,
    tag: &TC9_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_13: GcmTestVector = GcmTestVector {
    key: &KEY_ZERO_256,
    iv: &IV_ZERO,
    aad: &[],
    pt: None,
    ct: &[],
    tag: &TC13_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_14: GcmTestVector = GcmTestVector {
    key: &KEY_ZERO_256,
    iv: &IV_ZERO,
    aad: &[],
    pt: Some(&PT_ZERO),
    ct: &TC14_CT,
    tag: &TC14_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_15: GcmTestVector = GcmTestVector {
    key: &KEY_256,
    iv: &IV_96,
    aad: &[],
    pt: Some(&PT_64),
    ct: &TC15_CT,
    tag: &TC15_TAG,
    encrypt: true,
    expect_fail: false,
};

pub const TEST_CASE_16: GcmTestVector = GcmTestVector {
    key: &KEY_256,
    iv: &IV_96,
    aad: &AAD,
    pt: Some(&PT_60),
    ct: &TC16_CT,
    tag: &TC16_TAG,
    encrypt: true,
    expect_fail: false,
};

/// Same vector, run in the open direction.
const fn opened(vector: GcmTestVector) -> GcmTestVector {
    GcmTestVector {
        encrypt: false,
        ..vector
    }
}

const NIST_128: [GcmTestVector; 6] = [
    TEST_CASE_1,
    TEST_CASE_2,
    TEST_CASE_3,
    TEST_CASE_4,
    TEST_CASE_5,
    TEST_CASE_6,
];

const NIST_128_OPEN: [GcmTestVector; 5] = [
    opened(TEST_CASE_2),
    opened(TEST_CASE_3),
    opened(TEST_CASE_4),
    opened(TEST_CASE_5),
    opened(TEST_CASE_6),
];

const NIST_192: [GcmTestVector; 1] = [TEST_CASE_9];

const NIST_256: [GcmTestVector; 4] = [TEST_CASE_13, TEST_CASE_14, TEST_CASE_15, TEST_CASE_16];

const NIST_256_OPEN: [GcmTestVector; 3] = [
    opened(TEST_CASE_14),
    opened(TEST_CASE_16),
    GcmTestVector {
        pt: None,
        tag: &TC16_TAG_FLIPPED,
        expect_fail: true,
        ..opened(TEST_CASE_16)
    },
];

const NEGATIVE_128: [GcmTestVector; 7] = [
    // Tag, ciphertext and AAD each corrupted in one bit.
    GcmTestVector {
        pt: None,
        tag: &TC4_TAG_FLIPPED,
        expect_fail: true,
        ..opened(TEST_CASE_4)
    },
    GcmTestVector {
        pt: None,
        ct: &TC4_CT_FLIPPED,
        expect_fail: true,
        ..opened(TEST_CASE_4)
    },
    GcmTestVector {
        pt: None,
        aad: &AAD_FLIPPED,
        expect_fail: true,
        ..opened(TEST_CASE_4)
    },
    // Sealing must not reproduce a corrupted tag; the ciphertext still
    // has to match.
    GcmTestVector {
        tag: &TC2_TAG_FLIPPED,
        expect_fail: true,
        ..TEST_CASE_2
    },
    // Wrong key.
    GcmTestVector {
        key: &KEY_ZERO_128,
        expect_fail: true,
        pt: None,
        ..opened(TEST_CASE_4)
    },
    // Truncated tags verify over their own length.
    GcmTestVector {
        tag: &TC4_TAG_96,
        ..opened(TEST_CASE_4)
    },
    GcmTestVector {
        tag: &TC3_TAG_64,
        ..TEST_CASE_3
    },
];

pub const GCM_SUITES: &[GcmTestSuite<'static>] = &[
    GcmTestSuite {
        name: "NIST GCM AES-128 encrypt",
        key_bits: 128,
        tests: &NIST_128,
    },
    GcmTestSuite {
        name: "NIST GCM AES-128 decrypt",
        key_bits: 128,
        tests: &NIST_128_OPEN,
    },
    GcmTestSuite {
        name: "NIST GCM AES-192 encrypt",
        key_bits: 192,
        tests: &NIST_192,
    },
    GcmTestSuite {
        name: "NIST GCM AES-256 encrypt",
        key_bits: 256,
        tests: &NIST_256,
    },
    GcmTestSuite {
        name: "NIST GCM AES-256 decrypt",
        key_bits: 256,
        tests: &NIST_256_OPEN,
    },
    GcmTestSuite {
        name: "AES-128 GCM expect-fail",
        key_bits: 128,
        tests: &NEGATIVE_128,
    },
];
