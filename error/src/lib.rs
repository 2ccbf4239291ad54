/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains API and macros used by the workspace for error handling

--*/
#![cfg_attr(not(feature = "std"), no_std)]
use core::convert::From;
use core::num::{NonZeroU32, TryFromIntError};

/// ZVK Error Type
/// Derives debug, copy, clone, eq, and partial eq
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ZvkError(pub NonZeroU32);

/// Error class, encoded in the upper 16 bits of the error code.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ZvkErrorKind {
    /// Unsupported configuration, such as a 192-bit key. Never retried.
    Configuration,

    /// Caller bug: undersized buffers, oversized tags, mismatched key bytes.
    Precondition,

    /// Known answer test produced a value different from the vector.
    KnownAnswer,

    /// Code outside of the defined ranges.
    Unknown,
}

/// Macro to define error constants ensuring uniqueness
///
/// This macro takes a list of (name, value, doc) tuples and generates
/// constant definitions for each error code.
#[macro_export]
macro_rules! define_error_constants {
    ($(($name:ident, $value:expr, $doc:expr)),* $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: ZvkError = ZvkError::new_const($value);
        )*

        #[cfg(test)]
        /// Returns a vector of all defined error constants for testing uniqueness
        pub fn all_constants() -> Vec<(& 'static str, u32)> {
            vec![
                $(
                    (stringify!($name), $value),
                )*
            ]
        }
    };
}

impl ZvkError {
    /// Create an error; intended to only be used from const contexts, as we don't want
    /// runtime panics if val is zero. The preferred way to get a ZvkError from a u32 is to
    /// use `ZvkError::try_from()` from the `TryFrom` trait impl.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("ZvkError cannot be 0"),
        }
    }

    /// Class of this error.
    pub fn kind(&self) -> ZvkErrorKind {
        match self.0.get() >> 16 {
            0x0001 => ZvkErrorKind::Configuration,
            0x0002 => ZvkErrorKind::Precondition,
            0x0003 => ZvkErrorKind::KnownAnswer,
            _ => ZvkErrorKind::Unknown,
        }
    }

    define_error_constants![
        (
            GCM_UNSUPPORTED_KEY_SIZE,
            0x00010001,
            "GCM Error: Unsupported key size"
        ),
        (
            GCM_INVALID_KEY_LENGTH,
            0x00020001,
            "GCM Error: Key bytes do not match the declared key size"
        ),
        (
            GCM_INVALID_TAG_SIZE,
            0x00020002,
            "GCM Error: Invalid tag size"
        ),
        (GCM_INVALID_SLICE, 0x00020003, "GCM Error: Invalid slice"),
        (GCM_MAX_DATA, 0x00020004, "GCM Error: Max data exceeded"),
        (
            KAT_GCM_CIPHERTEXT_MISMATCH,
            0x00030001,
            "KAT Error: GCM ciphertext mismatch"
        ),
        (
            KAT_GCM_TAG_MISMATCH,
            0x00030002,
            "KAT Error: GCM tag mismatch"
        ),
        (
            KAT_GCM_PLAINTEXT_MISMATCH,
            0x00030003,
            "KAT Error: GCM plaintext mismatch"
        ),
        (
            KAT_GCM_AUTH_OUTCOME_MISMATCH,
            0x00030004,
            "KAT Error: GCM authentication outcome mismatch"
        ),
    ];
}

impl From<core::num::NonZeroU32> for crate::ZvkError {
    fn from(val: core::num::NonZeroU32) -> Self {
        crate::ZvkError(val)
    }
}

impl From<ZvkError> for core::num::NonZeroU32 {
    fn from(val: ZvkError) -> Self {
        val.0
    }
}

impl From<ZvkError> for u32 {
    fn from(val: ZvkError) -> Self {
        core::num::NonZeroU32::from(val).get()
    }
}

impl TryFrom<u32> for ZvkError {
    type Error = TryFromIntError;
    fn try_from(val: u32) -> Result<Self, TryFromIntError> {
        match NonZeroU32::try_from(val) {
            Ok(val) => Ok(ZvkError(val)),
            Err(err) => Err(err),
        }
    }
}

pub type ZvkResult<T> = Result<T, ZvkError>;
