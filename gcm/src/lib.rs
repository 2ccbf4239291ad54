/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the AES-GCM mode construction.

--*/

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod accumulator;
mod gcm;
mod icb;
pub mod printer;
mod request;

pub use gcm::{AesGcm, GcmTag, GCM_MAX_AAD_SIZE, GCM_MAX_DATA_SIZE, GCM_TAG_SIZE_MAX};
pub use icb::{CounterBlock, GCM_IV_FAST_PATH_SIZE};
pub use request::{GcmDirection, GcmRequest, GcmResult};
pub use zvk_crypto::{AesKeyLen, BlockCipher, DeferredGhash, ExpandedKey, Ghash, SoftGhash};
pub use zvk_error::{ZvkError, ZvkErrorKind, ZvkResult};
