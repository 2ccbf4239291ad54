/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the AES-GCM Known Answer Tests and test
    vector runner.

--*/

mod aes128gcm_kat;
mod aes256gcm_kat;
mod crypto_kat;
mod runner;
pub mod vectors;

pub use aes128gcm_kat::Aes128GcmKat;
pub use aes256gcm_kat::Aes256GcmKat;
pub use crypto_kat::CryptoKat;
pub use runner::{run_suite, run_testcase, SuiteOutcome};
pub use vectors::{GcmTestSuite, GcmTestVector, GCM_SUITES};
pub use zvk_error::{ZvkError, ZvkErrorKind, ZvkResult};
