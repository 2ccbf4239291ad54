/*++

Licensed under the Apache-2.0 license.

File Name:

    crypto_kat.rs

Abstract:

    File contains function to execute all the Known Answer Tests (KAT) for AES-GCM.

--*/

use crate::Aes128GcmKat;
use crate::Aes256GcmKat;
use zvk_error::ZvkResult;

#[derive(Default, Debug)]
pub struct CryptoKat {}

impl CryptoKat {
    /// This function executes all the Known Answer Tests (aka KAT).
    ///
    /// # Returns
    ///
    /// * `ZvkResult` - Result denoting the KAT outcome.
    pub fn execute(&self) -> ZvkResult<()> {
        Aes128GcmKat::default().execute()?;
        Aes256GcmKat::default().execute()?;
        Ok(())
    }
}
