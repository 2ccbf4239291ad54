/*++

Licensed under the Apache-2.0 license.

File Name:

    aes128gcm_kat.rs

Abstract:

    File contains the Known Answer Tests (KAT) for AES-128-GCM, using the
    test cases with documented intermediate values.

--*/

use crate::runner::run_testcase;
use crate::vectors::{GcmTestVector, TEST_CASE_1, TEST_CASE_2, TEST_CASE_4};
use zvk_error::ZvkResult;

const KNOWN_ANSWERS: [(&str, GcmTestVector); 3] = [
    ("Test Case 1", TEST_CASE_1),
    ("Test Case 2", TEST_CASE_2),
    ("Test Case 4", TEST_CASE_4),
];

#[derive(Default, Debug)]
pub struct Aes128GcmKat {}

impl Aes128GcmKat {
    /// This function executes the Known Answer Tests (aka KAT) for AES-128-GCM.
    ///
    /// Test vector source:
    /// GCM paper (McGrew and Viega), Test Cases 1, 2 and 4
    ///
    /// # Returns
    ///
    /// * `ZvkResult` - Result denoting the KAT outcome.
    pub fn execute(&self) -> ZvkResult<()> {
        for (name, vector) in KNOWN_ANSWERS.iter() {
            run_testcase(name, 0, vector, 128)?;
        }
        Ok(())
    }
}
