/*++

Licensed under the Apache-2.0 license.

File Name:

    runner.rs

Abstract:

    File contains the test vector runner applying expect-fail semantics.

--*/

use crate::vectors::{GcmTestSuite, GcmTestVector};
use zvk_error::{ZvkError, ZvkResult};
use zvk_gcm::printer::HexBytes;
use zvk_gcm::{cprint_slice, cprintln, AesKeyLen, GcmDirection, GcmRequest};

/// Result of one suite.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SuiteOutcome {
    /// Every vector passed.
    Passed { tests: usize },

    /// The suite's key size is not supported; nothing ran.
    Skipped,
}

/// Run one vector.
///
/// # Arguments
///
/// * `name` - Suite or test name, for logging
/// * `idx` - Index of the vector within its suite
/// * `vector` - Vector to run
/// * `key_bits` - Declared key size
///
/// # Returns
///
/// * `ZvkResult` - `Ok` if the vector behaved as declared
pub fn run_testcase(
    name: &str,
    idx: usize,
    vector: &GcmTestVector,
    key_bits: usize,
) -> ZvkResult<()> {
    cprintln!("--- Running {} (#{}) test... ", name, idx);
    let result = if vector.encrypt {
        check_seal(vector, key_bits)
    } else {
        check_open(vector, key_bits)
    };
    if let Err(err) = result {
        cprintln!(
            "Test '{}' (#{}) failed (0x{})",
            name,
            idx,
            HexBytes(&u32::from(err).to_be_bytes())
        );
    }
    result
}

/// Run every vector of `suite`, stopping at the first failure.
pub fn run_suite(suite: &GcmTestSuite) -> ZvkResult<SuiteOutcome> {
    if AesKeyLen::try_from(suite.key_bits).is_err() {
        cprintln!(
            "Skipping test suite '{}' with unsupported keylen {}",
            suite.name,
            suite.key_bits
        );
        return Ok(SuiteOutcome::Skipped);
    }

    cprintln!(
        "------ Running '{}' test suite ({} tests)... ",
        suite.name,
        suite.tests.len()
    );
    for (idx, vector) in suite.tests.iter().enumerate() {
        run_testcase(suite.name, idx, vector, suite.key_bits)?;
    }
    cprintln!(
        "Success, '{}' test suite, {} tests run.",
        suite.name,
        suite.tests.len()
    );
    Ok(SuiteOutcome::Passed {
        tests: suite.tests.len(),
    })
}

fn check_seal(vector: &GcmTestVector, key_bits: usize) -> ZvkResult<()> {
    let result = GcmRequest {
        key: vector.key,
        key_bits,
        iv: vector.iv,
        aad: vector.aad,
        data: vector.pt.unwrap_or(&[]),
        direction: GcmDirection::Seal {
            tag_size: vector.tag.len(),
        },
    }
    .process()?;

    let tag_matches = result.tag == *vector.tag;
    if tag_matches == vector.expect_fail {
        cprintln!("Tag mismatch");
        cprint_slice!("output:   ", result.tag.as_bytes());
        cprint_slice!("expected: ", vector.tag);
        Err(ZvkError::KAT_GCM_TAG_MISMATCH)?;
    }

    if let Some(pt) = vector.pt {
        if result.data != vector.ct {
            text_mismatch(pt, &result.data, vector.ct);
            Err(ZvkError::KAT_GCM_CIPHERTEXT_MISMATCH)?;
        }
    }
    Ok(())
}

fn check_open(vector: &GcmTestVector, key_bits: usize) -> ZvkResult<()> {
    let result = GcmRequest {
        key: vector.key,
        key_bits,
        iv: vector.iv,
        aad: vector.aad,
        data: vector.ct,
        direction: GcmDirection::Open { tag: vector.tag },
    }
    .process()?;

    if result.authenticated == vector.expect_fail {
        cprintln!("Tag mismatch");
        cprint_slice!("output:   ", result.tag.as_bytes());
        cprint_slice!("expected: ", vector.tag);
        Err(ZvkError::KAT_GCM_AUTH_OUTCOME_MISMATCH)?;
    }

    // Plaintext is only released for authenticated input.
    if let (true, Some(pt)) = (result.authenticated, vector.pt) {
        if result.data != pt {
            text_mismatch(vector.ct, &result.data, pt);
            Err(ZvkError::KAT_GCM_PLAINTEXT_MISMATCH)?;
        }
    }
    Ok(())
}

fn text_mismatch(input: &[u8], output: &[u8], expected: &[u8]) {
    cprintln!("Text mismatch");
    cprint_slice!("input:    ", input);
    cprint_slice!("output:   ", output);
    cprint_slice!("expected: ", expected);
}
