// Licensed under the Apache-2.0 license

use zvk_kat::{
    run_suite, Aes128GcmKat, Aes256GcmKat, CryptoKat, GcmTestSuite, GcmTestVector, SuiteOutcome,
    ZvkError, GCM_SUITES,
};

#[test]
fn test_known_answer_tests() {
    Aes128GcmKat::default().execute().unwrap();
    Aes256GcmKat::default().execute().unwrap();
    CryptoKat::default().execute().unwrap();
}

#[test]
fn test_compiled_in_suites() {
    let outcomes: Vec<_> = GCM_SUITES
        .iter()
        .map(|suite| (suite.name, run_suite(suite).unwrap()))
        .collect();

    for (name, outcome) in &outcomes {
        if name.contains("AES-192") {
            assert_eq!(*outcome, SuiteOutcome::Skipped);
        } else {
            assert!(matches!(outcome, SuiteOutcome::Passed { .. }), "{name}");
        }
    }
}

#[test]
fn test_negative_suite_is_mostly_expect_fail() {
    let suite = GCM_SUITES
        .iter()
        .find(|suite| suite.name.contains("expect-fail"))
        .unwrap();
    assert!(suite.tests.iter().filter(|v| v.expect_fail).count() >= 4);
    assert_eq!(
        run_suite(suite).unwrap(),
        SuiteOutcome::Passed {
            tests: suite.tests.len()
        }
    );
}

#[test]
fn test_misdeclared_vector_fails_suite() {
    // Test Case 2 with its expect_fail flag inverted.
    let tests = [GcmTestVector {
        expect_fail: true,
        ..zvk_kat::vectors::TEST_CASE_2
    }];
    let suite = GcmTestSuite {
        name: "misdeclared",
        key_bits: 128,
        tests: &tests,
    };
    assert_eq!(
        run_suite(&suite).unwrap_err(),
        ZvkError::KAT_GCM_TAG_MISMATCH
    );
}

#[test]
fn test_unsupported_suite_never_runs_vectors() {
    // The vector would fail key validation if it were run.
    let tests = [zvk_kat::vectors::TEST_CASE_1];
    for key_bits in [0, 64, 192, 512] {
        let suite = GcmTestSuite {
            name: "unsupported",
            key_bits,
            tests: &tests,
        };
        assert_eq!(run_suite(&suite).unwrap(), SuiteOutcome::Skipped);
    }
}
