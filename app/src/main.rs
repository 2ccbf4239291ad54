/*++

Licensed under the Apache-2.0 license.

File Name:

    main.rs

Abstract:

    File contains main entrypoint for the AES-GCM test vector runner.

--*/

use clap::{arg, value_parser, ArgAction};
use std::process::exit;
use zvk_kat::{run_suite, CryptoKat, GcmTestSuite, SuiteOutcome, GCM_SUITES};

/// Compiled-in suites whose name contains `filter`, or all of them.
fn select_suites(filter: Option<&str>) -> Vec<&'static GcmTestSuite<'static>> {
    GCM_SUITES
        .iter()
        .filter(|suite| filter.map_or(true, |f| suite.name.contains(f)))
        .collect()
}

fn list_suites() {
    for suite in GCM_SUITES {
        println!(
            "{} ({}-bit key, {} tests)",
            suite.name,
            suite.key_bits,
            suite.tests.len()
        );
    }
}

fn main() {
    let args = clap::Command::new("zvk-kat-runner")
        .about("AES-GCM known answer test runner")
        .arg(
            arg!(--suite <NAME> "Only run suites whose name contains NAME")
                .required(false)
                .value_parser(value_parser!(String)),
        )
        .arg(arg!(--list "List the compiled-in test suites and exit").action(ArgAction::SetTrue))
        .arg(
            arg!(--skip-kat "Skip the built-in known answer tests")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if args.get_flag("list") {
        list_suites();
        return;
    }

    if !args.get_flag("skip-kat") {
        if let Err(err) = CryptoKat::default().execute() {
            println!("Known answer tests failed: 0x{:08x}", u32::from(err));
            exit(1);
        }
    }

    let filter = args.get_one::<String>("suite").map(String::as_str);
    let suites = select_suites(filter);
    if suites.is_empty() {
        println!("No test suite matches {:?}", filter.unwrap_or_default());
        exit(1);
    }

    let mut passed = 0;
    let mut skipped = 0;
    for suite in suites {
        match run_suite(suite) {
            Ok(SuiteOutcome::Passed { tests }) => passed += tests,
            Ok(SuiteOutcome::Skipped) => skipped += 1,
            Err(_) => exit(1),
        }
    }
    println!("{} tests passed, {} suites skipped", passed, skipped);
}
