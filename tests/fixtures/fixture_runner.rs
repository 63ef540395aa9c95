#![allow(clippy::panic)]

use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, load_fixtures};
/// Fixture runner
///
/// Runs every fixture case through the four transformations.
use mescape::{
    cookie_matcher_for_metadata, escape_metadata, header_matcher_for_metadata,
    query_matcher_for_metadata,
};

fn check(
    result: &mut FixtureResult,
    ok: &mut bool,
    test_num: usize,
    input: &str,
    field: &'static str,
    expected: Option<&str>,
    actual: &str,
) {
    let Some(expected) = expected else {
        return;
    };
    if expected != actual {
        *ok = false;
        result.failures.push(FixtureFailure {
            test_num,
            input: input.to_string(),
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
}

pub fn run_fixtures(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::EscapeTest {
            input,
            escaped,
            header,
            header_regex,
            cookie,
            query,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let mut ok = true;

        let actual = escape_metadata(&input);
        check(&mut result, &mut ok, test_num, &input, "escaped", escaped.as_deref(), &actual);

        let matcher = header_matcher_for_metadata(&input);
        check(&mut result, &mut ok, test_num, &input, "header", header.as_deref(), matcher.as_str());
        let is_regex = matcher.is_regex().to_string();
        check(
            &mut result,
            &mut ok,
            test_num,
            &input,
            "header_regex",
            header_regex.map(|r| if r { "true" } else { "false" }),
            &is_regex,
        );

        let actual = cookie_matcher_for_metadata(&input);
        check(&mut result, &mut ok, test_num, &input, "cookie", cookie.as_deref(), &actual);

        let actual = query_matcher_for_metadata(&input);
        check(&mut result, &mut ok, test_num, &input, "query", query.as_deref(), &actual);

        if ok {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_fixture_cases() {
    let result = run_fixtures(load_fixtures());

    if result.failed > 0 {
        for failure in &result.failures {
            eprintln!(
                "#{} {:?} {}: expected {:?}, got {:?}",
                failure.test_num, failure.input, failure.field, failure.expected, failure.actual
            );
        }
        panic!("Fixture failures: {}", result.summary());
    }
    assert!(result.passed > 0, "{}", result.summary());
}
