#![allow(clippy::unwrap_used, clippy::expect_used)]

/// Fixture loader
///
/// The fixture file is a JSON array of case objects, with bare strings
/// allowed as comments.
use serde::Deserialize;

pub const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/escape_cases.json");

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    EscapeTest {
        input: String,
        #[serde(default)]
        escaped: Option<String>,
        #[serde(default)]
        header: Option<String>,
        #[serde(default)]
        header_regex: Option<bool>,
        #[serde(default)]
        cookie: Option<String>,
        #[serde(default)]
        query: Option<String>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_fixtures() -> Vec<TestCase> {
    let data = std::fs::read_to_string(FIXTURE_PATH).expect("Failed to read fixture file");
    serde_json::from_str(&data).expect("Failed to parse fixture file")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixtures() {
        let cases = load_fixtures();
        let count = cases
            .iter()
            .filter(|c| matches!(c, TestCase::EscapeTest { .. }))
            .count();
        assert!(count >= 10, "expected at least 10 cases, got {count}");
    }
}
