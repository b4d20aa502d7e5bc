/// Query case loader
///
/// Case file format: a JSON array whose entries are either a comment
/// string or an object with an `op` and its expectations.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum Entry {
    Case(QueryCase),
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Get,
    GetAll,
    Has,
    Add,
    Set,
    Delete,
    DeleteAll,
    Extract,
    ExtractAll,
    Parse,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueryCase {
    pub op: Op,
    pub query: String,
    #[serde(default)]
    pub key: String,
    /// Arguments for `add` / `set`
    #[serde(default)]
    pub values: Vec<String>,
    /// Query after the operation (for `parse`, the re-encoded query)
    #[serde(default)]
    pub expected_query: Option<String>,
    /// Values returned, `[]` standing for "absent"
    #[serde(default)]
    pub expected_values: Option<Vec<String>>,
    #[serde(default)]
    pub expected_present: Option<bool>,
    /// Decoded pairs for `parse`
    #[serde(default)]
    pub expected_pairs: Option<Vec<(String, String)>>,
    /// A decode error is expected
    #[serde(default)]
    pub failure: bool,
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub case_num: usize,
    pub op: Op,
    pub query: String,
    pub key: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases(data: &str) -> Vec<QueryCase> {
    let entries: Vec<Entry> = serde_json::from_str(data).expect("Failed to parse query cases");
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Case(case) => Some(case),
            Entry::Comment(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_skips_comments() {
        let cases = load_cases(
            r#"[
                "a comment",
                {"op": "get", "query": "a=1", "key": "a", "expected_values": ["1"]}
            ]"#,
        );
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].op, Op::Get);
        assert!(!cases[0].failure);
    }
}
