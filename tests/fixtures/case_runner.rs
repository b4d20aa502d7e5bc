use super::case_loader::{CaseFailure, CaseResult, Op, QueryCase, load_cases};
/// Query case runner
///
/// Runs each case and compares every expectation it sets.
use rawquery::{QueryParams, raw_query};
use std::borrow::Cow;

#[derive(Debug, Default)]
struct Outcome {
    query: String,
    values: Option<Vec<String>>,
    present: Option<bool>,
    pairs: Option<Vec<(String, String)>>,
    failed: bool,
}

fn execute(case: &QueryCase) -> Outcome {
    let mut outcome = Outcome::default();
    let mut query = case.query.clone();
    let key = case.key.as_str();

    let values = match case.op {
        Op::Get => raw_query::get(&case.query, key)
            .map(|value| value.into_iter().map(Cow::into_owned).collect()),
        Op::GetAll => raw_query::get_all(&case.query, key)
            .map(|values| values.into_iter().map(Cow::into_owned).collect()),
        Op::Has => {
            outcome.present = Some(raw_query::has(&case.query, key));
            Ok(Vec::new())
        }
        Op::Add => {
            raw_query::add(&mut query, key, &case.values);
            Ok(Vec::new())
        }
        Op::Set => {
            let value = case.values.first().map_or("", String::as_str);
            raw_query::set(&mut query, key, value);
            Ok(Vec::new())
        }
        Op::Delete => {
            raw_query::delete(&mut query, key);
            Ok(Vec::new())
        }
        Op::DeleteAll => {
            raw_query::delete_all(&mut query, key);
            Ok(Vec::new())
        }
        Op::Extract => raw_query::extract(&mut query, key).map(|value| value.into_iter().collect()),
        Op::ExtractAll => raw_query::extract_all(&mut query, key),
        Op::Parse => {
            let (params, errors) = QueryParams::parse(&case.query);
            outcome.failed = errors.is_some();
            outcome.pairs = Some(
                params
                    .iter()
                    .map(|param| (param.key.clone(), param.value.clone()))
                    .collect(),
            );
            query = params.encode();
            Ok(Vec::new())
        }
    };

    match values {
        Ok(values) => outcome.values = Some(values),
        Err(_) => outcome.failed = true,
    }
    outcome.query = query;
    outcome
}

/// Compare one case, returning (`field`, `expected`, `actual`) per mismatch
fn check(case: &QueryCase) -> Vec<(&'static str, String, String)> {
    let outcome = execute(case);
    let mut mismatches = Vec::new();

    if outcome.failed != case.failure {
        mismatches.push((
            "failure",
            case.failure.to_string(),
            outcome.failed.to_string(),
        ));
    }
    if let Some(expected) = &case.expected_query {
        if *expected != outcome.query {
            mismatches.push(("query", expected.clone(), outcome.query.clone()));
        }
    }
    if let Some(expected) = &case.expected_values {
        if !case.failure && Some(expected) != outcome.values.as_ref() {
            mismatches.push((
                "values",
                format!("{expected:?}"),
                format!("{:?}", outcome.values),
            ));
        }
    }
    if let Some(expected) = case.expected_present {
        if Some(expected) != outcome.present {
            mismatches.push((
                "present",
                expected.to_string(),
                format!("{:?}", outcome.present),
            ));
        }
    }
    if let Some(expected) = &case.expected_pairs {
        if Some(expected) != outcome.pairs.as_ref() {
            mismatches.push((
                "pairs",
                format!("{expected:?}"),
                format!("{:?}", outcome.pairs),
            ));
        }
    }
    mismatches
}

/// Run cases and return results
pub fn run_cases(cases: &[QueryCase]) -> CaseResult {
    let mut result = CaseResult::default();

    for (case_num, case) in cases.iter().enumerate() {
        let mismatches = check(case);
        if mismatches.is_empty() {
            result.passed += 1;
            continue;
        }
        result.failed += 1;
        result
            .failures
            .extend(mismatches.into_iter().map(|(field, expected, actual)| CaseFailure {
                case_num: case_num + 1,
                op: case.op,
                query: case.query.clone(),
                key: case.key.clone(),
                field: field.to_string(),
                expected,
                actual,
            }));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_cases() {
        let cases = load_cases(include_str!("./query_cases.json"));
        let result = run_cases(&cases);

        for failure in &result.failures {
            eprintln!(
                "case {} {:?}({:?}, {:?}) {}: expected {}, got {}",
                failure.case_num,
                failure.op,
                failure.query,
                failure.key,
                failure.field,
                failure.expected,
                failure.actual
            );
        }
        assert_eq!(result.failed, 0, "{}", result.summary());
        assert_eq!(result.passed, cases.len());
    }

    #[test]
    fn test_runner_reports_mismatch() {
        let cases = load_cases(
            r#"[{"op": "delete", "query": "a=1&b=2", "key": "a", "expected_query": "a=1"}]"#,
        );
        let result = run_cases(&cases);
        assert_eq!(result.failed, 1);
        assert_eq!(result.failures[0].field, "query");
        assert_eq!(result.failures[0].actual, "b=2");
    }
}
