extern crate serde_json;

use crate::error::{Error, Kind, Result};
use serde_json::Value;

fn text(payload: &Value, key: &str) -> String {
    match payload.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(v) => v.to_string(),
    }
}

fn missing_run_success() -> Error {
    Error::with_description(Kind::Request(None), "response carries no run_success")
}

/// True only for a full pass: the judge ran the code and every testcase
/// matched.
pub fn accepted(payload: &Value) -> bool {
    if payload.get("run_success").is_none() {
        return false;
    }
    match (payload.get("total_correct"), payload.get("total_testcases")) {
        (Some(correct), Some(total)) => correct == total && !correct.is_null(),
        _ => false,
    }
}

/// Report for an interpret (sample) run.
pub fn run_report(payload: &Value, testcases: &str) -> Result<String> {
    let run_success = payload
        .get("run_success")
        .and_then(Value::as_bool)
        .ok_or_else(missing_run_success)?;
    if run_success {
        let verdict = if payload
            .get("correct_answer")
            .and_then(Value::as_bool)
            .unwrap_or(false)
        {
            "Correct"
        } else {
            "Wrong Answer"
        };
        Ok(format!(
            "{}\nInput:\n{}\nExpected Output:\n{}\nOutput:\n{}",
            verdict,
            testcases,
            text(payload, "expected_code_answer"),
            text(payload, "code_answer")
        ))
    } else {
        Ok(judge_failure(payload, "full_runtime_error"))
    }
}

/// Report for a submission.
pub fn submit_report(payload: &Value) -> Result<String> {
    let run_success = payload
        .get("run_success")
        .and_then(Value::as_bool)
        .ok_or_else(missing_run_success)?;
    if !run_success {
        return Ok(judge_failure(payload, "full_compile_error"));
    }
    let correct = text(payload, "total_correct");
    let total = text(payload, "total_testcases");
    if accepted(payload) {
        let mut out = format!("Accepted\nTestcases:\n{}/{}", correct, total);
        // Percentile fields are not always present.
        if let Some(p) = payload.get("runtime_percentile").and_then(Value::as_f64) {
            out.push_str(&format!("\nRuntime Percentile:\n{:.2}", p));
        }
        if let Some(p) = payload.get("memory_percentile").and_then(Value::as_f64) {
            out.push_str(&format!("\nMemory Percentile:\n{:.2}", p));
        }
        Ok(out)
    } else {
        Ok(format!(
            "Wrong Answer\nTestcases:\n{}/{}\nInput:\n{}\nExpected Output:\n{}\nOutput:\n{}",
            correct,
            total,
            text(payload, "input_formatted"),
            text(payload, "expected_output"),
            text(payload, "code_output")
        ))
    }
}

fn judge_failure(payload: &Value, error_key: &str) -> String {
    let status = text(payload, "status_msg");
    let mut error = text(payload, error_key);
    if error.is_empty() {
        // A compile failure on a run and a runtime failure on a submit both
        // land in the other field.
        let fallback = if error_key == "full_runtime_error" {
            "full_compile_error"
        } else {
            "full_runtime_error"
        };
        error = text(payload, fallback);
    }
    if error.is_empty() {
        status
    } else {
        format!("{}\n{}", status, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn runtime_error_is_two_lines() {
        let payload = json!({
            "run_success": false,
            "status_msg": "Runtime Error",
            "full_runtime_error": "stack overflow",
        });
        assert_eq!(
            run_report(&payload, "[1,2]").unwrap(),
            "Runtime Error\nstack overflow"
        );
    }

    #[test]
    fn correct_run_reports_both_outputs() {
        let payload = json!({
            "run_success": true,
            "correct_answer": true,
            "expected_code_answer": "[0,1]",
            "code_answer": "[0,1]",
        });
        let report = run_report(&payload, "[2,7]").unwrap();
        assert!(report.starts_with("Correct\nInput:\n[2,7]"));
        assert!(report.ends_with("Expected Output:\n[0,1]\nOutput:\n[0,1]"));
    }

    #[test]
    fn accepted_submission_with_percentiles() {
        let payload = json!({
            "run_success": true,
            "total_correct": 17,
            "total_testcases": 17,
            "runtime_percentile": 93.25,
            "memory_percentile": 50.0,
        });
        assert!(accepted(&payload));
        let report = submit_report(&payload).unwrap();
        assert!(report.starts_with("Accepted\nTestcases:\n17/17"));
        assert!(report.contains("Runtime Percentile:\n93.25"));
        assert!(report.contains("Memory Percentile:\n50.00"));
    }

    #[test]
    fn accepted_submission_without_percentiles() {
        let payload = json!({
            "run_success": true,
            "total_correct": 17,
            "total_testcases": 17,
        });
        assert_eq!(
            submit_report(&payload).unwrap(),
            "Accepted\nTestcases:\n17/17"
        );
    }

    #[test]
    fn wrong_answer_submission() {
        let payload = json!({
            "run_success": true,
            "total_correct": 3,
            "total_testcases": 17,
            "input_formatted": "[3,3]",
            "expected_output": "[0,1]",
            "code_output": "[1,0]",
        });
        assert!(!accepted(&payload));
        let report = submit_report(&payload).unwrap();
        assert!(report.starts_with("Wrong Answer\nTestcases:\n3/17"));
    }

    #[test]
    fn compile_error_submission() {
        let payload = json!({
            "run_success": false,
            "status_msg": "Compile Error",
            "full_compile_error": "expected ';'",
        });
        assert_eq!(
            submit_report(&payload).unwrap(),
            "Compile Error\nexpected ';'"
        );
    }

    #[test]
    fn missing_run_success_is_a_request_failure() {
        let payload = json!({ "state": "SUCCESS" });
        let err = submit_report(&payload).unwrap_err();
        assert!(matches!(err.kind(), Kind::Request(None)));
        assert!(run_report(&payload, "x").is_err());
        assert!(!accepted(&payload));
    }
}
