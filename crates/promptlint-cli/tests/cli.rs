use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn judge_reply(score: u8) -> serde_json::Value {
    let verdicts: Vec<serde_json::Value> = (1..=10)
        .map(|id| json!({"rule": id, "passed": false, "comment": "low detail"}))
        .collect();
    let text = json!({
        "overall_score": score,
        "summary": "vague first draft",
        "verdicts": verdicts,
        "suggestions": [{"rule": 2, "advice": "assign a persona"}],
    })
    .to_string();
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

fn promptlint() -> Command {
    let mut cmd = Command::cargo_bin("promptlint").unwrap();
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_API_BASE")
        .env_remove("PROMPTLINT_MODEL")
        .env_remove("PROMPTLINT_TIMEOUT_SECS");
    cmd
}

#[test]
fn version_prints_crate_version() {
    promptlint()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn analyze_requires_a_prompt_argument() {
    promptlint().arg("analyze").assert().code(2);
}

#[test]
fn missing_api_key_exits_with_provider_code() {
    promptlint()
        .arg("analyze")
        .arg("Write a poem")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn empty_prompt_exits_with_invalid_args() {
    promptlint()
        .env("GEMINI_API_KEY", "test-key")
        .arg("analyze")
        .arg("   ")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("prompt text must not be empty"));
}

#[test]
fn bad_timeout_env_exits_with_invalid_args() {
    promptlint()
        .env("GEMINI_API_KEY", "test-key")
        .env("PROMPTLINT_TIMEOUT_SECS", "soon")
        .arg("analyze")
        .arg("Write a poem")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("PROMPTLINT_TIMEOUT_SECS"));
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_audit_prints_all_ten_failures_and_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(judge_reply(2)))
        .expect(1)
        .mount(&server)
        .await;

    let output = promptlint()
        .env("GEMINI_API_KEY", "test-key")
        .env("GEMINI_API_BASE", server.uri())
        .arg("analyze")
        .arg("Write a poem")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "analysis itself succeeded");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("❌").count(), 10, "stderr: {}", stderr);
    assert!(stderr.contains("Score: 2.0/10"));
    assert!(stderr.contains("vague first draft"));
    assert!(stderr.contains("Rule 2: assign a persona"));
}

#[tokio::test(flavor = "multi_thread")]
async fn json_output_emits_machine_readable_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(judge_reply(2)))
        .mount(&server)
        .await;

    let output = promptlint()
        .env("GEMINI_API_KEY", "test-key")
        .env("GEMINI_API_BASE", server.uri())
        .arg("analyze")
        .arg("Write a poem")
        .arg("--json-output")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["overall_score"], 2.0);
    assert_eq!(result["verdicts"].as_array().unwrap().len(), 10);
}

#[tokio::test(flavor = "multi_thread")]
async fn file_argument_reads_the_prompt_from_disk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("a prompt saved in a file"))
        .respond_with(ResponseTemplate::new(200).set_body_json(judge_reply(6)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let prompt_path = dir.path().join("prompt.txt");
    std::fs::write(&prompt_path, "a prompt saved in a file").unwrap();

    promptlint()
        .env("GEMINI_API_KEY", "test-key")
        .env("GEMINI_API_BASE", server.uri())
        .arg("analyze")
        .arg(&prompt_path)
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn provider_5xx_exits_with_provider_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    promptlint()
        .env("GEMINI_API_KEY", "test-key")
        .env("GEMINI_API_BASE", server.uri())
        .arg("analyze")
        .arg("Write a poem")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("provider_error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unparsable_judge_output_exits_with_malformed_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "candidates": [{ "content": { "parts": [{ "text": "no json here" }] } }] }),
        ))
        .mount(&server)
        .await;

    promptlint()
        .env("GEMINI_API_KEY", "test-key")
        .env("GEMINI_API_BASE", server.uri())
        .arg("analyze")
        .arg("Write a poem")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("malformed_response"));
}
