//! Tests for the JSON output format.
//!
//! Downstream generators read these documents, so field names and enum
//! spellings are part of the contract.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use readycheck::remediation::build_plan;
use readycheck::report::to_json;
use readycheck::{evaluate_repository, RepoConfig};
use serde_json::Value;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn scorecard_json(fixture: &str) -> (String, Value) {
    let card = evaluate_repository(testdata_path().join(fixture)).expect("should evaluate");
    let text = to_json(&card).expect("should serialize");
    let value: Value = serde_json::from_str(&text).expect("should be valid JSON");
    (text, value)
}

#[test]
fn test_scorecard_top_level_fields() {
    let (_, json) = scorecard_json("monorepo");
    let obj = json.as_object().unwrap();
    for key in [
        "tool_version",
        "repo_name",
        "repo_description",
        "org_name",
        "repo_kind",
        "apps",
        "languages",
        "level_achieved",
        "blocking_level",
        "next_level_target",
        "overall",
        "overall_rate",
        "pillars",
        "levels",
        "action_items",
        "highlights",
        "criteria",
        "verdicts",
        "framework",
    ] {
        assert!(obj.contains_key(key), "missing field {}", key);
    }
    assert_eq!(json["repo_name"], "monorepo");
    assert_eq!(
        json["repo_description"],
        "Two applications: an HTTP API and a web frontend."
    );
    assert!(json.get("remediation_queue").is_none());
    assert_eq!(json["repo_kind"], "monorepo");
    assert_eq!(json["pillars"].as_array().unwrap().len(), 8);
    assert_eq!(json["levels"].as_array().unwrap().len(), 5);
    assert_eq!(json["framework"]["unlock_threshold_percent"], 80);
}

#[test]
fn test_verdict_encoding() {
    let (_, json) = scorecard_json("monorepo");
    let verdicts = json["verdicts"].as_array().unwrap();

    let web_lint = verdicts
        .iter()
        .find(|v| v["criterion_id"] == "lint_config" && v["scope"]["path"] == "apps/web")
        .expect("web lint verdict");
    assert_eq!(web_lint["scope"]["kind"], "app");
    assert_eq!(web_lint["status"], "fail");
    assert_eq!(web_lint["pillar"], "style_validation");

    let bp = verdicts
        .iter()
        .find(|v| v["criterion_id"] == "branch_protection")
        .unwrap();
    assert_eq!(bp["scope"]["kind"], "repo");
    assert_eq!(bp["status"], "skipped");
    assert_eq!(bp["skip_reason"], "non_local_signal");
}

#[test]
fn test_rate_encoding() {
    let (_, json) = scorecard_json("cargo-app");
    let l1 = &json["levels"][0];
    assert_eq!(l1["level"], 1);
    assert_eq!(l1["name"], "Functional");
    assert_eq!(l1["meets_threshold"], true);
    assert_eq!(l1["rate"]["state"], "applicable");
    assert_eq!(l1["rate"]["percent"], 100);
    assert!(l1["passed"].is_u64());
    assert!(l1["skipped"].is_u64());
}

#[test]
fn test_no_absolute_paths() {
    let (text, _) = scorecard_json("monorepo");
    let root = testdata_path();
    assert!(!text.contains(root.to_string_lossy().as_ref()));
}

#[test]
fn test_plan_encoding() {
    let root = testdata_path().join("cargo-app");
    let config = RepoConfig::default();
    let card = readycheck::evaluate_with(&root, &config).unwrap();
    let plan = build_plan(&card, &config, 10);
    let json: Value = serde_json::from_str(&to_json(&plan).unwrap()).unwrap();

    assert_eq!(json["blocking_level"], 2);
    let items = json["items"].as_array().unwrap();
    assert!(!items.is_empty());
    let auto = items
        .iter()
        .find(|i| i["disposition"] == "auto_scaffold")
        .expect("an auto-scaffold item");
    assert_eq!(auto["file_ops"][0]["action"], "create_if_missing");
    assert_eq!(auto["file_ops"][0]["already_exists"], false);
    assert!(items.iter().any(|i| i["disposition"] == "manual"));
}
