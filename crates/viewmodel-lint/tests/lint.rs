//! End-to-end tests for the lint run.
#![allow(missing_docs)]

use std::fs;
use tempfile::TempDir;
use viewmodel_lint::{run, LintConfig, OutputFormat};

const COMPLETE: &str = "\
#[view_model]
mod counter {
    #[derive(Default)]
    pub struct State { pub count: i64 }
    pub enum Action { Increment }
    pub fn reduce(state: &mut State, action: Action) {}
}
";

const MISSING_STATE: &str = "\
#[view_model]
mod counter {
    pub enum Action { Increment }
    pub fn reduce(state: &mut State, action: Action) {}
}
";

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, contents) in files {
        let path = tmp.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
    tmp
}

#[tokio::test]
async fn test_clean_tree() {
    let tmp = workspace(&[("src/lib.rs", COMPLETE)]);
    let mut out = Vec::new();

    let summary = run(&LintConfig::new([tmp.path()]), &mut out).await.unwrap();

    assert!(summary.is_clean());
    assert_eq!(summary.files, 1);
    assert_eq!(summary.declarations, 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("checked 1 file(s), 1 view model(s): 0 error(s)"));
}

#[tokio::test]
async fn test_reports_missing_state_with_fix_it() {
    let tmp = workspace(&[("src/lib.rs", MISSING_STATE)]);
    let mut out = Vec::new();

    let summary = run(&LintConfig::new([tmp.path()]), &mut out).await.unwrap();

    assert!(!summary.is_clean());
    assert_eq!(summary.diagnostics, 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(
        "src/lib.rs:1:1: error[view_model::missing_state]: Missing required struct 'State'"
    ));
    assert!(text.contains("= help: Insert struct State {} at 2:14: `struct State { }`"));

    // without --fix the file is untouched
    assert_eq!(fs::read_to_string(tmp.path().join("src/lib.rs")).unwrap(), MISSING_STATE);
}

#[tokio::test]
async fn test_fix_inserts_placeholder_and_rechecks() {
    let tmp = workspace(&[("src/lib.rs", MISSING_STATE), ("src/ok.rs", COMPLETE)]);
    let mut out = Vec::new();

    let config = LintConfig::new([tmp.path()]).with_fix(true);
    let summary = run(&config, &mut out).await.unwrap();

    assert!(summary.is_clean());
    assert_eq!(summary.fixed, 1);
    assert_eq!(
        fs::read_to_string(tmp.path().join("src/lib.rs")).unwrap(),
        "\
#[view_model]
mod counter {
    struct State { }

    pub enum Action { Increment }
    pub fn reduce(state: &mut State, action: Action) {}
}
"
    );
    assert_eq!(fs::read_to_string(tmp.path().join("src/ok.rs")).unwrap(), COMPLETE);
}

#[tokio::test]
async fn test_json_output() {
    let tmp = workspace(&[("a.rs", MISSING_STATE), ("b.rs", "mod broken {")]);
    let mut out = Vec::new();

    let config = LintConfig::new([tmp.path()]).with_format(OutputFormat::Json);
    let summary = run(&config, &mut out).await.unwrap();

    assert_eq!(summary.failures, 1);
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["summary"]["diagnostics"], 1);
    assert_eq!(json["summary"]["failures"], 1);

    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    let decl = &files[0]["declarations"][0];
    assert_eq!(decl["name"], "counter");
    assert_eq!(decl["has_state"], false);
    assert_eq!(decl["has_action"], true);
    assert_eq!(decl["diagnostics"][0]["code"], "view_model::missing_state");
    assert_eq!(
        decl["diagnostics"][0]["fix_its"][0]["insertion"],
        "\n    struct State { }\n"
    );
    assert!(files[1]["error"].is_string());
}

#[tokio::test]
async fn test_external_view_model_module_fails_the_file() {
    let tmp = workspace(&[("src/lib.rs", "#[view_model]\nmod counter;\n")]);
    let mut out = Vec::new();

    let summary = run(&LintConfig::new([tmp.path()]), &mut out).await.unwrap();

    assert!(!summary.is_clean());
    assert_eq!(summary.failures, 1);
    assert_eq!(summary.declarations, 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("src/lib.rs: error: 1:1: `mod counter;` has no inline body"));
}

#[tokio::test]
async fn test_fix_keeps_crlf_line_endings() {
    let source = MISSING_STATE.replace('\n', "\r\n");
    let tmp = workspace(&[("src/lib.rs", source.as_str())]);
    let mut out = Vec::new();

    let config = LintConfig::new([tmp.path()]).with_fix(true);
    let summary = run(&config, &mut out).await.unwrap();

    assert!(summary.is_clean());
    let fixed = fs::read_to_string(tmp.path().join("src/lib.rs")).unwrap();
    assert!(fixed.starts_with("#[view_model]\r\nmod counter {\r\n    struct State { }\r\n\r\n"));
    assert_eq!(fixed.matches('\n').count(), fixed.matches("\r\n").count());
}
