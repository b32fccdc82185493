use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oxide-page"))
        .args(args)
        .env_remove("OXIDE_PAGE_CONFIG")
        .output()
        .expect("run oxide-page")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_validate_all_valid() {
    let fields = json_file(
        r#"[
            {"name": "firstName", "value": "Al", "required": true},
            {"name": "email", "type": "email", "value": "a@b.co", "required": true},
            {"tag": "textarea", "name": "message", "value": "1234567890"}
        ]"#,
    );
    let output = run(&["validate", "--input", fields.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "firstName: ok\nemail: ok\nmessage: ok\n");
}

#[test]
fn test_validate_failure_exits_with_one() {
    let fields = json_file(r#"[{"name": "email", "type": "email", "value": "not-an-email"}]"#);
    let output = run(&["validate", "-i", fields.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "email: invalid: Please enter a valid email address.\n"
    );
}

#[test]
fn test_validate_uses_config_messages() {
    let config = json_file(r#"{"messages": {"required": "Pflichtfeld."}}"#);
    let fields = json_file(r#"[{"name": "company", "required": true}]"#);
    let output = run(&[
        "--config",
        config.path().to_str().unwrap(),
        "validate",
        "--input",
        fields.path().to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "company: invalid: Pflichtfeld.\n");
}

#[test]
fn test_missing_input_fails() {
    let output = run(&["validate", "--input", "/nonexistent/fields.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn test_replay_prints_summary() {
    let page = json_file(
        r##"{
            "location": "/",
            "body": [
                {"tag": "header", "rect": {"top": 0, "left": 0, "width": 1280, "height": 60}},
                {"tag": "a", "attrs": {"href": "#about"}, "text": "About"},
                {"tag": "section", "id": "about", "rect": {"top": 1000, "left": 0, "width": 1280, "height": 400}},
                {"tag": "a", "attrs": {"href": "#privacy"}, "text": "Privacy"}
            ]
        }"##,
    );
    let events = json_file(
        r##"[
            {"at": 0, "type": "click", "selector": "a[href=\"#about\"]"},
            {"at": 50, "type": "scroll", "offset": 920},
            {"at": 100, "type": "click", "selector": "a[href=\"#privacy\"]"}
        ]"##,
    );
    let output = run(&[
        "replay",
        "--page",
        page.path().to_str().unwrap(),
        "--events",
        events.path().to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["location"], "/privacy.html");
    assert_eq!(summary["navigations"], serde_json::json!(["/privacy.html"]));
    assert_eq!(summary["scroll_requests"][0]["top"], 920.0);
    assert_eq!(summary["scroll_requests"][0]["behavior"], "smooth");
    assert_eq!(summary["prevented_defaults"], 2);
}
