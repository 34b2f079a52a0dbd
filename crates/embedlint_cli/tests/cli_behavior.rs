//! Integration tests for CLI behavior
//!
//! These tests run the binary and check what it prints and how it exits.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a command for the embedlint CLI
fn embedlint_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_embedlint"))
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        embedlint_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        embedlint_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod preprocess_command {
    use super::*;

    #[test]
    fn prints_blocks_with_directives() {
        embedlint_cmd()
            .arg("preprocess")
            .arg(fixtures_dir().join("sample.md"))
            .assert()
            .success()
            .stdout(predicate::str::contains("/* eslint-disable no-alert */\nalert(1)\n"))
            .stdout(predicate::str::contains("var x = 1\n"))
            .stdout(predicate::str::contains("--- block 1 (JavascriptBlock, line 11) ---"));
    }

    #[test]
    fn prints_blocks_as_json() {
        let output = embedlint_cmd()
            .args(["preprocess", "--format", "json"])
            .arg(fixtures_dir().join("sample.md"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let blocks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(blocks.as_array().unwrap().len(), 2);
        assert_eq!(blocks[0]["source"], "/* eslint-disable no-alert */\nalert(1)\n");
        // The nested fence opens in column 3.
        assert_eq!(blocks[1]["indent"], 3);
    }

    #[test]
    fn document_without_scripts() {
        embedlint_cmd()
            .args(["preprocess", "--format", "json"])
            .arg(fixtures_dir().join("prose.md"))
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));
    }

    #[test]
    fn missing_document_fails() {
        embedlint_cmd()
            .args(["preprocess", "no-such-document.md"])
            .assert()
            .code(2);
    }
}

mod postprocess_command {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn maps_messages_to_document_lines() {
        let dir = tempdir().unwrap();
        let messages = dir.path().join("messages.json");
        std::fs::write(
            &messages,
            r#"[
                [
                    { "ruleId": "semi", "severity": 1, "message": "Missing semicolon.", "line": 2, "column": 9 },
                    { "ruleId": "no-alert", "severity": 1, "message": "Unexpected alert.", "line": 1, "column": 1 }
                ],
                [
                    { "ruleId": "no-var", "severity": 1, "message": "Unexpected var.", "line": 1, "column": 1 },
                    { "ruleId": "eol-last", "severity": 1, "message": "Newline required.", "line": 2, "column": 1 }
                ]
            ]"#,
        )
        .unwrap();

        let output = embedlint_cmd()
            .args(["postprocess", "--format", "json", "--messages"])
            .arg(&messages)
            .arg(fixtures_dir().join("sample.md"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let mapped = reports[0]["messages"].as_array().unwrap();

        // The directive line and the unsatisfiable rule are dropped.
        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0]["ruleId"], "semi");
        assert_eq!(mapped[0]["line"], 6);
        assert_eq!(mapped[0]["column"], 9);
        assert_eq!(mapped[1]["ruleId"], "no-var");
        assert_eq!(mapped[1]["line"], 12);
        assert_eq!(mapped[1]["column"], 3);
    }

    #[test]
    fn reads_messages_from_stdin() {
        embedlint_cmd()
            .args(["postprocess", "--messages", "-"])
            .arg(fixtures_dir().join("sample.md"))
            .write_stdin(
                r#"[[], [{ "ruleId": "no-var", "severity": 2, "message": "Unexpected var.", "line": 1, "column": 1 }]]"#,
            )
            .assert()
            .code(1)
            .stdout(predicate::str::contains("12:3 error [no-var]: Unexpected var."));
    }

    #[test]
    fn group_count_mismatch_fails() {
        embedlint_cmd()
            .args(["postprocess", "--messages", "-"])
            .arg(fixtures_dir().join("sample.md"))
            .write_stdin("[[]]")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("message group"));
    }
}

#[cfg(unix)]
mod lint_command {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const README: &str = "# Readme\n\n```js\nvar x = 1\n```\n";

    /// Writes a config whose linter ignores its input and prints `report`.
    fn write_config(dir: &Path, report: serde_json::Value) {
        let script = format!("cat >/dev/null; echo '{}'", report);
        let config = serde_json::json!({
            "linter": { "command": "sh", "args": ["-c", script] }
        });
        fs::write(dir.join(".embedlint.json"), config.to_string()).unwrap();
    }

    fn semicolon_report() -> serde_json::Value {
        serde_json::json!([{
            "filePath": "<text>",
            "messages": [{
                "ruleId": "semi",
                "severity": 2,
                "message": "Missing semicolon.",
                "line": 1,
                "column": 10,
                "fix": { "range": [9, 9], "text": ";" }
            }]
        }])
    }

    #[test]
    fn reports_messages_at_document_positions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), README).unwrap();
        write_config(dir.path(), semicolon_report());

        embedlint_cmd()
            .current_dir(dir.path())
            .args(["lint", "README.md"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("README.md:"))
            .stdout(predicate::str::contains("4:10 error [semi]: Missing semicolon."))
            .stdout(predicate::str::contains("Checked 1 files, found 1 issues"));
    }

    #[test]
    fn clean_documents_exit_successfully() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), README).unwrap();
        write_config(dir.path(), serde_json::json!([{ "messages": [] }]));

        embedlint_cmd()
            .current_dir(dir.path())
            .args(["lint", "**/*.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("found 0 issues"));
    }

    #[test]
    fn fix_rewrites_the_document() {
        let dir = tempdir().unwrap();
        let readme = dir.path().join("README.md");
        fs::write(&readme, README).unwrap();
        write_config(dir.path(), semicolon_report());

        embedlint_cmd()
            .current_dir(dir.path())
            .args(["lint", "--fix", "README.md"])
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(&readme).unwrap(),
            "# Readme\n\n```js\nvar x = 1;\n```\n"
        );
    }

    #[test]
    fn fix_keeps_messages_whose_fix_was_skipped() {
        let dir = tempdir().unwrap();
        let readme = dir.path().join("README.md");
        fs::write(&readme, README).unwrap();
        // Both fixes touch the end of "var x = 1"; only one can be applied.
        write_config(
            dir.path(),
            serde_json::json!([{
                "messages": [
                    {
                        "ruleId": "prefer-const",
                        "severity": 2,
                        "message": "Use const.",
                        "line": 1,
                        "column": 1,
                        "fix": { "range": [0, 9], "text": "const x = 1" }
                    },
                    {
                        "ruleId": "semi",
                        "severity": 2,
                        "message": "Missing semicolon.",
                        "line": 1,
                        "column": 10,
                        "fix": { "range": [8, 9], "text": "1;" }
                    }
                ]
            }]),
        );

        embedlint_cmd()
            .current_dir(dir.path())
            .args(["lint", "--fix", "README.md"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("4:1 error [prefer-const]: Use const."))
            .stdout(predicate::str::contains("[semi]").not());

        assert_eq!(
            fs::read_to_string(&readme).unwrap(),
            "# Readme\n\n```js\nvar x = 1;\n```\n"
        );
    }

    #[test]
    fn invalid_config_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".embedlint.json"), r#"{ "linter": "eslint" }"#).unwrap();

        embedlint_cmd()
            .current_dir(dir.path())
            .args(["lint", "README.md"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Config validation failed"));
    }

    #[test]
    fn reports_zero_files_for_nonexistent_path() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), serde_json::json!([]));

        embedlint_cmd()
            .current_dir(dir.path())
            .args(["lint", "nonexistent_file.md"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 0 files"));
    }
}
