//! End-to-end CLI tests for chatstat.
//!
//! These tests run the actual binary against the fixtures in
//! `tests/fixtures` and check stdout, stderr, exit status and any files
//! written with `--records`.
//!
//! # Test Categories
//!
//! - **Reports**: Text and JSON reports, per-sender filtering
//! - **Records**: CSV, JSON, JSONL record files
//! - **Inputs**: Plain text, CRLF and `.zip` exports
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn chatstat_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chatstat").expect("binary builds");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn json_report(args: &[&str]) -> serde_json::Value {
    let output = chatstat_cmd()
        .arg(fixture("group_day_first.txt"))
        .args(["--report", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ============================================================================
// Report Tests
// ============================================================================

mod reports {
    use super::*;

    #[test]
    fn test_text_report_for_all() {
        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("📊 Chat statistics for ALL"))
            .stdout(predicate::str::contains("Messages:   10"))
            .stdout(predicate::str::contains("Most active: Bob"))
            .stdout(predicate::str::contains("👥 Most messages"))
            .stdout(predicate::str::contains("pizza"));
    }

    #[test]
    fn test_text_report_for_one_sender() {
        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .args(["--user", "Carol"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Chat statistics for Carol"))
            .stdout(predicate::str::contains("Messages:   2"))
            .stdout(predicate::str::contains("Most messages").not());
    }

    #[test]
    fn test_unknown_sender_warns_but_succeeds() {
        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .args(["-u", "Mallory"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:   0"))
            .stdout(predicate::str::contains("no messages match sender 'Mallory'"));
    }

    #[test]
    fn test_sender_named_all_can_be_selected() {
        let dir = tempdir().unwrap();
        let path = output_path(&dir, "chat.txt");
        fs::write(
            &path,
            "01/02/23, 10:00 - All: hi\n01/02/23, 10:01 - Bob: hey\n01/02/23, 10:02 - Bob: yo\n",
        )
        .unwrap();

        let output = chatstat_cmd()
            .arg(&path)
            .args(["--report", "json", "--user", "All"])
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["summary"]["total_messages"], 1);
        assert!(report.get("rankings").is_none());
    }

    #[test]
    fn test_json_report_shape() {
        let report = json_report(&[]);

        assert_eq!(report["filter"], "all");
        assert_eq!(report["summary"]["total_messages"], 10);
        assert_eq!(report["summary"]["most_active_sender"], "Bob");
        assert_eq!(report["rankings"]["most_messages"][0]["key"], "Bob");
        assert_eq!(report["top_words"][0]["key"], "pizza");
        assert_eq!(report["top_emojis"][0]["key"], "😂");
        assert!(report["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_report_for_sender_has_no_rankings() {
        let report = json_report(&["--user", "Bob"]);

        assert_eq!(report["summary"]["total_messages"], 3);
        assert!(report.get("rankings").is_none());
    }

    #[test]
    fn test_top_limits_tables() {
        let report = json_report(&["--top", "1"]);
        assert_eq!(report["top_words"].as_array().unwrap().len(), 1);
        assert_eq!(report["top_emojis"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_no_stopwords_keeps_common_words() {
        let report = json_report(&["--no-stopwords", "--top", "100"]);
        let words: Vec<&str> = report["top_words"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|w| w["key"].as_str())
            .collect();
        assert!(words.contains(&"it"));
    }

    #[test]
    fn test_custom_stopwords_file() {
        let dir = tempdir().unwrap();
        let path = output_path(&dir, "stop.txt");
        fs::write(&path, "# mine\npizza\n").unwrap();

        let report = json_report(&["--stopwords", path.to_str().unwrap()]);
        assert_ne!(report["top_words"][0]["key"], "pizza");
    }

    #[test]
    fn test_list_senders() {
        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .arg("--list-senders")
            .assert()
            .success()
            .stdout("Alice\nBob\nCarol\n");
    }
}

// ============================================================================
// Record Output Tests
// ============================================================================

mod records {
    use super::*;

    #[test]
    fn test_records_csv_from_extension() {
        let dir = tempdir().unwrap();
        let out = output_path(&dir, "messages.csv");

        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .arg("--records")
            .arg(&out)
            .assert()
            .success()
            .stderr(predicate::str::contains("Records written to"));

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("Timestamp;Sender;Body;System;Media;Deleted"));
        assert!(content.contains("2023-03-12 13:05:00;Carol;<Media omitted>;false;true;false"));
    }

    #[test]
    fn test_records_json() {
        let dir = tempdir().unwrap();
        let out = output_path(&dir, "messages.json");

        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .arg("--records")
            .arg(&out)
            .assert()
            .success();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[3]["sender"], "Alice");
    }

    #[test]
    fn test_records_format_overrides_extension() {
        let dir = tempdir().unwrap();
        let out = output_path(&dir, "messages.data");

        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .arg("--records")
            .arg(&out)
            .args(["--records-format", "jsonl", "--no-system"])
            .assert()
            .success();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content.lines().count(), 7);
        for line in content.lines() {
            let row: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_ne!(row["sender"], "group_notification");
        }
    }

    #[test]
    fn test_unknown_records_extension_fails() {
        let dir = tempdir().unwrap();
        let out = output_path(&dir, "messages.xlsx");

        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .arg("--records")
            .arg(&out)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
        assert!(!out.exists());
    }

    #[test]
    fn test_records_format_requires_records() {
        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .args(["--records-format", "csv"])
            .assert()
            .failure();
    }
}

// ============================================================================
// Input Tests
// ============================================================================

mod inputs {
    use super::*;

    #[test]
    fn test_month_first_crlf_export() {
        chatstat_cmd()
            .arg(fixture("us_month_first.txt"))
            .args(["--report", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"total_messages\": 4"))
            .stdout(predicate::str::contains("\"2024-01-15\""));
    }

    #[test]
    fn test_forced_date_order() {
        // read as day-first the first line falls in the invalid month 15, so
        // the header is rejected and the export shrinks
        let output = chatstat_cmd()
            .arg(fixture("us_month_first.txt"))
            .args(["--report", "json", "--date-order", "day-first"])
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap_or_default();
        assert_ne!(report["summary"]["total_messages"], 4);
    }

    #[test]
    fn test_custom_media_placeholder() {
        let dir = tempdir().unwrap();
        let path = output_path(&dir, "chat.txt");
        fs::write(&path, "01/02/23, 10:00 - Ana: <Multimedia omitido>\n").unwrap();

        let output = chatstat_cmd()
            .arg(&path)
            .args(["--report", "json", "--media-placeholder", "<Multimedia omitido>"])
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["summary"]["total_media"], 1);
    }

    #[test]
    fn test_zip_export() {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let dir = tempdir().unwrap();
        let path = output_path(&dir, "export.zip");
        let mut writer = zip::ZipWriter::new(fs::File::create(&path).unwrap());
        writer
            .start_file("WhatsApp Chat with Dana.txt", SimpleFileOptions::default())
            .unwrap();
        writer
            .write_all(&fs::read(fixture("us_month_first.txt")).unwrap())
            .unwrap();
        writer.finish().unwrap();

        chatstat_cmd()
            .arg(&path)
            .arg("--list-senders")
            .assert()
            .success()
            .stdout("Dana\nEli\n");
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        chatstat_cmd()
            .arg(fixture("us_month_first.txt"))
            .arg("-v")
            .assert()
            .success()
            .stderr(predicate::str::contains("parsed export"))
            .stdout(predicate::str::contains("parsed export").not());
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_file() {
        chatstat_cmd()
            .arg("/nonexistent/chat.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("❌ Error"));
    }

    #[test]
    fn test_not_an_export() {
        let dir = tempdir().unwrap();
        let path = output_path(&dir, "notes.txt");
        fs::write(&path, "shopping list\nmilk\n").unwrap();

        chatstat_cmd()
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("notes.txt"));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let path = output_path(&dir, "empty.txt");
        fs::write(&path, "").unwrap();

        chatstat_cmd().arg(&path).assert().failure();
    }

    #[test]
    fn test_stopwords_conflict() {
        chatstat_cmd()
            .arg(fixture("group_day_first.txt"))
            .args(["--stopwords", "x.txt", "--no-stopwords"])
            .assert()
            .failure();
    }

    #[test]
    fn test_missing_input_argument() {
        chatstat_cmd().assert().failure();
    }
}
