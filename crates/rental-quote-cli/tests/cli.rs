use assert_cmd::Command;
use predicates::prelude::*;

const CANONICAL: &str = "Nov 13 | 6:00 AM - Nov 19 | 9:00 AM";

fn rentquote() -> Command {
    let mut cmd = Command::cargo_bin("rentquote").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_quote_prints_receipt() {
    rentquote()
        .args(["quote", CANONICAL, "--daily-rate", "180000", "--today", "2025-11-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x 6 ngày"))
        .stdout(predicate::str::contains("x 3 giờ"))
        .stdout(predicate::str::contains("Tổng cộng: 1.102.500\u{a0}₫"));
}

#[test]
fn test_quote_json() {
    let value = json_stdout(rentquote().args([
        "quote",
        CANONICAL,
        "--daily-rate",
        "180000",
        "--today",
        "2025-11-01",
        "--json",
    ]));
    assert_eq!(value["quote"]["total"], 1_102_500);
    assert_eq!(value["quote"]["hourly_rate"], 7_500);
    assert_eq!(value["label"], "1.102.500\u{a0}₫");
}

#[test]
fn test_quote_vietnamese_range_with_hourly_rate() {
    let value = json_stdout(rentquote().args([
        "quote",
        "13 Thg 11 | 6:00 SA - 19 Thg 11 | 9:00 SA",
        "--daily-rate",
        "180000",
        "--hourly-rate",
        "10000",
        "--today",
        "2025-11-01",
        "--json",
    ]));
    assert_eq!(value["quote"]["total"], 1_110_000);
}

#[test]
fn test_quote_no_selection_is_one_day() {
    let value = json_stdout(rentquote().args([
        "quote",
        "Chọn Ngày",
        "--daily-rate",
        "180000",
        "--json",
    ]));
    assert_eq!(value["quote"]["whole_days"], 1);
    assert_eq!(value["quote"]["total"], 180_000);
}

#[test]
fn test_quote_garbage_falls_back_to_daily_label() {
    rentquote()
        .args(["quote", "not a range", "--daily-rate", "180000"])
        .assert()
        .success()
        .stdout("180.000\u{a0}₫/ngày\n");
}

#[test]
fn test_quote_garbage_strict_fails() {
    rentquote()
        .args(["quote", "not a range", "--daily-rate", "180000", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range format"));
}

#[test]
fn test_quote_min_hours_flag() {
    let value = json_stdout(rentquote().args([
        "quote",
        "Nov 13 | 6:00 AM - Nov 13 | 8:00 AM",
        "--daily-rate",
        "100000",
        "--min-hours",
        "48",
        "--today",
        "2025-11-01",
        "--json",
    ]));
    assert_eq!(value["quote"]["whole_days"], 2);
    assert_eq!(value["quote"]["total"], 200_000);
}

#[test]
fn test_quote_config_file() {
    let path = std::env::temp_dir().join(format!("rentquote-cli-test-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "minimum_charge_hours = 0\nno_selection_placeholders = [\"Pick dates\"]\n",
    )
    .unwrap();

    let value = json_stdout(rentquote().args([
        "quote",
        "Nov 13 | 6:00 AM - Nov 13 | 8:00 AM",
        "--daily-rate",
        "240000",
        "--today",
        "2025-11-01",
        "--json",
        "--config",
        path.to_str().unwrap(),
    ]));
    assert_eq!(value["quote"]["whole_days"], 0);
    assert_eq!(value["quote"]["remainder_hours"], 2);
    assert_eq!(value["quote"]["total"], 20_000);

    let value = json_stdout(rentquote().args([
        "quote",
        "pick dates",
        "--daily-rate",
        "240000",
        "--json",
        "--config",
        path.to_str().unwrap(),
    ]));
    assert_eq!(value["quote"]["total"], 240_000);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_config_file_fails() {
    rentquote()
        .args([
            "quote",
            CANONICAL,
            "--daily-rate",
            "1",
            "--config",
            "/nonexistent/rentquote.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_duration_rolls_over_year() {
    rentquote()
        .args([
            "duration",
            "5 Thg 1 | 6:00 SA - 10 Thg 1 | 6:00 SA",
            "--today",
            "2025-12-30",
        ])
        .assert()
        .success()
        .stdout("5 ngày\n");
}

#[test]
fn test_duration_json() {
    let value = json_stdout(rentquote().args([
        "duration",
        CANONICAL,
        "--today",
        "2025-11-01",
        "--json",
    ]));
    assert_eq!(value["label"], "6 ngày 3 giờ");
    assert_eq!(value["duration"]["total_hours"], 147.0);
}

#[test]
fn test_duration_garbage_defaults_to_one_day() {
    rentquote()
        .args(["duration", "Nov 13 | 6:00 AM"])
        .assert()
        .success()
        .stdout("1 ngày\n");
}

#[test]
fn test_bad_today_is_rejected() {
    rentquote()
        .args(["duration", CANONICAL, "--today", "30/12/2025"])
        .assert()
        .failure();
}
