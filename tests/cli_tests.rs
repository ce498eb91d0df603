mod common;
use common::{BOARD_EXPORT, brew, temp_path, write_export};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_classify_prints_json_to_stdout() {
    let input = write_export("cli_classify_json", BOARD_EXPORT);
    let cfg = temp_path("cli_classify_json_cfg", "conf");

    let out = brew()
        .args(["--config", &cfg, "classify", "--input", &input])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(4));
    assert_eq!(rows[0]["id"], "c1");
    assert_eq!(rows[0]["isEspresso"], true);
    assert_eq!(rows[1]["gapToPrevSeconds"], 30);
}

#[test]
fn test_classify_writes_csv_file() {
    let input = write_export("cli_classify_csv", BOARD_EXPORT);
    let cfg = temp_path("cli_classify_csv_cfg", "conf");
    let out = temp_path("cli_classify_csv_out", "csv");

    brew()
        .args([
            "--config", &cfg, "classify", "--input", &input, "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,createdAt,boardId,boardName,isEspresso,gapToPrevSeconds")
    );
    assert_eq!(
        lines.next(),
        Some("c1,2026-02-10T10:00:00.000Z,b-coffee,Coffee,true,")
    );

    // a second run refuses to overwrite without --force
    brew()
        .args([
            "--config", &cfg, "classify", "--input", &input, "--format", "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_dashboard_json_with_flags() {
    let input = write_export("cli_dashboard_json", BOARD_EXPORT);
    let cfg = temp_path("cli_dashboard_json_cfg", "conf");

    let out = brew()
        .args([
            "--config",
            &cfg,
            "dashboard",
            "--input",
            &input,
            "--tz",
            "utc",
            "--range",
            "30d",
            "--daypart",
            "morning",
            "--order",
            "asc",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let model: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(model["kpis"]["total"], 4);
    assert_eq!(model["kpis"]["espressoCount"], 2);
    assert_eq!(model["insight"]["clusterEvents"], 1);
    assert_eq!(model["timeSeries"][0]["label"], "2026-02-10");
    assert_eq!(model["weekday"][2]["label"], "Tue");
    assert_eq!(model["weekday"][2]["count"], 3);
}

#[test]
fn test_dashboard_table_output() {
    let input = write_export("cli_dashboard_table", BOARD_EXPORT);
    let cfg = temp_path("cli_dashboard_table_cfg", "conf");

    brew()
        .args(["--config", &cfg, "dashboard", "--input", &input, "--tz", "+00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 4 | Espresso: 2"))
        .stdout(predicate::str::contains("2026-02-11"))
        .stdout(predicate::str::contains("Largest cluster: 2"));
}

#[test]
fn test_dashboard_uses_config_defaults() {
    let input = write_export("cli_dashboard_cfg", BOARD_EXPORT);
    let cfg = temp_path("cli_dashboard_cfg_cfg", "conf");
    fs::write(&cfg, "timezone: utc\ndaypart: night\nboard_name: Coffee\n").unwrap();

    let out = brew()
        .args(["--config", &cfg, "dashboard", "--input", &input, "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let model: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(model["kpis"]["total"], 0);
}

#[test]
fn test_unknown_board_fails() {
    let input = write_export("cli_unknown_board", BOARD_EXPORT);
    let cfg = temp_path("cli_unknown_board_cfg", "conf");

    brew()
        .args(["--config", &cfg, "classify", "--input", &input, "--board", "Matcha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Matcha board not found in CSV"));
}

#[test]
fn test_invalid_timezone_fails() {
    let input = write_export("cli_invalid_tz", BOARD_EXPORT);
    let cfg = temp_path("cli_invalid_tz_cfg", "conf");

    brew()
        .args(["--config", &cfg, "dashboard", "--input", &input, "--tz", "Mars/Olympus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time zone"));
}

#[test]
fn test_init_and_print_config() {
    let cfg = temp_path("cli_init_cfg", "conf");

    brew().args(["--config", &cfg, "init"]).assert().success();
    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("board_name: Coffee"));
    assert!(content.contains("order: desc"));

    brew()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timezone: local"))
        .stdout(predicate::str::contains("range: all"));

    brew().args(["--config", &cfg, "init"]).assert().failure();
    brew()
        .args(["--config", &cfg, "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_malformed_config_fails_with_yaml_error() {
    let input = write_export("cli_bad_config", BOARD_EXPORT);
    let cfg = temp_path("cli_bad_config_cfg", "conf");
    fs::write(&cfg, "limit: [not, a, number\n  ::: garbage").unwrap();

    brew()
        .args(["--config", &cfg, "dashboard", "--input", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML error"));
}
