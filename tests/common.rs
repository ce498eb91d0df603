#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use brewlog::core::classify;
use brewlog::models::{Checkin, RawCheckin};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn brew() -> Command {
    cargo_bin_cmd!("brewlog")
}

/// Raw check-in on the "coffee" board.
pub fn raw(id: &str, created_at: &str) -> RawCheckin {
    RawCheckin::new(id, "coffee", created_at)
}

/// Classify `(id, createdAt)` pairs, panicking on bad fixtures.
pub fn classified(entries: &[(&str, &str)]) -> Vec<Checkin> {
    let raws: Vec<RawCheckin> = entries.iter().map(|(id, ts)| raw(id, ts)).collect();
    classify(&raws).expect("fixture timestamps are valid")
}

/// Five check-ins over four UTC days; `a` and `b` are 25 s apart.
pub fn dashboard_fixture() -> Vec<Checkin> {
    classified(&[
        ("a", "2026-02-01T06:00:00.000Z"),
        ("b", "2026-02-01T06:00:25.000Z"),
        ("c", "2026-02-02T13:00:00.000Z"),
        ("d", "2026-02-03T19:30:00.000Z"),
        ("e", "2026-02-04T23:30:00.000Z"),
    ])
}

/// Unique path inside the system temp dir, removed if it already exists.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_brewlog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const BOARD_EXPORT: &str = "\
entity,board_id,board_name,checkin_id,checkin_boardId,checkin_createdAt
Board,b-tea,Tea,,,
Board,b-coffee,Coffee,,,
Checkin,,,c3,b-coffee,2026-02-10T10:03:01.000Z
Checkin,,,c1,b-coffee,2026-02-10T10:00:00.000Z
Checkin,,,t1,b-tea,2026-02-10T10:00:10.000Z
Checkin,,,c2,b-coffee,2026-02-10T10:00:30.000Z

Checkin,,,c4,b-coffee,2026-02-11T08:15:00.000Z
";

/// Write `content` to a fresh temp CSV and return its path.
pub fn write_export(name: &str, content: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write fixture csv");
    path
}
