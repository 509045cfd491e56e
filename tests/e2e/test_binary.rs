//! Integration tests for the import-graph-layout binary.
//!
//! These tests run the compiled binary and verify output against golden
//! `.expect.txt` files in tests/fixtures.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled binary, provided by cargo for integration tests.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_import-graph-layout"))
}

fn fixtures_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Run the binary with the given stdin input and args.
fn run(input: &str, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run the binary and return stdout, asserting success.
fn run_ok(input: &str, args: &[&str]) -> String {
    let output = run(input, args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

/// All (name, input, expect) triples in the fixtures directory.
fn find_fixture_pairs() -> Vec<(String, PathBuf, PathBuf)> {
    let dir = fixtures_dir();
    let mut pairs = Vec::new();
    if let Ok(entries) = fs::read_dir(&dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if ext != "json" && ext != "gexf" {
                continue;
            }
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            let expect_path = dir.join(format!("{}.expect.txt", name));
            if expect_path.exists() {
                pairs.push((name, path, expect_path));
            }
        }
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

// ─── Golden file tests ──────────────────────────────────────────────────────

#[test]
fn test_all_fixtures_match_expect() {
    let pairs = find_fixture_pairs();
    assert!(
        pairs.len() >= 2,
        "Expected fixture pairs in {:?}",
        fixtures_dir()
    );

    let mut failures = Vec::new();
    for (name, input, expect_file) in &pairs {
        let expected = fs::read_to_string(expect_file)
            .unwrap_or_else(|e| panic!("Cannot read {:?}: {}", expect_file, e));
        let actual = run_ok("", &[input.to_str().unwrap()]);
        if actual != expected {
            failures.push(format!(
                "FAIL: {}\n--- expected\n{}--- actual\n{}",
                name, expected, actual
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Golden file mismatches ({}/{}):\n{}",
            failures.len(),
            pairs.len(),
            failures.join("\n")
        );
    }
}

// ─── Input handling ─────────────────────────────────────────────────────────

#[test]
fn test_reads_json_from_stdin() {
    let src = fs::read_to_string(fixture("chain.json")).unwrap();
    let expected = fs::read_to_string(fixture("chain.expect.txt")).unwrap();
    assert_eq!(run_ok(&src, &[]), expected);
    assert_eq!(run_ok(&src, &["-"]), expected);
}

#[test]
fn test_reads_gexf_from_stdin_with_format_flag() {
    let src = fs::read_to_string(fixture("mathlib_small.gexf")).unwrap();
    let expected = fs::read_to_string(fixture("mathlib_small.expect.txt")).unwrap();
    assert_eq!(run_ok(&src, &["--format", "gexf"]), expected);
}

#[test]
fn test_wrong_format_flag_fails() {
    let path = fixture("chain.json");
    let output = run("", &["--format", "gexf", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GEXF parse error"), "stderr: {stderr}");
}

#[test]
fn test_missing_input_file() {
    let output = run("", &["/nonexistent/graph.gexf"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"), "stderr: {stderr}");
}

// ─── Failure modes ──────────────────────────────────────────────────────────

#[test]
fn test_cycle_fails_without_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_file = dir.path().join("import_graph.txt");
    let input = fixture("cycle.json");

    let output = run(
        "",
        &[input.to_str().unwrap(), "--output", out_file.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cycle"), "stderr: {stderr}");
    assert!(stderr.contains("Mathlib.Order"), "stderr: {stderr}");
    assert!(!out_file.exists(), "No output file should be written");
}

#[test]
fn test_equal_weights_fallback_and_strict() {
    let input = fixture("equal_weights.json");
    let stdout = run_ok("", &[input.to_str().unwrap()]);
    let radii: Vec<&str> = stdout
        .lines()
        .skip(1)
        .take(2)
        .map(|l| l.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(radii, vec!["0.2", "0.2"]);

    let output = run("", &[input.to_str().unwrap(), "--strict-radius"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("degenerate"), "stderr: {stderr}");
}

#[test]
fn test_slot_window_below_group_levels_is_rejected() {
    let input = fixture("mathlib_small.gexf");
    let output = run("", &[input.to_str().unwrap(), "--slot-window", "50"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"), "stderr: {stderr}");
}

#[test]
fn test_crowded_bucket_overflows_slot_window() {
    // B, C and D each have one ancestor and share bucket 1 at target 140.
    // The first two take 140 and 139; the third probes 141, outside the window.
    let src = r#"{
        "nodes": [
            {"id": "A", "weight": 1.0},
            {"id": "B", "weight": 2.0},
            {"id": "C", "weight": 3.0},
            {"id": "D", "weight": 4.0}
        ],
        "edges": [["A", "B"], ["A", "C"], ["A", "D"]]
    }"#;
    let output = run(src, &["--slot-window", "141"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no free vertical slot"), "stderr: {stderr}");
    assert!(stderr.contains("in bucket 1: level 141"), "stderr: {stderr}");
}

#[test]
fn test_unrecognized_stdin_content_fails_detection() {
    let output = run("A B 1.0\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot detect format"), "stderr: {stderr}");
}

#[test]
fn test_whitespace_in_node_id_fails() {
    let src = r#"{"nodes": [{"id": "Mathlib.Order Basic", "weight": 1.0}]}"#;
    let output = run(src, &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("contains whitespace"), "stderr: {stderr}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_stdout_write_failure_is_reported() {
    let full = fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("cannot open /dev/full");
    let input = fixture("chain.json");
    let output = Command::new(binary_path())
        .arg(input.to_str().unwrap())
        .stdin(Stdio::null())
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot write stdout"), "stderr: {stderr}");
}

// ─── Flags ──────────────────────────────────────────────────────────────────

#[test]
fn test_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_file = dir.path().join("import_graph.txt");
    let input = fixture("mathlib_small.gexf");

    let stdout = run_ok(
        "",
        &[input.to_str().unwrap(), "-o", out_file.to_str().unwrap()],
    );
    assert!(stdout.is_empty(), "Nothing should go to stdout");

    let content = fs::read_to_string(&out_file).unwrap();
    let expected = fs::read_to_string(fixture("mathlib_small.expect.txt")).unwrap();
    assert_eq!(content, expected);
}

#[test]
fn test_config_file_overrides_topics() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("layout.json");
    fs::write(
        &config,
        r##"{"rootToken": "Mathlib", "groups": [{"prefix": "Order", "color": "#abcdef", "level": 10}]}"##,
    )
    .unwrap();

    let input = fixture("mathlib_small.gexf");
    let stdout = run_ok(
        "",
        &[input.to_str().unwrap(), "--config", config.to_str().unwrap()],
    );
    let defs = stdout
        .lines()
        .find(|l| l.starts_with("Mathlib.Order.Defs "))
        .unwrap();
    assert!(defs.contains(" #abcdef "), "line: {defs}");
    let init = stdout.lines().find(|l| l.starts_with("Mathlib.Init ")).unwrap();
    assert!(init.contains(" #202020 "), "line: {init}");
}

#[test]
fn test_stats_flag_writes_to_stderr() {
    let input = fixture("mathlib_small.gexf");
    let output = run("", &[input.to_str().unwrap(), "--stats"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("# of nodes: 8"), "stderr: {stderr}");
    assert!(stderr.contains("# of edges: 12"), "stderr: {stderr}");
    assert!(stderr.contains("max: 40.0 min: 5.0"), "stderr: {stderr}");
}

#[test]
fn test_version_flag() {
    let stdout = run_ok("", &["--version"]);
    assert!(stdout.starts_with("import-graph-layout "));
}
