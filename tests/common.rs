use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

pub fn pathfinder() -> Command {
    cargo_bin_cmd!("pathfinder")
}

/// Initialize a store in `dir`
pub fn init_store(dir: &Path) {
    pathfinder()
        .current_dir(dir)
        .arg("init")
        .assert()
        .success();
}

/// Store with nodes 1(A), 2(B), 3(C) and edges 1->2 w5, 1->3 w10, 2->3 w3
pub fn init_triangle(dir: &Path) {
    init_store(dir);
    for name in ["A", "B", "C"] {
        pathfinder()
            .current_dir(dir)
            .args(["node", "create", name])
            .assert()
            .success();
    }
    for (src, dst, weight) in [("1", "2", "5"), ("1", "3", "10"), ("2", "3", "3")] {
        pathfinder()
            .current_dir(dir)
            .args(["edge", "create", src, dst, weight])
            .assert()
            .success();
    }
}

/// Run a command with `--format json` and parse stdout
#[allow(dead_code)]
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = pathfinder()
        .current_dir(dir)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
