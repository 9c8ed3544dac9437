//! End-to-end tests for the pkgroulette binary
//!
//! Each test puts a fake package manager script on an otherwise empty PATH,
//! so the real host package database is never touched.
//!
//! These tests verify:
//! - The chosen name is the only thing on stdout
//! - Listing failures and empty candidate sets exit non-zero with a diagnostic
//! - Exclusions, seeds and config files are honored

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use pkgroulette::{Backend, FixedIndex, PackageSource, Roulette};

const BIN: &str = env!("CARGO_BIN_EXE_pkgroulette");

/// Write an executable script called `name` that prints `stdout` and exits `code`
fn fake_manager(dir: &Path, name: &str, stdout: &str, code: i32) {
    let path = dir.join(name);
    // printf is a shell builtin, so the script works with no coreutils on PATH
    let script = format!("#!/bin/sh\nprintf '%s' '{}'\nexit {}\n", stdout, code);
    fs::write(&path, script).expect("write fake manager");
    let mut perms = fs::metadata(&path).expect("stat fake manager").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod fake manager");
}

fn run_with_path(path_dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env("PATH", path_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("run pkgroulette")
}

const APT_LISTING: &str = "\
Listing... Done
curl/stable 7.88 amd64 [installed]
wget/stable 1.21 amd64
";

// =============================================================================
// Binary Tests
// =============================================================================

#[test]
fn test_prints_only_uninstalled_candidate() {
    let dir = TempDir::new().unwrap();
    fake_manager(dir.path(), "apt", APT_LISTING, 0);

    let output = run_with_path(dir.path(), &["--backend", "apt"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "wget\n");
}

#[test]
fn test_backend_auto_detected_from_path() {
    let dir = TempDir::new().unwrap();
    fake_manager(dir.path(), "pacman", "extra htop 3.2.2-1\n", 0);

    let output = run_with_path(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "htop\n");
}

#[test]
fn test_seeded_runs_agree() {
    let dir = TempDir::new().unwrap();
    let listing: String = (0..100).map(|i| format!("pkg{}/stable 1.0 amd64\n", i)).collect();
    fake_manager(dir.path(), "apt", &listing, 0);

    let first = run_with_path(dir.path(), &["--backend", "apt", "--seed", "1234"]);
    let second = run_with_path(dir.path(), &["--backend", "apt", "--seed", "1234"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let stdout = String::from_utf8_lossy(&first.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("pkg"));
}

#[test]
fn test_all_installed_exits_with_empty_candidate_set() {
    let dir = TempDir::new().unwrap();
    fake_manager(
        dir.path(),
        "apt",
        "Listing... Done\ncurl/stable 7.88 amd64 [installed]\n",
        0,
    );

    let output = run_with_path(dir.path(), &["--backend", "apt"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No candidate packages"));
}

#[test]
fn test_failing_listing_exits_with_listing_unavailable() {
    let dir = TempDir::new().unwrap();
    fake_manager(dir.path(), "apt", "", 100);

    let output = run_with_path(dir.path(), &["--backend", "apt"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Package listing unavailable"));
}

#[test]
fn test_no_package_manager_found() {
    let dir = TempDir::new().unwrap();

    let output = run_with_path(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_exclude_flag_and_candidates_command() {
    let dir = TempDir::new().unwrap();
    fake_manager(
        dir.path(),
        "apt",
        "Listing... Done\na/stable 1 all\nb/stable 1 all\nc/stable 1 all\n",
        0,
    );

    let output = run_with_path(dir.path(), &["candidates", "--backend", "apt", "-x", "b"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a\nc\n");
}

#[test]
fn test_config_file_supplies_backend_and_exclusions() {
    let dir = TempDir::new().unwrap();
    fake_manager(
        dir.path(),
        "dnf",
        "Available Packages\ncowsay.noarch 3.7.0-7.fc38 fedora\nfortune-mod.x86_64 3.14-1.fc38 fedora\n",
        0,
    );
    let config = dir.path().join("pkgroulette.json");
    fs::write(&config, r#"{"backend": "dnf", "exclude": ["cowsay"]}"#).unwrap();

    let output = run_with_path(dir.path(), &["--config", config.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "fortune-mod\n");
}

#[test]
fn test_validate_command() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    fs::write(&good, r#"{"seed": 5}"#).unwrap();
    fs::write(&bad, r#"{"exclude": [""]}"#).unwrap();

    let output = run_with_path(dir.path(), &["validate", good.to_str().unwrap()]);
    assert!(output.status.success());

    let output = run_with_path(dir.path(), &["validate", bad.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

// =============================================================================
// Library Pipeline Tests
// =============================================================================

#[test]
fn test_forced_draw_over_fake_listing() {
    let dir = TempDir::new().unwrap();
    fake_manager(
        dir.path(),
        "apt",
        "Listing... Done\na/stable 1 all\nb/stable 1 all\nc/stable 1 all\n",
        0,
    );
    let script = dir.path().join("apt");

    // Run the fake directly instead of mutating this process's PATH
    let output = Command::new(&script).arg("list").output().unwrap();
    let raw = String::from_utf8_lossy(&output.stdout);
    let list = pkgroulette::parse_listing(Backend::Apt, raw.lines());
    assert_eq!(list.as_slice(), ["a", "b", "c"]);

    struct Listed(pkgroulette::CandidateList);
    impl PackageSource for Listed {
        fn backend(&self) -> Backend {
            Backend::Apt
        }
        fn candidates(&self) -> pkgroulette::Result<pkgroulette::CandidateList> {
            Ok(self.0.clone())
        }
    }

    let roulette = Roulette::new(Box::new(Listed(list)), vec![]);
    let mut out = Vec::new();
    assert_eq!(roulette.pick(&mut FixedIndex(1), &mut out).unwrap(), "b");
    assert_eq!(String::from_utf8(out).unwrap(), "b\n");
}
