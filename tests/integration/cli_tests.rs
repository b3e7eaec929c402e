//! Integration tests for the CLI binary.
//!
//! Drives the `cprov` binary end to end over both backends.
//!
//! This test is registered as a [[test]] in the crypto-provider-cli crate
//! so that CARGO_BIN_EXE_cprov is available.

use std::path::Path;
use std::process::{Command, Output};

/// Get a Command pointing to the `cprov` binary with a clean backend env.
fn cprov() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cprov"));
    cmd.env_remove("CRYPTO_PROVIDER_BACKEND");
    cmd
}

fn run(args: &[&str]) -> Output {
    cprov()
        .args(args)
        .output()
        .expect("failed to execute cprov")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn assert_ok(output: &Output) {
    assert!(
        output.status.success(),
        "cprov should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is utf-8")
}

#[test]
fn cli_responds_to_help() {
    let output = run(&["--help"]);
    assert_ok(&output);
    let text = stdout(&output);
    assert!(
        text.contains("cprov") || text.contains("Usage"),
        "cprov --help output should contain usage information, got: {text}"
    );
}

#[test]
fn cli_responds_to_version() {
    let output = run(&["--version"]);
    assert_ok(&output);
    assert!(stdout(&output).contains("0.1"));
}

#[test]
fn cli_exits_with_error_on_unknown_flag() {
    let output = run(&["--nonexistent-flag"]);
    assert!(!output.status.success());
}

#[test]
fn cli_rejects_unknown_backend() {
    let output = run(&["--backend", "openssl", "info"]);
    assert!(!output.status.success());
}

#[test]
fn cli_info_reports_backend() {
    let output = run(&["--backend", "null", "info"]);
    assert_ok(&output);
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["backend"], "null");
    assert_eq!(report["secure"], false);
    assert_eq!(report["minimum_key_size"], 64);
    assert_eq!(report["rng_optimal_seed_size"], 32);

    let output = run(&["info"]);
    assert_ok(&output);
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["backend"], "dalek");
    assert_eq!(report["minimum_key_size"], 256);
}

#[test]
fn cli_backend_from_environment() {
    let output = cprov()
        .env("CRYPTO_PROVIDER_BACKEND", "null")
        .arg("info")
        .output()
        .expect("failed to execute cprov");
    assert_ok(&output);
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["backend"], "null");
}

#[test]
fn cli_keygen_sign_verify_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let key = dir.path().join("alice.key");
    let public = dir.path().join("alice.pub");

    for backend in ["null", "dalek"] {
        let output = run(&[
            "--backend",
            backend,
            "keygen",
            "--seed",
            "alice",
            "--out",
            path_str(&key),
            "--public-out",
            path_str(&public),
        ]);
        assert_ok(&output);
        assert!(key.exists());
        assert!(public.exists());

        let signature = run(&[
            "--backend",
            backend,
            "sign",
            "--key",
            path_str(&key),
            "--message",
            "hello",
        ]);
        assert_ok(&signature);
        let signature = stdout(&signature);

        let valid = run(&[
            "--backend",
            backend,
            "verify",
            "--key",
            path_str(&public),
            "--message",
            "hello",
            "--signature",
            &signature,
        ]);
        assert_ok(&valid);
        assert_eq!(stdout(&valid), "valid");

        let tampered = run(&[
            "--backend",
            backend,
            "verify",
            "--key",
            path_str(&public),
            "--message",
            "hello!",
            "--signature",
            &signature,
        ]);
        assert!(!tampered.status.success());
    }
}

#[test]
fn cli_seeded_keygen_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.key");
    let second = dir.path().join("second.key");

    for out in [&first, &second] {
        assert_ok(&run(&["keygen", "--seed", "bob", "--out", path_str(out)]));
    }
    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());

    let a = run(&["pubkey", "--key", path_str(&first)]);
    let b = run(&["pubkey", "--key", path_str(&second)]);
    assert_ok(&a);
    assert_eq!(stdout(&a), stdout(&b));
}

#[test]
fn cli_sign_missing_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[
        "sign",
        "--key",
        path_str(&dir.path().join("missing.key")),
        "--message",
        "hello",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not found"));
}

#[test]
fn cli_hash_matches_sha256() {
    let output = run(&["hash", "--data", "abc"]);
    assert_ok(&output);
    assert_eq!(
        stdout(&output),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn cli_hash_file_matches_data() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("input.txt");
    std::fs::write(&file, "some input").unwrap();

    let from_file = run(&["--backend", "null", "hash", path_str(&file)]);
    let from_data = run(&["--backend", "null", "hash", "--data", "some input"]);
    assert_ok(&from_file);
    assert_eq!(stdout(&from_file), stdout(&from_data));
}

#[test]
fn cli_dh_parties_agree() {
    for backend in ["null", "dalek"] {
        let output = run(&["--backend", backend, "dh"]);
        assert_ok(&output);
        let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(report["agreed"], true);
    }
}

#[test]
fn cli_random_int_prime_bits() {
    let output = run(&["random-int", "--bits", "64", "--prime", "--count", "3"]);
    assert_ok(&output);
    let values: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(values.len(), 3);
    for value in values {
        let n: u64 = value.parse().unwrap();
        assert_eq!(64 - n.leading_zeros(), 64);
        assert_eq!(n % 2, 1);
    }
}

#[test]
fn cli_random_int_range() {
    let output = run(&["random-int", "--min", "10", "--max", "0x14", "--count", "20"]);
    assert_ok(&output);
    let values: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    for value in values {
        let n: i64 = value.parse().unwrap();
        assert!((10..=20).contains(&n));
    }

    let empty = run(&["random-int", "--min", "5", "--max", "4"]);
    assert!(!empty.status.success());
}

#[test]
fn cli_verify_with_private_key_file() {
    let dir = tempfile::tempdir().unwrap();
    let key = dir.path().join("carol.key");

    for backend in ["null", "dalek"] {
        assert_ok(&run(&[
            "--backend",
            backend,
            "keygen",
            "--seed",
            "carol",
            "--out",
            path_str(&key),
        ]));
        let signature = run(&[
            "--backend",
            backend,
            "--base64",
            "sign",
            "--key",
            path_str(&key),
            "--message",
            "hi",
        ]);
        assert_ok(&signature);

        let valid = run(&[
            "--backend",
            backend,
            "verify",
            "--key",
            path_str(&key),
            "--private",
            "--message",
            "hi",
            "--signature",
            &stdout(&signature),
        ]);
        assert_ok(&valid);
    }
}

#[test]
fn cli_null_key_rejected_by_dalek_backend() {
    let dir = tempfile::tempdir().unwrap();
    let key = dir.path().join("null.key");
    assert_ok(&run(&[
        "--backend",
        "null",
        "keygen",
        "--seed",
        "dave",
        "--out",
        path_str(&key),
    ]));

    let output = run(&[
        "--backend",
        "dalek",
        "sign",
        "--key",
        path_str(&key),
        "--message",
        "hello",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid format"));
}
