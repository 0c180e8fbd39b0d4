//! Integration tests for the write-guard binary's exit status contract

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run the binary with an isolated HOME so no user config is picked up
fn run_hook(stdin: &str, args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_write-guard"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("WRITE_GUARD_DISABLED")
        .env_remove("WRITE_GUARD_WARN_ONLY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn write_payload(path: &str) -> String {
    format!(
        r#"{{"tool_name":"Write","tool_input":{{"file_path":"{}","content":"x"}}}}"#,
        path
    )
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_allow_is_silent_success() {
    let output = run_hook(&write_payload("src/main.go"), &[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_block_exits_two_with_message() {
    let output = run_hook(&write_payload("/app/.env.production"), &[]);
    assert_eq!(output.status.code(), Some(2));

    let message = stderr(&output);
    assert!(message.contains("WRITE BLOCKED"));
    assert!(message.contains("/app/.env.production"));
    assert!(message.contains("rename the file or disable this check"));
}

#[test]
fn test_missing_path_allowed() {
    let output = run_hook(r#"{"tool_name":"Write","tool_input":{}}"#, &[]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_empty_stdin_allowed() {
    let output = run_hook("", &[]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_malformed_input_fails_loud() {
    let output = run_hook("{not json", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to parse"));
}

#[test]
fn test_dry_run_does_not_block() {
    let output = run_hook(&write_payload("secrets.yml"), &["--dry-run"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("secrets.yml"));
}

#[test]
fn test_direct_path_check() {
    let output = run_hook("", &["--path", "id_rsa"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_hook("", &["--path=id_rsa_backup"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_strict_level_flag() {
    let output = run_hook(&write_payload("server.pem"), &[]);
    assert_eq!(output.status.code(), Some(0));

    let output = run_hook(&write_payload("server.pem"), &["--level", "strict"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_file_adds_patterns() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[[patterns]]\nid = \"tfstate\"\npattern = \"\\\\.tfstate$\"\nreason = \"Terraform state\"\n",
    )
    .unwrap();
    let config_arg = format!("--config={}", config_path.display());

    let output = run_hook(&write_payload("infra/prod.tfstate"), &[config_arg.as_str()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("tfstate"));

    // built-ins still apply
    let output = run_hook(&write_payload(".env"), &[config_arg.as_str()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_audit_log_written() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("audit.jsonl");
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[general]\naudit_log = true\naudit_path = \"{}\"\n",
            log_path.display()
        ),
    )
    .unwrap();

    let output = run_hook(
        &write_payload("secrets.json"),
        &["--config", config_path.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(2));

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("BLOCKED"));
    assert!(log.contains("secrets-file"));
}

#[test]
fn test_version_flag() {
    let output = run_hook("", &["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("write-guard "));
}

#[test]
fn test_trailing_separator_blocked() {
    for path in ["config/.env/", "/home/u/.ssh/id_rsa/", "deploy/secrets.json/"] {
        let output = run_hook(&write_payload(path), &[]);
        assert_eq!(output.status.code(), Some(2), "path: {}", path);
        assert!(stderr(&output).contains(path));
    }
}

#[test]
fn test_unopenable_audit_log_warns() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("plain-file");
    std::fs::write(&not_a_dir, "x").unwrap();

    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[general]\naudit_log = true\naudit_path = \"{}\"\n",
            not_a_dir.join("audit.jsonl").display()
        ),
    )
    .unwrap();

    let output = run_hook(
        &write_payload("src/main.go"),
        &["--config", config_path.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Failed to open audit log"));
}

#[test]
fn test_invalid_custom_pattern_skipped_alone() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[[patterns]]\nid = \"broken\"\npattern = \"(unclosed\"\n\n\
         [[patterns]]\nid = \"tfstate\"\npattern = \"\\\\.tfstate$\"\n",
    )
    .unwrap();

    let output = run_hook(
        &write_payload("infra/prod.tfstate"),
        &["--config", config_path.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(2));

    let message = stderr(&output);
    assert!(message.contains("broken"));
    assert!(message.contains("rule skipped"));
    assert!(message.contains("infra/prod.tfstate"));
}

#[test]
fn test_flag_without_value_warns() {
    let output = run_hook("", &["--path"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("--path requires a value"));

    let output = run_hook("", &["-l"]);
    assert!(stderr(&output).contains("-l requires a value"));
}

#[test]
fn test_print_config_parses() {
    let output = run_hook("", &["--print-config"]);
    assert_eq!(output.status.code(), Some(0));

    let printed = String::from_utf8_lossy(&output.stdout).to_string();
    let config: write_guard::Config = toml::from_str(&printed).unwrap();
    assert_eq!(config.general.mode, write_guard::Mode::Enforce);
}
