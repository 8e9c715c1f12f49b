// Contract test for `cppcfg pybind`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cppcfg(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cppcfg").unwrap();
    cmd.current_dir(dir)
        .env_remove("CPPCFG_COMPILER")
        .env_remove("CPPCFG_PYTHON_INCLUDE")
        .env_remove("CPPCFG_PYBIND11_INCLUDE")
        .env_remove("RUST_LOG")
        .env("CPPCFG_CONFIG_DIR", dir.join("user-config"));
    cmd
}

#[test]
fn test_pybind_include_order() {
    let temp_dir = TempDir::new().unwrap();

    cppcfg(temp_dir.path())
        .args([
            "pybind",
            "--compiler",
            "/cl.exe",
            "--python-include",
            "/py/include",
            "--pybind11-include",
            "/pybind/include",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("pybind profile"));

    let content =
        fs::read_to_string(temp_dir.path().join(".vscode/c_cpp_properties.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        json["configurations"][0]["includePath"],
        serde_json::json!(["${workspaceFolder}/**", "/pybind/include", "/py/include"])
    );
    assert_eq!(json["configurations"][0]["compilerPath"], "/cl.exe");
}

#[test]
fn test_pybind_reports_first_missing_field() {
    let temp_dir = TempDir::new().unwrap();
    let empty_settings = temp_dir.path().join("empty.toml");
    fs::write(&empty_settings, "").unwrap();

    cppcfg(temp_dir.path())
        .arg("pybind")
        .arg("--compiler")
        .arg("/cl.exe")
        .arg("--config")
        .arg(&empty_settings)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("missing python include path"));

    cppcfg(temp_dir.path())
        .arg("pybind")
        .arg("--compiler")
        .arg("/cl.exe")
        .arg("--python-include")
        .arg("/py/include")
        .arg("--config")
        .arg(&empty_settings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing pybind11 include path"));

    assert!(!temp_dir.path().join(".vscode").exists());
}

#[test]
fn test_pybind_overwrites_previous_standard_file() {
    let temp_dir = TempDir::new().unwrap();

    cppcfg(temp_dir.path())
        .args(["standard", "--compiler", "/old/cl.exe"])
        .assert()
        .success();

    cppcfg(temp_dir.path())
        .env("CPPCFG_COMPILER", "/new/cl.exe")
        .env("CPPCFG_PYTHON_INCLUDE", "/py/include")
        .env("CPPCFG_PYBIND11_INCLUDE", "/pybind/include")
        .arg("pybind")
        .assert()
        .success();

    let content =
        fs::read_to_string(temp_dir.path().join(".vscode/c_cpp_properties.json")).unwrap();
    assert!(!content.contains("/old/cl.exe"));
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["configurations"][0]["compilerPath"], "/new/cl.exe");
    assert_eq!(json["configurations"].as_array().unwrap().len(), 1);
}

#[test]
fn test_pybind_unwritable_target_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "plain file").unwrap();

    cppcfg(temp_dir.path())
        .args([
            "pybind",
            "--compiler",
            "/cl.exe",
            "--python-include",
            "/py/include",
            "--pybind11-include",
            "/pybind/include",
            "--dir",
            "blocker",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Filesystem error"));
}
