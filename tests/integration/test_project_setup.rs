// End-to-end scenarios through the library API

use cppcfg::models::properties::WORKSPACE_WILDCARD;
use cppcfg::{CppCfgError, CppConfig, CppConfigAuto, CppProperties, ProfileKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn read_back(dir: &Path) -> CppProperties {
    let content = fs::read_to_string(dir.join(".vscode").join("c_cpp_properties.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_extended_profile_example() {
    let config = CppConfig::new(
        Some("/cl.exe".to_string()),
        Some("/py/include".to_string()),
        Some("/pybind/include".to_string()),
    );

    let props = config.build_pybind().unwrap();

    assert_eq!(
        props.include_paths(),
        [WORKSPACE_WILDCARD, "/pybind/include", "/py/include"]
    );
}

#[test]
fn test_plain_profile_with_empty_compiler_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = CppConfig::new(Some(String::new()), None, None);

    assert!(matches!(
        config.build_standard(),
        Err(CppCfgError::InvalidConfiguration(_))
    ));
    assert!(config.config_standard(Some(temp_dir.path())).is_err());
    assert!(!temp_dir.path().join(".vscode").exists());
}

#[test]
fn test_second_write_replaces_first() {
    let temp_dir = TempDir::new().unwrap();
    let pybind = CppConfig::default()
        .with_compiler("C:/first/cl.exe")
        .with_python_include("C:/py/include")
        .with_pybind11_include("C:/pybind/include");
    pybind.config_pybind(Some(temp_dir.path())).unwrap();

    let standard = CppConfig::default().with_compiler("C:/second/cl.exe");
    standard.config_standard(Some(temp_dir.path())).unwrap();

    assert_eq!(read_back(temp_dir.path()), standard.build_standard().unwrap());
}

#[test]
fn test_existing_vscode_directory_is_reused() {
    let temp_dir = TempDir::new().unwrap();
    let vscode = temp_dir.path().join(".vscode");
    fs::create_dir(&vscode).unwrap();
    fs::write(vscode.join("settings.json"), "{}").unwrap();

    CppConfigAuto::new().config_standard(Some(temp_dir.path())).unwrap();

    assert_eq!(fs::read_to_string(vscode.join("settings.json")).unwrap(), "{}");
    assert_eq!(
        &read_back(temp_dir.path()),
        CppConfigAuto::new().properties(ProfileKind::Standard)
    );
}

#[test]
fn test_preset_and_custom_builders_agree_on_shape() {
    let auto = CppConfigAuto::new().properties(ProfileKind::Pybind);
    let custom = CppConfig::default()
        .with_compiler(auto.compiler_path())
        .with_python_include(auto.include_paths()[2].clone())
        .with_pybind11_include(auto.include_paths()[1].clone())
        .build_pybind()
        .unwrap();

    assert_eq!(&custom, auto);
}

#[test]
fn test_file_matches_rendered_text_byte_for_byte() {
    let temp_dir = TempDir::new().unwrap();
    let config = CppConfig::default().with_compiler("C:/cl.exe");

    let path = config.config(ProfileKind::Standard, Some(temp_dir.path())).unwrap();

    let expected = config.build_standard().unwrap().to_pretty_json().unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), expected);
}
