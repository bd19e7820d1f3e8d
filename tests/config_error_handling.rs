// tests/config_error_handling.rs

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use vmcli_wrapper::config::{load_and_validate, load_settings, ConfigFile};
use vmcli_wrapper::errors::VmcliError;
use vmcli_wrapper::exec::Vmcli;
use vmcli_wrapper::types::LineDecoding;

#[test]
fn test_directory_like_path_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[settings]
vmcli_path = "/opt/vmware/bin/"
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(VmcliError::ConfigError(msg)) => {
            assert!(msg.contains("vmcli_path"));
            assert!(msg.contains("/opt/vmware/bin/"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_parent_dir_path_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[settings]\nvmcli_path = \"/opt/..\"\n").unwrap();

    let result = load_and_validate(file.path());

    assert!(matches!(result, Err(VmcliError::ConfigError(_))));
}

#[test]
fn test_malformed_toml_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[settings\nvmcli_path = 3").unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(VmcliError::Toml(_)) => {}
        Err(e) => panic!("Expected Toml error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = load_settings(Some(&missing));

    match result {
        Err(VmcliError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        Err(e) => panic!("Expected Io error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_settings_flow_into_the_gateway() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[settings]
vmcli_path = "/usr/local/bin/vmcli"
kill_on_drop = true
stderr_decoding = "strict"
"#
    )
    .unwrap();

    let cfg: ConfigFile = load_and_validate(file.path()).unwrap();
    let vmcli = Vmcli::from_settings(&cfg.settings);

    assert_eq!(
        vmcli.locator().locate().unwrap(),
        Path::new("/usr/local/bin/vmcli")
    );
    assert!(vmcli.options().kill_on_drop);
    assert_eq!(vmcli.options().stderr_decoding, LineDecoding::Strict);
    assert_eq!(vmcli.options().stdout_decoding, LineDecoding::Lossy);
}
