//! Configuration integration tests

use risaplot::config::load_config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_full_config_round_trip() {
    let toml_content = r#"
[application]
log_level = "warn"

[host]
prog_id = "RISA3D.Application"
view_settle_ms = 200
activation_settle_ms = 600

[export]
output_root = "site-plots"
dry_run = true

[logging]
local_enabled = true
local_path = "logs"
local_rotation = "hourly"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.host.prog_id, "RISA3D.Application");
    assert_eq!(config.host.view_settle_ms, 200);
    assert_eq!(config.host.activation_settle_ms, 600);
    assert_eq!(config.export.output_root, "site-plots");
    assert!(config.export.dry_run);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_substitution_in_config() {
    std::env::set_var("RISAPLOT_IT_OUTPUT", "env-plots");

    let toml_content = r#"
[export]
output_root = "${RISAPLOT_IT_OUTPUT}"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.export.output_root, "env-plots");

    std::env::remove_var("RISAPLOT_IT_OUTPUT");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = load_config("definitely-not-here.toml").unwrap();
    assert_eq!(config.host.prog_id, "RISA3D.Application");
    assert_eq!(config.host.view_settle_ms, 500);
    assert_eq!(config.host.activation_settle_ms, 1000);
    assert!(!config.export.dry_run);
}

#[test]
fn test_unparseable_file_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[host\nprog_id = ").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(temp_file.path()).is_err());
}
