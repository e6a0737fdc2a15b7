use p2h_kernel::config::{ConfigError, load_config};
use p2h_kernel::domain::config::LandingConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let cfg: LandingConfig = load_config(Some(dir.path().join("absent"))).unwrap();
    assert_eq!(cfg.registration.redirect_delay_ms, 700);
    assert_eq!(cfg.window.title, "Prep2Hire");
}

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("landing.toml"),
        r#"
[registration]
endpoint = "https://hooks.example.com/exec"
probe_on_start = false

[contact]
whatsapp_number = "919800000000"
"#,
    )
    .unwrap();

    let cfg: LandingConfig = load_config(Some(dir.path().join("landing"))).unwrap();
    assert_eq!(cfg.registration.endpoint, "https://hooks.example.com/exec");
    assert!(!cfg.registration.probe_on_start);
    assert_eq!(cfg.registration.redirect_delay_ms, 700);
    assert_eq!(cfg.contact.whatsapp_number, "919800000000");
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("broken.toml"), "[registration\nendpoint = ").unwrap();

    let err = load_config::<LandingConfig>(Some(dir.path().join("broken"))).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../config/landing");
    let cfg: LandingConfig = load_config(Some(path)).unwrap();
    let defaults = LandingConfig::default();

    assert_eq!(cfg.registration.endpoint, defaults.registration.endpoint);
    assert_eq!(cfg.registration.redirect_delay_ms, defaults.registration.redirect_delay_ms);
    assert_eq!(cfg.registration.probe_retry_ms, defaults.registration.probe_retry_ms);
    assert_eq!(cfg.contact.whatsapp_message, defaults.contact.whatsapp_message);
    assert_eq!(cfg.logging.level, "info");
    assert!(cfg.registration.client_id.is_none());
}
