#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gha_scaleset_metrics::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
exporter:
  listen: "0.0.0.0:8080"
  subsytem: "gha_controller" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.exporter.listen, "0.0.0.0:8080");
    assert_eq!(cfg.exporter.subsystem, "gha_controller");
}

#[test]
fn custom_subsystem_and_listen() {
    let ok = r#"
version: 1
exporter:
  listen: "127.0.0.1:9100"
  subsystem: "arc_staging"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.exporter.subsystem, "arc_staging");
    assert_eq!(cfg.exporter.listen_addr().unwrap().port(), 9100);
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn bad_listen_address() {
    let bad = r#"
version: 1
exporter:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn bad_subsystem() {
    for subsystem in ["", "9lives", "gha-controller", "gha controller"] {
        let bad = format!("version: 1\nexporter:\n  subsystem: {subsystem:?}\n");
        let err = config::load_from_str(&bad).expect_err("must fail");
        assert_eq!(err.code().as_str(), "INVALID_CONFIG", "subsystem {subsystem:?}");
    }
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("/nonexistent/gha-scaleset.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}
