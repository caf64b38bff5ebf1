use javelin_config::{init_tracing, LoggingConfig};

#[test]
fn init_tracing_installs_once() {
    let config = LoggingConfig {
        level: "javelin=debug".to_owned(),
        json: true,
        stderr: false,
    };

    assert!(init_tracing(&config));
    assert!(!init_tracing(&LoggingConfig::default()));
    tracing::debug!(target = "javelin.config", "tracing initialized");
}

#[test]
fn invalid_directives_fall_back_to_info() {
    let config = LoggingConfig {
        level: "javelin=notalevel".to_owned(),
        ..LoggingConfig::default()
    };
    // Must not panic; the filter degrades to a plain level.
    let _ = config.env_filter();
}
