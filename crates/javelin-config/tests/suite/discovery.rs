use javelin_config::{discover_config_path, load_for_workspace, JavelinConfig};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn prefers_root_file_over_dot_directory() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".javelin")).unwrap();
    std::fs::write(dir.path().join(".javelin/config.toml"), "").unwrap();

    assert_eq!(
        discover_config_path(dir.path()),
        Some(dir.path().join(".javelin/config.toml"))
    );

    std::fs::write(dir.path().join("javelin.toml"), "").unwrap();
    assert_eq!(
        discover_config_path(dir.path()),
        Some(dir.path().join("javelin.toml"))
    );
}

#[test]
fn workspace_without_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let (config, path) = load_for_workspace(dir.path()).unwrap();
    assert_eq!(path, None);
    assert_eq!(config, JavelinConfig::default());
}

#[test]
fn workspace_config_is_loaded() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("javelin.toml"),
        "[resolver]\nbuiltin_jdk = false\n",
    )
    .unwrap();

    let (config, path) = load_for_workspace(dir.path()).unwrap();
    assert_eq!(path, Some(dir.path().join("javelin.toml")));
    assert!(!config.resolver.builtin_jdk);
}
