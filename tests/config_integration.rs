use dirtree::config::Config;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn parse_complete_config_file() {
    let file = write_config(
        r#"
[tree]
ignored_dirs = ["target", "dist"]
max_depth = 4
follow_symlinks = false
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.tree.ignored_dirs, vec!["target", "dist"]);
    assert_eq!(config.tree.max_depth, Some(4));
    assert!(!config.tree.follow_symlinks);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let file = write_config(
        r#"
[tree]
max_depth = 2
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert_eq!(config.tree.max_depth, Some(2));
    // Default values
    assert!(config.tree.ignored_dirs.contains(&"node_modules".to_string()));
    assert!(config.tree.follow_symlinks);
}

#[test]
fn empty_config_file_is_default() {
    let file = write_config("");
    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.tree.ignored_dirs.len(), 5);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let file = write_config("this is not valid toml [[[");
    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn path_in_ignore_list_returns_error() {
    let file = write_config(
        r#"
[tree]
ignored_dirs = ["build/output"]
"#,
    );
    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn missing_explicit_config_returns_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/dirtree.toml")));
    assert!(result.is_err());
}
