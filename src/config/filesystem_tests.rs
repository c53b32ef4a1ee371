use tempfile::TempDir;

use super::*;

#[test]
fn config_dir_is_named_after_the_crate() {
    if let Some(dir) = RealFileSystem.config_dir() {
        assert!(dir.ends_with("class-responses"));
    }
}

#[test]
fn directory_is_not_a_config_candidate() {
    let temp = TempDir::new().unwrap();
    let dir_named_like_config = temp.path().join(".class-responses.toml");
    std::fs::create_dir(&dir_named_like_config).unwrap();

    assert!(!RealFileSystem.exists(&dir_named_like_config));
}

#[test]
fn reads_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[chart]\nmax_rows = 5\n").unwrap();

    assert!(RealFileSystem.exists(&path));
    assert_eq!(
        RealFileSystem.read_to_string(&path).unwrap(),
        "[chart]\nmax_rows = 5\n"
    );
}
