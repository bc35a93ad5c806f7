use super::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let cfg = Config::load_from(dir.path().join("hapspec.toml"));

    assert_eq!(cfg.spec_file, "homekit-spec.md");
    assert_eq!(cfg.max_results, 10);
    assert_eq!(cfg.excerpt_lines, 20);
}

#[test]
fn test_config_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "spec_file = \"docs/hap.md\"\nmax_results = 3").unwrap();

    let cfg = Config::load_from(file.path());

    assert_eq!(cfg.spec_file, "docs/hap.md");
    assert_eq!(cfg.max_results, 3);
    assert_eq!(cfg.excerpt_lines, 20, "Unset keys keep their default");
    assert_eq!(cfg.options().excerpt_lines, 20);
}

#[test]
fn test_invalid_config_falls_back() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_results = \"many\"").unwrap();

    let cfg = Config::load_from(file.path());

    assert_eq!(cfg.max_results, 10);
}

#[test]
fn test_empty_config_matches_default() {
    let file = NamedTempFile::new().unwrap();

    let cfg = Config::load_from(file.path());
    let default = Config::default();

    assert_eq!(cfg.spec_file, default.spec_file);
    assert_eq!(cfg.max_results, default.max_results);
    assert_eq!(cfg.excerpt_lines, default.excerpt_lines);
}
