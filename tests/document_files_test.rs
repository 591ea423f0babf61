//! Settings file discovery, error propagation and write options.

use dayzcfg::{
    ConfigDocument, ConfigError, DocumentOptions, FileKind, LineEnding, SaveOptions, backup_path,
    find_settings_file,
};
use std::fs;
use tempfile::TempDir;

fn setup(dir: &TempDir, settings_name: &str) -> std::path::PathBuf {
    let profile = dir.path().join("Hero.DayZProfile");
    fs::write(&profile, "playerName=\"Hero\";\nversion=1;\n").unwrap();
    fs::write(dir.path().join(settings_name), "vsync=1;\nfov=75.5;\n").unwrap();
    profile
}

#[test]
fn test_open_finds_settings_file_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let profile = setup(&dir, "DayZ.CFG");
    fs::write(dir.path().join("other.cfg"), "vsync=0;\n").unwrap();

    let doc = ConfigDocument::open(&profile).unwrap();
    assert_eq!(doc.settings().path(), dir.path().join("DayZ.CFG"));
    assert!(doc.get_bool("vsync").unwrap());
    assert_eq!(doc.player_name().unwrap(), "Hero");
}

#[test]
fn test_open_ignores_directories_and_other_stems() {
    let dir = TempDir::new().unwrap();
    let profile = setup(&dir, "dayz_backup.cfg");
    fs::create_dir(dir.path().join("dayz.cfg")).unwrap();

    let err = ConfigDocument::open(&profile).unwrap_err();
    assert!(matches!(err, ConfigError::SettingsFileNotFound { .. }));
}

#[test]
fn test_open_with_custom_settings_name() {
    let dir = TempDir::new().unwrap();
    let profile = setup(&dir, "DayZ_x64.ini");

    let options = DocumentOptions::new().with_settings_file("dayz_x64", "ini");
    let doc = ConfigDocument::open_with_options(&profile, options).unwrap();
    assert_eq!(doc.get_double("fov").unwrap(), 75.5);
}

#[test]
fn test_find_settings_file_in_missing_dir_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = find_settings_file(dir.path().join("nope"), "dayz", "cfg").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_missing_profile_is_io_error() {
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("dayz.cfg");
    fs::write(&settings, "vsync=1;\n").unwrap();

    let err = ConfigDocument::load(dir.path().join("missing.DayZProfile"), &settings).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("missing.DayZProfile")),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_missing_settings_is_io_error() {
    let dir = TempDir::new().unwrap();
    let profile = setup(&dir, "unused.txt");

    let err = ConfigDocument::load(&profile, dir.path().join("dayz.cfg")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_save_with_backup() {
    let dir = TempDir::new().unwrap();
    let profile = setup(&dir, "dayz.cfg");

    let options = DocumentOptions::new().with_save_options(SaveOptions::new().with_backup(true));
    let mut doc = ConfigDocument::open_with_options(&profile, options).unwrap();
    doc.set_player_name("Survivor").unwrap();
    doc.set_bool("vsync", false).unwrap();
    doc.save().unwrap();

    assert_eq!(
        fs::read_to_string(backup_path(&profile, ".bak")).unwrap(),
        "playerName=\"Hero\";\nversion=1;\n"
    );
    assert_eq!(
        fs::read_to_string(&profile).unwrap(),
        "playerName=\"Survivor\";\nversion=1;\n"
    );
    let settings = dir.path().join("dayz.cfg");
    assert_eq!(
        fs::read_to_string(backup_path(&settings, ".bak")).unwrap(),
        "vsync=1;\nfov=75.5;\n"
    );
    assert_eq!(fs::read_to_string(&settings).unwrap(), "vsync=0;\nfov=75.5;\n");
}

#[test]
fn test_save_settings_only() {
    let dir = TempDir::new().unwrap();
    let profile = setup(&dir, "dayz.cfg");

    let mut doc = ConfigDocument::open(&profile).unwrap();
    doc.set_player_name("Survivor").unwrap();
    doc.set_double("fov", 60.0).unwrap();
    doc.save_settings().unwrap();

    assert_eq!(
        fs::read_to_string(&profile).unwrap(),
        "playerName=\"Hero\";\nversion=1;\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("dayz.cfg")).unwrap(),
        "vsync=1;\nfov=60;\n"
    );
}

#[test]
fn test_atomic_save_keeps_crlf() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("Hero.DayZProfile");
    let settings = dir.path().join("dayz.cfg");
    fs::write(&profile, "playerName=\"Hero\";\r\n").unwrap();
    fs::write(&settings, "vsync=1;\r\n").unwrap();

    let mut doc = ConfigDocument::load(&profile, &settings).unwrap();
    assert_eq!(doc.profile().line_ending(), LineEnding::CrLf);
    doc.set_player_name("Survivor").unwrap();
    doc.save_with(&SaveOptions::new().with_atomic(true)).unwrap();

    assert_eq!(fs::read_to_string(&profile).unwrap(), "playerName=\"Survivor\";\r\n");
    assert_eq!(fs::read_to_string(&settings).unwrap(), "vsync=1;\r\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_demotions_are_exposed() {
    let dir = TempDir::new().unwrap();
    let profile = dir.path().join("Hero.DayZProfile");
    let settings = dir.path().join("dayz.cfg");
    fs::write(&profile, "version=1;\nplayerName\n").unwrap();
    fs::write(&settings, "gamma=bright;\n").unwrap();

    let doc = ConfigDocument::load(&profile, &settings).unwrap();
    let demotions: Vec<_> = doc.demotions().map(|(file, d)| (file, d.line)).collect();
    assert_eq!(demotions, vec![(FileKind::Profile, 2), (FileKind::Settings, 1)]);

    doc.save().unwrap();
    assert_eq!(fs::read_to_string(&profile).unwrap(), "version=1;\nplayerName\n");
    assert_eq!(fs::read_to_string(&settings).unwrap(), "gamma=bright;\n");
}
