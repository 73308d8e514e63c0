//! Preference persistence across sessions with file-backed storage.

use std::fs;

use folio_theme::{
    FileStorage, NoStorage, RootFlags, Theme, ThemeConfig, ThemeError, ThemeProvider,
};
use tempfile::TempDir;

#[test]
fn preference_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let provider = ThemeProvider::new(FileStorage::new(&path), RootFlags::new());
        assert_eq!(provider.current(), Theme::Dark);
        provider.toggle();
    }

    let provider = ThemeProvider::new(FileStorage::new(&path), RootFlags::new());
    assert_eq!(provider.current(), Theme::Light);
}

#[test]
fn record_is_plain_text_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");

    let provider = ThemeProvider::new(FileStorage::new(&path), RootFlags::new());
    provider.toggle();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["theme"], "light");
}

#[test]
fn corrupt_file_falls_back_and_recovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{{{").unwrap();

    let provider = ThemeProvider::new(FileStorage::new(&path), RootFlags::new());
    assert_eq!(provider.current(), Theme::Dark);

    provider.toggle();
    let reopened = ThemeProvider::new(FileStorage::new(&path), RootFlags::new());
    assert_eq!(reopened.current(), Theme::Light);
}

#[test]
fn unwritable_store_keeps_session_working() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "").unwrap();

    let root = RootFlags::new();
    let provider = ThemeProvider::new(FileStorage::new(blocker.join("prefs.json")), root.clone());
    provider.toggle();

    assert_eq!(provider.current(), Theme::Light);
    assert_eq!(root.active_theme(), Some(Theme::Light));
}

#[test]
fn pre_render_session_never_persists() {
    let config = ThemeConfig::default();
    let root = RootFlags::new();
    let provider = ThemeProvider::with_config(config, NoStorage, root.clone());

    assert_eq!(provider.current(), Theme::Dark);
    provider.toggle();
    assert_eq!(provider.current(), Theme::Light);
    assert_eq!(root.flags(), vec!["light"]);
}

#[test]
fn handle_fails_after_session_ends() {
    let handle = {
        let provider = ThemeProvider::new(NoStorage, RootFlags::new());
        provider.handle()
    };
    assert_eq!(handle.current(), Err(ThemeError::NotInitialized));
}
