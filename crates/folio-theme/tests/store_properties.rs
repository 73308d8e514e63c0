//! Property tests for initialization and toggling.

use folio_theme::{MemoryStorage, RootFlags, Theme, ThemeProvider};
use proptest::prelude::*;

fn stored_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("light".to_string())),
        Just(Some("dark".to_string())),
        any::<String>().prop_map(Some),
    ]
}

fn provider_for(value: &Option<String>) -> (ThemeProvider, MemoryStorage, RootFlags) {
    let storage = match value {
        Some(v) => MemoryStorage::with_record("theme", v),
        None => MemoryStorage::new(),
    };
    let root = RootFlags::new();
    let provider = ThemeProvider::new(storage.clone(), root.clone());
    (provider, storage, root)
}

proptest! {
    #[test]
    fn initial_theme_is_stored_value_or_dark(value in stored_value()) {
        let (provider, _, _) = provider_for(&value);
        let expected = match value.as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        };
        prop_assert_eq!(provider.current(), expected);
    }

    #[test]
    fn toggling_twice_restores_start(value in stored_value()) {
        let (provider, _, _) = provider_for(&value);
        let start = provider.current();
        provider.toggle();
        provider.toggle();
        prop_assert_eq!(provider.current(), start);
    }

    #[test]
    fn record_and_flag_match_after_every_toggle(
        value in stored_value(),
        toggles in 1usize..12,
    ) {
        let (provider, storage, root) = provider_for(&value);
        let start = provider.current();

        for _ in 0..toggles {
            provider.toggle();
            let theme = provider.current();
            prop_assert_eq!(storage.get("theme"), Some(theme.as_str().to_string()));
            prop_assert_eq!(root.active_theme(), Some(theme));
            prop_assert_eq!(root.flags().len(), 1);
        }

        let expected = if toggles % 2 == 0 { start } else { start.toggled() };
        prop_assert_eq!(provider.current(), expected);
    }
}

#[test]
fn empty_store_toggle_scenario() {
    let (provider, storage, root) = provider_for(&None);
    assert_eq!(provider.current(), Theme::Dark);

    provider.toggle();
    assert_eq!(provider.current(), Theme::Light);
    assert_eq!(storage.get("theme").as_deref(), Some("light"));
    assert_eq!(root.flags(), vec!["light"]);
}

#[test]
fn light_store_double_toggle_scenario() {
    let (provider, storage, _) = provider_for(&Some("light".to_string()));
    assert_eq!(provider.current(), Theme::Light);

    provider.toggle();
    provider.toggle();
    assert_eq!(provider.current(), Theme::Light);
    assert_eq!(storage.get("theme").as_deref(), Some("light"));
}

#[test]
fn invalid_store_value_scenario() {
    let (provider, _, _) = provider_for(&Some("blue".to_string()));
    assert_eq!(provider.current(), Theme::Dark);
}
