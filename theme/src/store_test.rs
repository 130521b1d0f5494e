use super::*;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write("QuotaExceededError".into()))
    }
}

fn prefs(store: MemoryStore) -> PreferenceStore<MemoryStore> {
    PreferenceStore::new(store, &ThemeConfig::default())
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.set("k", "v").unwrap();
    assert_eq!(other.get("k").as_deref(), Some("v"));
}

#[test]
fn memory_store_missing_key_is_none() {
    assert_eq!(MemoryStore::new().get("theme"), None);
}

// =============================================================
// PreferenceStore read
// =============================================================

#[test]
fn read_defaults_to_system_when_never_written() {
    assert_eq!(prefs(MemoryStore::new()).read(), ThemeMode::System);
}

#[test]
fn read_degrades_unrecognized_token_to_system() {
    let store = MemoryStore::new().with_entry("theme", "blorp");
    assert_eq!(prefs(store).read(), ThemeMode::System);
}

#[test]
fn read_degrades_legacy_boolean_token_to_system() {
    let store = MemoryStore::new().with_entry("theme", "true");
    assert_eq!(prefs(store).read(), ThemeMode::System);
}

#[test]
fn read_returns_stored_dark() {
    let store = MemoryStore::new().with_entry("theme", "dark");
    assert_eq!(prefs(store).read(), ThemeMode::Dark);
}

#[test]
fn read_uses_configured_key() {
    let store = MemoryStore::new().with_entry("sc_theme", "light");
    let config = ThemeConfig { storage_key: "sc_theme".into() };
    let prefs = PreferenceStore::new(store, &config);
    assert_eq!(prefs.key(), "sc_theme");
    assert_eq!(prefs.read(), ThemeMode::Light);
}

// =============================================================
// PreferenceStore write
// =============================================================

#[test]
fn write_then_read_round_trips_every_mode() {
    let store = MemoryStore::new();
    let prefs = prefs(store.clone());
    for mode in ThemeMode::ALL {
        prefs.write(mode);
        assert_eq!(prefs.read(), mode);
        assert_eq!(store.get("theme").as_deref(), Some(mode.as_str()));
    }
}

#[test]
fn write_failure_is_swallowed() {
    let prefs = PreferenceStore::new(BrokenStore, &ThemeConfig::default());
    prefs.write(ThemeMode::Dark);
    assert_eq!(prefs.read(), ThemeMode::System);
}
