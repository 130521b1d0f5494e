use super::*;

#[test]
fn default_uses_theme_key() {
    assert_eq!(ThemeConfig::default().storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(DEFAULT_STORAGE_KEY, "theme");
}

#[test]
fn custom_key_is_kept_verbatim() {
    let cfg = ThemeConfig { storage_key: "sc_theme".into() };
    assert_ne!(cfg, ThemeConfig::default());
    assert_eq!(cfg.storage_key, "sc_theme");
}
