use super::*;
use crate::signal::FixedScheme;

// =============================================================
// ThemeMode tokens
// =============================================================

#[test]
fn theme_mode_default_is_system() {
    assert_eq!(ThemeMode::default(), ThemeMode::System);
}

#[test]
fn theme_mode_tokens_parse_back_to_same_mode() {
    for mode in ThemeMode::ALL {
        assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
    }
}

#[test]
fn theme_mode_parse_rejects_unknown_token() {
    assert_eq!(
        "purple".parse::<ThemeMode>(),
        Err(ThemeError::UnknownMode("purple".into()))
    );
}

#[test]
fn theme_mode_parse_is_case_sensitive() {
    assert!("Dark".parse::<ThemeMode>().is_err());
    assert!(" dark".parse::<ThemeMode>().is_err());
}

#[test]
fn theme_mode_display_matches_token() {
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
}

#[test]
fn theme_mode_serde_uses_lowercase_token() {
    let json = serde_json::to_string(&ThemeMode::System).unwrap();
    assert_eq!(json, "\"system\"");
    let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(mode, ThemeMode::Light);
}

// =============================================================
// Appearance resolution
// =============================================================

#[test]
fn explicit_modes_ignore_os_signal() {
    let os = FixedScheme::new(true);
    assert_eq!(ThemeMode::Light.appearance(&os), Appearance::Light);
    os.set(false);
    assert_eq!(ThemeMode::Dark.appearance(&os), Appearance::Dark);
}

#[test]
fn system_mode_requeries_signal_each_time() {
    let os = FixedScheme::new(true);
    assert_eq!(ThemeMode::System.appearance(&os), Appearance::Dark);
    os.set(false);
    assert_eq!(ThemeMode::System.appearance(&os), Appearance::Light);
}

#[test]
fn appearance_from_dark_flag() {
    assert!(Appearance::from_dark(true).is_dark());
    assert!(!Appearance::from_dark(false).is_dark());
    assert_eq!(Appearance::default(), Appearance::Light);
}
