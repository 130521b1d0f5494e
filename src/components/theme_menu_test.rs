use super::*;

#[test]
fn labels_match_menu_copy() {
    assert_eq!(mode_label(ThemeMode::Light), "Light mode");
    assert_eq!(mode_label(ThemeMode::Dark), "Dark mode");
    assert_eq!(mode_label(ThemeMode::System), "System");
}

#[test]
fn every_mode_has_a_distinct_glyph() {
    let glyphs: Vec<_> = ThemeMode::ALL.into_iter().map(mode_glyph).collect();
    for (i, a) in glyphs.iter().enumerate() {
        for b in &glyphs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
