use super::*;

#[test]
fn appearance_flag_starts_light() {
    let root = AppearanceFlag::new();
    assert_eq!(root.appearance(), Appearance::Light);
    assert_eq!(root.flips(), 0);
}

#[test]
fn setting_same_appearance_twice_flips_once() {
    let root = AppearanceFlag::new();
    root.set_appearance(Appearance::Dark);
    root.set_appearance(Appearance::Dark);
    assert_eq!(root.appearance(), Appearance::Dark);
    assert_eq!(root.flips(), 1);
}

#[test]
fn setting_initial_light_is_not_a_flip() {
    let root = AppearanceFlag::new();
    root.set_appearance(Appearance::Light);
    assert_eq!(root.flips(), 0);
}

#[test]
fn rc_handle_forwards_to_inner_root() {
    let root = Rc::new(AppearanceFlag::new());
    let handle: Rc<AppearanceFlag> = Rc::clone(&root);
    handle.set_appearance(Appearance::Dark);
    assert!(root.appearance().is_dark());
}
