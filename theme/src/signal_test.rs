use super::*;

#[test]
fn fixed_scheme_defaults_to_light() {
    assert!(!FixedScheme::default().prefers_dark());
}

#[test]
fn fixed_scheme_reports_latest_value() {
    let os = FixedScheme::new(false);
    os.set(true);
    assert!(os.prefers_dark());
    os.set(false);
    assert!(!os.prefers_dark());
}

#[test]
fn shared_handle_sees_updates() {
    let os = Rc::new(FixedScheme::new(false));
    let handle = Rc::clone(&os);
    os.set(true);
    assert!(handle.prefers_dark());
}
