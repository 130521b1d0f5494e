use super::*;

// =============================================================
// page_url
// =============================================================

#[test]
fn page_url_lowercases_name() {
    assert_eq!(page_url("Feed"), "/feed");
    assert_eq!(page_url("Messages"), "/messages");
}

#[test]
fn page_url_dashes_spaces() {
    assert_eq!(page_url("Edit Profile"), "/edit-profile");
}

// =============================================================
// NAV_ITEMS
// =============================================================

#[test]
fn nav_items_in_header_order() {
    let titles: Vec<_> = NAV_ITEMS.iter().map(|i| i.title).collect();
    assert_eq!(titles, ["Home", "Discover", "Create", "Messages"]);
}

#[test]
fn discover_links_to_search_page() {
    assert_eq!(NAV_ITEMS[1].url(), "/search");
}

#[test]
fn active_item_matches_exact_path() {
    let home = NAV_ITEMS[0];
    assert!(home.is_active("/feed"));
    assert!(!home.is_active("/feed/123"));
    assert!(!home.is_active("/"));
}

// =============================================================
// nav_class
// =============================================================

#[test]
fn nav_class_adds_active_modifier() {
    assert_eq!(nav_class("desktop-nav__link", true), "desktop-nav__link desktop-nav__link--active");
    assert_eq!(nav_class("desktop-nav__link", false), "desktop-nav__link");
}
