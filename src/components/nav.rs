//! Primary navigation: desktop header links and the mobile bottom bar.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// One entry in the primary navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Label shown to the user.
    pub title: &'static str,
    /// Page name the link targets (see [`page_url`]).
    pub page: &'static str,
}

impl NavItem {
    pub fn url(self) -> String {
        page_url(self.page)
    }

    /// Whether this item is the page at `pathname`.
    pub fn is_active(self, pathname: &str) -> bool {
        pathname == self.url()
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { title: "Home", page: "Feed" },
    NavItem { title: "Discover", page: "Search" },
    NavItem { title: "Create", page: "Create" },
    NavItem { title: "Messages", page: "Messages" },
];

/// URL for a named page: `/` + lowercased name, spaces as dashes.
pub fn page_url(page: &str) -> String {
    format!("/{}", page.to_lowercase().replace(' ', "-"))
}

fn nav_class(base: &'static str, active: bool) -> String {
    if active { format!("{base} {base}--active") } else { base.to_owned() }
}

/// Horizontal link row in the desktop header.
#[component]
pub fn DesktopNav() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="desktop-nav">
            {NAV_ITEMS
                .into_iter()
                .map(|item| {
                    let class = move || nav_class("desktop-nav__link", item.is_active(&pathname.get()));
                    view! {
                        <a href=item.url() class=class>
                            {item.title}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}

/// Fixed bottom bar shown on narrow screens.
#[component]
pub fn MobileNav() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="mobile-nav">
            {NAV_ITEMS
                .into_iter()
                .map(|item| {
                    let class = move || nav_class("mobile-nav__link", item.is_active(&pathname.get()));
                    view! {
                        <a href=item.url() class=class>
                            <span class="mobile-nav__label">{item.title}</span>
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
