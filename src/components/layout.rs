//! Page shell: header chrome, navigation and theme wiring around page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout owns the shell's single `ThemeResolver`. On mount it applies
//! the locally stored mode synchronously, then loads the session once and
//! re-seeds from the profile. The theme menu is the only other writer.
//! Every mutation updates the resolver and the `ThemeState` context in the
//! same callback; the remote profile write is spawned afterwards and never
//! awaited by the UI.
//!
//! The `dark` class on `<html>` is the only appearance flag. Shell styles key
//! off `html.dark`; no element below it carries its own dark class.

use leptos::prelude::*;
use theme::{ThemeConfig, ThemeMode};

use crate::components::nav::{DesktopNav, MobileNav, page_url};
use crate::components::theme_menu::ThemeMenu;
use crate::components::user_avatar::UserAvatar;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
use crate::state::theme::ThemeState;
use crate::util::dark_mode::browser_resolver;

/// Shell wrapped around every page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let theme_state = expect_context::<RwSignal<ThemeState>>();

    let resolver = StoredValue::new_local(browser_resolver(&ThemeConfig::default()));
    resolver.with_value(|r| theme_state.set(ThemeState::of(r)));

    #[cfg(feature = "hydrate")]
    {
        let auth = expect_context::<RwSignal<AuthState>>();
        leptos::task::spawn_local(async move {
            let session = theme::SessionLoader::new(crate::net::api::BrowserIdentity).load().await;
            auth.set(AuthState::loaded(session.clone()));
            resolver.update_value(|r| {
                r.initialize(session);
                theme_state.set(ThemeState::of(r));
            });
        });
    }

    let on_select = Callback::new(move |mode: ThemeMode| {
        let sync = resolver
            .try_update_value(|r| {
                let sync = r.change_mode(mode);
                theme_state.set(ThemeState::of(r));
                sync
            })
            .flatten();
        #[cfg(feature = "hydrate")]
        {
            if let Some(sync) = sync {
                leptos::task::spawn_local(sync.dispatch(crate::net::api::BrowserIdentity));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = sync;
        }
    });

    view! {
        <div class="shell">
            <header class="shell-header shell-header--desktop">
                <div class="shell-header__inner">
                    <a href=page_url("Feed") class="shell-header__brand">
                        <span class="shell-header__logo">"SC"</span>
                        <span class="shell-header__name">"SocialConnect"</span>
                    </a>
                    <DesktopNav/>
                    <div class="shell-header__actions">
                        <NotificationBell/>
                        <ThemeMenu on_select/>
                        <UserAvatar/>
                    </div>
                </div>
            </header>

            <header class="shell-header shell-header--mobile">
                <a href=page_url("Feed") class="shell-header__brand">
                    <span class="shell-header__logo">"SC"</span>
                    <span class="shell-header__name">"SocialConnect"</span>
                </a>
                <div class="shell-header__actions">
                    <NotificationBell/>
                    <UserAvatar/>
                </div>
            </header>

            <MobileNav/>

            <main class="shell__main">{children()}</main>
        </div>
    }
}

/// Bell button with the unread badge.
#[component]
fn NotificationBell() -> impl IntoView {
    view! {
        <button class="btn btn--icon shell-header__bell" title="Notifications">
            "\u{1F514}"
            <span class="shell-header__badge">"3"</span>
        </button>
    }
}
