//! Settings menu offering light, dark and system appearance.

#[cfg(test)]
#[path = "theme_menu_test.rs"]
mod theme_menu_test;

use leptos::prelude::*;
use theme::ThemeMode;

use crate::state::theme::ThemeState;

/// Menu label for a mode.
pub fn mode_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Light mode",
        ThemeMode::Dark => "Dark mode",
        ThemeMode::System => "System",
    }
}

/// Glyph shown next to the label.
pub fn mode_glyph(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "\u{2600}",
        ThemeMode::Dark => "\u{263E}",
        ThemeMode::System => "\u{1F5A5}",
    }
}

/// Settings button with a dropdown of theme modes.
///
/// Selecting an item closes the menu and hands the mode to `on_select`.
#[component]
pub fn ThemeMenu(on_select: Callback<ThemeMode>) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let open = RwSignal::new(false);

    let on_toggle = move |_| open.update(|o| *o = !*o);

    view! {
        <div class="theme-menu">
            <button class="btn btn--icon theme-menu__trigger" title="Settings" on:click=on_toggle>
                "\u{2699}"
            </button>
            <Show when=move || open.get()>
                <ul class="theme-menu__content" role="menu">
                    {ThemeMode::ALL
                        .into_iter()
                        .map(|mode| {
                            let on_click = move |_| {
                                open.set(false);
                                on_select.run(mode);
                            };
                            view! {
                                <li
                                    class="theme-menu__item"
                                    role="menuitemradio"
                                    aria-checked=move || (theme.get().mode == mode).to_string()
                                    on:click=on_click
                                >
                                    <span class="theme-menu__glyph">{mode_glyph(mode)}</span>
                                    {mode_label(mode)}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}
