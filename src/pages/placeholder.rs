//! Titled placeholder for pages that are not part of the shell.

use leptos::prelude::*;

/// Empty page body with a heading.
#[component]
pub fn PagePlaceholder(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">{title}</h1>
        </section>
    }
}
