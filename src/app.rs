//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::placeholder::PagePlaceholder;
use crate::state::{auth::AuthState, theme::ThemeState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The hosting server builds with the `ssr` feature and renders this
/// document (for example through `leptos_axum::render_app_to_stream`); the
/// WASM bundle built with `hydrate` then takes it over via `hydrate()`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and theme contexts and mounts every page inside the
/// shared [`Layout`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let theme = RwSignal::new(ThemeState::default());

    provide_context(auth);
    provide_context(theme);

    view! {
        <Stylesheet id="leptos" href="/pkg/socialconnect.css"/>
        <Title text="SocialConnect"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <PagePlaceholder title="Home"/> }/>
                    <Route path=StaticSegment("feed") view=|| view! { <PagePlaceholder title="Home"/> }/>
                    <Route path=StaticSegment("search") view=|| view! { <PagePlaceholder title="Discover"/> }/>
                    <Route path=StaticSegment("create") view=|| view! { <PagePlaceholder title="Create"/> }/>
                    <Route path=StaticSegment("messages") view=|| view! { <PagePlaceholder title="Messages"/> }/>
                    <Route path=StaticSegment("profile") view=|| view! { <PagePlaceholder title="Profile"/> }/>
                </Routes>
            </Layout>
        </Router>
    }
}
