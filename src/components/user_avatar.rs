//! Header avatar linking to the profile page.

use leptos::prelude::*;

use crate::components::nav::page_url;
use crate::state::auth::{AuthState, AvatarSlot};

/// Profile picture with an initial fallback.
///
/// Holds an empty placeholder while the session loads and renders nothing
/// for anonymous visitors.
#[component]
pub fn UserAvatar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match auth.with(AuthState::avatar) {
        AvatarSlot::Pending => view! { <span class="user-avatar user-avatar--pending"></span> }.into_any(),
        AvatarSlot::Hidden => ().into_any(),
        AvatarSlot::Picture { src, label } => {
            let title = label.clone();
            view! {
                <a href=page_url("Profile") class="user-avatar" title=title>
                    <img class="user-avatar__image" src=src alt=label/>
                </a>
            }
            .into_any()
        }
        AvatarSlot::Initial { initial, label } => view! {
            <a href=page_url("Profile") class="user-avatar" title=label>
                <span class="user-avatar__fallback">{initial.to_string()}</span>
            </a>
        }
        .into_any(),
    }
}
