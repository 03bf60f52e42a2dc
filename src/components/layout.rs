//! Session gate around the file browser.
//!
//! Loads `/me` once per page load. Without a session the user is redirected
//! to the sign-in page; other failures show a retry prompt.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::browser::Browser;
use crate::components::router::RouteContext;
use crate::models::{AppRoute, SessionState};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/layout.module.css");

#[component]
pub fn Layout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let load_session = move || {
        ctx.session.set(SessionState::Unknown);
        let api = ctx.api.get_value();
        spawn_local(async move {
            match api.current_user().await {
                Ok(user) => ctx.session.set(SessionState::SignedIn(user)),
                Err(err) if err.is_unauthorized() => {
                    ctx.session.set(SessionState::SignedOut);
                    route_ctx.redirect(AppRoute::SignIn);
                }
                Err(err) => {
                    dom::log_error(&format!("Failed to load session: {}", err));
                    ctx.session.set(SessionState::Failed(err.to_string()));
                }
            }
        });
    };

    // A fresh sign-in already filled the session
    if ctx.session.with_untracked(|s| s.user().is_none()) {
        load_session();
    }

    let signed_in = Memo::new(move |_| ctx.session.with(|s| s.user().is_some()));
    let failure = Memo::new(move |_| match ctx.session.get() {
        SessionState::Failed(message) => Some(message),
        _ => None,
    });

    view! {
        {move || {
            if signed_in.get() {
                view! { <Browser /> }.into_any()
            } else if let Some(message) = failure.get() {
                view! {
                    <div class=css::gate role="alert">
                        <p class=css::message>{message}</p>
                        <button class=css::retry on:click=move |_| load_session()>
                            "Retry"
                        </button>
                    </div>
                }
                .into_any()
            } else {
                view! { <p class=css::gate>"Loading..."</p> }.into_any()
            }
        }}
    }
}
