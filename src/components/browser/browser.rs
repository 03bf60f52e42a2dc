//! Main browser component.
//!
//! Fetches the listing whenever the location changes. Navigation is
//! optimistic: the path changes first, and a failed fetch shows a banner
//! scoped to this view while the path stays where the user put it.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{Breadcrumbs, FileGrid, Header};
use crate::app::AppContext;
use crate::components::router::RouteContext;
use crate::config::ROOT_LABEL;
use crate::models::{AppRoute, SessionState};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");
    let browse = ctx.browse;

    // Fetch on location, hidden flag or reload changes
    Effect::new(move |_| {
        let path = browse.current();
        let show_hidden = browse.show_hidden.get();
        browse.reload.track();

        let Some(ticket) = browse
            .listing
            .try_update(|slot| slot.begin(path.clone(), show_hidden))
        else {
            return;
        };

        let api = ctx.api.get_value();
        spawn_local(async move {
            let result = api.list_files(&path, show_hidden).await;

            if let Err(err) = &result {
                dom::log_warn(&format!("Listing '{}' failed: {}", path, err));
                if err.is_unauthorized() {
                    ctx.session.set(SessionState::SignedOut);
                    route_ctx.redirect(AppRoute::SignIn);
                    return;
                }
            }

            browse.listing.maybe_update(|slot| {
                let accepted = slot.complete(ticket, result);
                if !accepted {
                    dom::log_warn(&format!("Dropped stale listing for '{}'", path));
                }
                accepted
            });
        });
    });

    // Remember where we are
    Effect::new(move |_| {
        browse.path.track();
        browse.show_hidden.track();
        browse.persist();
    });

    let error = Memo::new(move |_| {
        browse
            .listing
            .with(|slot| slot.error().map(|e| e.to_string()))
    });
    let at_root = Memo::new(move |_| browse.path.with(|p| p.is_at_root()));

    view! {
        <div class=css::browser>
            <Header />
            <Breadcrumbs />

            {move || error.get().map(|message| view! {
                <div class=css::alert role="alert">
                    <strong class=css::alertTitle>"Message: "</strong>
                    <span>{message}</span>
                    <Show when=move || !at_root.get()>
                        <button class=css::alertAction on:click=move |_| browse.reset()>
                            {format!("Back to {}", ROOT_LABEL)}
                        </button>
                    </Show>
                </div>
            })}

            <FileGrid />
        </div>
    }
}
