//! Browser header component.
//!
//! Shows the app name, the current folder, and the listing actions.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, ROOT_LABEL};

stylance::import_crate_style!(css, "src/components/browser/header.module.css");

/// Browser header with title and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let browse = ctx.browse;

    let title = Memo::new(move |_| {
        browse
            .path
            .with(|p| p.current().name().unwrap_or(ROOT_LABEL).to_string())
    });
    let user_name = Signal::derive(move || ctx.session.with(|s| s.display_name()));
    let show_hidden = Signal::derive(move || browse.show_hidden.get());

    let hidden_title = move || {
        if show_hidden.get() {
            "Hide hidden files"
        } else {
            "Show hidden files"
        }
    };

    view! {
        <header class=css::header>
            <span class=css::appName>{APP_NAME}</span>

            <h1 class=css::title>{move || title.get()}</h1>

            <div class=css::actions>
                <button
                    class=css::action
                    title=hidden_title
                    aria-label=hidden_title
                    aria-pressed=move || show_hidden.get().to_string()
                    on:click=move |_| browse.toggle_hidden()
                >
                    {move || {
                        let icon = if show_hidden.get() { ic::EYE } else { ic::EYE_SLASH };
                        view! { <Icon icon=icon /> }
                    }}
                </button>
                <button
                    class=css::action
                    title="Refresh"
                    aria-label="Refresh"
                    on:click=move |_| browse.refresh()
                >
                    <Icon icon=ic::REFRESH />
                </button>
                <span class=css::user>
                    <Icon icon=ic::USER />
                    <span>{user_name}</span>
                </span>
            </div>
        </header>
    }
}
