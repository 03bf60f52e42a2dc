//! Sign-in page.
//!
//! Validates locally before sending; backend rejections land on the field
//! they name, or above the form when they name none.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::router::RouteContext;
use crate::config::{APP_NAME, MIN_PASSWORD_LEN};
use crate::core::validation::validate_sign_in;
use crate::core::ApiError;
use crate::models::{AppRoute, FieldErrors, SessionState, SignInInput};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sign_in.module.css");

const FIELDS: [&str; 2] = [SignInInput::EMAIL, SignInInput::PASSWORD];

/// First field, in form order, that has an error.
fn first_invalid_field(errors: &FieldErrors) -> Option<&'static str> {
    FIELDS.into_iter().find(|field| errors.get(field).is_some())
}

fn focus_first_invalid(errors: &FieldErrors) {
    if let Some(field) = first_invalid_field(errors) {
        dom::focus_element(&format!("#{}", field));
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let input = SignInInput {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(invalid) = validate_sign_in(&input) {
            focus_first_invalid(&invalid);
            errors.set(invalid);
            return;
        }

        errors.set(FieldErrors::new());
        busy.set(true);
        let api = ctx.api.get_value();
        spawn_local(async move {
            let result = api.sign_in(&input).await;
            busy.set(false);
            match result {
                Ok(user) => {
                    ctx.session.set(SessionState::SignedIn(user));
                    ctx.browse.reset();
                    ctx.browse.listing.update(|slot| slot.clear_cache());
                    route_ctx.redirect(AppRoute::Browse);
                }
                Err(ApiError::Validation(rejected)) => {
                    focus_first_invalid(&rejected);
                    errors.set(rejected);
                }
                Err(err) => {
                    dom::log_error(&format!("Sign-in failed: {}", err));
                    errors.set(FieldErrors::form(err.to_string()));
                }
            }
        });
    };

    let form_errors = move || {
        errors.with(|e| {
            e.unattached(&FIELDS)
                .map(|message| view! { <p class=css::formError role="alert">{message.to_string()}</p> })
                .collect_view()
        })
    };

    view! {
        <main class=css::page>
            <form class=css::card on:submit=on_submit novalidate=true>
                <h1 class=css::title>"Sign in"</h1>
                <p class=css::subtitle>{format!("to {}", APP_NAME)}</p>

                {form_errors}

                <FormField
                    id=SignInInput::EMAIL
                    label="Email"
                    kind="email"
                    placeholder="you@example.com"
                    value=email
                    errors=errors
                />
                <FormField
                    id=SignInInput::PASSWORD
                    label="Password"
                    kind="password"
                    placeholder=format!("At least {} characters", MIN_PASSWORD_LEN)
                    value=password
                    errors=errors
                />

                <button class=css::submit type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </main>
    }
}

/// Labelled input bound to a signal, showing its own error.
#[component]
fn FormField(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let message = Memo::new(move |_| errors.with(|e| e.message(id)));
    let error_id = format!("{}-error", id);

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        value.set(input.value());
        // Editing a field dismisses its error
        errors.maybe_update(|e| {
            let had = e.get(id).is_some();
            e.clear(id);
            had
        });
    };

    let input_class = move || {
        if message.with(|m| m.is_some()) {
            format!("{} {}", css::input, css::inputInvalid)
        } else {
            css::input.to_string()
        }
    };

    view! {
        <div class=css::field>
            <label class=css::label for=id>{label}</label>
            <input
                id=id
                name=id
                type=kind
                class=input_class
                placeholder=placeholder
                autocomplete=if kind == "password" { "current-password" } else { "email" }
                aria-invalid=move || message.with(|m| m.is_some()).to_string()
                aria-describedby=error_id.clone()
                prop:value=move || value.get()
                on:input=handle_input
            />
            <p class=css::fieldError id=error_id>
                {move || message.get().unwrap_or_default()}
            </p>
        </div>
    }
}
