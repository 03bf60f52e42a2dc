//! Application router component.
//!
//! Handles hash routing between the file browser and the sign-in page.
//! Uses native hashchange events instead of leptos_router, so back/forward
//! buttons work without a server-side fallback.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::layout::Layout;
use crate::components::sign_in::SignInPage;
use crate::models::AppRoute;
use crate::utils::dom;

/// Current route, provided to every component below the router.
#[derive(Clone, Copy)]
pub struct RouteContext(pub RwSignal<AppRoute>);

impl RouteContext {
    /// Navigate without a history entry (redirects).
    pub fn redirect(&self, route: AppRoute) {
        dom::replace_hash(route.to_hash());
        self.0.set(route);
    }
}

/// Main application router.
///
/// - `#/` → file browser (behind the session gate)
/// - `#/sign-in` → sign-in form
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    provide_context(RouteContext(route));

    // Only re-render when the route actually changes
    let current = Memo::new(move |_| route.get());

    view! {
        {move || match current.get() {
            AppRoute::Browse => view! { <Layout /> }.into_any(),
            AppRoute::SignIn => view! { <SignInPage /> }.into_any(),
        }}
    }
}
