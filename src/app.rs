//! Root application module.
//!
//! Contains the main App component, the AppContext definition, BrowseState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::AppRouter;
use crate::config::STORE_KEY;
use crate::core::{ApiClient, ListingSlot, PathState};
use crate::models::{SessionState, VirtualPath};
use crate::utils::{dom, storage};

// ============================================================================
// BrowseState
// ============================================================================

/// Browse state managed with Leptos signals.
///
/// Wraps [`PathState`] so navigation goes through its normalizing operations.
/// No-op navigations do not notify observers, so the listing is only
/// refetched when the location really changes.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct BrowseState {
    /// Current location.
    pub path: RwSignal<PathState>,
    /// Whether dot-files are listed.
    pub show_hidden: RwSignal<bool>,
    /// Listing for the current location.
    pub listing: RwSignal<ListingSlot>,
    /// Bumped to refetch the current listing.
    pub reload: RwSignal<u64>,
}

/// What is kept in localStorage between visits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedBrowse {
    pub path: VirtualPath,
    pub show_hidden: bool,
}

impl Default for PersistedBrowse {
    fn default() -> Self {
        // The server skips dot-files unless asked for them
        Self {
            path: VirtualPath::root(),
            show_hidden: false,
        }
    }
}

impl BrowseState {
    /// Creates browse state from a saved snapshot.
    pub fn new(saved: PersistedBrowse) -> Self {
        Self {
            path: RwSignal::new(PathState::at(saved.path)),
            show_hidden: RwSignal::new(saved.show_hidden),
            listing: RwSignal::new(ListingSlot::new()),
            reload: RwSignal::new(0),
        }
    }

    /// Creates browse state from localStorage, or at root.
    pub fn restore() -> Self {
        Self::new(storage::load(STORE_KEY).unwrap_or_default())
    }

    /// Current location (tracked).
    pub fn current(&self) -> VirtualPath {
        self.path.with(|p| p.current().clone())
    }

    pub fn reset(&self) {
        self.path.maybe_update(|p| p.reset());
    }

    pub fn descend(&self, child: VirtualPath) {
        self.path.maybe_update(|p| p.descend(child));
    }

    pub fn jump_to(&self, target: VirtualPath) {
        self.path.maybe_update(|p| p.jump_to(target));
    }

    pub fn toggle_hidden(&self) {
        self.show_hidden.update(|v| *v = !*v);
    }

    /// Refetch the current listing.
    pub fn refresh(&self) {
        self.reload.update(|n| *n += 1);
    }

    /// Save location and hidden flag to localStorage.
    pub fn persist(&self) {
        let snapshot = PersistedBrowse {
            path: self.path.with_untracked(|p| p.current().clone()),
            show_hidden: self.show_hidden.get_untracked(),
        };
        if let Err(e) = storage::save(STORE_KEY, &snapshot) {
            dom::log_warn(&format!("Failed to persist browse state: {}", e));
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. Components never reach for globals, so the
/// pieces stay testable in isolation.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Browse location and listing.
    pub browse: BrowseState,

    /// Signed-in user, if known.
    pub session: RwSignal<SessionState>,

    /// REST client for the file server.
    pub api: StoredValue<ApiClient>,
}

impl AppContext {
    /// Creates the context, restoring the last location from storage.
    pub fn new() -> Self {
        Self {
            browse: BrowseState::restore(),
            session: RwSignal::new(SessionState::default()),
            api: StoredValue::new(ApiClient::from_config()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #b91c1c; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #b91c1c; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.5rem 1.5rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_browse_defaults() {
        let saved: PersistedBrowse = serde_json::from_str("{}").unwrap();
        assert_eq!(saved, PersistedBrowse::default());
        assert!(!saved.show_hidden);
        assert!(saved.path.is_root());
    }

    #[test]
    fn test_persisted_browse_normalizes_path() {
        let saved: PersistedBrowse =
            serde_json::from_str(r#"{"path": "photos/2020/", "show_hidden": true}"#).unwrap();
        assert_eq!(saved.path.as_str(), "/photos/2020");
        assert!(saved.show_hidden);
    }
}
