//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing between the browser and sign-in (main entry point)
//! - [`layout`] - Session gate in front of the browser
//! - [`browser`] - File browser UI
//! - [`sign_in`] - Sign-in form
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;
pub mod layout;
pub mod router;
pub mod sign_in;

pub use router::AppRouter;
