//! Core logic of the file browser.
//!
//! This module provides:
//! - [`PathState`] and [`breadcrumbs::derive`] - the browse location and its trail
//! - [`ListingSlot`] - listing state that ignores stale fetches
//! - [`ApiClient`] - typed REST client over a pluggable transport
//! - [`decode`] and [`validation`] - response decoding and form checks

mod api;
pub mod breadcrumbs;
pub mod decode;
pub mod error;
mod listing;
mod path_state;
pub mod validation;

pub use api::{static_url_for, ApiClient};
pub use error::ApiError;
pub use listing::ListingSlot;
pub use path_state::PathState;
