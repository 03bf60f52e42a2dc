//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch`] - Network requests with timeout and credentials
//! - [`dom`] - Window, hash navigation, console logging
//! - [`storage`] - localStorage persistence
//! - [`format`] - Size and timestamp formatting

pub mod dom;
pub mod fetch;
pub mod format;
pub mod storage;
