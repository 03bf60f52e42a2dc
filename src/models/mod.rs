//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`VirtualPath`] - Normalized browse location
//! - [`FileEntry`], [`FileKind`] - Directory listings from the file server
//! - [`BreadcrumbSegment`] - Navigation trail entries
//! - [`User`], [`SessionState`], [`SignInInput`], [`FieldErrors`] - Accounts and sign-in
//! - [`AppRoute`] - Hash-based navigation

mod breadcrumb;
mod file;
mod path;
mod route;
mod user;

pub use breadcrumb::BreadcrumbSegment;
pub use file::{FileEntry, FileKind};
pub use path::VirtualPath;
pub use route::AppRoute;
pub use user::{ErrorResponse, FieldError, FieldErrors, SessionState, SignInInput, User};
