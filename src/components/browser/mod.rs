//! File browser UI components.
//!
//! Components:
//! - [`Browser`] - Main browser view, owns listing fetches
//! - [`Header`] - Title, hidden-files toggle, refresh, user
//! - [`Breadcrumbs`] - Clickable trail of the current location
//! - [`FileGrid`] - Folder and file cards

mod breadcrumbs;
#[allow(clippy::module_inception)]
mod browser;
mod file_grid;
mod header;

pub use breadcrumbs::Breadcrumbs;
pub use browser::Browser;
pub use file_grid::FileGrid;
pub use header::Header;
