//! Hash-based routing between the browser and the sign-in page.

use crate::utils::dom;

/// Application routes.
///
/// URL format: `#/` for the file browser, `#/sign-in` for the sign-in page.
/// The browse location itself is not part of the URL; it lives in
/// [`crate::core::PathState`] and is persisted separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    /// File browser: `#/` or empty hash
    #[default]
    Browse,
    /// Sign-in form: `#/sign-in`
    SignIn,
}

impl AppRoute {
    /// Parse a URL hash. Unknown hashes fall back to [`AppRoute::Browse`].
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "sign-in" => Self::SignIn,
            _ => Self::Browse,
        }
    }

    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Browse => "#/",
            Self::SignIn => "#/sign-in",
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Browse);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Browse);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Browse);
        assert_eq!(AppRoute::from_hash("#/sign-in"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_hash("/sign-in/"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_hash("#/about"), AppRoute::Browse);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Browse.to_hash(), "#/");
        assert_eq!(AppRoute::SignIn.to_hash(), "#/sign-in");
        assert_eq!(
            AppRoute::from_hash(AppRoute::SignIn.to_hash()),
            AppRoute::SignIn
        );
    }
}
