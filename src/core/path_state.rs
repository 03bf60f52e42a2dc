//! The current browse location.

use super::breadcrumbs;
use crate::models::{BreadcrumbSegment, VirtualPath};

/// Single source of truth for where the user is browsing.
///
/// Two logical states: at root (empty path) and at a folder. Every mutation
/// replaces the whole path and reports whether it actually changed, so the
/// view layer can skip notifying observers on no-ops.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathState {
    current: VirtualPath,
}

impl PathState {
    /// Start at root.
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a given location (e.g. restored from storage).
    pub fn at(path: VirtualPath) -> Self {
        Self { current: path }
    }

    pub fn current(&self) -> &VirtualPath {
        &self.current
    }

    pub fn is_at_root(&self) -> bool {
        self.current.is_root()
    }

    /// Go back to root. Idempotent.
    pub fn reset(&mut self) -> bool {
        self.replace(VirtualPath::root())
    }

    /// Enter a folder by its absolute path.
    ///
    /// The caller has already checked the entry is a directory. A target that
    /// normalizes to root is ignored.
    pub fn descend(&mut self, child: impl Into<VirtualPath>) -> bool {
        let child = child.into();
        if child.is_root() {
            return false;
        }
        self.replace(child)
    }

    /// Jump to a location from the breadcrumb trail.
    ///
    /// Jumping to the current location is a no-op.
    pub fn jump_to(&mut self, ancestor: impl Into<VirtualPath>) -> bool {
        self.replace(ancestor.into())
    }

    /// Trail for the current location.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbSegment> {
        breadcrumbs::derive(&self.current)
    }

    fn replace(&mut self, next: VirtualPath) -> bool {
        if self.current == next {
            return false;
        }
        self.current = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ListingSlot;
    use crate::models::FileEntry;

    #[test]
    fn test_starts_at_root() {
        let state = PathState::new();
        assert!(state.is_at_root());
        assert!(state.breadcrumbs().is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = PathState::at(VirtualPath::new("/photos"));
        assert!(state.reset());
        assert!(!state.reset());
        assert!(state.is_at_root());
    }

    #[test]
    fn test_descend_replaces_wholesale() {
        let mut state = PathState::new();
        assert!(state.descend("/photos"));
        assert!(state.descend("/music/jazz"));
        assert_eq!(state.current().as_str(), "/music/jazz");
    }

    #[test]
    fn test_descend_normalizes() {
        let mut state = PathState::new();
        state.descend("photos//2020/");
        assert_eq!(state.current().as_str(), "/photos/2020");
    }

    #[test]
    fn test_descend_to_root_is_noop() {
        let mut state = PathState::at(VirtualPath::new("/photos"));
        assert!(!state.descend(""));
        assert!(!state.descend("/"));
        assert_eq!(state.current().as_str(), "/photos");
    }

    #[test]
    fn test_jump_to_current_is_noop() {
        let mut state = PathState::at(VirtualPath::new("/a/b"));
        let before = state.clone();
        assert!(!state.jump_to("/a/b"));
        assert!(!state.jump_to("/a/b/"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_to_root() {
        let mut state = PathState::at(VirtualPath::new("/a/b"));
        assert!(state.jump_to(VirtualPath::root()));
        assert!(state.is_at_root());
    }

    #[test]
    fn test_jump_matches_direct_navigation() {
        let path = VirtualPath::new("/a/b/c");
        let mut browsed = PathState::at(path.clone());

        for crumb in browsed.clone().breadcrumbs() {
            let mut direct = PathState::new();
            direct.descend(crumb.target.clone());

            browsed.jump_to(crumb.target.clone());
            assert_eq!(browsed, direct);

            browsed = PathState::at(path.clone());
        }
    }

    #[test]
    fn test_descend_then_reset_ignores_pending_fetch() {
        let mut state = PathState::new();
        let mut slot = ListingSlot::new();

        state.descend("/photos");
        let pending = slot.begin(state.current().clone(), true);

        state.reset();
        slot.begin(state.current().clone(), true);

        let late = FileEntry {
            name: "photos".to_string(),
            path: VirtualPath::new("/photos"),
            size: 0,
            is_dir: true,
            file_type: None,
            mod_time: String::new(),
            files: Some(Vec::new()),
        };
        assert!(!slot.complete(pending, Ok(late)));
        assert!(state.is_at_root());
        assert!(slot.key().path.is_root());
        assert!(slot.listing().is_none());
    }

    #[test]
    fn test_photos_scenario() {
        let mut state = PathState::new();
        state.descend("/photos");
        state.descend("/photos/2020");

        let crumbs = state.breadcrumbs();
        let labels: Vec<_> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["photos", "2020"]);
        assert!(crumbs[1].is_current);

        let photos = crumbs
            .iter()
            .find(|c| c.label == "photos")
            .expect("photos crumb");
        assert!(state.jump_to(photos.target.clone()));
        assert_eq!(state.current().as_str(), "/photos");
    }
}
