use super::VirtualPath;

/// One clickable ancestor in the navigation trail.
///
/// Derived from the current [`VirtualPath`] on every change; never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbSegment {
    /// Segment name shown to the user
    pub label: String,
    /// Location a click navigates to
    pub target: VirtualPath,
    /// The terminal segment (rendered disabled)
    pub is_current: bool,
}
