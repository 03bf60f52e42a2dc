//! Breadcrumb derivation for the path bar.

use crate::models::{BreadcrumbSegment, VirtualPath};

/// Convert a location into its navigation trail.
///
/// Each segment targets the path made of itself and everything above it;
/// only the last one is current. Root yields nothing, the fixed root label
/// is rendered by the view.
pub fn derive(path: &VirtualPath) -> Vec<BreadcrumbSegment> {
    let depth = path.depth();
    let mut target = String::with_capacity(path.as_str().len());

    path.segments()
        .enumerate()
        .map(|(idx, name)| {
            target.push('/');
            target.push_str(name);
            BreadcrumbSegment {
                label: name.to_string(),
                target: VirtualPath::new(&target),
                is_current: idx + 1 == depth,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        assert!(derive(&VirtualPath::root()).is_empty());
        assert!(derive(&VirtualPath::new("/")).is_empty());
    }

    #[test]
    fn test_three_levels() {
        let crumbs = derive(&VirtualPath::new("/a/b/c"));
        let labels: Vec<_> = crumbs.iter().map(|c| c.label.as_str()).collect();
        let targets: Vec<_> = crumbs.iter().map(|c| c.target.as_str()).collect();
        let current: Vec<_> = crumbs.iter().map(|c| c.is_current).collect();

        assert_eq!(labels, vec!["a", "b", "c"]);
        assert_eq!(targets, vec!["/a", "/a/b", "/a/b/c"]);
        assert_eq!(current, vec![false, false, true]);
    }

    #[test]
    fn test_single_segment_is_current() {
        let path = VirtualPath::new("/photos");
        let crumbs = derive(&path);
        assert_eq!(crumbs.len(), 1);
        assert!(crumbs[0].is_current);
        assert_eq!(crumbs[0].target, path);
    }

    #[test]
    fn test_trailing_slash_has_no_empty_segment() {
        let crumbs = derive(&VirtualPath::new("/photos/2020/"));
        assert_eq!(crumbs.len(), 2);
        assert!(crumbs.iter().all(|c| !c.label.is_empty()));
    }

    #[test]
    fn test_targets_reconstruct_path() {
        for raw in ["/a", "/a/b", "/x/y/z/w", "docs//2021/", "/with space/inner"] {
            let path = VirtualPath::new(raw);
            let crumbs = derive(&path);
            let rebuilt: String = crumbs.iter().map(|c| format!("/{}", c.label)).collect();
            assert_eq!(rebuilt, path.as_str());
            assert_eq!(crumbs.last().map(|c| &c.target), Some(&path));
        }
    }

    #[test]
    fn test_each_target_is_ancestor() {
        let path = VirtualPath::new("/a/b/c/d");
        for crumb in derive(&path) {
            assert!(crumb.target.contains(&path));
        }
    }
}
