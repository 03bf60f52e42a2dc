//! Normalized browse location.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized, slash-delimited location on the file server.
///
/// # Path Convention
///
/// - Root: empty string `""`
/// - Folder: `"/photos"`, `"/photos/2020"`
/// - Always a single leading slash, never a trailing one
/// - No empty, `.` or `..` segments
///
/// Every constructor normalizes, so a `VirtualPath` value is valid by
/// construction. Backend input like `"photos/2020/"` or `"//photos"` is
/// accepted and normalized on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VirtualPath(String);

impl VirtualPath {
    /// The root location (empty string).
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Normalize a raw path string.
    ///
    /// Backslashes count as separators, `..` pops a segment (never above
    /// root), and empty or `.` segments are dropped.
    pub fn new(raw: &str) -> Self {
        let mut parts: Vec<&str> = Vec::new();
        for part in raw.trim().split(['/', '\\']) {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                _ => parts.push(part),
            }
        }

        let mut path = String::with_capacity(raw.len() + 1);
        for part in parts {
            path.push('/');
            path.push_str(part);
        }
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Segment names from the top down. Root has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').skip(1)
    }

    /// Number of segments (0 for root).
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Last segment name, `None` for root.
    pub fn name(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(_, name)| name)
    }

    /// Parent location. Root is its own parent.
    #[cfg(test)]
    pub fn parent(&self) -> Self {
        match self.0.rsplit_once('/') {
            Some((parent, _)) => Self(parent.to_string()),
            None => Self::root(),
        }
    }

    /// Append a child name (normalized, so `"a/b"` adds two segments).
    #[cfg(test)]
    pub fn join(&self, name: &str) -> Self {
        Self::new(&format!("{}/{}", self.0, name))
    }

    /// Whether `self` is `other` or one of its ancestors.
    #[cfg(test)]
    pub fn contains(&self, other: &VirtualPath) -> bool {
        self.is_root()
            || other.0 == self.0
            || (other.0.starts_with(&self.0) && other.0.as_bytes().get(self.0.len()) == Some(&b'/'))
    }
}

impl From<String> for VirtualPath {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for VirtualPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<VirtualPath> for String {
    fn from(path: VirtualPath) -> Self {
        path.0
    }
}

impl AsRef<str> for VirtualPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
