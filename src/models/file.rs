use serde::{Deserialize, Serialize};

use super::VirtualPath;

// =============================================================================
// Listing Entries
// =============================================================================

/// One item of a directory listing, as returned by `GET /files{path}`.
///
/// The shape is recursive but population is shallow: only the entry at the
/// root of a fetched listing carries `files`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Display name
    pub name: String,
    /// Location of this entry on the server; omitted for the root listing
    #[serde(default)]
    pub path: VirtualPath,
    /// Size in bytes (meaningful for files only)
    #[serde(default)]
    pub size: u64,
    /// Directories can be browsed into, files cannot
    #[serde(default)]
    pub is_dir: bool,
    /// MIME-like type; `None` when unknown
    #[serde(default)]
    pub file_type: Option<String>,
    /// Last modification time, server-formatted
    #[serde(default)]
    pub mod_time: String,
    /// Children, present on the listing root only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileEntry>>,
}

impl FileEntry {
    /// Children of this listing (empty when not populated).
    pub fn children(&self) -> &[FileEntry] {
        self.files.as_deref().unwrap_or_default()
    }

    /// Hidden entries follow the dot-file convention.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn kind(&self) -> FileKind {
        if self.is_dir {
            return FileKind::Directory;
        }
        self.file_type
            .as_deref()
            .and_then(FileKind::from_mime)
            .unwrap_or_else(|| FileKind::from_name(&self.name))
    }
}

// =============================================================================
// File Kinds
// =============================================================================

/// Coarse classification used to pick a card icon or thumbnail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Image,
    Text,
    Pdf,
    Unknown,
}

impl FileKind {
    /// Classify from a MIME-like type. `None` if the type says nothing useful.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.to_ascii_lowercase();
        if mime.contains("image") {
            Some(Self::Image)
        } else if mime.contains("pdf") {
            Some(Self::Pdf)
        } else if mime.starts_with("text/") || mime.contains("json") || mime.contains("markdown") {
            Some(Self::Text)
        } else {
            None
        }
    }

    /// Classify from a file name extension.
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::Unknown;
        };
        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" => Self::Image,
            "pdf" => Self::Pdf,
            "txt" | "md" | "json" | "toml" | "yaml" | "yml" | "csv" | "log" => Self::Text,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, file_type: Option<&str>) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: VirtualPath::root().join(name),
            size: 10,
            is_dir: false,
            file_type: file_type.map(String::from),
            mod_time: String::new(),
            files: None,
        }
    }

    #[test]
    fn test_decode_camel_case() {
        let json = r#"{
            "name": "photos",
            "path": "/photos",
            "size": 4096,
            "isDir": true,
            "fileType": null,
            "modTime": "2023-08-01T10:00:00Z",
            "files": [
                {"name": "a.png", "path": "/photos/a.png", "size": 12, "isDir": false,
                 "fileType": "image/png", "modTime": "2023-08-01T10:00:00Z"}
            ]
        }"#;
        let entry: FileEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_dir);
        assert_eq!(entry.file_type, None);
        assert_eq!(entry.children().len(), 1);
        assert_eq!(entry.children()[0].file_type.as_deref(), Some("image/png"));
        assert!(entry.children()[0].files.is_none());
    }

    #[test]
    fn test_decode_omitted_fields() {
        let json = r#"{"name":"files","size":4096,"isDir":true,
            "modTime":"2023-08-01T10:00:00+02:00"}"#;
        let entry: FileEntry = serde_json::from_str(json).unwrap();
        assert!(entry.path.is_root());
        assert_eq!(entry.file_type, None);
        assert!(entry.files.is_none());
        assert_eq!(entry.kind(), FileKind::Directory);
    }

    #[test]
    fn test_kind_detection() {
        assert_eq!(file("a.bin", Some("image/jpeg")).kind(), FileKind::Image);
        assert_eq!(file("a.PNG", None).kind(), FileKind::Image);
        assert_eq!(file("paper.pdf", None).kind(), FileKind::Pdf);
        assert_eq!(file("notes", Some("text/plain")).kind(), FileKind::Text);
        assert_eq!(file("blob", Some("application/octet-stream")).kind(), FileKind::Unknown);
        assert_eq!(file("noext", None).kind(), FileKind::Unknown);
    }

    #[test]
    fn test_directory_kind_wins() {
        let mut dir = file("pics.png", Some("image/png"));
        dir.is_dir = true;
        assert_eq!(dir.kind(), FileKind::Directory);
    }

    #[test]
    fn test_hidden() {
        assert!(file(".env", None).is_hidden());
        assert!(!file("env", None).is_hidden());
    }
}
