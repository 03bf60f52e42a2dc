//! Decoding and validation of backend responses.
//!
//! Responses are parsed with serde and then checked against the listing
//! invariants. Nothing here panics; every failure is a [`DecodeError`].

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use super::error::DecodeError;
use crate::models::{ErrorResponse, FieldErrors, FileEntry, User};

/// Parse any JSON body.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(body)?)
}

/// Parse and validate a listing returned by `GET /files{path}`.
pub fn decode_listing(body: &str) -> Result<FileEntry, DecodeError> {
    let entry: FileEntry = decode(body)?;
    validate_listing(&entry)?;
    Ok(entry)
}

/// Check the children of a listing root.
///
/// Children must have a name and a non-root path, and paths must be unique.
pub fn validate_listing(entry: &FileEntry) -> Result<(), DecodeError> {
    let mut seen = HashSet::new();
    for child in entry.children() {
        if child.path.is_root() {
            return Err(DecodeError::InvalidPath(child.name.clone()));
        }
        if child.name.trim().is_empty() {
            return Err(DecodeError::EmptyName(child.path.clone()));
        }
        if !seen.insert(&child.path) {
            return Err(DecodeError::DuplicatePath(child.path.clone()));
        }
    }
    Ok(())
}

pub fn decode_user(body: &str) -> Result<User, DecodeError> {
    decode(body)
}

/// Extract field errors from a rejected request's body.
///
/// Returns `None` when the body is not the backend's error shape or names
/// no field.
pub fn decode_field_errors(body: &str) -> Option<FieldErrors> {
    decode::<ErrorResponse>(body)
        .ok()
        .map(|r| r.errors)
        .filter(|e| !e.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "name": "files", "path": "", "size": 0, "isDir": true, "modTime": "",
        "files": [
            {"name": "photos", "path": "/photos", "size": 4096, "isDir": true,
             "modTime": "2023-08-01T10:00:00Z"},
            {"name": "cat.jpg", "path": "/cat.jpg", "size": 2048, "isDir": false,
             "fileType": "image/jpeg", "modTime": "2023-08-01T10:00:00Z"}
        ]
    }"#;

    #[test]
    fn test_decode_listing() {
        let entry = decode_listing(LISTING).expect("valid listing");
        assert!(entry.path.is_root());
        assert_eq!(entry.children().len(), 2);
    }

    #[test]
    fn test_empty_root_as_sent_by_server() {
        // Root has no `path`, an empty folder has no `files`
        let body = r#"{"name":"files","size":4096,"isDir":true,
            "modTime":"2023-08-01T10:00:00+02:00"}"#;
        let entry = decode_listing(body).unwrap();
        assert!(entry.path.is_root());
        assert!(entry.children().is_empty());
    }

    #[test]
    fn test_root_with_empty_subfolder_as_sent_by_server() {
        let body = r#"{"name":"files","size":4096,"isDir":true,
            "modTime":"2023-08-01T10:00:00+02:00",
            "files":[
                {"path":"/empty","name":"empty","size":4096,"isDir":true,
                 "modTime":"2023-08-01T10:00:00+02:00"},
                {"path":"/README","name":"README","size":12,"isDir":false,
                 "modTime":"2023-08-01T10:00:00+02:00"}
            ]}"#;
        let entry = decode_listing(body).unwrap();
        assert!(entry.path.is_root());

        let empty = &entry.children()[0];
        assert!(empty.is_dir);
        assert!(empty.files.is_none());
        assert!(empty.children().is_empty());

        let readme = &entry.children()[1];
        assert_eq!(readme.file_type, None);
        assert_eq!(readme.path.as_str(), "/README");
    }

    #[test]
    fn test_child_missing_path_rejected() {
        // A defaulted path lands on root, which no child may have
        let body = r#"{"name":"files","size":0,"isDir":true,
            "files":[{"name":"stray","size":1,"isDir":false}]}"#;
        assert_eq!(
            decode_listing(body),
            Err(DecodeError::InvalidPath("stray".to_string()))
        );
    }

    #[test]
    fn test_relative_child_paths_are_normalized() {
        let body = r#"{"name": "files", "path": "/", "isDir": true,
            "files": [{"name": "docs", "path": "docs/", "isDir": true}]}"#;
        let entry = decode_listing(body).unwrap();
        assert_eq!(entry.children()[0].path.as_str(), "/docs");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(decode_listing("{"), Err(DecodeError::Json(_))));
        assert!(matches!(
            decode_listing(r#"{"path": "/x", "isDir": true}"#),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_negative_size_rejected() {
        let body = r#"{"name": "a", "path": "/a", "size": -1, "isDir": false}"#;
        assert!(matches!(decode_listing(body), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_child_without_path() {
        let body = r#"{"name": "files", "path": "", "isDir": true,
            "files": [{"name": "ghost", "path": "/", "isDir": false}]}"#;
        assert_eq!(
            decode_listing(body),
            Err(DecodeError::InvalidPath("ghost".to_string()))
        );
    }

    #[test]
    fn test_child_without_name() {
        let body = r#"{"name": "files", "path": "", "isDir": true,
            "files": [{"name": " ", "path": "/x", "isDir": false}]}"#;
        assert!(matches!(decode_listing(body), Err(DecodeError::EmptyName(_))));
    }

    #[test]
    fn test_duplicate_paths() {
        let body = r#"{"name": "files", "path": "", "isDir": true,
            "files": [{"name": "a", "path": "/a", "isDir": false},
                      {"name": "a", "path": "a/", "isDir": false}]}"#;
        assert!(matches!(
            decode_listing(body),
            Err(DecodeError::DuplicatePath(_))
        ));
    }

    #[test]
    fn test_decode_user() {
        let user = decode_user(r#"{"id": "42", "name": "Jane", "email": "jane@example.com"}"#)
            .unwrap();
        assert_eq!(user.name, "Jane");
    }

    #[test]
    fn test_decode_field_errors() {
        let errors =
            decode_field_errors(r#"{"errors": {"password": {"message": "too short"}}}"#).unwrap();
        assert_eq!(errors.message("password").as_deref(), Some("too short"));

        assert!(decode_field_errors(r#"{"errors": {}}"#).is_none());
        assert!(decode_field_errors("Internal Server Error").is_none());
    }
}
