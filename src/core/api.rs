//! Typed client for the file server's REST API.
//!
//! Endpoints:
//! - `GET  /files`, `GET /files{path}` - directory listings
//! - `GET  /me` - the signed-in user
//! - `POST /users/sign-in` - cookie session sign-in
//!
//! Requests go through a [`Transport`], the browser Fetch API in the app and
//! a scripted stub in tests.

use super::decode::{decode_field_errors, decode_listing, decode_user};
use super::error::{ApiError, DecodeError, FetchError};
use crate::config;
use crate::models::{FieldErrors, FileEntry, SignInInput, User, VirtualPath};
use crate::utils::fetch::{self, HttpRequest, HttpResponse};

/// Body of the 500 the server sends when a listing path can't be read
/// (missing, or not a folder).
const UNREADABLE_FOLDER: &str = "Error building folder structure";

/// Sends one HTTP request and returns the response, whatever its status.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// [`Transport`] over the browser Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        fetch::send(&request).await
    }
}

/// REST client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient {
    /// Client for the configured backend.
    pub fn from_config() -> Self {
        Self::new(config::base_url(), BrowserTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    /// Listing URL: `{base}/files` for root, `{base}/files{path}` otherwise.
    ///
    /// The server skips dot-files unless asked with `hidden=false`.
    pub fn files_url(&self, path: &VirtualPath, show_hidden: bool) -> String {
        let mut url = format!("{}/files{}", self.base_url, encode_path(path));
        if show_hidden {
            url.push_str("?hidden=false");
        }
        url
    }

    /// Fetch the listing of a folder.
    ///
    /// A 404, the server's folder-structure failure, or a response describing
    /// a file (not a folder) means the location can't be browsed.
    pub async fn list_files(
        &self,
        path: &VirtualPath,
        show_hidden: bool,
    ) -> Result<FileEntry, ApiError> {
        let response = self
            .transport
            .send(HttpRequest::get(self.files_url(path, show_hidden)))
            .await?;

        match response.status {
            404 => return Err(ApiError::NotFound(path.clone())),
            500 if response.body.trim() == UNREADABLE_FOLDER => {
                return Err(ApiError::NotFound(path.clone()));
            }
            status => check_status(status)?,
        }

        let entry = decode_listing(&response.body)?;
        if !entry.is_dir {
            return Err(ApiError::NotADirectory(path.clone()));
        }
        Ok(entry)
    }

    /// Fetch the signed-in user. [`ApiError::Unauthorized`] when there is no
    /// session.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let url = format!("{}/me", self.base_url);
        let response = self.transport.send(HttpRequest::get(url)).await?;
        check_status(response.status)?;
        Ok(decode_user(&response.body)?)
    }

    /// Sign in with email and password.
    ///
    /// Rejections carrying the backend's `errors` object become
    /// [`ApiError::Validation`] so they can be attached to form fields.
    pub async fn sign_in(&self, input: &SignInInput) -> Result<User, ApiError> {
        let url = format!("{}/users/sign-in", self.base_url);
        let body = serde_json::to_string(input).map_err(DecodeError::from)?;
        let response = self
            .transport
            .send(HttpRequest::post_json(url, body))
            .await?;

        if !response.is_success() {
            if let Some(errors) = decode_field_errors(&response.body) {
                return Err(ApiError::Validation(errors));
            }
            if matches!(response.status, 400 | 401 | 403) {
                return Err(ApiError::Validation(FieldErrors::form(
                    "Invalid email or password",
                )));
            }
            return Err(FetchError::HttpError(response.status).into());
        }

        Ok(decode_user(&response.body)?)
    }
}

fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(ApiError::Unauthorized),
        _ => Err(FetchError::HttpError(status).into()),
    }
}

/// URL of a file's content: the static prefix plus its path.
pub fn static_url_for(path: &VirtualPath) -> String {
    format!("{}{}", config::static_url(), encode_path(path))
}

/// Percent-encode each segment of a path, keeping the slashes.
fn encode_path(path: &VirtualPath) -> String {
    path.segments()
        .map(|segment| format!("/{}", encode_segment(segment)))
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn encode_segment(segment: &str) -> String {
    js_sys::encode_uri_component(segment).into()
}

#[cfg(not(target_arch = "wasm32"))]
fn encode_segment(segment: &str) -> String {
    segment.to_string()
}
