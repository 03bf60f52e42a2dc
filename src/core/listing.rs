//! Listing state for the current location.
//!
//! Fetches for abandoned locations may resolve after newer ones. Every fetch
//! gets a [`Ticket`]; only the latest ticket's result is accepted, so the
//! view always shows the listing for the location the user is at.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::error::ApiError;
use crate::models::{FileEntry, VirtualPath};

/// What a listing is fetched for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListingKey {
    pub path: VirtualPath,
    pub show_hidden: bool,
}

/// Handle for one in-flight fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Load status of the current listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Fetching, nothing to show
    Loading,
    /// Fetching, showing the cached listing meanwhile
    Revalidating,
    Ready,
    Failed(ApiError),
}

/// Listing for the current location plus a per-location cache.
#[derive(Clone, Debug, Default)]
pub struct ListingSlot {
    key: ListingKey,
    latest: u64,
    status: ListingStatus,
    listing: Option<FileEntry>,
    cache: HashMap<ListingKey, FileEntry>,
}

impl ListingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start fetching `path`. Any fetch still in flight becomes stale.
    ///
    /// A cached listing for the same key is shown while the fetch runs.
    pub fn begin(&mut self, path: VirtualPath, show_hidden: bool) -> Ticket {
        self.latest += 1;
        self.key = ListingKey { path, show_hidden };
        self.listing = self.cache.get(&self.key).cloned();
        self.status = if self.listing.is_some() {
            ListingStatus::Revalidating
        } else {
            ListingStatus::Loading
        };
        Ticket(self.latest)
    }

    /// Deliver a fetch result. Returns `false` (and changes nothing) when the
    /// ticket is stale.
    ///
    /// Failures keep a cached listing on screen unless the location itself
    /// was rejected, in which case the cache entry is dropped.
    pub fn complete(&mut self, ticket: Ticket, result: Result<FileEntry, ApiError>) -> bool {
        if ticket.0 != self.latest {
            return false;
        }

        match result {
            Ok(entry) => {
                self.cache.insert(self.key.clone(), entry.clone());
                self.listing = Some(entry);
                self.status = ListingStatus::Ready;
            }
            Err(err) => {
                if err.is_invalid_path() {
                    self.cache.remove(&self.key);
                    self.listing = None;
                }
                self.status = ListingStatus::Failed(err);
            }
        }
        true
    }

    #[cfg(test)]
    pub fn key(&self) -> &ListingKey {
        &self.key
    }

    #[cfg(test)]
    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.status,
            ListingStatus::Loading | ListingStatus::Revalidating
        )
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.status {
            ListingStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Listing root for the current key, if one is available.
    pub fn listing(&self) -> Option<&FileEntry> {
        self.listing.as_ref()
    }

    /// Children to display: hidden entries filtered when requested,
    /// folders first, then by name.
    pub fn entries(&self) -> Vec<FileEntry> {
        let mut entries: Vec<FileEntry> = self
            .listing
            .iter()
            .flat_map(|l| l.children())
            .filter(|e| self.key.show_hidden || !e.is_hidden())
            .cloned()
            .collect();
        entries.sort_by(compare_entries);
        entries
    }

    /// Forget all cached listings (after sign-in as another user).
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}
