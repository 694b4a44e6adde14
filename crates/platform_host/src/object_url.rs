//! Object-URL service contracts and in-memory/no-op adapters.
//!
//! Two kinds of URLs are handed out for a selected file:
//! - preview URLs, wrapped in a [`PreviewHandle`] and revoked once the staged file goes away
//! - session URLs, created lazily for committed gallery entries and kept until the page unloads

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

use crate::media::{BlobKey, PreviewHandle};

/// Host service that turns locally selected files into renderable URLs.
pub trait ObjectUrlService {
    /// Creates a revocable preview URL for a registered blob.
    fn create_preview(&self, blob: BlobKey) -> Result<PreviewHandle, String>;

    /// Revokes a preview URL. The handle is consumed.
    fn revoke_preview(&self, handle: PreviewHandle) -> Result<(), String>;

    /// Returns the session-lifetime URL for a registered blob, creating it on first use.
    fn session_url(&self, blob: BlobKey) -> Option<String>;

    /// Drops the host's reference to a blob that will never be committed.
    fn forget(&self, blob: BlobKey);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op object-URL service for targets without a file API.
pub struct NoopObjectUrlService;

impl ObjectUrlService for NoopObjectUrlService {
    fn create_preview(&self, _blob: BlobKey) -> Result<PreviewHandle, String> {
        Err("object urls are unavailable on this host".to_string())
    }

    fn revoke_preview(&self, _handle: PreviewHandle) -> Result<(), String> {
        Ok(())
    }

    fn session_url(&self, _blob: BlobKey) -> Option<String> {
        None
    }

    fn forget(&self, _blob: BlobKey) {}
}

#[derive(Debug, Default)]
struct MemoryObjectUrlInner {
    next_url: u64,
    registered: BTreeSet<BlobKey>,
    live_previews: BTreeMap<String, BlobKey>,
    revoked_previews: BTreeSet<String>,
    session_urls: BTreeMap<BlobKey, String>,
    created_count: usize,
    revoked_count: usize,
}

#[derive(Debug, Clone, Default)]
/// In-memory object-URL service that tracks every preview it mints.
///
/// Revoking an unknown or already revoked preview is reported as an error so callers can assert
/// the revoke-exactly-once discipline.
pub struct MemoryObjectUrlService {
    inner: Rc<RefCell<MemoryObjectUrlInner>>,
}

impl MemoryObjectUrlService {
    /// Registers a blob so previews and session URLs can be derived from it.
    pub fn register(&self, blob: BlobKey) {
        self.inner.borrow_mut().registered.insert(blob);
    }

    /// Number of previews created so far.
    pub fn created_count(&self) -> usize {
        self.inner.borrow().created_count
    }

    /// Number of previews revoked so far.
    pub fn revoked_count(&self) -> usize {
        self.inner.borrow().revoked_count
    }

    /// Preview URLs that are still live.
    pub fn live_previews(&self) -> Vec<String> {
        self.inner.borrow().live_previews.keys().cloned().collect()
    }

    /// Whether the blob is still registered.
    pub fn is_registered(&self, blob: BlobKey) -> bool {
        self.inner.borrow().registered.contains(&blob)
    }
}

impl ObjectUrlService for MemoryObjectUrlService {
    fn create_preview(&self, blob: BlobKey) -> Result<PreviewHandle, String> {
        let mut inner = self.inner.borrow_mut();
        if !inner.registered.contains(&blob) {
            return Err(format!("blob {} is not registered", blob.0));
        }
        inner.next_url += 1;
        let url = format!("blob:memory/{}", inner.next_url);
        inner.live_previews.insert(url.clone(), blob);
        inner.created_count += 1;
        Ok(PreviewHandle::new(blob, url))
    }

    fn revoke_preview(&self, handle: PreviewHandle) -> Result<(), String> {
        let mut inner = self.inner.borrow_mut();
        if inner.revoked_previews.contains(handle.url()) {
            return Err(format!("preview `{}` revoked twice", handle.url()));
        }
        if inner.live_previews.remove(handle.url()).is_none() {
            return Err(format!("preview `{}` was never created", handle.url()));
        }
        inner.revoked_previews.insert(handle.url().to_string());
        inner.revoked_count += 1;
        Ok(())
    }

    fn session_url(&self, blob: BlobKey) -> Option<String> {
        let mut inner = self.inner.borrow_mut();
        if !inner.registered.contains(&blob) {
            return None;
        }
        if let Some(url) = inner.session_urls.get(&blob) {
            return Some(url.clone());
        }
        inner.next_url += 1;
        let url = format!("blob:memory/{}", inner.next_url);
        inner.session_urls.insert(blob, url.clone());
        Some(url)
    }

    fn forget(&self, blob: BlobKey) {
        let mut inner = self.inner.borrow_mut();
        inner.registered.remove(&blob);
        inner.session_urls.remove(&blob);
    }
}
