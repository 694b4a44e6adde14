use platform_host::{BlobKey, LocalFile, NoopObjectUrlService, ObjectUrlService, PreviewHandle};

use crate::WebObjectUrlService;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters using the File and URL APIs.
    Browser,
    /// Placeholder adapters for builds without a browser file API.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete object-URL backend behind [`ObjectUrlService`].
#[derive(Debug, Clone)]
pub enum ObjectUrlServiceAdapter {
    /// Browser `URL.createObjectURL` backend.
    Browser(WebObjectUrlService),
    /// No-op fallback.
    Stub(NoopObjectUrlService),
}

impl ObjectUrlServiceAdapter {
    /// Registers the files of a picker or drop event and returns their descriptors.
    ///
    /// The stub backend keeps nothing and returns an empty list.
    pub fn register_file_list(&self, files: &web_sys::FileList) -> Vec<LocalFile> {
        match self {
            Self::Browser(service) => service.register_file_list(files),
            Self::Stub(_) => Vec::new(),
        }
    }
}

impl ObjectUrlService for ObjectUrlServiceAdapter {
    fn create_preview(&self, blob: BlobKey) -> Result<PreviewHandle, String> {
        match self {
            Self::Browser(service) => service.create_preview(blob),
            Self::Stub(service) => service.create_preview(blob),
        }
    }

    fn revoke_preview(&self, handle: PreviewHandle) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.revoke_preview(handle),
            Self::Stub(service) => service.revoke_preview(handle),
        }
    }

    fn session_url(&self, blob: BlobKey) -> Option<String> {
        match self {
            Self::Browser(service) => service.session_url(blob),
            Self::Stub(service) => service.session_url(blob),
        }
    }

    fn forget(&self, blob: BlobKey) {
        match self {
            Self::Browser(service) => service.forget(blob),
            Self::Stub(service) => service.forget(blob),
        }
    }
}

/// Builds the object-URL adapter for the selected host strategy.
pub fn object_url_service() -> ObjectUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ObjectUrlServiceAdapter::Browser(WebObjectUrlService::default()),
        HostStrategy::Stub => ObjectUrlServiceAdapter::Stub(NoopObjectUrlService),
    }
}
