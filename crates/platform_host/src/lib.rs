//! Typed host-domain contracts shared by the gallery runtime and its browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the media and
//! local-file models, the object-URL service contract used for upload previews and session
//! media, and time helpers. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod media;
pub mod object_url;
pub mod time;

pub use media::{BlobKey, LocalFile, MediaKind, PreviewHandle};
pub use object_url::{MemoryObjectUrlService, NoopObjectUrlService, ObjectUrlService};
pub use time::unix_time_ms_now;
