//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the gallery: it keeps the
//! `File` objects the user picked for the current session and turns them into object URLs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod object_url;

pub use adapters::{
    host_strategy_name, object_url_service, selected_host_strategy, HostStrategy,
    ObjectUrlServiceAdapter,
};
pub use object_url::WebObjectUrlService;
