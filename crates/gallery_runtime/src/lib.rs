//! Memories gallery runtime: catalog, category filter, media modal, and upload staging, driven
//! by a pure reducer and rendered with Leptos.

pub mod catalog;
pub mod components;
pub mod counter;
mod effect_executor;
pub mod filter;
pub mod host;
pub mod keyboard;
pub mod manifest;
pub mod modal;
pub mod model;
pub mod navigation;
pub mod notifications;
pub mod reducer;
mod runtime_context;
pub mod scheduler;
pub mod staging;

pub use components::{use_gallery_runtime, GalleryProvider, GalleryRuntimeContext, MemoriesPage};
pub use manifest::gallery_manifest;
pub use model::*;
pub use reducer::{
    reduce_gallery, reduce_gallery_with_feedback, GalleryAction, ReducerError, RuntimeEffect,
};
