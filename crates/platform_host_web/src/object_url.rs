//! Object-URL adapter backed by the browser `URL` and `File` APIs.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use platform_host::{BlobKey, LocalFile, ObjectUrlService, PreviewHandle};

#[derive(Debug, Default)]
struct Registry {
    next_blob: u64,
    files: HashMap<BlobKey, web_sys::File>,
    session_urls: HashMap<BlobKey, String>,
}

#[derive(Debug, Clone, Default)]
/// Browser object-URL service holding the files picked during this page session.
pub struct WebObjectUrlService {
    registry: Rc<RefCell<Registry>>,
}

impl WebObjectUrlService {
    /// Registers every file in a `FileList` and returns descriptors in list order.
    pub fn register_file_list(&self, files: &web_sys::FileList) -> Vec<LocalFile> {
        let mut registry = self.registry.borrow_mut();
        let mut out = Vec::with_capacity(files.length() as usize);
        for index in 0..files.length() {
            let Some(file) = files.get(index) else {
                continue;
            };
            registry.next_blob += 1;
            let blob = BlobKey(registry.next_blob);
            out.push(LocalFile {
                blob,
                name: file.name(),
                mime_type: file.type_(),
                size: file.size().max(0.0) as u64,
            });
            registry.files.insert(blob, file);
        }
        out
    }
}

impl ObjectUrlService for WebObjectUrlService {
    fn create_preview(&self, blob: BlobKey) -> Result<PreviewHandle, String> {
        let registry = self.registry.borrow();
        let file = registry
            .files
            .get(&blob)
            .ok_or_else(|| format!("blob {} is not registered", blob.0))?;
        create_object_url(file).map(|url| PreviewHandle::new(blob, url))
    }

    fn revoke_preview(&self, handle: PreviewHandle) -> Result<(), String> {
        revoke_object_url(handle.url())
    }

    fn session_url(&self, blob: BlobKey) -> Option<String> {
        let mut registry = self.registry.borrow_mut();
        if let Some(url) = registry.session_urls.get(&blob) {
            return Some(url.clone());
        }
        let url = create_object_url(registry.files.get(&blob)?).ok()?;
        registry.session_urls.insert(blob, url.clone());
        Some(url)
    }

    fn forget(&self, blob: BlobKey) {
        let mut registry = self.registry.borrow_mut();
        registry.files.remove(&blob);
        if let Some(url) = registry.session_urls.remove(&blob) {
            let _ = revoke_object_url(&url);
        }
    }
}

fn create_object_url(file: &web_sys::File) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;
        web_sys::Url::create_object_url_with_blob(file)
            .map_err(|err: JsValue| format!("create object url failed: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = file;
        Err("object urls require a browser host".to_string())
    }
}

fn revoke_object_url(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;
        web_sys::Url::revoke_object_url(url)
            .map_err(|err: JsValue| format!("revoke object url failed: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Ok(())
    }
}
