//! Upload staging buffer, preview-handle ledger, and the upload form.
//!
//! Every preview handle handed to the buffer is owned by exactly one staged file through the
//! [`PreviewLedger`]. Handles only leave the ledger through [`PreviewLedger::release`] or
//! [`PreviewLedger::release_all`], and each released handle must be revoked by the caller, so
//! removal, commit, and reset all revoke through the same path and nothing is revoked twice.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use platform_host::{LocalFile, MediaKind, PreviewHandle};
use thiserror::Error;

use crate::{
    catalog::{MediaCatalog, NewEntry},
    model::{EntryId, MediaRef},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StagedFileId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub id: StagedFileId,
    pub file: LocalFile,
    pub kind: MediaKind,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add a title for this memory.")]
    MissingTitle,
    #[error("Please add a description for this memory.")]
    MissingDescription,
    #[error("Please select at least one photo or video.")]
    NoFilesSelected,
    #[error("Please enter a valid date.")]
    InvalidDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewLedger {
    handles: BTreeMap<StagedFileId, PreviewHandle>,
}

impl PreviewLedger {
    /// Gives `owner` the handle. If it already owns one, the new handle is returned unaccepted.
    pub fn attach(&mut self, owner: StagedFileId, handle: PreviewHandle) -> Result<(), PreviewHandle> {
        if self.handles.contains_key(&owner) {
            return Err(handle);
        }
        self.handles.insert(owner, handle);
        Ok(())
    }

    pub fn release(&mut self, owner: StagedFileId) -> Option<PreviewHandle> {
        self.handles.remove(&owner)
    }

    pub fn release_all(&mut self) -> Vec<PreviewHandle> {
        std::mem::take(&mut self.handles).into_values().collect()
    }

    pub fn url(&self, owner: StagedFileId) -> Option<&str> {
        self.handles.get(&owner).map(PreviewHandle::url)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Shared metadata applied to every file of one commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMetadata {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

/// Staged files and handles released by [`UploadStagingBuffer::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StagingRelease {
    pub files: Vec<StagedFile>,
    pub handles: Vec<PreviewHandle>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub entries: Vec<EntryId>,
    pub released: Vec<PreviewHandle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadStagingBuffer {
    next_id: u64,
    files: Vec<StagedFile>,
    ledger: PreviewLedger,
}

impl UploadStagingBuffer {
    /// Stages every image or video file and returns what was staged. Other files are skipped.
    pub fn add_files(&mut self, files: Vec<LocalFile>) -> Vec<StagedFile> {
        let mut staged = Vec::new();
        for file in files {
            let Some(kind) = file.media_kind() else {
                continue;
            };
            self.next_id = self.next_id.saturating_add(1);
            let entry = StagedFile {
                id: StagedFileId(self.next_id),
                file,
                kind,
            };
            self.files.push(entry.clone());
            staged.push(entry);
        }
        staged
    }

    /// Hands a created preview to its staged file.
    ///
    /// Returns the handle back when nobody can own it (the file was removed before the preview
    /// arrived, or it already has one); the caller must revoke it.
    pub fn attach_preview(&mut self, id: StagedFileId, handle: PreviewHandle) -> Option<PreviewHandle> {
        if !self.files.iter().any(|file| file.id == id) {
            return Some(handle);
        }
        self.ledger.attach(id, handle).err()
    }

    /// Removes a staged file together with its preview handle.
    pub fn remove_file(&mut self, id: StagedFileId) -> Option<(StagedFile, Option<PreviewHandle>)> {
        let index = self.files.iter().position(|file| file.id == id)?;
        let file = self.files.remove(index);
        let handle = self.ledger.release(id);
        Some((file, handle))
    }

    /// Empties the buffer, releasing every handle.
    pub fn clear(&mut self) -> StagingRelease {
        StagingRelease {
            files: std::mem::take(&mut self.files),
            handles: self.ledger.release_all(),
        }
    }

    /// Checks what a commit needs, reporting a blank title first, then a blank description, then
    /// an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn check_ready(&self, title: &str, description: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if description.trim().is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.files.is_empty() {
            return Err(ValidationError::NoFilesSelected);
        }
        Ok(())
    }

    /// Appends one catalog entry per staged file, then clears the buffer.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] without touching the buffer or catalog when the title or
    /// description is blank or nothing is staged.
    pub fn commit(
        &mut self,
        metadata: &CommitMetadata,
        catalog: &mut MediaCatalog,
    ) -> Result<Committed, ValidationError> {
        self.check_ready(&metadata.title, &metadata.description)?;

        let categories: BTreeSet<String> = [metadata.category.clone()].into_iter().collect();
        let entries = self
            .files
            .iter()
            .map(|staged| {
                catalog.append(NewEntry {
                    kind: staged.kind,
                    media: MediaRef::Session {
                        blob: staged.file.blob,
                    },
                    categories: categories.clone(),
                    title: metadata.title.trim().to_string(),
                    description: metadata.description.trim().to_string(),
                    date: metadata.date,
                })
            })
            .collect();
        let released = self.clear().handles;
        Ok(Committed { entries, released })
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn preview_url(&self, id: StagedFileId) -> Option<&str> {
        self.ledger.url(id)
    }

    pub fn ledger(&self) -> &PreviewLedger {
        &self.ledger
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadFormField {
    Title(String),
    Description(String),
    Category(String),
    Date(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Raw `YYYY-MM-DD` value of the date input.
    pub date: String,
}

impl UploadForm {
    pub fn new(default_category: &str) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: default_category.to_string(),
            date: String::new(),
        }
    }

    pub fn apply(&mut self, field: UploadFormField) {
        match field {
            UploadFormField::Title(value) => self.title = value,
            UploadFormField::Description(value) => self.description = value,
            UploadFormField::Category(value) => self.category = value,
            UploadFormField::Date(value) => self.date = value,
        }
    }

    /// Builds commit metadata. A blank date falls back to `today`; a blank category to
    /// `default_category`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] when the date is present but not `YYYY-MM-DD`.
    pub fn metadata(
        &self,
        today: NaiveDate,
        default_category: &str,
    ) -> Result<CommitMetadata, ValidationError> {
        let date = match self.date.trim() {
            "" => today,
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate)?,
        };
        let category = match self.category.trim() {
            "" => default_category.to_string(),
            category => category.to_string(),
        };
        Ok(CommitMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            category,
            date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDialog {
    pub open: bool,
    pub form: UploadForm,
}

impl UploadDialog {
    pub fn new(default_category: &str) -> Self {
        Self {
            open: false,
            form: UploadForm::new(default_category),
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::BlobKey;
    use pretty_assertions::assert_eq;

    use super::*;

    fn local(blob: u64, mime_type: &str) -> LocalFile {
        LocalFile {
            blob: BlobKey(blob),
            name: format!("file-{blob}"),
            mime_type: mime_type.to_string(),
            size: 1024,
        }
    }

    fn handle(blob: u64) -> PreviewHandle {
        PreviewHandle::new(BlobKey(blob), format!("blob:test/{blob}"))
    }

    fn metadata(title: &str, description: &str) -> CommitMetadata {
        CommitMetadata {
            title: title.to_string(),
            description: description.to_string(),
            category: "photos".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("date"),
        }
    }

    #[test]
    fn add_files_skips_unrecognized_types() {
        let mut buffer = UploadStagingBuffer::default();
        let staged = buffer.add_files(vec![
            local(1, "image/jpeg"),
            local(2, "text/plain"),
            local(3, "video/webm"),
        ]);

        let kinds: Vec<_> = staged.iter().map(|file| file.kind).collect();
        assert_eq!(kinds, vec![MediaKind::Image, MediaKind::Video]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn remove_file_releases_its_handle_once() {
        let mut buffer = UploadStagingBuffer::default();
        let staged = buffer.add_files(vec![local(1, "image/png")]);
        let id = staged[0].id;
        assert_eq!(buffer.attach_preview(id, handle(1)), None);
        assert_eq!(buffer.preview_url(id), Some("blob:test/1"));

        let (_, released) = buffer.remove_file(id).expect("staged file");
        assert_eq!(released, Some(handle(1)));
        assert!(buffer.remove_file(id).is_none());
        assert!(buffer.ledger().is_empty());
    }

    #[test]
    fn preview_for_removed_file_is_handed_back() {
        let mut buffer = UploadStagingBuffer::default();
        let id = buffer.add_files(vec![local(1, "image/png")])[0].id;
        buffer.remove_file(id);

        assert_eq!(buffer.attach_preview(id, handle(1)), Some(handle(1)));
    }

    #[test]
    fn second_preview_for_same_file_is_rejected() {
        let mut buffer = UploadStagingBuffer::default();
        let id = buffer.add_files(vec![local(1, "image/png")])[0].id;
        assert_eq!(buffer.attach_preview(id, handle(1)), None);
        assert_eq!(buffer.attach_preview(id, handle(9)), Some(handle(9)));
        assert_eq!(buffer.preview_url(id), Some("blob:test/1"));
    }

    #[test]
    fn commit_without_title_leaves_everything_untouched() {
        let mut buffer = UploadStagingBuffer::default();
        let id = buffer.add_files(vec![local(1, "image/png")])[0].id;
        buffer.attach_preview(id, handle(1));
        let before = buffer.clone();
        let mut catalog = MediaCatalog::default();

        let result = buffer.commit(&metadata("", "B"), &mut catalog);

        assert_eq!(result, Err(ValidationError::MissingTitle));
        assert_eq!(buffer, before);
        assert!(catalog.is_empty());
    }

    #[test]
    fn commit_requires_description_and_files() {
        let mut buffer = UploadStagingBuffer::default();
        let mut catalog = MediaCatalog::default();
        assert_eq!(
            buffer.commit(&metadata("A", "B"), &mut catalog),
            Err(ValidationError::NoFilesSelected)
        );
        buffer.add_files(vec![local(1, "image/png")]);
        assert_eq!(
            buffer.commit(&metadata("A", "   "), &mut catalog),
            Err(ValidationError::MissingDescription)
        );
    }

    #[test]
    fn commit_appends_one_entry_per_file_and_releases_every_handle() {
        let mut buffer = UploadStagingBuffer::default();
        let staged = buffer.add_files(vec![local(1, "image/png"), local(2, "video/mp4")]);
        for file in &staged {
            buffer.attach_preview(file.id, handle(file.file.blob.0));
        }
        let mut catalog = MediaCatalog::default();

        let committed = buffer
            .commit(&metadata("A", "B"), &mut catalog)
            .expect("valid commit");

        assert_eq!(committed.entries.len(), 2);
        assert_eq!(committed.released.len(), 2);
        assert!(buffer.is_empty());
        assert!(buffer.ledger().is_empty());
        let entry = catalog.entry(committed.entries[1]).expect("entry");
        assert_eq!(entry.kind, MediaKind::Video);
        assert_eq!(entry.media, MediaRef::Session { blob: BlobKey(2) });
        assert_eq!(entry.categories.iter().collect::<Vec<_>>(), vec!["photos"]);
    }

    #[test]
    fn form_metadata_defaults_blank_date_and_rejects_garbage() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("date");
        let mut form = UploadForm::new("photos");
        form.apply(UploadFormField::Title("A".to_string()));
        assert_eq!(form.metadata(today, "photos").expect("metadata").date, today);

        form.apply(UploadFormField::Date("2024-02-30".to_string()));
        assert_eq!(
            form.metadata(today, "photos"),
            Err(ValidationError::InvalidDate)
        );

        form.apply(UploadFormField::Date("2024-02-29".to_string()));
        form.apply(UploadFormField::Category(String::new()));
        let metadata = form.metadata(today, "photos").expect("metadata");
        assert_eq!(metadata.category, "photos");
        assert_eq!(metadata.date, NaiveDate::from_ymd_opt(2024, 2, 29).expect("date"));
    }
}
