//! Report selection for the upload page.
//!
//! Drag & drop and the file picker both end in [`UploadState::select`]:
//! the first file of the list becomes the single selected file. The file
//! content is never read or transmitted.

use log::{debug, warn};

use crate::config::{ACCEPTED_EXTENSIONS, MAX_UPLOAD_BYTES};
use crate::error::{UploadError, UploadResult};

/// Browser-independent description of a chosen file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Lowercase extension without the dot.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_lowercase())
    }

    /// Size in megabytes with two decimals ("1.25 MB").
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }

    /// Check format and size against the upload limits.
    pub fn validate(&self) -> UploadResult<()> {
        let extension = self.extension().unwrap_or_default();
        if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(UploadError::UnsupportedFormat { extension });
        }
        if self.size_bytes > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                size: self.size_bytes,
                limit: MAX_UPLOAD_BYTES,
            });
        }
        Ok(())
    }
}

/// Local state of the upload page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub dragging: bool,
    pub selected: Option<SelectedFile>,
    pub uploading: bool,
    /// Validation message for the current selection.
    pub error: Option<UploadError>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Files dropped on the zone.
    pub fn drop_files(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        self.dragging = false;
        self.select(files);
    }

    /// Files chosen through the picker.
    pub fn pick_files(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        self.select(files);
    }

    /// Keep the first file, if any. An empty list leaves the state untouched.
    pub fn select(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        debug!("Selected report {} ({} bytes)", file.name, file.size_bytes);
        self.error = file.validate().err();
        if let Some(ref err) = self.error {
            warn!("Rejected report {}: {}", file.name, err);
        }
        self.selected = Some(file);
    }

    pub fn remove(&mut self) {
        self.selected = None;
        self.error = None;
    }

    /// Guard for the analyze action: returns the file to "upload" and flips
    /// the uploading flag. Nothing changes on error.
    pub fn begin_upload(&mut self) -> UploadResult<SelectedFile> {
        let file = self.selected.clone().ok_or(UploadError::NoFileSelected)?;
        file.validate()?;
        self.uploading = true;
        Ok(file)
    }

    pub fn can_upload(&self) -> bool {
        !self.uploading && self.selected.is_some() && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SelectedFile {
        SelectedFile::new("blood_test.pdf", 1_310_720)
    }

    #[test]
    fn test_drop_and_pick_are_equivalent() {
        let mut dropped = UploadState::new();
        dropped.drag_over();
        dropped.drop_files(vec![report(), SelectedFile::new("other.png", 10)]);

        let mut picked = UploadState::new();
        picked.pick_files(vec![report(), SelectedFile::new("other.png", 10)]);

        assert_eq!(dropped, picked);
        assert_eq!(dropped.selected, Some(report()));
        assert!(!dropped.dragging);

        assert_eq!(dropped.begin_upload(), picked.begin_upload());
        assert_eq!(dropped, picked);
    }

    #[test]
    fn test_empty_selection_is_ignored() {
        let mut state = UploadState::new();
        state.pick_files(vec![report()]);
        state.pick_files(Vec::new());
        assert_eq!(state.selected, Some(report()));
    }

    #[test]
    fn test_upload_without_file() {
        let mut state = UploadState::new();
        assert_eq!(state.begin_upload(), Err(UploadError::NoFileSelected));
        assert!(!state.uploading);
        assert!(!state.can_upload());
    }

    #[test]
    fn test_upload_sets_flag() {
        let mut state = UploadState::new();
        state.pick_files(vec![report()]);
        assert!(state.can_upload());
        assert_eq!(state.begin_upload(), Ok(report()));
        assert!(state.uploading);
        assert!(!state.can_upload());
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut state = UploadState::new();
        state.pick_files(vec![SelectedFile::new("notes.txt", 5)]);
        assert!(state.error.is_some());
        state.remove();
        assert_eq!(state, UploadState::new());
    }

    #[test]
    fn test_validation() {
        assert!(SelectedFile::new("SCAN.JPEG", 100).validate().is_ok());
        assert!(SelectedFile::new("brain.dicom", 100).validate().is_ok());
        assert_eq!(
            SelectedFile::new("notes.txt", 100).validate(),
            Err(UploadError::UnsupportedFormat {
                extension: "txt".into()
            })
        );
        assert_eq!(
            SelectedFile::new("noextension", 100).validate(),
            Err(UploadError::UnsupportedFormat {
                extension: String::new()
            })
        );
        assert_eq!(
            SelectedFile::new("huge.pdf", MAX_UPLOAD_BYTES + 1).validate(),
            Err(UploadError::TooLarge {
                size: MAX_UPLOAD_BYTES + 1,
                limit: MAX_UPLOAD_BYTES
            })
        );
        assert!(SelectedFile::new("edge.pdf", MAX_UPLOAD_BYTES).validate().is_ok());
    }

    #[test]
    fn test_rejected_file_blocks_upload() {
        let mut state = UploadState::new();
        state.drop_files(vec![SelectedFile::new("virus.exe", 10)]);
        assert!(!state.can_upload());
        assert!(matches!(
            state.begin_upload(),
            Err(UploadError::UnsupportedFormat { .. })
        ));
        assert!(!state.uploading);
    }

    #[test]
    fn test_size_display() {
        assert_eq!(report().size_display(), "1.25 MB");
        assert_eq!(SelectedFile::new(".pdf", 0).extension(), None);
    }
}
