//! Browser file handles to [`SelectedFile`]s.
//!
//! Only the name and size are read. File contents never leave the browser.

use medipredict::SelectedFile;
use web_sys::{DragEvent, FileList, HtmlInputElement};

/// All files of a `FileList`, in order.
pub fn selected_files(list: &FileList) -> Vec<SelectedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64))
        .collect()
}

/// Files dropped onto the upload zone.
pub fn dropped_files(ev: &DragEvent) -> Vec<SelectedFile> {
    ev.data_transfer()
        .and_then(|transfer| transfer.files())
        .map(|list| selected_files(&list))
        .unwrap_or_default()
}

/// Files chosen in the picker. Clears the input so picking the same file
/// again still fires `change`.
pub fn picked_files(input: &HtmlInputElement) -> Vec<SelectedFile> {
    let files = input.files().map(|list| selected_files(&list)).unwrap_or_default();
    input.set_value("");
    files
}
