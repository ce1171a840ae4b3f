//! Upload view state.
//!
//! [`UploadModel`] owns everything the upload view renders: the current
//! selection with its preview handles, the last results and the lifecycle
//! state. It is generic over the file and preview handle types so the
//! transitions can be exercised without a browser.
//!
//! ```text
//!   select_files ──▶ Idle ──begin_submit──▶ Uploading ──finish──▶ Done | Failed
//!                     ▲                                              │
//!                     └──────────────── select_files / submit ───────┘
//! ```

use crate::{AppError, AppResult, ResultEntry, UploadResponse, UploadState};

/// A file handle that knows its display name.
pub trait NamedFile {
    fn file_name(&self) -> String;
}

impl NamedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// One selected image and its preview handle.
///
/// The preview is dropped together with the selection entry.
#[derive(Debug)]
pub struct SelectedFile<F, P> {
    pub name: String,
    pub file: F,
    pub preview: Option<P>,
}

/// Identifies one submission. Outcomes carrying an older ticket are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket(u64);

/// What the result area shows. Exactly one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsView {
    /// Spinner and "Processing..."
    Loading,
    /// "No results to display."
    Empty,
    /// Result table with the copy action
    Table,
}

/// A result paired with the preview of the file it describes.
#[derive(Debug)]
pub struct ResultRow<'a, P> {
    pub filename: &'a str,
    pub preview: Option<&'a P>,
    pub message: String,
}

#[derive(Debug)]
pub struct UploadModel<F, P> {
    selection: Vec<SelectedFile<F, P>>,
    results: Vec<ResultEntry>,
    state: UploadState,
    service_error: Option<String>,
    generation: u64,
}

impl<F, P> Default for UploadModel<F, P> {
    fn default() -> Self {
        Self {
            selection: Vec::new(),
            results: Vec::new(),
            state: UploadState::Idle,
            service_error: None,
            generation: 0,
        }
    }
}

impl<F: NamedFile + Clone, P> UploadModel<F, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection, building one preview per file in order.
    ///
    /// An empty selection leaves the current one untouched and returns
    /// `false`. Previous preview handles are dropped on replacement.
    pub fn select_files<I>(&mut self, files: I, mut make_preview: impl FnMut(&F) -> Option<P>) -> bool
    where
        I: IntoIterator<Item = F>,
    {
        let selection: Vec<SelectedFile<F, P>> = files
            .into_iter()
            .map(|file| SelectedFile {
                name: file.file_name(),
                preview: make_preview(&file),
                file,
            })
            .collect();

        if selection.is_empty() {
            return false;
        }

        self.selection = selection;
        true
    }

    /// Enter `Uploading` and hand out the files to send.
    ///
    /// Returns `None` (and changes nothing) when no file is selected or a
    /// request is already in flight.
    pub fn begin_submit(&mut self) -> Option<(UploadTicket, Vec<F>)> {
        if !self.can_submit() {
            return None;
        }

        self.generation += 1;
        self.state = UploadState::Uploading;
        let files = self.selection.iter().map(|s| s.file.clone()).collect();
        Some((UploadTicket(self.generation), files))
    }

    /// Apply the outcome of the submission identified by `ticket`.
    ///
    /// Transport failures and error statuses both clear the results.
    /// Returns `false` when the ticket is stale.
    pub fn finish(&mut self, ticket: UploadTicket, outcome: AppResult<UploadResponse>) -> bool {
        if ticket.0 != self.generation || !self.state.is_uploading() {
            return false;
        }

        match outcome {
            Ok(response) => {
                self.results = response.results;
                self.service_error = response.error;
                self.state = UploadState::Done;
            }
            Err(AppError::Cancelled) => {
                self.state = UploadState::Idle;
            }
            Err(_) => {
                self.results.clear();
                self.service_error = None;
                self.state = UploadState::Failed;
            }
        }
        true
    }
}

impl<F, P> UploadModel<F, P> {
    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn is_uploading(&self) -> bool {
        self.state.is_uploading()
    }

    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty() && !self.state.is_uploading()
    }

    pub fn selection(&self) -> &[SelectedFile<F, P>] {
        &self.selection
    }

    pub fn previews(&self) -> impl Iterator<Item = &P> {
        self.selection.iter().filter_map(|s| s.preview.as_ref())
    }

    pub fn results(&self) -> &[ResultEntry] {
        &self.results
    }

    /// Batch-level `error` reported by the service with a success status.
    pub fn service_error(&self) -> Option<&str> {
        self.service_error.as_deref()
    }

    pub fn results_view(&self) -> ResultsView {
        if self.state.is_uploading() {
            ResultsView::Loading
        } else if self.results.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::Table
        }
    }

    /// Results in service order, each with its preview.
    ///
    /// A result is paired by filename when exactly one selected file carries
    /// that name, otherwise by position.
    pub fn rows(&self) -> Vec<ResultRow<'_, P>> {
        self.results
            .iter()
            .enumerate()
            .map(|(index, entry)| ResultRow {
                filename: &entry.filename,
                preview: self.preview_for(index, &entry.filename),
                message: entry.display_message(),
            })
            .collect()
    }

    /// Every message joined with newlines, `None` without results.
    pub fn copy_text(&self) -> Option<String> {
        if self.results.is_empty() {
            return None;
        }
        let messages: Vec<String> = self.results.iter().map(ResultEntry::display_message).collect();
        Some(messages.join("\n"))
    }

    fn preview_for(&self, index: usize, filename: &str) -> Option<&P> {
        let mut named = self.selection.iter().filter(|s| s.name == filename);
        match (named.next(), named.next()) {
            (Some(only), None) => only.preview.as_ref(),
            _ => self.selection.get(index).and_then(|s| s.preview.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug)]
    struct FakeFile(&'static str);

    impl NamedFile for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    /// Records its own release, like a revoked object URL.
    #[derive(Debug)]
    struct FakePreview {
        url: String,
        released: Rc<RefCell<Vec<String>>>,
    }

    impl Drop for FakePreview {
        fn drop(&mut self) {
            self.released.borrow_mut().push(self.url.clone());
        }
    }

    type Model = UploadModel<FakeFile, FakePreview>;

    fn select(model: &mut Model, names: &[&'static str], released: &Rc<RefCell<Vec<String>>>) -> bool {
        let released = released.clone();
        model.select_files(names.iter().map(|n| FakeFile(*n)), move |file| {
            Some(FakePreview {
                url: format!("blob:{}", file.0),
                released: released.clone(),
            })
        })
    }

    fn response(entries: &[(&str, &str)]) -> UploadResponse {
        UploadResponse {
            results: entries.iter().map(|(f, m)| ResultEntry::new(*f, *m)).collect(),
            error: None,
        }
    }

    #[test]
    fn test_selection_builds_one_preview_per_file_in_order() {
        let released = Rc::default();
        let mut model = Model::new();

        assert!(select(&mut model, &["a.png", "b.png", "c.png"], &released));

        let urls: Vec<&str> = model.previews().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["blob:a.png", "blob:b.png", "blob:c.png"]);
        assert_eq!(model.selection().len(), 3);
        assert_eq!(model.selection()[1].name, "b.png");
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png"], &released);

        assert!(!select(&mut model, &[], &released));
        assert_eq!(model.selection().len(), 1);
        assert!(released.borrow().is_empty());
    }

    #[test]
    fn test_reselect_replaces_and_releases_previews() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png", "b.png"], &released);
        select(&mut model, &["c.png"], &released);

        let urls: Vec<&str> = model.previews().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["blob:c.png"]);
        assert_eq!(*released.borrow(), vec!["blob:a.png", "blob:b.png"]);
    }

    #[test]
    fn test_dropping_model_releases_previews() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png"], &released);
        drop(model);
        assert_eq!(*released.borrow(), vec!["blob:a.png"]);
    }

    #[test]
    fn test_submit_without_files_does_nothing() {
        let mut model = Model::new();
        assert!(model.begin_submit().is_none());
        assert_eq!(model.state(), UploadState::Idle);
        assert_eq!(model.results_view(), ResultsView::Empty);
    }

    #[test]
    fn test_single_upload_in_flight() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png", "b.png"], &released);

        let (_, files) = model.begin_submit().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].0, "a.png");
        assert!(model.is_uploading());
        assert!(!model.can_submit());
        assert!(model.begin_submit().is_none());
    }

    #[test]
    fn test_success_replaces_results_in_response_order() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png", "b.png"], &released);
        let (ticket, _) = model.begin_submit().unwrap();

        assert!(model.finish(ticket, Ok(response(&[("b.png", "WORLD"), ("a.png", "HELLO")]))));

        assert_eq!(model.state(), UploadState::Done);
        assert_eq!(model.results_view(), ResultsView::Table);
        let rows = model.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].filename, "b.png");
        assert_eq!(rows[0].message, "WORLD");
    }

    #[test]
    fn test_rows_pair_previews_by_filename() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png", "b.png"], &released);
        let (ticket, _) = model.begin_submit().unwrap();
        model.finish(ticket, Ok(response(&[("b.png", "WORLD"), ("a.png", "HELLO")])));

        let rows = model.rows();
        assert_eq!(rows[0].preview.unwrap().url, "blob:b.png");
        assert_eq!(rows[1].preview.unwrap().url, "blob:a.png");
    }

    #[test]
    fn test_rows_fall_back_to_position_for_duplicate_names() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["scan.png", "scan.png"], &released);
        let (ticket, _) = model.begin_submit().unwrap();
        model.finish(ticket, Ok(response(&[("scan.png", "one"), ("scan.png", "two"), ("other.png", "three")])));

        let rows = model.rows();
        let first = model.selection()[0].preview.as_ref().unwrap();
        let second = model.selection()[1].preview.as_ref().unwrap();
        assert!(std::ptr::eq(rows[0].preview.unwrap(), first));
        assert!(std::ptr::eq(rows[1].preview.unwrap(), second));
        assert!(rows[2].preview.is_none());
    }

    #[test]
    fn test_error_status_and_network_failure_look_the_same() {
        let released = Rc::default();
        let failures = [
            AppError::Status { status: 500, body: "boom".into() },
            AppError::Network("connection refused".into()),
            AppError::Timeout(10),
        ];

        for failure in failures {
            let mut model = Model::new();
            select(&mut model, &["a.png"], &released);
            let (ticket, _) = model.begin_submit().unwrap();
            model.finish(ticket, Ok(response(&[("a.png", "old")])));
            let (ticket, _) = model.begin_submit().unwrap();

            assert!(model.finish(ticket, Err(failure)));

            assert_eq!(model.state(), UploadState::Failed);
            assert!(model.results().is_empty());
            assert_eq!(model.service_error(), None);
            assert_eq!(model.results_view(), ResultsView::Empty);
        }
    }

    #[test]
    fn test_loading_view_excludes_table_and_fallback() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png"], &released);
        let (ticket, _) = model.begin_submit().unwrap();
        model.finish(ticket, Ok(response(&[("a.png", "HELLO")])));
        assert_eq!(model.results_view(), ResultsView::Table);

        let (ticket, _) = model.begin_submit().unwrap();
        assert_eq!(model.results_view(), ResultsView::Loading);
        // previous results are kept but hidden while loading
        assert_eq!(model.results().len(), 1);

        model.finish(ticket, Ok(response(&[])));
        assert_eq!(model.results_view(), ResultsView::Empty);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png"], &released);
        let (first, _) = model.begin_submit().unwrap();
        model.finish(first, Ok(response(&[("a.png", "first")])));
        let (_second, _) = model.begin_submit().unwrap();

        assert!(!model.finish(first, Ok(response(&[("a.png", "late")]))));
        assert!(model.is_uploading());
        assert_eq!(model.results()[0].message, "first");
    }

    #[test]
    fn test_cancelled_upload_returns_to_idle() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png"], &released);
        let (ticket, _) = model.begin_submit().unwrap();

        assert!(model.finish(ticket, Err(AppError::Cancelled)));
        assert_eq!(model.state(), UploadState::Idle);
        assert!(model.can_submit());
    }

    #[test]
    fn test_service_error_is_kept() {
        let released = Rc::default();
        let mut model = Model::new();
        select(&mut model, &["a.png"], &released);
        let (ticket, _) = model.begin_submit().unwrap();

        let mut body = response(&[("a.png", "HELLO")]);
        body.error = Some("partial batch".into());
        model.finish(ticket, Ok(body));

        assert_eq!(model.state(), UploadState::Done);
        assert_eq!(model.service_error(), Some("partial batch"));
    }

    #[test]
    fn test_copy_text_joins_messages() {
        let released = Rc::default();
        let mut model = Model::new();
        assert_eq!(model.copy_text(), None);

        select(&mut model, &["a.png", "b.png"], &released);
        let (ticket, _) = model.begin_submit().unwrap();
        model.finish(ticket, Ok(response(&[("a.png", "HELLO"), ("b.png", "WORLD")])));

        assert_eq!(model.copy_text().as_deref(), Some("HELLO\nWORLD"));
    }
}
