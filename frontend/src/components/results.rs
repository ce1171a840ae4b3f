//! Results table: one row per OCR result, with its thumbnail.

use leptos::*;

use crate::services::PreviewUrl;
use crate::state::ResultRow;

/// Owned copy of a [`ResultRow`] for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRowView {
    pub filename: String,
    pub preview_url: Option<String>,
    pub message: String,
}

impl From<ResultRow<'_, PreviewUrl>> for ResultRowView {
    fn from(row: ResultRow<'_, PreviewUrl>) -> Self {
        Self {
            filename: row.filename.to_string(),
            preview_url: row.preview.map(|p| p.as_str().to_string()),
            message: row.message,
        }
    }
}

#[component]
pub fn ResultsTable(
    /// Rows in service order
    rows: Vec<ResultRowView>,
    /// Copy every message to the clipboard
    #[prop(into)]
    on_copy: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="results-section" id="resultsSection">
            <p class="results-title">"Image Previews and Results:"</p>
            <div class="results-grid">
                <div class="results-head">"Filename"</div>
                <div class="results-head">"Image"</div>
                <div class="results-head">"Processing Result"</div>
                <For
                    each=move || rows.clone().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(idx, row)| {
                        let thumbnail = match row.preview_url {
                            Some(url) => view! {
                                <img class="preview-thumb" src=url alt=format!("Preview {}", idx)/>
                            }.into_view(),
                            None => view! {
                                <span class="preview-missing">"—"</span>
                            }.into_view(),
                        };

                        view! {
                            <div class="results-cell">{row.filename}</div>
                            <div class="results-cell preview-cell">{thumbnail}</div>
                            <div class="results-cell">{row.message}</div>
                        }
                    }
                />
            </div>

            <div class="results-actions">
                <button class="btn btn-copy" id="copyResultsBtn" on:click=move |_| on_copy.call(())>
                    "Copy All Results"
                </button>
            </div>
        </div>
    }
}
