//! Image upload view.
//!
//! Handles file selection, the upload to the OCR service and result display.

use leptos::*;
use web_sys::{AbortController, Event, File, HtmlInputElement};

use crate::services::{clipboard, OcrClient, PreviewUrl};
use crate::state::{ResultsView, UploadModel};
use crate::{AppError, ResultRowView, ProcessingIndicator, ResultsTable};
use crate::{ACCEPTED_TYPES, COPY_ACK_TEXT, NO_RESULTS_TEXT};

type ViewModel = UploadModel<File, PreviewUrl>;

#[component]
pub fn UploadView() -> impl IntoView {
    let model = create_rw_signal(ViewModel::new());
    let in_flight = store_value(None::<AbortController>);

    // Abort a pending upload when the view goes away
    on_cleanup(move || {
        in_flight.try_with_value(|controller| {
            if let Some(controller) = controller {
                log::debug!("Aborting pending upload");
                controller.abort();
            }
        });
    });

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };

        let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        if files.is_empty() {
            return;
        }

        let count = files.len();
        model.update(|m| {
            m.select_files(files, PreviewUrl::create_or_log);
        });
        log::info!("🖼️ Selected {} image(s)", count);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some((ticket, files)) = model.try_update(|m| m.begin_submit()).flatten() else {
            return;
        };

        let controller = match AbortController::new() {
            Ok(controller) => controller,
            Err(e) => {
                let err = AppError::Browser(format!("Failed to create AbortController: {:?}", e));
                log::error!("❌ {}", err);
                model.update(|m| {
                    m.finish(ticket, Err(err));
                });
                return;
            }
        };
        in_flight.set_value(Some(controller.clone()));

        spawn_local(async move {
            let outcome = OcrClient::new().upload(&files, &controller).await;

            match &outcome {
                Ok(response) => {
                    log::info!("✅ OCR returned {} result(s)", response.results.len());
                    if let Some(error) = &response.error {
                        log::warn!("⚠️ OCR service reported: {}", error);
                    }
                }
                Err(AppError::Cancelled) => log::info!("🚫 Upload cancelled"),
                Err(e) => log::error!("❌ Upload failed: {}", e),
            }

            in_flight.try_update_value(|pending| *pending = None);
            model.try_update(|m| m.finish(ticket, outcome));
        });
    };

    let on_copy = Callback::new(move |_: ()| {
        let Some(text) = model.with_untracked(|m| m.copy_text()) else {
            return;
        };

        spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => clipboard::acknowledge(COPY_ACK_TEXT),
                Err(e) => log::error!("Could not copy text: {}", e),
            }
        });
    });

    let is_uploading = move || model.with(|m| m.is_uploading());
    let service_error = move || {
        model.with(|m| {
            if m.is_uploading() {
                None
            } else {
                m.service_error().map(str::to_string)
            }
        })
    };

    view! {
        <div class="upload-view">
            <form class="upload-form" on:submit=on_submit>
                <input
                    type="file"
                    id="fileInput"
                    class="file-input"
                    accept=ACCEPTED_TYPES
                    multiple=true
                    on:change=on_file_change
                />
                <button type="submit" class="upload-button" disabled=is_uploading>
                    {move || if is_uploading() { "Uploading..." } else { "Upload and Process" }}
                </button>
            </form>

            <Show
                when=move || service_error().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || service_error().unwrap_or_default()}
                </div>
            </Show>

            {move || match model.with(|m| m.results_view()) {
                ResultsView::Loading => view! { <ProcessingIndicator/> }.into_view(),
                ResultsView::Empty => view! { <p class="no-results">{NO_RESULTS_TEXT}</p> }.into_view(),
                ResultsView::Table => {
                    let rows: Vec<ResultRowView> = model.with(|m| {
                        m.rows().into_iter().map(ResultRowView::from).collect()
                    });
                    view! { <ResultsTable rows=rows on_copy=on_copy/> }.into_view()
                }
            }}
        </div>
    }
}
