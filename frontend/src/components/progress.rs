use leptos::*;

/// Spinner shown while an upload is in flight.
#[component]
pub fn ProcessingIndicator() -> impl IntoView {
    view! {
        <div class="processing" id="processingIndicator">
            <svg
                class="spinner"
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
            >
                <circle class="spinner-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"/>
                <path
                    class="spinner-head"
                    fill="currentColor"
                    d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"
                />
            </svg>
            <p class="processing-text">"Processing..."</p>
        </div>
    }
}
