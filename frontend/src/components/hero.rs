//! Page heading

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Select one or more images, then upload them to extract their text."
            </p>
        </div>
    }
}
