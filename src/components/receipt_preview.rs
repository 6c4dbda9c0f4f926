//! Receipt Preview Component
//!
//! Upload prompt and inline preview of the selected receipt.

use leptos::prelude::*;

use crate::format::format_file_size;
use crate::state::{FilePreview, FormState};

const UPLOAD_PROMPT: &str = "Click to upload receipt";

#[component]
pub fn ReceiptPreview(state: RwSignal<FormState>) -> impl IntoView {
    let preview = move || state.with(|s| s.preview.clone());
    let receipt = move || state.with(|s| s.draft.receipt.clone());

    let file_text = move || match receipt() {
        Some(info) => format!("{} ({})", info.name, format_file_size(info.size)),
        None => UPLOAD_PROMPT.to_string(),
    };
    let showing_preview = move || matches!(preview(), FilePreview::Image { .. } | FilePreview::Pdf { .. });
    let type_warning = move || {
        receipt()
            .filter(|info| !info.is_accepted_type())
            .map(|_| view! { <p class="file-warning">"Unsupported file type. Use JPG, PNG, GIF or PDF."</p> })
    };

    view! {
        <div class=move || if showing_preview() { "file-upload-display hidden" } else { "file-upload-display" }>
            <span class="upload-icon">"⬆"</span>
            <span
                id="fileText"
                class=move || if receipt().is_some() { "file-text selected" } else { "file-text" }
            >
                {file_text}
            </span>
        </div>

        <div
            id="file-preview-container"
            class=move || if showing_preview() { "file-preview-container" } else { "file-preview-container hidden" }
        >
            {move || match preview() {
                FilePreview::Image { data_url } => view! {
                    <img src=data_url alt="Receipt preview" />
                }.into_any(),
                FilePreview::Pdf { file_name } => view! {
                    <div class="pdf-preview">
                        <span class="pdf-icon">"📄"</span>
                        <span>{file_name}</span>
                    </div>
                }.into_any(),
                _ => ().into_any(),
            }}
        </div>

        {type_warning}
    }
}
