//! Payment Form Component
//!
//! Collects the payment fields and receipt, previews the file, and posts a
//! multipart submission.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::components::{NoticeBanner, ReceiptPreview};
use crate::config::PortalConfig;
use crate::context::use_notifier;
use crate::error::{ApiError, Field, ValidationError};
use crate::state::form::{SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE};
use crate::state::{FormState, ReceiptInfo, SubmitStep};

#[component]
pub fn PaymentForm() -> impl IntoView {
    let config = StoredValue::new(expect_context::<PortalConfig>());
    let notifier = use_notifier();

    let state = RwSignal::new(FormState::default());
    // web_sys::File is !Send, so it lives outside the signal
    let receipt_file = StoredValue::new_local(None::<web_sys::File>);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let handle_file_change = move |file: Option<web_sys::File>| {
        let info = file.as_ref().map(|f| ReceiptInfo { name: f.name(), mime: f.type_(), size: f.size() });
        let generation = state.try_update(|s| s.select_receipt(info)).flatten();
        receipt_file.set_value(file.clone());

        if let (Some(generation), Some(file)) = (generation, file) {
            spawn_local(async move {
                let data_url = match browser::read_as_data_url(&file).await {
                    Ok(url) => Some(url),
                    Err(e) => {
                        web_sys::console::error_1(&format!("[FORM] Preview read failed: {}", e).into());
                        None
                    }
                };
                state.try_update(|s| s.apply_image_preview(generation, data_url));
            });
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        handle_file_change(input.files().and_then(|files| files.get(0)));
    };

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let valid = match state.try_update(|s| s.begin_submit()) {
            Some(SubmitStep::Send(valid)) => valid,
            Some(SubmitStep::Invalid(e)) => {
                notifier.error(e.to_string());
                return;
            }
            Some(SubmitStep::Busy) | None => return,
        };
        let Some(file) = receipt_file.get_value() else {
            state.update(|s| s.finish_submit(&Err(ApiError::Network("receipt file unavailable".to_string()))));
            notifier.error(ValidationError::MissingField(Field::Receipt).to_string());
            return;
        };

        spawn_local(async move {
            web_sys::console::log_1(&format!("[FORM] Submitting payment for {}", valid.matric_number).into());
            let outcome = api::create_payment(&config.get_value(), &valid, &file).await;

            match &outcome {
                Ok(payment) => {
                    web_sys::console::log_1(&format!("[FORM] Created payment #{}", payment.id).into());
                    notifier.success(SUBMIT_SUCCESS_MESSAGE);
                    receipt_file.set_value(None);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[FORM] Submission error: {}", e).into());
                    notifier.error(e.user_message(SUBMIT_FAILURE_MESSAGE));
                }
            }
            state.try_update(|s| s.finish_submit(&outcome));
        });
    };

    view! {
        <div class="form-card">
            <h2 class="form-title">"Payment Confirmation"</h2>
            <form id="paymentForm" class="payment-form" on:submit=handle_submit novalidate>
                <div class="form-group">
                    <label for="name" class="form-label">"Full Name"</label>
                    <input
                        type="text"
                        id="name"
                        name=Field::Name.form_key()
                        class="form-input"
                        placeholder="Enter your full name"
                        prop:value=move || state.with(|s| s.draft.name.clone())
                        on:input=move |ev| state.update(|s| s.draft.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="matric_number" class="form-label">"Matric Number"</label>
                    <input
                        type="text"
                        id="matric_number"
                        name=Field::MatricNumber.form_key()
                        class="form-input"
                        placeholder="Enter your matriculation number"
                        prop:value=move || state.with(|s| s.draft.matric_number.clone())
                        on:input=move |ev| state.update(|s| s.draft.matric_number = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="amount" class="form-label">"Amount (₦)"</label>
                    <input
                        type="number"
                        id="amount"
                        name=Field::Amount.form_key()
                        class="form-input"
                        min="0"
                        step="1"
                        placeholder="Enter amount paid"
                        prop:value=move || state.with(|s| s.draft.amount.clone())
                        on:input=move |ev| state.update(|s| s.draft.amount = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="reason" class="form-label">"Reason for Payment"</label>
                    <textarea
                        id="reason"
                        name=Field::Reason.form_key()
                        class="form-textarea"
                        rows="3"
                        placeholder="What is this payment for?"
                        prop:value=move || state.with(|s| s.draft.reason.clone())
                        on:input=move |ev| state.update(|s| s.draft.reason = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="receipt" class="form-label">"Receipt"</label>
                    <label class="file-upload">
                        <input
                            type="file"
                            id="receipt"
                            name=Field::Receipt.form_key()
                            class="file-input"
                            accept="image/*,application/pdf"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                        <ReceiptPreview state=state />
                    </label>
                </div>

                <button
                    type="submit"
                    class="submit-btn"
                    prop:disabled=move || state.with(|s| s.is_submitting())
                >
                    {move || state.with(|s| s.submit_label())}
                </button>
            </form>
            <NoticeBanner />
        </div>
    }
}
