//! Payment Tracker Component
//!
//! Looks up payments by matric number and lists them as cards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{NoticeBanner, PaymentCard};
use crate::config::PortalConfig;
use crate::context::use_notifier;
use crate::state::tracker::not_found_message;
use crate::state::{TrackerState, TrackerView};

#[component]
pub fn PaymentTracker() -> impl IntoView {
    let config = StoredValue::new(expect_context::<PortalConfig>());
    let notifier = use_notifier();
    let state = RwSignal::new(TrackerState::default());

    let handle_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let key = match state.try_update(|s| s.begin_search()) {
            Some(Ok(key)) => key,
            Some(Err(e)) => {
                notifier.error(e.to_string());
                return;
            }
            None => return,
        };
        notifier.clear();

        spawn_local(async move {
            let outcome = api::list_payments_by_matric(&config.get_value(), &key).await;
            if let Ok(payments) = &outcome {
                web_sys::console::log_1(&format!("[TRACK] {} record(s) for {}", payments.len(), key).into());
            }
            if let Some(Some(failure)) = state.try_update(|s| s.finish_search(outcome)) {
                web_sys::console::error_1(&format!("[TRACK] Lookup failed: {}", failure.error).into());
                notifier.error(failure.message());
            }
        });
    };

    let back_to_search = move |_: web_sys::MouseEvent| {
        notifier.clear();
        state.update(|s| s.show_search_form());
    };
    // Typing in the lookup input must not rebuild the form
    let view_state = Memo::new(move |_| state.with(|s| s.view.clone()));

    view! {
        <div class="track-card">
            {move || match view_state.get() {
                TrackerView::Search => view! {
                    <form id="searchForm" class="search-form" on:submit=handle_search>
                        <h2 class="form-title">"Track Your Payment"</h2>
                        <div class="form-group">
                            <label for="matricNumber" class="form-label">"Matric Number"</label>
                            <input
                                type="text"
                                id="matricNumber"
                                class="form-input"
                                placeholder="Enter your matriculation number"
                                prop:value=move || state.with(|s| s.query.clone())
                                on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
                            />
                        </div>
                        <button type="submit" class="submit-btn">"Track Payment"</button>
                    </form>
                }.into_any(),

                TrackerView::Loading { .. } => view! {
                    <div id="loadingState" class="loading-state">
                        <div class="spinner"></div>
                        <p>"Searching for payment records..."</p>
                    </div>
                }.into_any(),

                TrackerView::Results { key, payments } => {
                    let count = state.with_untracked(|s| s.record_count());
                    let count_label = state.with_untracked(|s| s.record_count_label());
                    let noun = if count == 1 { "record" } else { "records" };
                    view! {
                        <div id="resultsSection" class="results-section">
                            <div class="results-header">
                                <h3>{format!("Payment records for {}", key)}</h3>
                                <span class="record-count">
                                    <span id="recordCount">{count_label}</span>
                                    " "
                                    {noun}
                                </span>
                            </div>
                            <div id="paymentResults" class="payment-results">
                                {payments.into_iter().enumerate().map(|(index, payment)| view! {
                                    <PaymentCard payment=payment index=index />
                                }).collect_view()}
                            </div>
                            <button class="back-btn" on:click=back_to_search>"Search Again"</button>
                        </div>
                    }.into_any()
                }

                TrackerView::NoResults { key } => view! {
                    <div id="noResults" class="no-results">
                        <h3>"No Records Found"</h3>
                        <p id="noResultsMessage">{not_found_message(&key)}</p>
                        <button class="back-btn" on:click=back_to_search>"Search Again"</button>
                    </div>
                }.into_any(),
            }}
            <NoticeBanner />
        </div>
    }
}
