use leptos::ev;
use leptos::prelude::*;

use super::use_dashboard;
use crate::components::StatusBadge;
use crate::format::{format_amount, format_timestamp, reason_display};
use crate::state::{DashboardStateStoreFields, DashboardStore};

/// Modal for the record in `detail`; Escape or a backdrop click closes it
#[component]
pub fn PaymentDetailModal() -> impl IntoView {
    let store = expect_context::<DashboardStore>();
    let manager = use_dashboard();

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && store.detail().read_untracked().is_some() {
            manager.close_modal();
        }
    });
    on_cleanup(move || escape.remove());

    move || {
        store.detail().get().map(|payment| {
            let reason = reason_display(payment.reason.as_deref()).to_string();
            view! {
                <div class="modal show" on:click=move |_| manager.close_modal()>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h2>{format!("Payment #{}", payment.id)}</h2>
                            <button class="modal-close" aria-label="Close" on:click=move |_| manager.close_modal()>
                                "✕"
                            </button>
                        </div>
                        <div class="modal-body">
                            <p><strong>"Name: "</strong>{payment.name}</p>
                            <p><strong>"Matric Number: "</strong>{payment.matric_number}</p>
                            <p><strong>"Amount: "</strong>{format_amount(payment.amount)}</p>
                            <p><strong>"Reason: "</strong>{reason}</p>
                            <p><strong>"Submitted: "</strong>{format_timestamp(&payment.timestamp)}</p>
                            <p><strong>"Status: "</strong><StatusBadge confirmed=payment.confirmed /></p>
                            {payment.receipt.map(|url| {
                                let href = url.clone();
                                view! {
                                <div class="receipt-preview">
                                    <a href=href target="_blank" rel="noopener">
                                        <img src=url alt="Payment receipt" />
                                    </a>
                                </div>
                            }})}
                        </div>
                    </div>
                </div>
            }
        })
    }
}
