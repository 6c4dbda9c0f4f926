use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::format::{format_amount, format_timestamp, reason_display};
use crate::models::Payment;

/// One payment record on the tracking page; cards fade in one after another
#[component]
pub fn PaymentCard(payment: Payment, index: usize) -> impl IntoView {
    let delay = format!("animation-delay: {:.1}s", index as f64 * 0.1);
    let reason = reason_display(payment.reason.as_deref()).to_string();

    view! {
        <div class="payment-card" style=delay>
            <div class="payment-header">
                <span class="payment-id">{format!("Payment #{}", payment.id)}</span>
                <StatusBadge confirmed=payment.confirmed />
            </div>
            <div class="payment-details">
                <div class="detail-row">
                    <span class="detail-label">"Name"</span>
                    <span class="detail-value">{payment.name}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">"Matric Number"</span>
                    <span class="detail-value">{payment.matric_number}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">"Amount"</span>
                    <span class="detail-value amount">{format_amount(payment.amount)}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">"Reason"</span>
                    <span class="detail-value">{reason}</span>
                </div>
                {payment.receipt.map(|url| view! {
                    <div class="detail-row">
                        <span class="detail-label">"Receipt"</span>
                        <a class="receipt-link" href=url target="_blank" rel="noopener">"View Receipt"</a>
                    </div>
                })}
            </div>
            <div class="payment-footer">
                <span class="timestamp">{format_timestamp(&payment.timestamp)}</span>
            </div>
        </div>
    }
}
