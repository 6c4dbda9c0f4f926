use leptos::prelude::*;

use crate::format::format_amount;
use crate::state::{DashboardStateStoreFields, DashboardStore};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = expect_context::<DashboardStore>();
    let stats = move || store.stats().get();

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-label">"Total Payments"</span>
                <span class="stat-value" id="total-payments">{move || stats().total}</span>
            </div>
            <div class="stat-card confirmed">
                <span class="stat-label">"Confirmed"</span>
                <span class="stat-value" id="confirmed-payments">{move || stats().confirmed}</span>
            </div>
            <div class="stat-card pending">
                <span class="stat-label">"Pending"</span>
                <span class="stat-value" id="pending-payments">{move || stats().pending}</span>
            </div>
            <div class="stat-card amount">
                <span class="stat-label">"Confirmed Amount"</span>
                <span class="stat-value" id="total-amount">{move || format_amount(stats().total_amount)}</span>
            </div>
        </div>
    }
}
