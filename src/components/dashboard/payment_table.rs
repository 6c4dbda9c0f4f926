//! Payments table and its search/status filters

use leptos::prelude::*;

use super::use_dashboard;
use crate::components::StatusBadge;
use crate::format::{format_amount, format_timestamp};
use crate::state::dashboard::filter_rows;
use crate::state::{DashboardStateStoreFields, DashboardStore, PaymentRow, RowsStatus, StatusFilter};

#[component]
pub fn PaymentFilters() -> impl IntoView {
    let store = expect_context::<DashboardStore>();

    view! {
        <div class="table-controls">
            <input
                type="search"
                class="search-input"
                placeholder="Search by name or matric number"
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
            <select
                class="status-filter"
                on:change=move |ev| store.status_filter().set(StatusFilter::from_value(&event_target_value(&ev)))
            >
                {StatusFilter::ALL.into_iter().map(|filter| view! {
                    <option
                        value=filter.value()
                        prop:selected=move || store.status_filter().get() == filter
                    >
                        {filter.label()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn PaymentTable() -> impl IntoView {
    let store = expect_context::<DashboardStore>();

    let visible_rows = move || {
        let search = store.search().get();
        let status = store.status_filter().get();
        filter_rows(&store.rows().read(), &search, status)
    };
    let is_empty = move || visible_rows().is_empty();

    view! {
        <div class="table-container">
            <table class="payments-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Matric Number"</th>
                        <th>"Amount"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                        <th>"Confirmed"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    // Key on the mutable bits so a settled toggle redraws its row
                    <For
                        each=visible_rows
                        key=|row: &PaymentRow| (row.payment.id, row.payment.confirmed, row.control_checked)
                        children=move |row| view! { <PaymentTableRow row=row /> }
                    />
                </tbody>
            </table>
            <Show when=is_empty>
                <p class=move || match store.rows_status().get() {
                    RowsStatus::Failed => "empty-table load-error",
                    _ => "empty-table",
                }>
                    {move || store.rows_status().get().empty_message()}
                </p>
            </Show>
        </div>
    }
}

#[component]
fn PaymentTableRow(row: PaymentRow) -> impl IntoView {
    let store = expect_context::<DashboardStore>();
    let manager = use_dashboard();
    let id = row.payment.id;

    let on_toggle = move |ev: web_sys::MouseEvent| {
        if store.overlay_visible().get_untracked() {
            ev.prevent_default();
            return;
        }
        manager.toggle_confirmation(id, event_target_checked(&ev));
    };

    view! {
        <tr data-payment-id=id.to_string()>
            <td>{format!("#{}", id)}</td>
            <td>{row.payment.name}</td>
            <td>{row.payment.matric_number}</td>
            <td>{format_amount(row.payment.amount)}</td>
            <td>{format_timestamp(&row.payment.timestamp)}</td>
            <td><StatusBadge confirmed=row.payment.confirmed /></td>
            <td>
                <label class="toggle-switch">
                    <input
                        type="checkbox"
                        class="confirmation-toggle"
                        prop:checked=row.control_checked
                        on:click=on_toggle
                    />
                    <span class="slider"></span>
                </label>
            </td>
            <td>
                <button class="view-btn" on:click=move |_| manager.view_payment_details(id)>"View"</button>
            </td>
        </tr>
    }
}
