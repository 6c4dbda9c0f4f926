//! Admin Dashboard
//!
//! Stats, the payments table with confirmation toggles, and the detail modal.
//! `DashboardManager` owns every request the page makes; the view components
//! only read the store and call into it.

mod detail_modal;
mod payment_table;
mod stats_bar;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::browser;
use crate::components::NoticeBanner;
use crate::config::{PortalConfig, REFRESH_INTERVAL_MS};
use crate::context::{use_notifier, Notifier};
use crate::state::dashboard::{
    begin_toggle, finish_toggle, rows_from_payments, toggle_notice, DETAIL_FAILURE_MESSAGE,
    REFRESH_FAILURE_MESSAGE, REFRESH_SUCCESS_MESSAGE,
};
use crate::state::{DashboardState, DashboardStateStoreFields, DashboardStore, RowsStatus};
use crate::theme::ThemeToggle;

use detail_modal::PaymentDetailModal;
use payment_table::{PaymentFilters, PaymentTable};
use stats_bar::StatsBar;

/// Why a dashboard fetch is happening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// First load on mount: stats and rows
    Initial,
    /// Timer tick: stats only once rows are loaded, silent on success
    Poll,
    /// Refresh button: stats and rows, announced on success
    Manual,
}

impl RefreshMode {
    fn reloads_rows(self, rows: RowsStatus) -> bool {
        self != RefreshMode::Poll || rows != RowsStatus::Loaded
    }
}

#[derive(Clone, Copy)]
pub struct DashboardManager {
    store: DashboardStore,
    notifier: Notifier,
    config: StoredValue<PortalConfig>,
}

impl DashboardManager {
    pub fn new(store: DashboardStore, notifier: Notifier, config: PortalConfig) -> Self {
        Self { store, notifier, config: StoredValue::new(config) }
    }

    pub fn refresh_data(&self, mode: RefreshMode) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_dashboard_data(&this.config.get_value()).await {
                Ok(data) => {
                    web_sys::console::log_1(
                        &format!("[DASHBOARD] {:?} refresh: {} payments", mode, data.payments.len()).into(),
                    );
                    this.store.stats().set(data.stats);
                    // A toggle in flight owns its row; keep the table as is until it lands
                    let rows_status = this.store.rows_status().get_untracked();
                    if mode.reloads_rows(rows_status) && !this.store.overlay_visible().get_untracked() {
                        *this.store.rows().write() = rows_from_payments(data.payments);
                        this.store.rows_status().set(RowsStatus::Loaded);
                    }
                    if mode == RefreshMode::Manual {
                        this.notifier.success(REFRESH_SUCCESS_MESSAGE);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[DASHBOARD] Refresh failed: {}", e).into());
                    if this.store.rows_status().get_untracked() != RowsStatus::Loaded {
                        this.store.rows_status().set(RowsStatus::Failed);
                    }
                    this.notifier.error(REFRESH_FAILURE_MESSAGE);
                }
            }
        });
    }

    /// Ask the server to set a payment's confirmation flag. Ignored while the overlay is up.
    pub fn toggle_confirmation(&self, payment_id: u32, desired: bool) {
        if self.store.overlay_visible().get_untracked() {
            return;
        }
        let ticket = {
            let rows_field = self.store.rows();
            let mut rows = rows_field.write();
            begin_toggle(&mut rows, payment_id, desired)
        };
        let Some(ticket) = ticket else {
            web_sys::console::error_1(&format!("[DASHBOARD] Unknown payment #{}", payment_id).into());
            return;
        };
        self.store.overlay_visible().set(true);

        let this = *self;
        spawn_local(async move {
            let csrf = browser::csrf_token();
            let outcome = api::toggle_confirmation(&this.config.get_value(), payment_id, desired, &csrf).await;

            let stored = outcome.as_ref().map(|result| result.confirmed).map_err(Clone::clone);
            let changed = {
                let rows_field = this.store.rows();
                let mut rows = rows_field.write();
                finish_toggle(&mut rows, &ticket, &stored)
            };

            match toggle_notice(&outcome) {
                Ok(text) => {
                    web_sys::console::log_1(&format!("[DASHBOARD] Toggle #{}: {}", payment_id, text).into());
                    this.notifier.success(text);
                }
                Err(text) => {
                    web_sys::console::error_1(&format!("[DASHBOARD] Toggle #{} failed: {}", payment_id, text).into());
                    this.notifier.error(text);
                }
            }
            this.store.overlay_visible().set(false);

            // Counters come from the server only
            if changed {
                this.refresh_data(RefreshMode::Poll);
            }
        });
    }

    /// Fetch a payment and open it in the detail modal
    pub fn view_payment_details(&self, payment_id: u32) {
        if self.store.overlay_visible().get_untracked() {
            return;
        }
        self.store.overlay_visible().set(true);

        let this = *self;
        spawn_local(async move {
            match api::fetch_payment_detail(&this.config.get_value(), payment_id).await {
                Ok(payment) => {
                    web_sys::console::log_1(&format!("[DASHBOARD] Loaded payment #{}", payment.id).into());
                    this.store.detail().set(Some(payment));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[DASHBOARD] Detail #{} failed: {}", payment_id, e).into());
                    this.notifier.error(e.user_message(DETAIL_FAILURE_MESSAGE));
                }
            }
            this.store.overlay_visible().set(false);
        });
    }

    pub fn close_modal(&self) {
        self.store.detail().set(None);
    }
}

pub fn use_dashboard() -> DashboardManager {
    expect_context::<DashboardManager>()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = Store::new(DashboardState::default());
    let manager = DashboardManager::new(store, use_notifier(), expect_context::<PortalConfig>());
    provide_context(store);
    provide_context(manager);

    manager.refresh_data(RefreshMode::Initial);

    let poll = StoredValue::new_local(Some(Interval::new(REFRESH_INTERVAL_MS, move || {
        manager.refresh_data(RefreshMode::Poll);
    })));
    on_cleanup(move || {
        poll.try_update_value(|interval| interval.take().map(Interval::cancel));
    });

    view! {
        <div class="dashboard">
            <DashboardHeader />
            <NoticeBanner />
            <StatsBar />
            <section class="payments-section">
                <PaymentFilters />
                <PaymentTable />
            </section>
            <PaymentDetailModal />
            <LoadingOverlay />
        </div>
    }
}

#[component]
fn DashboardHeader() -> impl IntoView {
    let store = expect_context::<DashboardStore>();
    let manager = use_dashboard();

    view! {
        <header class="dashboard-header">
            <h1 class="dashboard-title">"Payments Dashboard"</h1>
            <div class="header-actions">
                <button
                    class="refresh-btn"
                    title="Refresh data"
                    prop:disabled=move || store.overlay_visible().get()
                    on:click=move |_| manager.refresh_data(RefreshMode::Manual)
                >
                    "⟳ Refresh"
                </button>
                <ThemeToggle />
            </div>
        </header>
    }
}

#[component]
fn LoadingOverlay() -> impl IntoView {
    let store = expect_context::<DashboardStore>();

    view! {
        <div class=move || if store.overlay_visible().get() { "loading-overlay show" } else { "loading-overlay" }>
            <div class="spinner"></div>
        </div>
    }
}
