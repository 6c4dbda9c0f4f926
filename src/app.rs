//! Payment Portal Frontend App
//!
//! Picks the page from the location path and wires up the shared services.

use leptos::prelude::*;

use crate::browser;
use crate::components::{DashboardPage, NavBar, PaymentForm, PaymentTracker};
use crate::config::{PortalConfig, DASHBOARD_NOTICE_MS, PAGE_NOTICE_MS};
use crate::context::Notifier;
use crate::theme::ThemeManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Submit,
    Track,
    Dashboard,
}

impl Page {
    pub fn from_path(path: &str, admin_base: &str) -> Self {
        let path = path.trim_end_matches('/');
        let admin_base = url_path(admin_base).trim_end_matches('/');
        if !admin_base.is_empty() && (path == admin_base || path.starts_with(&format!("{}/", admin_base))) {
            Page::Dashboard
        } else if path.ends_with("/track") || path.ends_with("track.html") {
            Page::Track
        } else {
            Page::Submit
        }
    }

    /// How long a notification stays up on this page
    pub fn notice_lifetime_ms(self) -> u32 {
        match self {
            Page::Dashboard => DASHBOARD_NOTICE_MS,
            Page::Submit | Page::Track => PAGE_NOTICE_MS,
        }
    }
}

/// Path part of an absolute URL; relative paths pass through
fn url_path(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => url,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = PortalConfig::from_document();
    let page = Page::from_path(&browser::current_path(), &config.admin_base);
    web_sys::console::log_1(&format!("[APP] Mounting {:?} page, api base {:?}", page, config.api_base).into());

    provide_context(config);
    provide_context(ThemeManager::init());
    provide_context(Notifier::new(page.notice_lifetime_ms()));

    // The dashboard carries its own header
    match page {
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Submit => view! {
            <NavBar current=page />
            <main class="main-content">
                <PaymentForm />
            </main>
        }
        .into_any(),
        Page::Track => view! {
            <NavBar current=page />
            <main class="main-content">
                <PaymentTracker />
            </main>
        }
        .into_any(),
    }
}
