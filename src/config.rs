//! Portal Configuration
//!
//! Endpoint bases and the fixed timings/keys used across pages.

use wasm_bindgen::JsCast;

/// Dashboard stats polling period
pub const REFRESH_INTERVAL_MS: u32 = 30_000;
/// Notification lifetime on the admin dashboard
pub const DASHBOARD_NOTICE_MS: u32 = 3_000;
/// Notification lifetime on the submission and tracking pages
pub const PAGE_NOTICE_MS: u32 = 5_000;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";
pub const CURRENCY_SYMBOL: &str = "₦";

/// Receipt types the backend accepts
pub const ACCEPTED_RECEIPT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "application/pdf"];

const DEFAULT_ADMIN_BASE: &str = "/admin-dashboard";
const API_BASE_META: &str = "portal-api-base";
const ADMIN_BASE_META: &str = "portal-admin-base";

/// Where the backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base of the public payments API (empty = same origin)
    pub api_base: String,
    /// Base of the admin dashboard endpoints
    pub admin_base: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("PORTAL_API_BASE").unwrap_or("").to_string(),
            admin_base: DEFAULT_ADMIN_BASE.to_string(),
        }
    }
}

impl PortalConfig {
    /// Read `<meta name="portal-api-base">` / `<meta name="portal-admin-base">`,
    /// falling back to the build-time defaults.
    pub fn from_document() -> Self {
        let defaults = Self::default();
        Self {
            api_base: read_meta(API_BASE_META).unwrap_or(defaults.api_base),
            admin_base: read_meta(ADMIN_BASE_META).unwrap_or(defaults.admin_base),
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }

    pub fn admin_url(&self, path: &str) -> String {
        join_url(&self.admin_base, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    let content = meta.content().trim().to_string();
    (!content.is_empty()).then_some(content)
}
