//! Notice Banner Component
//!
//! Renders the page's current transient notification, if any.

use leptos::prelude::*;

use crate::context::use_notifier;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notifier = use_notifier();

    move || {
        notifier.current().map(|notice| {
            view! {
                <div class=format!("{} show", notice.kind.class()) role="status">
                    {notice.text}
                </div>
            }
        })
    }
}
