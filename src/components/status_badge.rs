use leptos::prelude::*;

use crate::format::status_label;

/// Confirmed/pending pill
#[component]
pub fn StatusBadge(confirmed: bool) -> impl IntoView {
    let (class, label) = status_label(confirmed);
    let icon = if confirmed { "✓" } else { "◷" };

    view! {
        <span class=format!("status-badge {}", class)>
            <span class="status-icon">{icon}</span>
            {label}
        </span>
    }
}
