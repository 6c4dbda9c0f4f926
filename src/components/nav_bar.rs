//! Navigation Bar Component
//!
//! Top bar with page links, the theme toggle, and the collapsible mobile menu.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::Page;
use crate::theme::ThemeToggle;

const LINKS: &[(Page, &str, &str)] = &[
    (Page::Submit, "/", "Submit Payment"),
    (Page::Track, "/track/", "Track Payment"),
];

/// Navigation bar; the mobile panel closes on any click outside it
#[component]
pub fn NavBar(current: Page) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let button_ref = NodeRef::<leptos::html::Button>::new();

    let toggle = move |_: web_sys::MouseEvent| set_menu_open.update(|open| *open = !*open);

    // Single document-level listener for outside clicks
    let outside_click = window_event_listener(ev::click, move |ev| {
        if !menu_open.get_untracked() {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let in_panel = panel_ref.get_untracked().is_some_and(|el| el.contains(Some(&target)));
        let in_button = button_ref.get_untracked().is_some_and(|el| el.contains(Some(&target)));
        if !in_panel && !in_button {
            set_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    let link_class = move |page: Page| if page == current { "nav-link active" } else { "nav-link" };

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="/" class="nav-brand">"Class Ledger"</a>

                <div class="nav-links">
                    {LINKS.iter().map(|(page, href, label)| view! {
                        <a href=*href class=link_class(*page)>{*label}</a>
                    }).collect_view()}
                    <ThemeToggle />
                </div>

                <button
                    class="mobile-menu-btn"
                    aria-label="Toggle navigation"
                    node_ref=button_ref
                    on:click=toggle
                >
                    <span class=move || if menu_open.get() { "menu-icon hidden" } else { "menu-icon" }>"☰"</span>
                    <span class=move || if menu_open.get() { "close-icon" } else { "close-icon hidden" }>"✕"</span>
                </button>
            </div>

            <div
                class=move || if menu_open.get() { "mobile-menu show" } else { "mobile-menu" }
                node_ref=panel_ref
            >
                {LINKS.iter().map(|(page, href, label)| view! {
                    <a href=*href class=link_class(*page)>{*label}</a>
                }).collect_view()}
                <ThemeToggle class="mobile-theme-toggle" />
            </div>
        </nav>
    }
}
