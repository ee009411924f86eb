//! Live Monitor Components
//!
//! Refresh information and window selector of the sales monitor.

use datapulse_console::{RefreshWindow, REFRESH_UNAVAILABLE};
use leptos::*;

use super::tabs::tab_class;

/// "Last refresh" inline info
#[component]
pub fn LastRefresh() -> impl IntoView {
    view! {
        <div class="inline-info" data-testid="last-refresh">
            <span class="inline-info__title">"Last refresh"</span>
            <span class="inline-info__value">{REFRESH_UNAVAILABLE}</span>
        </div>
    }
}

/// Time window selector
#[component]
pub fn RefreshWindowTabs() -> impl IntoView {
    let window = create_rw_signal(RefreshWindow::default());

    view! {
        <div class="tabs__list" role="tablist" data-testid="refresh-windows">
            {RefreshWindow::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            type="button"
                            class=move || tab_class(window.get() == option)
                            on:click=move |_| window.set(option)
                        >
                            {option.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
