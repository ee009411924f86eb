//! Topbar Component
//!
//! Breadcrumbs and title of the current page.

use datapulse_console::{breadcrumb_label, BRAND};
use leptos::*;
use leptos_router::*;

/// Header above the page content
#[component]
pub fn Topbar() -> impl IntoView {
    let location = use_location();
    let label = create_memo(move |_| breadcrumb_label(&location.pathname.get()));

    view! {
        <header class="topbar">
            <Breadcrumbs label=label />
            <h1 class="topbar__title" data-testid="page-title">{move || label.get()}</h1>
        </header>
    }
}

#[component]
fn Breadcrumbs(label: Memo<&'static str>) -> impl IntoView {
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb" data-testid="breadcrumbs">
            <A href="/" class="breadcrumbs__root">{BRAND}</A>
            <span class="breadcrumbs__separator">"/"</span>
            <span class="breadcrumbs__current">{move || label.get()}</span>
        </nav>
    }
}
