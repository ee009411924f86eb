//! Sidebar Component
//!
//! Brand and the sectioned navigation tree.

use datapulse_console::{NavItem, BRAND, NAV_SECTIONS};
use leptos::*;
use leptos_router::*;

/// Navigation sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">{BRAND}</div>
            <nav class="sidebar__nav">
                {NAV_SECTIONS
                    .iter()
                    .map(|section| view! {
                        <div class="sidebar__section">
                            <p class="sidebar__section-title">{section.title}</p>
                            <div class="sidebar__items">
                                {section.items.iter().map(|item| view! { <SidebarLink item=item /> }).collect_view()}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual navigation link, active on an exact path match
#[component]
fn SidebarLink(item: &'static NavItem) -> impl IntoView {
    view! {
        <A
            href=item.path
            exact=true
            class="sidebar__link"
            active_class="is-active"
            attr:data-testid=item.test_id
        >
            <span class="sidebar__dot" aria-hidden="true" />
            <span>{item.label}</span>
        </A>
    }
}
