//! Tabs Component
//!
//! Tab strip over page sections. The first tab is active initially and the
//! active tab is local to the instance.

use datapulse_console::{DataState, TabSpec};
use leptos::*;

use super::sections::render_sections;

/// Tab strip with one body per tab
#[component]
pub fn Tabs(tabs: &'static [TabSpec], state: DataState) -> impl IntoView {
    let active = create_rw_signal(first_tab(tabs));

    view! {
        <div class="tabs">
            <div class="tabs__list" role="tablist">
                {tabs
                    .iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || tab_class(active.get() == tab.id)
                                data-testid=tab.test_id
                                on:click=move |_| active.set(tab.id)
                            >
                                {tab.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="tabs__panel" role="tabpanel">
                {move || {
                    let id = active.get();
                    tabs.iter()
                        .find(|tab| tab.id == id)
                        .map(|tab| render_sections(tab.body, state))
                }}
            </div>
        </div>
    }
}

fn first_tab(tabs: &[TabSpec]) -> &'static str {
    tabs.first().map(|tab| tab.id).unwrap_or_default()
}

pub(crate) fn tab_class(active: bool) -> &'static str {
    if active {
        "tabs__tab is-active"
    } else {
        "tabs__tab"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datapulse_console::{Page, PageLayout, Section};

    #[test]
    fn test_first_tab_is_active() {
        let layout = PageLayout::for_page(Page::OperationsInventory);
        let tabs = layout
            .sections
            .iter()
            .find_map(|section| match section {
                Section::Tabs(tabs) => Some(*tabs),
                _ => None,
            })
            .unwrap();
        assert_eq!(first_tab(tabs), "warehouse");
        assert_eq!(first_tab(&[]), "");
    }

    #[test]
    fn test_tab_class() {
        assert_eq!(tab_class(true), "tabs__tab is-active");
        assert_eq!(tab_class(false), "tabs__tab");
    }
}
