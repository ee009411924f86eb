//! Filter Bar Component
//!
//! Filter controls of a page. Values are not wired to anything yet.

use datapulse_console::FilterField;
use leptos::*;

/// Horizontal bar of filter controls
#[component]
pub fn FilterBar(fields: &'static [FilterField]) -> impl IntoView {
    view! {
        <div class="filter-bar" data-testid="filter-bar">
            {fields.iter().map(|field| view! { <FilterControl field=field /> }).collect_view()}
        </div>
    }
}

#[component]
fn FilterControl(field: &'static FilterField) -> impl IntoView {
    let control = match field.kind.input_type() {
        Some(input_type) => view! {
            <input
                type=input_type
                class="filter-field__input"
                placeholder=field.placeholder
                data-testid=field.test_id()
            />
        }
        .into_view(),
        None => view! {
            <select class="filter-field__input" data-testid=field.test_id()>
                <option>{field.placeholder}</option>
            </select>
        }
        .into_view(),
    };

    view! {
        <label class="filter-field">
            <span class="filter-field__label">{field.label}</span>
            {control}
        </label>
    }
}
