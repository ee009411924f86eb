//! Loading Component
//!
//! Skeleton states shown while a block has no data.

use leptos::*;

/// Skeleton for a metric tile value
#[component]
pub fn TileSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton metric-tile__skeleton" data-testid="tile-skeleton">
            <div class="skeleton__line skeleton__line--wide" />
            <div class="skeleton__line skeleton__line--short" />
        </div>
    }
}

/// Placeholder area where a chart will be drawn
#[component]
pub fn ChartPlaceholder() -> impl IntoView {
    view! { <div class="chart-placeholder" /> }
}
