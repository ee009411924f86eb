//! Metric Tile Component
//!
//! Headline metrics of a page. A tile without a value shows a skeleton.

use datapulse_console::{DataState, MetricTile, TileValues};
use leptos::*;

use super::loading::TileSkeleton;

/// Row of metric tiles
#[component]
pub fn MetricTileGroup(
    tiles: &'static [MetricTile],
    state: DataState,
    /// Formatted values keyed by tile id
    #[prop(optional)]
    values: TileValues,
) -> impl IntoView {
    view! {
        <div class="metric-grid" data-state=state.as_str()>
            {tiles
                .iter()
                .map(|tile| {
                    let value = tile.value(&values).map(str::to_string);
                    view! { <MetricTileCard tile=tile value=value /> }
                })
                .collect_view()}
        </div>
    }
}

/// Single metric tile
#[component]
fn MetricTileCard(tile: &'static MetricTile, value: Option<String>) -> impl IntoView {
    view! {
        <div
            class=format!("metric-tile {}", tile.tone_class())
            data-testid=tile.test_id.unwrap_or(tile.id)
        >
            <span class="metric-tile__label">{tile.label}</span>
            {match value {
                Some(value) => view! { <p class="metric-tile__value">{value}</p> }.into_view(),
                None => view! { <TileSkeleton /> }.into_view(),
            }}
        </div>
    }
}
