//! Section Renderer
//!
//! Turns a page layout's sections into views, passing the page's data state
//! to every gated block.

use datapulse_console::{DataState, Section};
use leptos::*;

use super::{
    ChartCard, ConnectionsCard, DataTableCard, FilterBar, LastRefresh, MetricTileGroup,
    PanelCard, RefreshWindowTabs, Tabs,
};

/// Render a list of sections in order
pub fn render_sections(sections: &'static [Section], state: DataState) -> View {
    sections
        .iter()
        .map(|section| render_section(section, state))
        .collect_view()
}

fn render_section(section: &'static Section, state: DataState) -> View {
    match section {
        Section::Filters(fields) => view! { <FilterBar fields=*fields /> }.into_view(),
        Section::Tiles(tiles) => view! { <MetricTileGroup tiles=*tiles state=state /> }.into_view(),
        Section::Grid(cells) => view! {
            <div class="grid grid-2">{render_sections(*cells, state)}</div>
        }
        .into_view(),
        Section::Table(spec) => view! { <DataTableCard spec=spec state=state /> }.into_view(),
        Section::Chart(chart) => view! { <ChartCard title=chart.title state=state /> }.into_view(),
        Section::Panel(panel) => view! {
            <PanelCard title=panel.title test_id=panel.test_id state=state />
        }
        .into_view(),
        Section::Tabs(tabs) => view! { <Tabs tabs=*tabs state=state /> }.into_view(),
        Section::LastRefresh => view! { <LastRefresh /> }.into_view(),
        Section::RefreshWindows => view! { <RefreshWindowTabs /> }.into_view(),
        Section::Connections => view! { <ConnectionsCard /> }.into_view(),
    }
}
