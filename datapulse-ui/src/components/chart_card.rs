//! Chart Card Component
//!
//! Titled cards with a placeholder body and a data-state gate. Charts are
//! not drawn yet.

use datapulse_console::DataState;
use leptos::*;

use super::data_state_gate::DataStateGate;
use super::loading::ChartPlaceholder;

/// Chart placeholder card
#[component]
pub fn ChartCard(title: &'static str, state: DataState) -> impl IntoView {
    view! {
        <div class="card" data-testid="chart-card">
            <div class="card-header">
                <h3 class="card-title">{title}</h3>
            </div>
            <ChartPlaceholder />
            <DataStateGate state=state />
        </div>
    }
}

/// Free-form panel such as alerts or recommendations
#[component]
pub fn PanelCard(title: &'static str, test_id: &'static str, state: DataState) -> impl IntoView {
    view! {
        <div class="card" data-testid=test_id>
            <div class="card-header">
                <h3 class="card-title">{title}</h3>
            </div>
            <ChartPlaceholder />
            <DataStateGate state=state />
        </div>
    }
}
