//! Connections Component
//!
//! Supported marketplaces and the session's connection status.

use datapulse_console::{ConnectionStatus, Marketplace};
use leptos::*;

use crate::state::ConsoleState;

/// Marketplace connection list
#[component]
pub fn ConnectionsCard() -> impl IntoView {
    let state = use_context::<ConsoleState>().expect("ConsoleState not found");

    view! {
        <div class="card" data-testid="connections-card">
            <div class="card-header">
                <h3 class="card-title">"Marketplaces"</h3>
            </div>
            <ul class="connection-list">
                {Marketplace::ALL
                    .into_iter()
                    .map(|marketplace| {
                        view! {
                            <li class="connection-list__item" data-testid=marketplace.test_id()>
                                <span class="connection-list__name">{marketplace.label()}</span>
                                <span class=badge_class(state.connection)>
                                    {state.connection.label()}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

fn badge_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "badge badge--ok",
        ConnectionStatus::NotConnected => "badge badge--muted",
    }
}
