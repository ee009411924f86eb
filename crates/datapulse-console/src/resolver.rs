//! Dashboard State Resolver
//!
//! Derives the [`DataState`] of a page render from the connection status and
//! whether the page needs a connected account. Every render resolves from
//! scratch; nothing is remembered between renders.

use crate::connection::{ConnectionStatus, ConnectionStatusSource};
use crate::data_state::DataState;
use crate::navigation::Page;

/// Outcome of a data fetch for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The fetch succeeded with this many rows
    Rows(usize),
    /// The fetch failed for any reason
    Failed,
}

/// Resolve the state of a page render.
///
/// Without a data layer the only outcomes are `NotConnected` and
/// `Unavailable`.
pub fn resolve(requires_connection: bool, status: ConnectionStatus) -> DataState {
    resolve_with_fetch(requires_connection, status, None)
}

/// Resolve the state of a page render once a fetch result may be present.
pub fn resolve_with_fetch(
    requires_connection: bool,
    status: ConnectionStatus,
    fetch: Option<FetchOutcome>,
) -> DataState {
    if requires_connection && !status.is_connected() {
        return DataState::NotConnected;
    }

    match fetch {
        None => DataState::Unavailable,
        Some(FetchOutcome::Rows(0)) => DataState::NoData,
        Some(FetchOutcome::Rows(_)) => DataState::Ready,
        Some(FetchOutcome::Failed) => DataState::Error,
    }
}

/// Resolve the state for a page, reading the status from `source`
pub fn resolve_page<S: ConnectionStatusSource + ?Sized>(page: Page, source: &S) -> DataState {
    resolve(page.requires_connection(), source.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::FixedConnectionStatus;

    #[test]
    fn test_disconnected_gates_connected_pages() {
        assert_eq!(
            resolve(true, ConnectionStatus::NotConnected),
            DataState::NotConnected
        );
    }

    #[test]
    fn test_everything_else_is_unavailable() {
        assert_eq!(resolve(true, ConnectionStatus::Connected), DataState::Unavailable);
        assert_eq!(resolve(false, ConnectionStatus::Connected), DataState::Unavailable);
        assert_eq!(
            resolve(false, ConnectionStatus::NotConnected),
            DataState::Unavailable
        );
    }

    #[test]
    fn test_resolver_never_produces_fetch_states() {
        for requires in [true, false] {
            for status in [ConnectionStatus::Connected, ConnectionStatus::NotConnected] {
                let state = resolve(requires, status);
                assert!(!matches!(
                    state,
                    DataState::Ready | DataState::NoData | DataState::Error
                ));
            }
        }
    }

    #[test]
    fn test_fetch_outcomes() {
        let connected = ConnectionStatus::Connected;
        assert_eq!(
            resolve_with_fetch(true, connected, Some(FetchOutcome::Rows(0))),
            DataState::NoData
        );
        assert_eq!(
            resolve_with_fetch(true, connected, Some(FetchOutcome::Rows(12))),
            DataState::Ready
        );
        assert_eq!(
            resolve_with_fetch(true, connected, Some(FetchOutcome::Failed)),
            DataState::Error
        );
    }

    #[test]
    fn test_connection_gate_wins_over_fetch() {
        assert_eq!(
            resolve_with_fetch(
                true,
                ConnectionStatus::NotConnected,
                Some(FetchOutcome::Rows(3))
            ),
            DataState::NotConnected
        );
    }

    #[test]
    fn test_every_page_follows_the_table() {
        let offline = FixedConnectionStatus(ConnectionStatus::NotConnected);
        let online = FixedConnectionStatus(ConnectionStatus::Connected);

        for page in Page::ALL {
            let expected_offline = if page.requires_connection() {
                DataState::NotConnected
            } else {
                DataState::Unavailable
            };
            assert_eq!(resolve_page(page, &offline), expected_offline, "{page:?}");
            assert_eq!(resolve_page(page, &online), DataState::Unavailable, "{page:?}");
        }
    }

    #[test]
    fn test_gate_copy_for_resolved_states() {
        let offline = resolve(true, ConnectionStatus::NotConnected);
        assert_eq!(offline.copy().unwrap().cta_path, "/settings/connections");

        let online = resolve(true, ConnectionStatus::Connected);
        assert_eq!(online.copy().unwrap().cta_path, "/data-health/freshness");
    }
}
