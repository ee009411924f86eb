//! Console State
//!
//! Connection status of the session and the per-page data state derived
//! from it.

use datapulse_console::{resolve_page, ConnectionStatus, ConnectionStatusSource, DataState, Page};
use leptos::*;
use wasm_bindgen::JsValue;

/// Local storage key holding the session's connection status
pub const STATUS_STORAGE_KEY: &str = "datapulse_connection_status";

/// State provided to all components
#[derive(Clone, Copy, Debug)]
pub struct ConsoleState {
    /// Marketplace connection status, read once when the app mounts
    pub connection: ConnectionStatus,
}

impl ConnectionStatusSource for ConsoleState {
    fn status(&self) -> ConnectionStatus {
        self.connection
    }
}

/// Connection status stored in the browser's local storage.
///
/// Missing or unreadable values count as not connected.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConnectionStatus;

impl ConnectionStatusSource for BrowserConnectionStatus {
    fn status(&self) -> ConnectionStatus {
        stored_status().unwrap_or_default()
    }
}

fn stored_status() -> Option<ConnectionStatus> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STATUS_STORAGE_KEY).ok()??;
    parse_stored(&raw)
}

fn parse_stored(raw: &str) -> Option<ConnectionStatus> {
    match raw.parse() {
        Ok(status) => Some(status),
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
            None
        }
    }
}

/// Provide console state to the component tree
pub fn provide_console_state(source: &impl ConnectionStatusSource) {
    provide_context(ConsoleState {
        connection: source.status(),
    });
}

/// Data state of `page` for the current render
pub fn use_data_state(page: Page) -> DataState {
    let state = use_context::<ConsoleState>().expect("ConsoleState not found");
    resolve_page(page, &state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_state_is_a_source() {
        let state = ConsoleState {
            connection: ConnectionStatus::Connected,
        };
        assert_eq!(resolve_page(Page::FinancePnl, &state), DataState::Unavailable);

        let state = ConsoleState {
            connection: ConnectionStatus::NotConnected,
        };
        assert_eq!(resolve_page(Page::FinancePnl, &state), DataState::NotConnected);
        assert_eq!(
            resolve_page(Page::DataHealthFreshness, &state),
            DataState::Unavailable
        );
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn reads_status_from_local_storage() {
            let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();

            storage.remove_item(STATUS_STORAGE_KEY).unwrap();
            assert_eq!(BrowserConnectionStatus.status(), ConnectionStatus::NotConnected);

            storage.set_item(STATUS_STORAGE_KEY, "connected").unwrap();
            assert_eq!(BrowserConnectionStatus.status(), ConnectionStatus::Connected);

            storage.set_item(STATUS_STORAGE_KEY, "garbage").unwrap();
            assert_eq!(BrowserConnectionStatus.status(), ConnectionStatus::NotConnected);

            storage.remove_item(STATUS_STORAGE_KEY).unwrap();
        }
    }
}
