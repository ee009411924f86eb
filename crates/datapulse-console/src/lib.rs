//! # Datapulse Console
//!
//! Target-independent model of the Datapulse seller console. Shared by the
//! Leptos front-end (`datapulse-ui`) and the console host (`datapulse`).
//!
//! ## Modules
//!
//! - [`data_state`]: page readiness states and the gate banner copy
//! - [`connection`]: marketplace connection status and its source
//! - [`resolver`]: derives the data state of a page render
//! - [`navigation`]: route table, sidebar tree and breadcrumbs
//! - [`widgets`]: filter and metric tile descriptors
//! - [`table`]: table columns and client-side sort state
//! - [`layout`]: declarative composition of every page
//!
//! ## Example
//!
//! ```rust
//! use datapulse_console::{resolve, ConnectionStatus, DataState, Page};
//!
//! let page = Page::from_path("/operations/inventory").unwrap();
//! let state = resolve(page.requires_connection(), ConnectionStatus::NotConnected);
//!
//! assert_eq!(state, DataState::NotConnected);
//! assert_eq!(state.copy().unwrap().cta_path, "/settings/connections");
//! ```

pub mod connection;
pub mod data_state;
pub mod layout;
pub mod navigation;
pub mod resolver;
pub mod table;
pub mod widgets;

pub use connection::{
    ConnectionStatus, ConnectionStatusSource, FixedConnectionStatus, Marketplace,
    ParseStatusError,
};
pub use data_state::{copy, DataState, DataStateCopy, RETRY_LABEL};
pub use layout::{
    ChartSpec, PageLayout, PanelSpec, RefreshWindow, Section, TabSpec, REFRESH_UNAVAILABLE,
};
pub use navigation::{
    breadcrumb_label, match_route, nav_items, normalize_path, paths, route_label,
    DataDomain, NavItem, NavSection, Page, RouteMatch, BRAND, FALLBACK_LABEL, NAV_SECTIONS,
};
pub use resolver::{resolve, resolve_page, resolve_with_fetch, FetchOutcome};
pub use table::{row_count_label, Row, SortDirection, SortState, TableColumn, TableSpec};
pub use widgets::{FilterField, FilterKind, MetricTile, TileValues, Tone};
