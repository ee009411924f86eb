//! UI Components
//!
//! Presentational Leptos components for the console. None of them fetch or
//! compute data; they render static configuration and a data state.

pub mod chart_card;
pub mod connections;
pub mod data_state_gate;
pub mod data_table;
pub mod filter_bar;
pub mod loading;
pub mod metric_tile;
pub mod monitor;
pub mod sections;
pub mod sidebar;
pub mod tabs;
pub mod topbar;

pub use chart_card::{ChartCard, PanelCard};
pub use connections::ConnectionsCard;
pub use data_table::DataTableCard;
pub use filter_bar::FilterBar;
pub use metric_tile::MetricTileGroup;
pub use monitor::{LastRefresh, RefreshWindowTabs};
pub use sections::render_sections;
pub use sidebar::Sidebar;
pub use tabs::Tabs;
pub use topbar::Topbar;
