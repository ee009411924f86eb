//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;

pub use dashboard::{
    DataHealthFreshness, FinancePnl, FinanceUnitEconomics, MarketingAds, OperationsInventory,
    OperationsReturns, OperationsSalesMonitoring, OverviewHome, SettingsConnections,
    UnknownRoute,
};
