//! Route Table & Navigation
//!
//! Static navigation tree for the console sidebar, the page each path maps
//! to, and the path to label lookup used by breadcrumbs.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Route paths
pub mod paths {
    pub const ROOT: &str = "/";
    pub const FINANCE_PNL: &str = "/finance/pnl";
    pub const FINANCE_UNIT_ECONOMICS: &str = "/finance/unit-economics";
    pub const OPERATIONS_INVENTORY: &str = "/operations/inventory";
    pub const OPERATIONS_RETURNS: &str = "/operations/returns";
    pub const OPERATIONS_SALES_MONITORING: &str = "/operations/sales-monitoring";
    pub const MARKETING_ADS: &str = "/marketing/ads";
    pub const DATA_HEALTH_FRESHNESS: &str = "/data-health/freshness";
    pub const SETTINGS_CONNECTIONS: &str = "/settings/connections";
}

/// Breadcrumb label used when a path has no route
pub const FALLBACK_LABEL: &str = "Dashboard";

/// Brand shown in the sidebar and as the breadcrumb root
pub const BRAND: &str = "Datapulse";

/// A console page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    OverviewHome,
    FinancePnl,
    FinanceUnitEconomics,
    OperationsInventory,
    OperationsReturns,
    OperationsSalesMonitoring,
    MarketingAds,
    DataHealthFreshness,
    SettingsConnections,
}

/// Business domain a page would query once a data layer exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataDomain {
    Summary,
    ProfitAndLoss,
    UnitEconomics,
    Inventory,
    Returns,
    SalesMonitoring,
    Ads,
    Freshness,
    Connections,
}

impl Page {
    pub const ALL: [Page; 9] = [
        Page::OverviewHome,
        Page::FinancePnl,
        Page::FinanceUnitEconomics,
        Page::OperationsInventory,
        Page::OperationsReturns,
        Page::OperationsSalesMonitoring,
        Page::MarketingAds,
        Page::DataHealthFreshness,
        Page::SettingsConnections,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::OverviewHome => paths::ROOT,
            Page::FinancePnl => paths::FINANCE_PNL,
            Page::FinanceUnitEconomics => paths::FINANCE_UNIT_ECONOMICS,
            Page::OperationsInventory => paths::OPERATIONS_INVENTORY,
            Page::OperationsReturns => paths::OPERATIONS_RETURNS,
            Page::OperationsSalesMonitoring => paths::OPERATIONS_SALES_MONITORING,
            Page::MarketingAds => paths::MARKETING_ADS,
            Page::DataHealthFreshness => paths::DATA_HEALTH_FRESHNESS,
            Page::SettingsConnections => paths::SETTINGS_CONNECTIONS,
        }
    }

    /// Whether the page is gated on a connected marketplace account
    pub fn requires_connection(self) -> bool {
        !matches!(self, Page::DataHealthFreshness | Page::SettingsConnections)
    }

    pub fn domain(self) -> DataDomain {
        match self {
            Page::OverviewHome => DataDomain::Summary,
            Page::FinancePnl => DataDomain::ProfitAndLoss,
            Page::FinanceUnitEconomics => DataDomain::UnitEconomics,
            Page::OperationsInventory => DataDomain::Inventory,
            Page::OperationsReturns => DataDomain::Returns,
            Page::OperationsSalesMonitoring => DataDomain::SalesMonitoring,
            Page::MarketingAds => DataDomain::Ads,
            Page::DataHealthFreshness => DataDomain::Freshness,
            Page::SettingsConnections => DataDomain::Connections,
        }
    }

    /// Navigation label of the page
    pub fn label(self) -> &'static str {
        route_label(self.path()).unwrap_or(FALLBACK_LABEL)
    }

    pub fn from_path(path: &str) -> Option<Page> {
        let path = normalize_path(path);
        Page::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// One sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub test_id: &'static str,
}

/// A titled group of sidebar links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

pub static NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Overview",
        items: &[NavItem {
            label: "Home / Summary",
            path: paths::ROOT,
            test_id: "nav-overview-home",
        }],
    },
    NavSection {
        title: "Finance",
        items: &[
            NavItem {
                label: "P&L (Account-level)",
                path: paths::FINANCE_PNL,
                test_id: "nav-finance-pnl",
            },
            NavItem {
                label: "Unit Economics (SKU)",
                path: paths::FINANCE_UNIT_ECONOMICS,
                test_id: "nav-finance-unit-economics",
            },
        ],
    },
    NavSection {
        title: "Operations",
        items: &[
            NavItem {
                label: "Inventory & DoC",
                path: paths::OPERATIONS_INVENTORY,
                test_id: "nav-operations-inventory",
            },
            NavItem {
                label: "Returns & Buyout",
                path: paths::OPERATIONS_RETURNS,
                test_id: "nav-operations-returns",
            },
            NavItem {
                label: "Sales / Orders Monitoring",
                path: paths::OPERATIONS_SALES_MONITORING,
                test_id: "nav-operations-sales-monitoring",
            },
        ],
    },
    NavSection {
        title: "Marketing",
        items: &[NavItem {
            label: "Ads / Marketing",
            path: paths::MARKETING_ADS,
            test_id: "nav-marketing-ads",
        }],
    },
    NavSection {
        title: "Data Health",
        items: &[NavItem {
            label: "Data Freshness / SLA",
            path: paths::DATA_HEALTH_FRESHNESS,
            test_id: "nav-data-health-freshness",
        }],
    },
    NavSection {
        title: "Settings",
        items: &[NavItem {
            label: "Accounts & Connections",
            path: paths::SETTINGS_CONNECTIONS,
            test_id: "nav-settings-connections",
        }],
    },
];

/// All sidebar links in display order
pub fn nav_items() -> impl Iterator<Item = &'static NavItem> {
    NAV_SECTIONS.iter().flat_map(|section| section.items.iter())
}

fn route_labels() -> &'static HashMap<&'static str, &'static str> {
    static LABELS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    LABELS.get_or_init(|| nav_items().map(|item| (item.path, item.label)).collect())
}

/// Label of the route at `path`, if any
pub fn route_label(path: &str) -> Option<&'static str> {
    route_labels().get(normalize_path(path)).copied()
}

/// Breadcrumb label for the current path
pub fn breadcrumb_label(path: &str) -> &'static str {
    route_label(path).unwrap_or(FALLBACK_LABEL)
}

/// Result of matching a path against the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Page(Page),
    Redirect(&'static str),
}

/// Match a path; unknown paths redirect to the root
pub fn match_route(path: &str) -> RouteMatch {
    match Page::from_path(path) {
        Some(page) => RouteMatch::Page(page),
        None => RouteMatch::Redirect(paths::ROOT),
    }
}

/// Strip one trailing slash, keeping the root as `/`
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() {
        paths::ROOT
    } else {
        trimmed
    }
}
