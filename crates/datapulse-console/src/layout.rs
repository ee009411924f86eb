//! Page Layouts
//!
//! Declarative composition of every console page: which filters, tiles,
//! tables, charts and panels it shows and in what order. The UI renders these
//! tables; nothing here holds data.

use crate::navigation::Page;
use crate::table::{TableColumn, TableSpec};
use crate::widgets::{FilterField, FilterKind, MetricTile, Tone};

/// Chart card placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: &'static str,
}

/// Free-form card with a placeholder body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    pub title: &'static str,
    pub test_id: &'static str,
}

/// One tab of a tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub test_id: &'static str,
    pub body: &'static [Section],
}

/// A block of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Filters(&'static [FilterField]),
    Tiles(&'static [MetricTile]),
    /// Two-column grid of nested sections
    Grid(&'static [Section]),
    Table(TableSpec),
    Chart(ChartSpec),
    Panel(PanelSpec),
    Tabs(&'static [TabSpec]),
    /// "Last refresh" inline info
    LastRefresh,
    /// Time window selector of the live monitor
    RefreshWindows,
    /// Marketplace connection list
    Connections,
}

impl Section {
    /// Whether this block carries its own data-state gate
    pub fn is_gated(&self) -> bool {
        matches!(self, Section::Table(_) | Section::Chart(_) | Section::Panel(_))
    }
}

/// Time window of the sales monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshWindow {
    #[default]
    Today,
    LastHour,
    LastDay,
}

impl RefreshWindow {
    pub const ALL: [RefreshWindow; 3] = [
        RefreshWindow::Today,
        RefreshWindow::LastHour,
        RefreshWindow::LastDay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RefreshWindow::Today => "Today",
            RefreshWindow::LastHour => "Last 60 min",
            RefreshWindow::LastDay => "Last 24h",
        }
    }
}

/// Text shown in the "Last refresh" block while no refresh exists
pub const REFRESH_UNAVAILABLE: &str = "Refresh unavailable";

/// Composition of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub page: Page,
    pub sections: &'static [Section],
}

impl PageLayout {
    pub fn for_page(page: Page) -> &'static PageLayout {
        match page {
            Page::OverviewHome => &OVERVIEW_HOME,
            Page::FinancePnl => &FINANCE_PNL,
            Page::FinanceUnitEconomics => &FINANCE_UNIT_ECONOMICS,
            Page::OperationsInventory => &OPERATIONS_INVENTORY,
            Page::OperationsReturns => &OPERATIONS_RETURNS,
            Page::OperationsSalesMonitoring => &OPERATIONS_SALES_MONITORING,
            Page::MarketingAds => &MARKETING_ADS,
            Page::DataHealthFreshness => &DATA_HEALTH_FRESHNESS,
            Page::SettingsConnections => &SETTINGS_CONNECTIONS,
        }
    }

    /// Every section depth-first, including grid cells and tab bodies
    pub fn flatten(&self) -> Vec<&'static Section> {
        let mut out = Vec::new();
        flatten_into(self.sections, &mut out);
        out
    }

    pub fn tables(&self) -> Vec<&'static TableSpec> {
        self.flatten()
            .into_iter()
            .filter_map(|section| match section {
                Section::Table(spec) => Some(spec),
                _ => None,
            })
            .collect()
    }

    pub fn tiles(&self) -> Vec<&'static MetricTile> {
        self.flatten()
            .into_iter()
            .filter_map(|section| match section {
                Section::Tiles(group) => Some(group.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn filters(&self) -> &'static [FilterField] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Filters(fields) => Some(*fields),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Number of blocks that show a gate banner when the page is not ready
    pub fn gated_blocks(&self) -> usize {
        self.flatten().iter().filter(|s| s.is_gated()).count()
    }
}

fn flatten_into(sections: &'static [Section], out: &mut Vec<&'static Section>) {
    for section in sections {
        out.push(section);
        match section {
            Section::Grid(cells) => flatten_into(cells, out),
            Section::Tabs(tabs) => {
                for tab in tabs.iter() {
                    flatten_into(tab.body, out);
                }
            }
            _ => {}
        }
    }
}

// ============ Shared filters ============

const ACCOUNT: FilterField =
    FilterField::new("account", "Account", "Select account", FilterKind::Select);
const MARKETPLACE: FilterField = FilterField::new(
    "marketplace",
    "Marketplace",
    "All marketplaces",
    FilterKind::Select,
);
const PERIOD_FROM: FilterField =
    FilterField::new("date-from", "Period from", "Start date", FilterKind::Date);
const PERIOD_TO: FilterField =
    FilterField::new("date-to", "Period to", "End date", FilterKind::Date);

// ============ Overview ============

pub static OVERVIEW_HOME: PageLayout = PageLayout {
    page: Page::OverviewHome,
    sections: &[
        Section::Filters(&[
            FilterField::new("account", "Account", "All accounts", FilterKind::Select),
            MARKETPLACE,
            FilterField::new("date-from", "Date from", "Start date", FilterKind::Date),
            FilterField::new("date-to", "Date to", "End date", FilterKind::Date),
        ]),
        Section::Tiles(&[
            MetricTile::new("revenue", "Revenue", "tile-revenue"),
            MetricTile::new("profit", "Profit", "tile-profit"),
            MetricTile::new("orders", "Orders", "tile-orders"),
            MetricTile::new("returns", "Returns", "tile-returns"),
        ]),
        Section::Grid(&[
            Section::Chart(ChartSpec { title: "P&L trend" }),
            Section::Chart(ChartSpec {
                title: "Orders dynamics",
            }),
        ]),
        Section::Table(TableSpec {
            title: "Top SKUs",
            columns: &[
                TableColumn::fixed("sku", "SKU"),
                TableColumn::sortable("revenue", "Revenue"),
                TableColumn::sortable("margin", "Margin"),
            ],
            compact: false,
            test_id: "table-top-skus",
        }),
    ],
};

// ============ Finance ============

pub static FINANCE_PNL: PageLayout = PageLayout {
    page: Page::FinancePnl,
    sections: &[
        Section::Filters(&[
            ACCOUNT,
            MARKETPLACE,
            PERIOD_FROM,
            PERIOD_TO,
            FilterField::new(
                "granularity",
                "Granularity",
                "Day / Week / Month",
                FilterKind::Select,
            ),
        ]),
        Section::Tiles(&[
            MetricTile::new("revenue", "Revenue", "tile-revenue"),
            MetricTile::new("commissions", "Commissions", "tile-commissions"),
            MetricTile::new("logistics", "Logistics", "tile-logistics"),
            MetricTile::new("ads", "Ads", "tile-ads"),
            MetricTile::new("penalties", "Penalties", "tile-penalties"),
            MetricTile::new("returns", "Returns", "tile-returns"),
            MetricTile::new("net-payout", "Net payout", "tile-net-payout"),
            MetricTile::new("profit", "Profit", "tile-profit").tone(Tone::Profit),
        ]),
        Section::Grid(&[
            Section::Chart(ChartSpec {
                title: "Dynamics by period",
            }),
            Section::Chart(ChartSpec {
                title: "Composition / Waterfall",
            }),
        ]),
    ],
};

pub static FINANCE_UNIT_ECONOMICS: PageLayout = PageLayout {
    page: Page::FinanceUnitEconomics,
    sections: &[
        Section::Filters(&[
            ACCOUNT,
            MARKETPLACE,
            PERIOD_FROM,
            PERIOD_TO,
            FilterField::new("search", "Search", "SKU or product", FilterKind::Search),
        ]),
        Section::Tiles(&[
            MetricTile::new("avg-margin", "Avg margin / unit", "tile-avg-margin").tone(Tone::Profit),
            MetricTile::new("top-loss", "Top loss SKUs", "tile-top-loss").tone(Tone::Loss),
        ]),
        Section::Table(TableSpec {
            title: "SKU Unit Economics",
            columns: &[
                TableColumn::sortable("sku", "SKU"),
                TableColumn::sortable("units", "Units"),
                TableColumn::sortable("margin", "Margin / unit"),
            ],
            compact: true,
            test_id: "table-unit-economics",
        }),
    ],
};

// ============ Operations ============

const INVENTORY_COLUMNS: &[TableColumn] = &[
    TableColumn::sortable("sku", "SKU"),
    TableColumn::sortable("warehouse", "Warehouse"),
    TableColumn::sortable("stock", "Stock"),
    TableColumn::sortable("doc", "Days of cover"),
];

pub static OPERATIONS_INVENTORY: PageLayout = PageLayout {
    page: Page::OperationsInventory,
    sections: &[
        Section::Filters(&[
            ACCOUNT,
            MARKETPLACE,
            FilterField::new("as-of", "As of", "Select date", FilterKind::Date),
            FilterField::new("warehouse", "Warehouse", "All warehouses", FilterKind::Select),
        ]),
        Section::Tiles(&[
            MetricTile::new("out-of-stock", "Out of stock", "tile-oos"),
            MetricTile::new("low-doc", "Low DoC", "tile-low-doc"),
            MetricTile::new("excess", "Excess stock", "tile-excess"),
        ]),
        Section::Tabs(&[
            TabSpec {
                id: "warehouse",
                label: "By warehouse",
                test_id: "tab-warehouse",
                body: &[Section::Table(TableSpec {
                    title: "Inventory by warehouse",
                    columns: INVENTORY_COLUMNS,
                    compact: true,
                    test_id: "table-inventory-warehouse",
                })],
            },
            TabSpec {
                id: "sku",
                label: "By SKU",
                test_id: "tab-sku",
                body: &[Section::Table(TableSpec {
                    title: "Inventory by SKU",
                    columns: INVENTORY_COLUMNS,
                    compact: true,
                    test_id: "table-inventory-sku",
                })],
            },
        ]),
        Section::Panel(PanelSpec {
            title: "Recommendations",
            test_id: "recommendations-panel",
        }),
    ],
};

pub static OPERATIONS_RETURNS: PageLayout = PageLayout {
    page: Page::OperationsReturns,
    sections: &[
        Section::Filters(&[ACCOUNT, MARKETPLACE, PERIOD_FROM, PERIOD_TO]),
        Section::Tiles(&[
            MetricTile::new("buyout", "Buyout %", "tile-buyout"),
            MetricTile::new("return-loss", "Return losses", "tile-return-loss"),
            MetricTile::new("returns-count", "Returns count", "tile-returns-count"),
            MetricTile::new("pnl-impact", "P&L impact", "tile-pnl-impact"),
        ]),
        Section::Grid(&[
            Section::Chart(ChartSpec {
                title: "Returns trend",
            }),
            Section::Table(TableSpec {
                title: "Problem areas",
                columns: &[
                    TableColumn::sortable("reason", "Reason"),
                    TableColumn::sortable("share", "Share"),
                    TableColumn::sortable("loss", "Loss impact"),
                ],
                compact: true,
                test_id: "table-problem-areas",
            }),
        ]),
    ],
};

pub static OPERATIONS_SALES_MONITORING: PageLayout = PageLayout {
    page: Page::OperationsSalesMonitoring,
    sections: &[
        Section::LastRefresh,
        Section::RefreshWindows,
        Section::Tabs(&[
            TabSpec {
                id: "sales",
                label: "Sales",
                test_id: "tab-sales",
                body: &[Section::Table(TableSpec {
                    title: "Sales stream",
                    columns: &[
                        TableColumn::sortable("order", "Order"),
                        TableColumn::sortable("sku", "SKU"),
                        TableColumn::sortable("amount", "Amount"),
                        TableColumn::sortable("time", "Time"),
                    ],
                    compact: true,
                    test_id: "table-sales",
                })],
            },
            TabSpec {
                id: "orders",
                label: "Orders",
                test_id: "tab-orders",
                body: &[Section::Table(TableSpec {
                    title: "Orders stream",
                    columns: &[
                        TableColumn::sortable("order", "Order"),
                        TableColumn::sortable("sku", "SKU"),
                        TableColumn::sortable("status", "Status"),
                        TableColumn::sortable("time", "Time"),
                    ],
                    compact: true,
                    test_id: "table-orders",
                })],
            },
            TabSpec {
                id: "returns",
                label: "Returns",
                test_id: "tab-returns",
                body: &[Section::Table(TableSpec {
                    title: "Returns stream",
                    columns: &[
                        TableColumn::sortable("order", "Order"),
                        TableColumn::sortable("reason", "Reason"),
                        TableColumn::sortable("amount", "Amount"),
                        TableColumn::sortable("time", "Time"),
                    ],
                    compact: true,
                    test_id: "table-returns",
                })],
            },
        ]),
    ],
};

// ============ Marketing ============

pub static MARKETING_ADS: PageLayout = PageLayout {
    page: Page::MarketingAds,
    sections: &[
        Section::Filters(&[
            ACCOUNT,
            MARKETPLACE,
            PERIOD_FROM,
            PERIOD_TO,
            FilterField::new("campaign", "Campaign", "All campaigns", FilterKind::Select),
        ]),
        Section::Tiles(&[
            MetricTile::new("spend", "Spend", "tile-spend"),
            MetricTile::new("impressions", "Impressions", "tile-impressions"),
            MetricTile::new("clicks", "Clicks", "tile-clicks"),
            MetricTile::new("drr", "DRR / ACoS", "tile-drr"),
            MetricTile::new("profit-delta", "Profit delta", "tile-profit-delta"),
        ]),
        Section::Grid(&[
            Section::Table(TableSpec {
                title: "Campaigns",
                columns: &[
                    TableColumn::sortable("campaign", "Campaign"),
                    TableColumn::sortable("spend", "Spend"),
                    TableColumn::sortable("roi", "ROI"),
                ],
                compact: true,
                test_id: "table-campaigns",
            }),
            Section::Chart(ChartSpec {
                title: "Performance correlation",
            }),
        ]),
    ],
};

// ============ Data health ============

pub static DATA_HEALTH_FRESHNESS: PageLayout = PageLayout {
    page: Page::DataHealthFreshness,
    sections: &[
        Section::Tiles(&[
            MetricTile::new("raw", "RAW updated", "tile-raw-updated"),
            MetricTile::new("marts", "Marts updated", "tile-marts-updated"),
            MetricTile::new("sla", "SLA breaches", "tile-sla-breaches"),
            MetricTile::new("quality", "Quality checks", "tile-quality"),
        ]),
        Section::Table(TableSpec {
            title: "Entity freshness",
            columns: &[
                TableColumn::sortable("entity", "Entity"),
                TableColumn::sortable("lastUpdate", "Last update"),
                TableColumn::sortable("status", "Status"),
                TableColumn::sortable("lag", "Lag duration"),
            ],
            compact: false,
            test_id: "table-freshness",
        }),
        Section::Panel(PanelSpec {
            title: "Alerts",
            test_id: "alerts-list",
        }),
    ],
};

// ============ Settings ============

pub static SETTINGS_CONNECTIONS: PageLayout = PageLayout {
    page: Page::SettingsConnections,
    sections: &[
        Section::Connections,
        Section::Table(TableSpec {
            title: "Marketplace accounts",
            columns: &[
                TableColumn::sortable("marketplace", "Marketplace"),
                TableColumn::sortable("account", "Account"),
                TableColumn::sortable("status", "Status"),
                TableColumn::sortable("lastSync", "Last sync"),
            ],
            compact: false,
            test_id: "table-connections",
        }),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionStatus;
    use crate::data_state::DataState;
    use crate::resolver::resolve;

    fn table_ids(page: Page) -> Vec<&'static str> {
        PageLayout::for_page(page)
            .tables()
            .into_iter()
            .map(|t| t.test_id)
            .collect()
    }

    #[test]
    fn test_every_page_has_a_layout() {
        for page in Page::ALL {
            assert_eq!(PageLayout::for_page(page).page, page);
        }
    }

    #[test]
    fn test_every_page_has_a_gated_block() {
        for page in Page::ALL {
            assert!(PageLayout::for_page(page).gated_blocks() > 0, "{page:?}");
        }
    }

    #[test]
    fn test_inventory_tabs_each_hold_a_table() {
        assert_eq!(
            table_ids(Page::OperationsInventory),
            vec!["table-inventory-warehouse", "table-inventory-sku"]
        );

        let layout = PageLayout::for_page(Page::OperationsInventory);
        // two tab tables plus the recommendations panel
        assert_eq!(layout.gated_blocks(), 3);
    }

    #[test]
    fn test_inventory_disconnected_scenario() {
        let page = Page::from_path("/operations/inventory").unwrap();
        let state = resolve(page.requires_connection(), ConnectionStatus::NotConnected);
        assert_eq!(state, DataState::NotConnected);
        assert_eq!(state.copy().unwrap().cta_path, "/settings/connections");

        let layout = PageLayout::for_page(page);
        assert_eq!(layout.tiles().len(), 3);
        assert_eq!(layout.tables().len(), 2);
    }

    #[test]
    fn test_sales_monitoring_streams() {
        assert_eq!(
            table_ids(Page::OperationsSalesMonitoring),
            vec!["table-sales", "table-orders", "table-returns"]
        );
        let layout = PageLayout::for_page(Page::OperationsSalesMonitoring);
        assert!(layout.sections.contains(&Section::LastRefresh));
        assert!(layout.sections.contains(&Section::RefreshWindows));
        assert!(layout.filters().is_empty());
    }

    #[test]
    fn test_overview_top_skus_sku_column_is_fixed() {
        let layout = PageLayout::for_page(Page::OverviewHome);
        let table = layout.tables()[0];
        assert_eq!(table.test_id, "table-top-skus");
        let sortable: Vec<_> = table.columns.iter().map(|c| c.sortable).collect();
        assert_eq!(sortable, vec![false, true, true]);
    }

    #[test]
    fn test_pnl_profit_tile_has_profit_tone() {
        let layout = PageLayout::for_page(Page::FinancePnl);
        let tiles = layout.tiles();
        assert_eq!(tiles.len(), 8);
        let profit = tiles.iter().find(|t| t.id == "profit").unwrap();
        assert_eq!(profit.tone, Some(Tone::Profit));
        assert_eq!(layout.filters().len(), 5);
    }

    #[test]
    fn test_unit_economics_tones_and_search() {
        let layout = PageLayout::for_page(Page::FinanceUnitEconomics);
        let tones: Vec<_> = layout.tiles().iter().map(|t| t.tone).collect();
        assert_eq!(tones, vec![Some(Tone::Profit), Some(Tone::Loss)]);
        assert!(layout
            .filters()
            .iter()
            .any(|f| f.kind == FilterKind::Search));
    }

    #[test]
    fn test_tile_test_ids_unique_per_page() {
        for page in Page::ALL {
            let layout = PageLayout::for_page(page);
            let mut ids: Vec<_> = layout.tiles().iter().filter_map(|t| t.test_id).collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), total, "{page:?}");
        }
    }

    #[test]
    fn test_refresh_windows() {
        assert_eq!(RefreshWindow::default(), RefreshWindow::Today);
        let labels: Vec<_> = RefreshWindow::ALL.iter().map(|w| w.label()).collect();
        assert_eq!(labels, vec!["Today", "Last 60 min", "Last 24h"]);
    }
}
