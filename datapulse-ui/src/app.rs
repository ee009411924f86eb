//! App Root Component
//!
//! Console shell with routing and the session's console state.

use datapulse_console::paths;
use leptos::*;
use leptos_router::*;

use crate::components::{Sidebar, Topbar};
use crate::pages::{
    DataHealthFreshness, FinancePnl, FinanceUnitEconomics, MarketingAds, OperationsInventory,
    OperationsReturns, OperationsSalesMonitoring, OverviewHome, SettingsConnections,
    UnknownRoute,
};
use crate::state::{provide_console_state, BrowserConnectionStatus};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_console_state(&BrowserConnectionStatus);

    view! {
        <Router>
            <div class="layout">
                <Sidebar />

                <div class="layout__main">
                    <Topbar />

                    <main class="content">
                        <Routes>
                            <Route path=paths::ROOT view=OverviewHome />
                            <Route path=paths::FINANCE_PNL view=FinancePnl />
                            <Route path=paths::FINANCE_UNIT_ECONOMICS view=FinanceUnitEconomics />
                            <Route path=paths::OPERATIONS_INVENTORY view=OperationsInventory />
                            <Route path=paths::OPERATIONS_RETURNS view=OperationsReturns />
                            <Route
                                path=paths::OPERATIONS_SALES_MONITORING
                                view=OperationsSalesMonitoring
                            />
                            <Route path=paths::MARKETING_ADS view=MarketingAds />
                            <Route path=paths::DATA_HEALTH_FRESHNESS view=DataHealthFreshness />
                            <Route path=paths::SETTINGS_CONNECTIONS view=SettingsConnections />
                            <Route path="/*any" view=UnknownRoute />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
