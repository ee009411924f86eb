//! Dashboard Pages
//!
//! Every console page resolves its data state, then renders its layout.
//! No page fetches data yet, so tables are empty and tiles show skeletons.

use datapulse_console::{match_route, Page, PageLayout, RouteMatch};
use leptos::*;
use leptos_router::*;

use crate::components::render_sections;
use crate::state::use_data_state;

/// Generic page body for a console page
#[component]
pub fn DashboardPage(page: Page) -> impl IntoView {
    let state = use_data_state(page);
    let layout = PageLayout::for_page(page);
    let location = use_location();
    let canonical = canonical_redirect(page, &location.pathname.get_untracked());

    view! {
        {canonical.map(|path| view! { <Redirect path=path options=replace_options() /> })}
        <div class="page" data-page=page.path() data-state=state.as_str()>
            {render_sections(layout.sections, state)}
        </div>
    }
}

#[component]
pub fn OverviewHome() -> impl IntoView {
    view! { <DashboardPage page=Page::OverviewHome /> }
}

#[component]
pub fn FinancePnl() -> impl IntoView {
    view! { <DashboardPage page=Page::FinancePnl /> }
}

#[component]
pub fn FinanceUnitEconomics() -> impl IntoView {
    view! { <DashboardPage page=Page::FinanceUnitEconomics /> }
}

#[component]
pub fn OperationsInventory() -> impl IntoView {
    view! { <DashboardPage page=Page::OperationsInventory /> }
}

#[component]
pub fn OperationsReturns() -> impl IntoView {
    view! { <DashboardPage page=Page::OperationsReturns /> }
}

#[component]
pub fn OperationsSalesMonitoring() -> impl IntoView {
    view! { <DashboardPage page=Page::OperationsSalesMonitoring /> }
}

#[component]
pub fn MarketingAds() -> impl IntoView {
    view! { <DashboardPage page=Page::MarketingAds /> }
}

#[component]
pub fn DataHealthFreshness() -> impl IntoView {
    view! { <DashboardPage page=Page::DataHealthFreshness /> }
}

#[component]
pub fn SettingsConnections() -> impl IntoView {
    view! { <DashboardPage page=Page::SettingsConnections /> }
}

/// Catch-all route: replaces the location with the matching page, or the root
#[component]
pub fn UnknownRoute() -> impl IntoView {
    let location = use_location();
    let target = redirect_target(&location.pathname.get_untracked());

    view! { <Redirect path=target options=replace_options() /> }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Route table path to replace `pathname` with when it differs (trailing slash)
fn canonical_redirect(page: Page, pathname: &str) -> Option<&'static str> {
    (pathname != page.path()).then(|| page.path())
}

fn redirect_target(path: &str) -> &'static str {
    match match_route(path) {
        RouteMatch::Page(page) => page.path(),
        RouteMatch::Redirect(to) => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_target() {
        assert_eq!(redirect_target("/unknown"), "/");
        assert_eq!(redirect_target("/finance/pnl/"), "/finance/pnl");
    }

    #[test]
    fn test_canonical_redirect() {
        assert_eq!(canonical_redirect(Page::FinancePnl, "/finance/pnl"), None);
        assert_eq!(
            canonical_redirect(Page::FinancePnl, "/finance/pnl/"),
            Some("/finance/pnl")
        );
        assert_eq!(canonical_redirect(Page::OverviewHome, "/"), None);
    }
}
