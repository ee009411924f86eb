//! Console Reports
//!
//! Text and JSON renderings of the route table and of a single route
//! resolution, as printed by the `datapulse` CLI.

use datapulse_console::{
    breadcrumb_label, match_route, resolve_with_fetch, ConnectionStatus, DataDomain, DataState,
    DataStateCopy, FetchOutcome, Page, RouteMatch, BRAND, NAV_SECTIONS, RETRY_LABEL,
};
use serde::Serialize;
use std::fmt::Write;

/// One row of the route table
#[derive(Debug, Clone, Serialize)]
pub struct RouteRow {
    pub section: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub test_id: &'static str,
    pub requires_connection: bool,
    pub domain: Option<DataDomain>,
}

/// Route table in sidebar order
pub fn route_table() -> Vec<RouteRow> {
    NAV_SECTIONS
        .iter()
        .flat_map(|section| {
            section.items.iter().map(move |item| {
                let page = Page::from_path(item.path);
                RouteRow {
                    section: section.title,
                    label: item.label,
                    path: item.path,
                    test_id: item.test_id,
                    requires_connection: page.map_or(false, Page::requires_connection),
                    domain: page.map(Page::domain),
                }
            })
        })
        .collect()
}

/// Render rows as an aligned plain-text table
pub fn render_route_table(rows: &[RouteRow]) -> String {
    const HEADERS: [&str; 4] = ["SECTION", "LABEL", "PATH", "CONNECTION"];

    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.section,
                row.label,
                row.path,
                if row.requires_connection {
                    "required"
                } else {
                    "-"
                },
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&HEADERS).chain(cells.iter()) {
        let padded: Vec<String> = line
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Outcome of resolving one path for a given connection status
#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    pub requested: String,
    /// Set when the path had no route and the client would redirect
    pub redirected_to: Option<&'static str>,
    pub page: Page,
    pub breadcrumb: String,
    pub connection: ConnectionStatus,
    pub state: DataState,
    pub gate: Option<&'static DataStateCopy>,
}

/// Resolve `path` the way the console would render it
pub fn resolve_path(
    path: &str,
    connection: ConnectionStatus,
    fetch: Option<FetchOutcome>,
) -> ResolveReport {
    let (page, redirected_to) = match match_route(path) {
        RouteMatch::Page(page) => (page, None),
        RouteMatch::Redirect(target) => (
            Page::from_path(target).unwrap_or(Page::OverviewHome),
            Some(target),
        ),
    };
    let state = resolve_with_fetch(page.requires_connection(), connection, fetch);

    ResolveReport {
        requested: path.to_string(),
        redirected_to,
        page,
        breadcrumb: format!("{} / {}", BRAND, breadcrumb_label(page.path())),
        connection,
        state,
        gate: state.copy(),
    }
}

impl ResolveReport {
    /// Render as labelled plain text
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "Path:        {}", self.requested);
        if let Some(target) = self.redirected_to {
            let _ = writeln!(out, "Redirect:    {target}");
        }
        let _ = writeln!(out, "Page:        {}", self.page.label());
        let _ = writeln!(out, "Breadcrumb:  {}", self.breadcrumb);
        let _ = writeln!(out, "Connection:  {}", self.connection.label());
        let _ = writeln!(out, "Data state:  {}", self.state);

        if let Some(gate) = self.gate {
            let _ = writeln!(out, "Gate:        {}", gate.title);
            let _ = writeln!(out, "             {}", gate.description);
            let _ = writeln!(out, "             {} -> {}", gate.cta_label, gate.cta_path);
            if self.state.is_retryable() {
                let _ = writeln!(out, "             [{RETRY_LABEL}]");
            }
        }
        out
    }
}
