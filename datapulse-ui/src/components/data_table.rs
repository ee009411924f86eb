//! Data Table Component
//!
//! Card with a client-side sortable table. Sort state belongs to the card
//! instance and is dropped with it.

use datapulse_console::{row_count_label, DataState, Row, SortState, TableColumn, TableSpec};
use leptos::*;

use super::data_state_gate::DataStateGate;

/// Table card
#[component]
pub fn DataTableCard(
    spec: &'static TableSpec,
    state: DataState,
    /// Rows to display; the data layer does not supply any yet
    #[prop(optional)]
    rows: Vec<Row>,
) -> impl IntoView {
    let sort = create_rw_signal(SortState::default());
    let row_count = rows.len();
    let rows = store_value(rows);

    view! {
        <div class="card" data-testid=spec.test_id>
            <div class="card-header">
                <h3 class="card-title">{spec.title}</h3>
                <span class="muted">{row_count_label(row_count)}</span>
            </div>
            <div class=wrapper_class(spec.compact)>
                <table class="data-table">
                    <thead>
                        <tr>
                            {spec
                                .columns
                                .iter()
                                .map(|column| view! { <ColumnHeader column=column sort=sort /> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            sort.with(|sort| {
                                rows.with_value(|rows| {
                                    sort.sorted(rows)
                                        .into_iter()
                                        .map(|row| view! { <TableRow columns=spec.columns row=row.clone() /> })
                                        .collect_view()
                                })
                            })
                        }}
                    </tbody>
                </table>
            </div>
            <DataStateGate state=state />
        </div>
    }
}

/// Header cell; sortable columns toggle the card's sort on click
#[component]
fn ColumnHeader(column: &'static TableColumn, sort: RwSignal<SortState>) -> impl IntoView {
    view! {
        <th
            class=header_class(column)
            on:click=move |_| sort.update(|sort| sort.click(column))
        >
            <span>{column.label}</span>
            {move || {
                sort.with(|sort| sort.indicator_for(column))
                    .map(|arrow| view! { <span class="sort-indicator">{arrow}</span> })
            }}
        </th>
    }
}

#[component]
fn TableRow(columns: &'static [TableColumn], row: Row) -> impl IntoView {
    view! {
        <tr>
            {columns
                .iter()
                .map(|column| view! { <td>{column.cell(&row).to_string()}</td> })
                .collect_view()}
        </tr>
    }
}

fn header_class(column: &TableColumn) -> &'static str {
    if column.sortable {
        "sortable"
    } else {
        ""
    }
}

fn wrapper_class(compact: bool) -> &'static str {
    if compact {
        "table-wrapper table-wrapper--compact"
    } else {
        "table-wrapper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_class() {
        assert_eq!(wrapper_class(false), "table-wrapper");
        assert_eq!(wrapper_class(true), "table-wrapper table-wrapper--compact");
    }

    #[test]
    fn test_header_class() {
        assert_eq!(header_class(&TableColumn::sortable("sku", "SKU")), "sortable");
        assert_eq!(header_class(&TableColumn::fixed("sku", "SKU")), "");
    }
}
