//! Sortable Tables
//!
//! Column descriptors and the client-side sort state owned by a table card.
//! Sorting works on the rows already loaded and never reorders them in place.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A table row: string values keyed by column
pub type Row = BTreeMap<String, String>;

/// Column descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
}

impl TableColumn {
    pub const fn sortable(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
        }
    }

    pub const fn fixed(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
        }
    }

    /// Cell value of this column in `row`; missing fields read as empty
    pub fn cell<'a>(&self, row: &'a Row) -> &'a str {
        row.get(self.key).map(String::as_str).unwrap_or("")
    }
}

/// Static description of a table card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub title: &'static str,
    pub columns: &'static [TableColumn],
    pub compact: bool,
    pub test_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Active sort of a table instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<&'static str>,
    pub direction: SortDirection,
}

impl SortState {
    /// Apply a header click on `key`.
    ///
    /// Same key flips the direction, a different key sorts ascending by it.
    pub fn toggle(&mut self, key: &'static str) {
        if self.key == Some(key) {
            self.direction = self.direction.flip();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Asc;
        }
    }

    /// Click on `column`; non-sortable columns are ignored
    pub fn click(&mut self, column: &TableColumn) {
        if column.sortable {
            self.toggle(column.key);
        }
    }

    /// Direction indicator for `column` when it is the active sort
    pub fn indicator_for(&self, column: &TableColumn) -> Option<&'static str> {
        (column.sortable && self.key == Some(column.key)).then(|| self.direction.indicator())
    }

    /// Rows in display order. Equal values keep their input order.
    pub fn sorted<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        let mut ordered: Vec<&Row> = rows.iter().collect();
        if self.key.is_some() {
            ordered.sort_by(|a, b| self.compare(a, b));
        }
        ordered
    }

    /// Compare two rows under this sort.
    ///
    /// Fields compare by UTF-16 code units, the browser's string order; it
    /// differs from `str::cmp` for characters above U+FFFF.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let Some(key) = self.key else {
            return Ordering::Equal;
        };

        let left = a.get(key).map(String::as_str).unwrap_or("");
        let right = b.get(key).map(String::as_str).unwrap_or("");
        match self.direction {
            SortDirection::Asc => utf16_cmp(left, right),
            SortDirection::Desc => utf16_cmp(right, left),
        }
    }
}

fn utf16_cmp(left: &str, right: &str) -> Ordering {
    left.encode_utf16().cmp(right.encode_utf16())
}

/// Caption next to the table title
pub fn row_count_label(count: usize) -> String {
    format!("{} rows", count)
}
