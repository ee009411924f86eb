//! Filter and metric tile descriptors.

use serde::Serialize;
use std::collections::HashMap;

/// Kind of input a filter renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Select,
    Date,
    Search,
    Text,
}

impl FilterKind {
    /// `type` attribute for input-backed filters, `None` for selects
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FilterKind::Select => None,
            FilterKind::Date => Some("date"),
            FilterKind::Search => Some("search"),
            FilterKind::Text => Some("text"),
        }
    }
}

/// One control in a page's filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterField {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FilterKind,
}

impl FilterField {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: FilterKind,
    ) -> Self {
        Self {
            id,
            label,
            placeholder,
            kind,
        }
    }

    pub fn test_id(&self) -> String {
        format!("filter-{}", self.id)
    }
}

/// Colour treatment of a metric tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Profit,
    Loss,
    #[default]
    Neutral,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Profit => "metric-tile--profit",
            Tone::Loss => "metric-tile--loss",
            Tone::Neutral => "metric-tile--neutral",
        }
    }
}

/// A single headline metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricTile {
    pub id: &'static str,
    pub label: &'static str,
    pub tone: Option<Tone>,
    pub test_id: Option<&'static str>,
}

impl MetricTile {
    pub const fn new(id: &'static str, label: &'static str, test_id: &'static str) -> Self {
        Self {
            id,
            label,
            tone: None,
            test_id: Some(test_id),
        }
    }

    pub const fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn tone_class(&self) -> &'static str {
        self.tone.unwrap_or_default().class()
    }

    /// The tile's value, if the data layer supplied one
    pub fn value<'a>(&self, values: &'a TileValues) -> Option<&'a str> {
        values.get(self.id).map(String::as_str)
    }
}

/// Formatted tile values keyed by tile id
pub type TileValues = HashMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_input_types() {
        assert_eq!(FilterKind::Select.input_type(), None);
        assert_eq!(FilterKind::Date.input_type(), Some("date"));
        assert_eq!(FilterKind::Search.input_type(), Some("search"));
        assert_eq!(FilterKind::Text.input_type(), Some("text"));
    }

    #[test]
    fn test_filter_test_id() {
        let field = FilterField::new("date-from", "Period from", "Start date", FilterKind::Date);
        assert_eq!(field.test_id(), "filter-date-from");
    }

    #[test]
    fn test_tile_without_value() {
        let tile = MetricTile::new("revenue", "Revenue", "tile-revenue");
        assert_eq!(tile.value(&TileValues::new()), None);
        assert_eq!(tile.tone_class(), "metric-tile--neutral");
    }

    #[test]
    fn test_tile_with_value_and_tone() {
        let tile = MetricTile::new("profit", "Profit", "tile-profit").tone(Tone::Profit);
        let mut values = TileValues::new();
        values.insert("profit".to_string(), "1 200 ₽".to_string());

        assert_eq!(tile.value(&values), Some("1 200 ₽"));
        assert_eq!(tile.tone_class(), "metric-tile--profit");
    }
}
