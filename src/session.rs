//! Caller-owned state for a trade list view: instrument, sort and search.

use std::cmp::Ordering;

use crate::mapping::{FieldValue, NormalizedRecord, Schema};

const SEARCH_FIELDS: &[&str] = &["TradeID", "TraderID", "Currency"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub ascending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeListView {
    pub instrument: Schema,
    pub sort: Option<SortKey>,
    pub search: String,
}

impl TradeListView {
    pub fn new(instrument: Schema) -> Self {
        Self { instrument, ..Self::default() }
    }

    /// Clicking the current sort column flips direction; a new column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        let same_field = self.sort.as_ref().is_some_and(|key| key.field == field);
        if same_field {
            if let Some(key) = self.sort.as_mut() {
                key.ascending = !key.ascending;
            }
        } else {
            self.sort = Some(SortKey { field: field.to_string(), ascending: true });
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Switching instrument keeps the search but drops a sort on the old columns.
    pub fn select_instrument(&mut self, instrument: Schema) {
        if self.instrument != instrument {
            self.instrument = instrument;
            self.sort = None;
        }
    }

    /// Records to display, in display order.
    pub fn visible<'a>(&self, trades: &'a [NormalizedRecord]) -> Vec<&'a NormalizedRecord> {
        let needle = self.search.trim().to_lowercase();

        let mut shown: Vec<&NormalizedRecord> = trades
            .iter()
            .filter(|t| has_trade_id(t))
            .filter(|t| needle.is_empty() || matches_search(t, &needle))
            .collect();

        if let Some(key) = &self.sort {
            shown.sort_by(|a, b| {
                let ord = compare_values(a.get(&key.field), b.get(&key.field));
                if key.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }

        shown
    }
}

fn has_trade_id(trade: &NormalizedRecord) -> bool {
    trade
        .get("TradeID")
        .map(|v| !v.to_string().trim().is_empty())
        .unwrap_or(false)
}

fn matches_search(trade: &NormalizedRecord, needle: &str) -> bool {
    SEARCH_FIELDS.iter().any(|field| {
        trade
            .get(field)
            .map(|v| v.to_string().to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

/// Numeric when both sides read as numbers, text otherwise; missing is empty text.
fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    let a_text = a.map(|v| v.to_string()).unwrap_or_default();
    let b_text = b.map(|v| v.to_string()).unwrap_or_default();

    match (as_number(a, &a_text), as_number(b, &b_text)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a_text.cmp(&b_text),
    }
}

/// Only finite values count; "NaN" or "inf" in a text column stay text.
fn as_number(value: Option<&FieldValue>, text: &str) -> Option<f64> {
    value
        .and_then(|v| v.as_f64())
        .filter(|n| n.is_finite())
        .or_else(|| text.trim().parse::<f64>().ok().filter(|n| n.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{map_row, RawRow};

    fn trade(id: &str, trader: &str, currency: &str, price: &str) -> NormalizedRecord {
        let row: RawRow = [("Trade ID", id), ("Trader Name", trader), ("Currency", currency), ("Price", price)]
            .into_iter()
            .collect();
        map_row(Schema::Equity, &row)
    }

    fn ids(records: Vec<&NormalizedRecord>) -> Vec<String> {
        records.iter().map(|r| r.get("TradeID").unwrap().to_string()).collect()
    }

    #[test]
    fn test_blank_trade_ids_are_hidden() {
        let trades = vec![trade("EQ-1", "A", "USD", "1"), trade("  ", "B", "USD", "2")];
        let view = TradeListView::new(Schema::Equity);
        assert_eq!(ids(view.visible(&trades)), vec!["EQ-1"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let trades = vec![trade("EQ-1", "A", "USD", "1"), trade("EQ-2", "B", "EUR", "2")];
        let mut view = TradeListView::new(Schema::Equity);
        view.set_search("eur");
        assert_eq!(ids(view.visible(&trades)), vec!["EQ-2"]);

        view.set_search("eq-");
        assert_eq!(view.visible(&trades).len(), 2);
    }

    #[test]
    fn test_numeric_sort_and_toggle() {
        let trades = vec![
            trade("EQ-1", "A", "USD", "100"),
            trade("EQ-2", "B", "USD", "9"),
            trade("EQ-3", "C", "USD", "25.5"),
        ];
        let mut view = TradeListView::new(Schema::Equity);

        view.toggle_sort("Price");
        assert_eq!(ids(view.visible(&trades)), vec!["EQ-2", "EQ-3", "EQ-1"]);

        view.toggle_sort("Price");
        assert_eq!(ids(view.visible(&trades)), vec!["EQ-1", "EQ-3", "EQ-2"]);

        view.toggle_sort("TradeID");
        assert_eq!(view.sort, Some(SortKey { field: "TradeID".to_string(), ascending: true }));
    }

    #[test]
    fn test_numeric_text_sorts_numerically() {
        let trades = vec![trade("10", "A", "USD", "1"), trade("9", "B", "USD", "1")];
        let mut view = TradeListView::new(Schema::Equity);
        view.toggle_sort("TradeID");
        assert_eq!(ids(view.visible(&trades)), vec!["9", "10"]);
    }

    #[test]
    fn test_nan_and_infinity_names_sort_as_text() {
        let trades = vec![
            trade("EQ-1", "Nan", "USD", "1"),
            trade("EQ-2", "10", "USD", "1"),
            trade("EQ-3", "9", "USD", "1"),
            trade("EQ-4", "inf", "USD", "1"),
        ];
        let mut view = TradeListView::new(Schema::Equity);
        view.toggle_sort("TraderName");

        let names: Vec<String> = view
            .visible(&trades)
            .iter()
            .map(|r| r.get("TraderName").unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["9", "10", "Nan", "inf"]);
    }

    #[test]
    fn test_switching_instrument_clears_sort() {
        let mut view = TradeListView::new(Schema::Equity);
        view.toggle_sort("Price");
        view.set_search("x");
        view.select_instrument(Schema::Forex);
        assert_eq!(view.sort, None);
        assert_eq!(view.search, "x");
    }
}
