//! Data table sorting and filtering.
//!
//! Every management screen renders its rows from a store snapshot and
//! recomputes the visible set per render: an optional sort on a single
//! column, then a case-insensitive substring search across the screen's
//! configured columns. Rows expose their columns through [`TableRow`] so the
//! same machinery serves categories, products and orders.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A single cell value, typed so comparison uses native ordering.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Text column; compared lexicographically.
    Text(Cow<'a, str>),
    /// Numeric column (price, total, stock); compared numerically.
    Number(Decimal),
    /// Timestamp column; compared chronologically.
    Timestamp(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    /// Borrowed text value.
    #[must_use]
    pub fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    /// Owned text value (for formatted cells).
    #[must_use]
    pub fn owned_text(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }

    /// The cell rendered as display text, used for substring search.
    #[must_use]
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Self::Text(value) => Cow::Borrowed(value.as_ref()),
            Self::Number(value) => Cow::Owned(value.to_string()),
            Self::Timestamp(value) => Cow::Owned(value.to_rfc3339()),
        }
    }

    /// Three-way comparison; mixed kinds order by kind so the sort stays
    /// total even when a column's type is inconsistent across rows.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Number(_) => 1,
            Self::Timestamp(_) => 2,
        }
    }
}

impl From<Decimal> for FieldValue<'_> {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for FieldValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction (clicking a sorted column header again).
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A row that can appear in a data table.
///
/// `field` returns `None` for columns the row has no value for (absent
/// optional data); the table machinery treats a missing cell as empty text
/// and never panics on it.
pub trait TableRow {
    /// Look up a cell by column key.
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

/// Sort rows in place by one column.
///
/// Comparison is the field value's native three-way ordering; the sort is
/// stable, so rows with equal keys keep their relative order. Missing cells
/// sort as empty text.
pub fn sort_rows<T: TableRow>(rows: &mut [T], key: &str, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let left = a.field(key).unwrap_or_else(|| FieldValue::text(""));
        let right = b.field(key).unwrap_or_else(|| FieldValue::text(""));
        direction.apply(left.compare(&right))
    });
}

/// Keep the rows whose configured columns match a search term.
///
/// The match is a case-insensitive substring test, OR-ed across `fields`.
/// An empty or whitespace-only term keeps every row; a missing cell is
/// treated as an empty string and therefore never matches.
#[must_use]
pub fn filter_rows<T: TableRow>(rows: Vec<T>, term: &str, fields: &[&str]) -> Vec<T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| {
            fields.iter().any(|field| {
                row.field(field)
                    .is_some_and(|value| value.display().to_lowercase().contains(&needle))
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        price: Decimal,
        brand: Option<&'static str>,
    }

    impl TableRow for Row {
        fn field(&self, key: &str) -> Option<FieldValue<'_>> {
            match key {
                "name" => Some(FieldValue::text(self.name)),
                "price" => Some(FieldValue::Number(self.price)),
                "brand" => self.brand.map(FieldValue::text),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Oat Milk",
                price: "4.50".parse().unwrap(),
                brand: Some("Grove"),
            },
            Row {
                name: "Almond Butter",
                price: "12.00".parse().unwrap(),
                brand: None,
            },
            Row {
                name: "Coffee Beans",
                price: "9.25".parse().unwrap(),
                brand: Some("Kindred"),
            },
        ]
    }

    #[test]
    fn test_sort_by_text_column() {
        let mut items = rows();
        sort_rows(&mut items, "name", SortDirection::Ascending);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, ["Almond Butter", "Coffee Beans", "Oat Milk"]);
    }

    #[test]
    fn test_sort_by_numeric_column_is_numeric() {
        let mut items = rows();
        sort_rows(&mut items, "price", SortDirection::Ascending);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        // 4.50 < 9.25 < 12.00 (a lexicographic sort would put "12.00" first)
        assert_eq!(names, ["Oat Milk", "Coffee Beans", "Almond Butter"]);
    }

    #[test]
    fn test_toggle_reverses_distinct_keys() {
        let mut ascending = rows();
        sort_rows(&mut ascending, "price", SortDirection::Ascending);

        let mut descending = rows();
        sort_rows(
            &mut descending,
            "price",
            SortDirection::Ascending.toggle(),
        );

        let forward: Vec<_> = ascending.iter().map(|r| r.name).collect();
        let mut backward: Vec<_> = descending.iter().map(|r| r.name).collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut items = vec![
            Row {
                name: "first",
                price: "1".parse().unwrap(),
                brand: Some("same"),
            },
            Row {
                name: "second",
                price: "2".parse().unwrap(),
                brand: Some("same"),
            },
        ];
        sort_rows(&mut items, "brand", SortDirection::Ascending);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let upper = filter_rows(rows(), "GROVE", &["name", "brand"]);
        let lower = filter_rows(rows(), "grove", &["name", "brand"]);
        assert_eq!(upper.len(), 1);
        assert_eq!(lower.len(), 1);
        assert_eq!(upper.first().unwrap().name, lower.first().unwrap().name);
    }

    #[test]
    fn test_filter_ors_across_fields() {
        // "kindred" only matches the brand column; "coffee" only the name.
        assert_eq!(filter_rows(rows(), "kindred", &["name", "brand"]).len(), 1);
        assert_eq!(filter_rows(rows(), "coffee", &["name", "brand"]).len(), 1);
    }

    #[test]
    fn test_filter_missing_field_never_matches_or_panics() {
        // "Almond Butter" has no brand; filtering on brand must skip it quietly.
        let matched = filter_rows(rows(), "almond", &["brand"]);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        assert_eq!(filter_rows(rows(), "", &["name"]).len(), 3);
        assert_eq!(filter_rows(rows(), "   ", &["name"]).len(), 3);
    }

    #[test]
    fn test_unknown_column_sorts_as_equal() {
        let mut items = rows();
        sort_rows(&mut items, "nonexistent", SortDirection::Ascending);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, ["Oat Milk", "Almond Butter", "Coffee Beans"]);
    }
}
