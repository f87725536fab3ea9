//! Incremental name search over the published list.

use super::display::DisplayRecord;

/// Case-insensitive substring query over display names.
///
/// An empty query matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalise `raw` for matching.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// Whether the query is empty and therefore matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether the record's lower-cased full name contains the query.
    pub fn matches(&self, record: &DisplayRecord) -> bool {
        self.is_empty() || record.full_name().to_lowercase().contains(&self.needle)
    }
}

/// Borrow the records whose full name contains `query`, preserving order.
///
/// # Examples
///
/// ```rust
/// use directory::domain::{DisplayRecord, UserId, filter_by_name};
///
/// let records = vec![
///     DisplayRecord::new(UserId::new(1), "Emily Johnson", "Phoenix", "Mississippi"),
///     DisplayRecord::new(UserId::new(2), "Hassan Cole", "Pittsburgh", "Georgia"),
/// ];
/// let visible = filter_by_name(&records, "EMILY");
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].full_name(), "Emily Johnson");
/// ```
pub fn filter_by_name<'a, I>(records: I, query: &str) -> Vec<&'a DisplayRecord>
where
    I: IntoIterator<Item = &'a DisplayRecord>,
{
    let needle = SearchQuery::new(query);
    records
        .into_iter()
        .filter(|record| needle.matches(record))
        .collect()
}
