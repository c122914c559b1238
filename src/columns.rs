use crate::constants::{
    DEFAULT_CATEGORY_COLUMN, DEFAULT_COMMENT_COLUMN, DEFAULT_IS_ENABLED_COLUMN,
    DEFAULT_NAV_TYPE_COLUMN, DEFAULT_URL_COLUMN,
};
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Header names of the link CSV files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvColumns {
    pub nav_type: String,
    pub category: String,
    pub is_enabled: String,
    pub url: String,
    pub comment: String,
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self {
            nav_type: DEFAULT_NAV_TYPE_COLUMN.to_string(),
            category: DEFAULT_CATEGORY_COLUMN.to_string(),
            is_enabled: DEFAULT_IS_ENABLED_COLUMN.to_string(),
            url: DEFAULT_URL_COLUMN.to_string(),
            comment: DEFAULT_COMMENT_COLUMN.to_string(),
        }
    }
}

impl CsvColumns {
    /// Resolve column positions against a (trimmed) header row
    pub fn resolve(&self, headers: &StringRecord) -> ColumnIndex {
        // Duplicate header names resolve to the last occurrence
        let position = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| *header == name)
                .map(|(i, _)| i)
                .last()
        };

        ColumnIndex {
            nav_type: position(&self.nav_type),
            category: position(&self.category),
            is_enabled: position(&self.is_enabled),
            url: position(&self.url),
            comment: position(&self.comment),
        }
    }
}

/// Column positions for one CSV file; `None` when the header is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub nav_type: Option<usize>,
    pub category: Option<usize>,
    pub is_enabled: Option<usize>,
    pub url: Option<usize>,
    pub comment: Option<usize>,
}

impl ColumnIndex {
    /// Trimmed field value, empty when the column or the cell is missing
    pub fn trimmed<'r>(&self, record: &'r StringRecord, column: Option<usize>) -> &'r str {
        column
            .and_then(|i| record.get(i))
            .map(str::trim)
            .unwrap_or("")
    }

    /// Untouched field value, `None` when the column or the cell is missing
    pub fn raw<'r>(&self, record: &'r StringRecord, column: Option<usize>) -> Option<&'r str> {
        column.and_then(|i| record.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ignores_column_order_and_extras() {
        let headers = StringRecord::from(vec!["URL", "Extra", "Category", "Type", "Enabled"]);
        let index = CsvColumns::default().resolve(&headers);

        assert_eq!(index.url, Some(0));
        assert_eq!(index.category, Some(2));
        assert_eq!(index.nav_type, Some(3));
        assert_eq!(index.is_enabled, Some(4));
        assert_eq!(index.comment, None);
    }

    #[test]
    fn test_resolve_custom_names() {
        let columns = CsvColumns {
            url: "Link".to_string(),
            ..CsvColumns::default()
        };
        let headers = StringRecord::from(vec!["Link", "URL"]);

        assert_eq!(columns.resolve(&headers).url, Some(0));
    }

    #[test]
    fn test_field_access_on_short_record() {
        let headers = StringRecord::from(vec!["Type", "Category", "Enabled", "URL", "Comment"]);
        let index = CsvColumns::default().resolve(&headers);
        let record = StringRecord::from(vec!["  menu ", "news"]);

        assert_eq!(index.trimmed(&record, index.nav_type), "menu");
        assert_eq!(index.trimmed(&record, index.url), "");
        assert_eq!(index.raw(&record, index.comment), None);
        assert_eq!(index.raw(&record, index.nav_type), Some("  menu "));
    }
}
