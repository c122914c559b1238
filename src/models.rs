use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One website entry read from a locale CSV file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebsiteRecord {
    /// Navigation type (e.g. "menu", "search")
    pub nav_type: String,
    /// Locale token derived from the file name, or the common sign
    pub locale: String,
    pub category: String,
    /// Enabled flag as written in the file
    pub enabled: String,
    pub url: String,
    /// Free-form comment, `None` when the file has no comment column
    pub comment: Option<String>,
}

impl WebsiteRecord {
    /// Create a new WebsiteRecord instance
    pub fn new(
        nav_type: String,
        locale: String,
        category: String,
        enabled: String,
        url: String,
        comment: Option<String>,
    ) -> Self {
        Self {
            nav_type,
            locale,
            category,
            enabled,
            url,
            comment,
        }
    }
}

/// Distinct locales and domains across the selected files
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainsData {
    pub locales: BTreeSet<String>,
    pub domains: BTreeSet<String>,
    /// Whether the common (all-locale) file is among the selected files
    pub include_global: bool,
}
