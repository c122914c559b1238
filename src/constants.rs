/// Constants used throughout the linkdir crate
/// This module centralizes file naming rules, config keys and defaults

/// Display symbol for entries that apply to every locale
pub const COMMON_LOCALE_SIGN: &str = "★";

/// Locale token produced by the shared (locale-less) CSV file
pub const COMMON_LOCALE: &str = "COMMON";

/// Suffix carried by link files (e.g. "fr-links.csv")
pub const LINKS_SUFFIX: &str = "-links";

/// Extension of files picked up from the CSV directory (matched case-sensitively)
pub const CSV_EXTENSION: &str = ".csv";

/// Config key holding the list of enabled CSV file names
pub const ENABLED_FILES_KEY: &str = "websearch.enabled_files";

/// Files enabled when the configuration does not list any
pub const DEFAULT_ENABLED_FILES: &[&str] = &[
    "common-links.csv",
    "en-links.csv",
];

/// Default CSV directory, relative to the working directory
pub const DEFAULT_CSV_DIR: &str = "data/csv";

/// Default location of the skipped domain suggestions ledger
pub const DEFAULT_SKIPPED_DOMAINS_FILE: &str = "data/skipped_domain_suggestions.txt";

/// Number of hex characters kept from the SHA-256 digest
pub const HASH_LENGTH: usize = 16;

/// Default CSV header names
pub const DEFAULT_NAV_TYPE_COLUMN: &str = "Type";
pub const DEFAULT_CATEGORY_COLUMN: &str = "Category";
pub const DEFAULT_IS_ENABLED_COLUMN: &str = "Enabled";
pub const DEFAULT_URL_COLUMN: &str = "URL";
pub const DEFAULT_COMMENT_COLUMN: &str = "Comment";
