use crate::constants::{COMMON_LOCALE, COMMON_LOCALE_SIGN, LINKS_SUFFIX};
use std::fmt;
use std::path::Path;

/// Locale a CSV file applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locale {
    /// The common file: entries apply to every locale
    Global,
    /// Upper-cased locale token (e.g. "FR")
    Region(String),
}

impl Locale {
    /// Derive the locale from a CSV file path.
    ///
    /// The file stem loses a trailing `-links` (any case) and is upper-cased;
    /// `COMMON` becomes [`Locale::Global`].
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();

        let token = strip_links_suffix(&stem).to_uppercase();
        if token == COMMON_LOCALE {
            Locale::Global
        } else {
            Locale::Region(token)
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Locale::Global)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Global => f.write_str(COMMON_LOCALE_SIGN),
            Locale::Region(token) => f.write_str(token),
        }
    }
}

fn strip_links_suffix(stem: &str) -> &str {
    let cut = stem.len().saturating_sub(LINKS_SUFFIX.len());
    match (stem.get(..cut), stem.get(cut..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(LINKS_SUFFIX) => head,
        _ => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_links_file() {
        let locale = Locale::from_path(Path::new("/data/csv/fr-links.csv"));
        assert_eq!(locale, Locale::Region("FR".to_string()));
        assert_eq!(locale.to_string(), "FR");
    }

    #[test]
    fn test_locale_common_file_is_global() {
        let locale = Locale::from_path(Path::new("common-links.csv"));
        assert!(locale.is_global());
        assert_eq!(locale.to_string(), "★");
    }

    #[test]
    fn test_locale_common_without_suffix() {
        assert!(Locale::from_path(Path::new("Common.csv")).is_global());
    }

    #[test]
    fn test_locale_suffix_case_insensitive() {
        let locale = Locale::from_path(Path::new("de-LINKS.csv"));
        assert_eq!(locale, Locale::Region("DE".to_string()));
    }

    #[test]
    fn test_locale_without_suffix_keeps_stem() {
        let locale = Locale::from_path(Path::new("pt_br.csv"));
        assert_eq!(locale, Locale::Region("PT_BR".to_string()));
    }

    #[test]
    fn test_locale_suffix_only_stripped_at_end() {
        let locale = Locale::from_path(Path::new("es-links-old.csv"));
        assert_eq!(locale, Locale::Region("ES-LINKS-OLD".to_string()));
    }
}
