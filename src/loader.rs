use crate::columns::{ColumnIndex, CsvColumns};
use crate::config::{Config, ListSource};
use crate::constants::{CSV_EXTENSION, DEFAULT_ENABLED_FILES, ENABLED_FILES_KEY};
use crate::locale::Locale;
use crate::models::{DomainsData, WebsiteRecord};
use crate::utils;
use anyhow::{Context, Result};
use csv::StringRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Loads website entries from the locale CSV files of one directory
pub struct WebsiteLoader {
    csv_dir: PathBuf,
    columns: CsvColumns,
}

impl WebsiteLoader {
    /// Create a loader for the given directory with the default column names
    pub fn new<P: AsRef<Path>>(csv_dir: P) -> Self {
        Self {
            csv_dir: csv_dir.as_ref().to_path_buf(),
            columns: CsvColumns::default(),
        }
    }

    /// Create a loader from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.csv_dir()).with_columns(config.columns.clone())
    }

    pub fn with_columns(mut self, columns: CsvColumns) -> Self {
        self.columns = columns;
        self
    }

    pub fn csv_dir(&self) -> &Path {
        &self.csv_dir
    }

    /// List the `.csv` files of the directory, sorted by name.
    /// A missing directory yields an empty list.
    pub fn list_csv_files(&self) -> Result<Vec<PathBuf>> {
        if !self.csv_dir.exists() {
            debug!(dir = %self.csv_dir.display(), "CSV directory not found");
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.csv_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| {
                format!("Failed to list CSV directory: {}", self.csv_dir.display())
            })?;

            // Follows symlinks; dangling links are not files
            if !entry.path().is_file() {
                continue;
            }

            let is_csv = utils::file_name(entry.path())
                .map(|name| name.ends_with(CSV_EXTENSION))
                .unwrap_or(false);
            if is_csv {
                files.push(entry.into_path());
            }
        }

        debug!(count = files.len(), dir = %self.csv_dir.display(), "Discovered CSV files");
        Ok(files)
    }

    /// Keep the discovered files whose base name is enabled, in discovery order
    pub fn select_files<S: AsRef<str>>(&self, enabled: &[S]) -> Result<Vec<PathBuf>> {
        let selected: Vec<PathBuf> = self
            .list_csv_files()?
            .into_iter()
            .filter(|path| {
                utils::file_name(path)
                    .map(|name| enabled.iter().any(|e| e.as_ref() == name))
                    .unwrap_or(false)
            })
            .collect();

        debug!(count = selected.len(), "Selected CSV files");
        Ok(selected)
    }

    /// Select files using the enabled list held by a settings source
    pub fn select_from<L: ListSource + ?Sized>(&self, source: &L) -> Result<Vec<PathBuf>> {
        let enabled = source.get_list(ENABLED_FILES_KEY, DEFAULT_ENABLED_FILES);
        self.select_files(&enabled)
    }

    /// All discovered file names alongside the enabled ones among them
    pub fn list_all_and_selected<S: AsRef<str>>(
        &self,
        enabled: &[S],
    ) -> Result<(Vec<String>, Vec<String>)> {
        let names = |paths: Vec<PathBuf>| -> Vec<String> {
            paths
                .iter()
                .filter_map(|path| utils::file_name(path).map(str::to_string))
                .collect()
        };

        let all = names(self.list_csv_files()?);
        let selected = all
            .iter()
            .filter(|name| enabled.iter().any(|e| e.as_ref() == name.as_str()))
            .cloned()
            .collect();

        Ok((all, selected))
    }

    /// Read every valid row of the selected files.
    ///
    /// Rows missing a navigation type, category, enabled flag or URL are
    /// skipped with a warning. Files that vanished since discovery are
    /// skipped silently.
    pub fn load_websites<S: AsRef<str>>(&self, enabled: &[S]) -> Result<Vec<WebsiteRecord>> {
        let mut websites = Vec::new();

        for path in self.select_files(enabled)? {
            if !path.exists() {
                continue;
            }

            let locale = Locale::from_path(&path).to_string();
            self.for_each_row(&path, |index, record| {
                let nav_type = index.trimmed(record, index.nav_type);
                let category = index.trimmed(record, index.category);
                let is_enabled = index.trimmed(record, index.is_enabled);
                let url = index.trimmed(record, index.url);
                let comment = index.raw(record, index.comment).map(str::to_string);

                if [nav_type, category, is_enabled, url].iter().any(|f| f.is_empty()) {
                    warn!(
                        file = %path.display(),
                        row = ?record.iter().collect::<Vec<_>>(),
                        "Some data are missing, row skipped"
                    );
                    return;
                }

                websites.push(WebsiteRecord::new(
                    nav_type.to_string(),
                    locale.clone(),
                    category.to_string(),
                    is_enabled.to_string(),
                    url.to_string(),
                    comment,
                ));
            })?;
        }

        Ok(websites)
    }

    /// Collect distinct locales and URL domains of the selected files.
    ///
    /// Rows are not validated here: a missing URL contributes an empty domain.
    pub fn compute_domains_data<S: AsRef<str>>(&self, enabled: &[S]) -> Result<DomainsData> {
        let mut data = DomainsData::default();

        for path in self.select_files(enabled)? {
            if !path.exists() {
                continue;
            }

            match Locale::from_path(&path) {
                Locale::Global => data.include_global = true,
                Locale::Region(token) => {
                    data.locales.insert(token);
                }
            }

            self.for_each_row(&path, |index, record| {
                let url = index.trimmed(record, index.url);
                data.domains.insert(utils::extract_domain(url).to_string());
            })?;
        }

        Ok(data)
    }

    fn for_each_row<F>(&self, path: &Path, mut f: F) -> Result<()>
    where
        F: FnMut(&ColumnIndex, &StringRecord),
    {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read CSV header: {}", path.display()))?
            .clone();
        let index = self.columns.resolve(&headers);

        for result in reader.records() {
            let record =
                result.with_context(|| format!("Failed to read CSV row: {}", path.display()))?;
            if record.is_empty() {
                continue;
            }
            f(&index, &record);
        }

        Ok(())
    }
}
