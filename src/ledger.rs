use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Append-only ledger of content digests, one per line
pub struct HashLog {
    path: PathBuf,
}

impl HashLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the digest is already recorded (exact line match).
    /// A missing ledger contains nothing.
    pub fn contains(&self, digest: &str) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read hash log: {}", self.path.display()))?;

        Ok(has_line(&content, digest))
    }

    /// Record the digest unless it is already present.
    /// Returns `true` when a line was appended.
    pub fn save(&self, digest: &str) -> Result<bool> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open hash log: {}", self.path.display()))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .with_context(|| format!("Failed to read hash log: {}", self.path.display()))?;

        if has_line(&content, digest) {
            debug!(digest, "Hash already recorded");
            return Ok(false);
        }

        let separator = if content.is_empty() || content.ends_with('\n') { "" } else { "\n" };
        writeln!(file, "{}{}", separator, digest)
            .with_context(|| format!("Failed to append to hash log: {}", self.path.display()))?;

        Ok(true)
    }
}

fn has_line(content: &str, digest: &str) -> bool {
    content.lines().any(|line| line == digest)
}

/// Domains the user chose not to be suggested again
pub struct SkippedDomains {
    path: PathBuf,
}

impl SkippedDomains {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-empty trimmed lines of the file; empty when the file is missing
    pub fn load(&self) -> Result<BTreeSet<String>> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read skipped domains: {}", self.path.display()))?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Append the domain. Repeated domains are written again.
    pub fn save(&self, domain: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open skipped domains: {}", self.path.display()))?;

        writeln!(file, "{}", domain)
            .with_context(|| format!("Failed to append skipped domain: {}", self.path.display()))
    }
}
