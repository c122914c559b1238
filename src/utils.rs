use crate::constants::HASH_LENGTH;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Short content fingerprint: the first 16 hex characters of SHA-256
pub fn generate_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let mut digest = format!("{:x}", hasher.finalize());
    digest.truncate(HASH_LENGTH);
    digest
}

/// Domain part of a URL: the authority when a "//" separator is present,
/// otherwise the URL itself
pub fn extract_domain(url: &str) -> &str {
    if url.contains("//") {
        // A "//" always yields at least three segments
        url.split('/').nth(2).unwrap_or(url)
    } else {
        url
    }
}

/// Base file name as a UTF-8 string
pub fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}
