pub mod columns;
pub mod config;
pub mod constants;
pub mod ledger;
pub mod loader;
pub mod locale;
pub mod models;
pub mod utils;

pub use columns::CsvColumns;
pub use config::{Config, ListSource};
pub use ledger::{HashLog, SkippedDomains};
pub use loader::WebsiteLoader;
pub use locale::Locale;
pub use models::{DomainsData, WebsiteRecord};
