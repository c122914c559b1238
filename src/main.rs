use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linkdir::{
    config::Config,
    ledger::{HashLog, SkippedDomains},
    loader::WebsiteLoader,
    utils,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/settings.toml";

#[derive(Parser)]
#[command(name = "linkdir")]
#[command(about = "Locale-tagged website directory — load CSV link files, list domains, track suggestions")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to config/settings.toml or ~/.config/linkdir/settings.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// CSV directory (overrides config)
    #[arg(long, global = true)]
    csv_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List CSV files and whether they are enabled
    Files,
    /// Load website entries from the enabled CSV files
    Load {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show distinct locales and domains of the enabled CSV files
    Domains {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the short hash of a value
    Hash {
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Check whether a value was already recorded in the hash log
    Seen {
        #[arg(value_name = "VALUE")]
        value: String,
        /// Hash log file (overrides config)
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Record a value in the hash log
    Mark {
        #[arg(value_name = "VALUE")]
        value: String,
        /// Hash log file (overrides config)
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Add a domain to the skipped suggestions
    Skip {
        #[arg(value_name = "DOMAIN")]
        domain: String,
    },
    /// List skipped domain suggestions
    Skipped,
    /// Choose which CSV files are enabled and save the config
    Toggle {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Toggle writes back to the file that was read
    let config_path = cli.config.clone().or_else(Config::locate);
    let mut config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let loader = match &cli.csv_dir {
        Some(dir) => WebsiteLoader::new(dir).with_columns(config.columns.clone()),
        None => WebsiteLoader::from_config(&config),
    };
    let enabled = config.enabled_files();

    match cli.command {
        Commands::Files => {
            let (all, selected) = loader.list_all_and_selected(&enabled)?;
            if all.is_empty() {
                println!("No CSV files found in {}", loader.csv_dir().display());
                return Ok(());
            }

            for name in &all {
                let mark = if selected.contains(name) { "x" } else { " " };
                println!("[{}] {}", mark, name);
            }
        }
        Commands::Load { json } => {
            let websites = loader.load_websites(&enabled)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&websites)?);
            } else {
                for site in &websites {
                    println!(
                        "{:<4} {:<10} {:<16} {:<6} {}{}",
                        site.locale,
                        site.nav_type,
                        site.category,
                        site.enabled,
                        site.url,
                        site.comment
                            .as_deref()
                            .filter(|c| !c.trim().is_empty())
                            .map(|c| format!("  # {}", c.trim()))
                            .unwrap_or_default()
                    );
                }
                println!("\n{} entries loaded", websites.len());
            }
        }
        Commands::Domains { json } => {
            let data = loader.compute_domains_data(&enabled)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                let locales: Vec<&str> = data.locales.iter().map(String::as_str).collect();
                println!("Locales: {}", locales.join(", "));
                println!("Global entries: {}", if data.include_global { "yes" } else { "no" });
                println!("Domains ({}):", data.domains.len());
                for domain in &data.domains {
                    println!("  {}", domain);
                }
            }
        }
        Commands::Hash { value } => {
            println!("{}", utils::generate_hash(&value));
        }
        Commands::Seen { value, log } => {
            let log = hash_log(log, &config)?;
            let digest = utils::generate_hash(&value);
            let seen = log.contains(&digest)?;
            println!("{} {}", digest, if seen { "seen" } else { "new" });
        }
        Commands::Mark { value, log } => {
            let log = hash_log(log, &config)?;
            let digest = utils::generate_hash(&value);
            if log.save(&digest)? {
                println!("Recorded {}", digest);
            } else {
                println!("Already recorded {}", digest);
            }
        }
        Commands::Skip { domain } => {
            let skipped = SkippedDomains::new(config.skipped_domains_file());
            skipped.save(domain.trim())?;
            println!("Skipped {}", domain.trim());
        }
        Commands::Skipped => {
            let skipped = SkippedDomains::new(config.skipped_domains_file()).load()?;
            for domain in &skipped {
                println!("{}", domain);
            }
        }
        Commands::Toggle { yes } => {
            let (all, _) = loader.list_all_and_selected(&enabled)?;
            if all.is_empty() {
                println!("No CSV files found in {}", loader.csv_dir().display());
                return Ok(());
            }

            let defaults: Vec<bool> = all.iter().map(|name| enabled.contains(name)).collect();
            let chosen = dialoguer::MultiSelect::new()
                .with_prompt("Enabled CSV files")
                .items(&all)
                .defaults(&defaults)
                .interact()
                .context("Failed to read user input")?;

            // Names enabled in config but missing on disk are kept
            let mut files: Vec<String> = chosen.into_iter().map(|i| all[i].clone()).collect();
            files.extend(enabled.iter().filter(|name| !all.contains(name)).cloned());

            let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

            if !yes {
                let proceed = dialoguer::Confirm::new()
                    .with_prompt(format!("Save {} enabled files to {}?", files.len(), config_path.display()))
                    .default(true)
                    .interact()
                    .context("Failed to read user input")?;

                if !proceed {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            config.set_enabled_files(files);
            config.save_to_file(&config_path)?;
            println!("Saved {}", config_path.display());
        }
    }

    Ok(())
}

fn hash_log(flag: Option<PathBuf>, config: &Config) -> Result<HashLog> {
    let path = flag
        .or_else(|| config.hash_log())
        .context("No hash log given: pass --log or set websearch.hash_log")?;
    Ok(HashLog::new(path))
}
