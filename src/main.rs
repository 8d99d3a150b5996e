use anyhow::{bail, Result};
use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use linklet::config::Config;
use linklet::journal::{Journal, JsonFileJournal};
use linklet::links::LinkService;
use linklet::models::{Clock, CreateLinkRequest, SystemClock};
use linklet::redirect::{RedirectResolver, Resolution};
use linklet::storage::{JsonFileStore, LinkStore};

#[derive(Parser)]
#[command(name = "linklet")]
#[command(about = "Local URL shortener", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten up to 5 URLs in one batch
    Add {
        /// URLs to shorten
        #[arg(num_args = 1..=5, required = true)]
        urls: Vec<String>,
        /// Custom short code (single-URL batches only)
        #[arg(long)]
        code: Option<String>,
        /// Validity window in minutes (default 30)
        #[arg(long)]
        minutes: Option<String>,
    },
    /// List all links, newest first
    List,
    /// Delete a link by its short code
    Delete {
        /// Short code to delete
        code: String,
    },
    /// Resolve a short code to its destination URL
    Resolve {
        /// Short code to resolve
        code: String,
    },
    /// Show the action log
    Logs {
        /// Clear the log instead of printing it
        #[arg(long)]
        clear: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let store: Arc<dyn LinkStore> = Arc::new(JsonFileStore::new(config.store_path()));
    let journal: Arc<dyn Journal> = Arc::new(JsonFileJournal::new(config.journal_path()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let service = Arc::new(LinkService::new(
        store,
        Arc::clone(&journal),
        Arc::clone(&clock),
    ));

    match cli.command {
        Commands::Add {
            urls,
            code,
            minutes,
        } => {
            if code.is_some() && urls.len() > 1 {
                bail!("--code applies to a single URL; shorten that one on its own");
            }

            let requests: Vec<CreateLinkRequest> = urls
                .into_iter()
                .map(|url| CreateLinkRequest {
                    url,
                    custom_code: code.clone(),
                    validity_minutes: minutes.clone(),
                })
                .collect();

            let created = service.create(&requests)?;
            println!("✓ Created {} link(s)", created);
            print_listing(&config, &service, &clock);
        }
        Commands::List => {
            print_listing(&config, &service, &clock);
        }
        Commands::Delete { code } => {
            service.delete(&code)?;
            println!("✓ Deleted '{}'", code);
        }
        Commands::Resolve { code } => {
            let resolver = RedirectResolver::new(
                Arc::clone(&service),
                Arc::clone(&journal),
                Arc::clone(&clock),
            );
            match resolver.resolve(&code)? {
                Resolution::Success { url } => println!("→ {}", url),
                Resolution::NotFound => println!("Short link not found"),
                Resolution::Expired => println!("This short link has expired"),
            }
        }
        Commands::Logs { clear } => {
            if clear {
                journal.clear()?;
                println!("✓ Cleared action log");
            } else {
                let entries = journal.all();
                if entries.is_empty() {
                    println!("Action log is empty.");
                } else {
                    for entry in entries {
                        println!("{}  {:<24} {}", entry.ts, entry.kind.as_str(), entry.payload);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_listing(config: &Config, service: &LinkService, clock: &Arc<dyn Clock>) {
    let records = service.list();
    if records.is_empty() {
        println!("No links yet.");
        return;
    }

    let now = clock.now_millis();
    println!(
        "{:<32} {:<40} {:<20} {:>6}",
        "Short URL", "Destination", "Expires", "Clicks"
    );
    println!("{}", "-".repeat(100));
    for record in records {
        let expires = if record.is_expired(now) {
            "expired".to_string()
        } else {
            format_timestamp(record.expires_at)
        };
        println!(
            "{:<32} {:<40} {:<20} {:>6}",
            format!("{}/{}", config.base_url, record.code),
            record.url,
            expires,
            record.clicks
        );
    }
}

fn format_timestamp(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        _ => millis.to_string(),
    }
}
