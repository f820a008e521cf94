use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use famfin_core::TransactionType;
use famfin_finance::{QuickAdd, QuickAddRequest, draft_lines, matched_keyword, parse_input, write_csv};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "famfin", version, about = "Family finance quick input")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write ~/.famfin/config.toml with defaults
    Init,

    /// Parse a phrase into amount, note and detected type
    Parse {
        /// e.g. "coffee 50k" or "lương 10m"
        #[arg(required = true)]
        text: Vec<String>,

        /// Print JSON instead of a line of text
        #[arg(long)]
        json: bool,
    },

    /// Guess INCOME / EXPENSE from keywords only
    Classify {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Build a transaction draft (JSON) from a phrase
    Add {
        #[arg(required = true)]
        text: Vec<String>,

        /// Explicit type; skips keyword detection
        #[arg(long = "type")]
        kind: Option<TransactionType>,

        /// Transaction date (YYYY-MM-DD); defaults to today in the configured timezone
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Timezone override for "today"
        #[arg(long)]
        tz: Option<String>,
    },

    /// Draft every line of a file and print CSV
    Batch {
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        tz: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // must work even when the existing config is broken
        Command::Init => {
            init_tracing(&Config::default());
            config::init_config()
        }
        command => {
            let cfg = config::load_config()?;
            init_tracing(&cfg);
            run(command, &cfg)
        }
    }
}

fn run(command: Command, cfg: &Config) -> Result<()> {
    match command {
        Command::Init => config::init_config()?,

        Command::Parse { text, json } => {
            let input = text.join(" ");
            let parsed = match parse_input(Some(input.as_str())) {
                Ok(p) => p,
                Err(e) => bail!("{e}"),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!(
                    "amount={} | note={} | type={}",
                    parsed.amount, parsed.note, parsed.kind
                );
            }
        }

        Command::Classify { text } => {
            let input = text.join(" ");
            match matched_keyword(&input) {
                Some((kind, kw)) => println!("{kind} (keyword: {kw})"),
                None => println!("UNKNOWN"),
            }
        }

        Command::Add { text, kind, date, tz } => {
            let today = cfg.transaction_date(date, tz.as_deref())?;
            let request = QuickAddRequest {
                input: Some(text.join(" ")),
                kind,
            };
            let quick_add = QuickAdd::new(cfg.quick_add.default_type);

            match quick_add.draft(&request, today) {
                Ok(draft) => println!("{}", serde_json::to_string_pretty(&draft)?),
                Err(e) => {
                    println!("{}", serde_json::to_string_pretty(&e.to_api_error())?);
                    std::process::exit(2);
                }
            }
        }

        Command::Batch { file, date, tz } => {
            let today = cfg.transaction_date(date, tz.as_deref())?;
            let f = File::open(&file).with_context(|| format!("open {}", file.display()))?;
            let quick_add = QuickAdd::new(cfg.quick_add.default_type);

            let rows = draft_lines(BufReader::new(f), &quick_add, today)
                .with_context(|| format!("drafting {}", file.display()))?;
            debug!(rows = rows.len(), file = %file.display(), "batch drafted");
            write_csv(&rows, std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
