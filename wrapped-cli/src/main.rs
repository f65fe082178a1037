use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wrapped_client::Session;
use wrapped_core::CategorizedView;

mod config;
mod present;

#[derive(Parser, Debug)]
#[command(name = "wrapped", version, about = "Your year in money, one slide at a time")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the slideshow against the report endpoint
    Show {
        /// Report service base URL (overrides config)
        #[arg(long)]
        url: Option<String>,

        /// Present a saved report.json instead of fetching
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Classify a report and print bucket counts (a feed debugging aid)
    Inspect {
        /// Report service base URL (overrides config)
        #[arg(long)]
        url: Option<String>,

        /// Read a saved report.json instead of fetching
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the whole organized view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Config management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default ~/.wrapped/config.toml
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the alternate-screen presenter stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::Show { url, file } => {
            let session = match file {
                Some(path) => {
                    let records = read_report_file(&path)?;
                    Session::preloaded(CategorizedView::organize(Some(&records)))
                }
                None => {
                    let base_url = url.unwrap_or(cfg.endpoint.base_url);
                    Session::start(&base_url, Duration::from_secs(cfg.endpoint.timeout_secs))
                }
            };
            present::run(session)?;
        }

        Command::Inspect { url, file, json } => {
            let records = match file {
                Some(path) => read_report_file(&path)?,
                None => {
                    let base_url = url.unwrap_or(cfg.endpoint.base_url);
                    wrapped_client::fetch_report(
                        &base_url,
                        Duration::from_secs(cfg.endpoint.timeout_secs),
                    )
                    .await?
                }
            };

            let view = CategorizedView::organize(Some(&records));

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!(
                    "Report: {} records, {} classified, {} dropped\n",
                    records.len(),
                    view.classified(),
                    view.dropped
                );
                for (bucket, count) in view.bucket_counts() {
                    println!("{bucket:>16}  {count}");
                }
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config()?;
            }
        },
    }

    Ok(())
}

fn read_report_file(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        bail!("report file not found: {}", path.display());
    }
    let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let body: Value =
        serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    match body {
        Value::Array(records) => Ok(records),
        _ => bail!("{} does not hold a JSON array", path.display()),
    }
}
