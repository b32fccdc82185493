//! oxide-page CLI
//!
//! Validates form payloads and replays event scripts against page fixtures.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_behaviors::{Page, PageConfig};
use oxide_dom::{Document, PageSpec};
use oxide_forms::FieldValidator;
use oxide_page::{parse_fields, parse_script, replay, validate_fields};

/// Page behaviors from the command line.
#[derive(Parser)]
#[command(name = "oxide-page")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page configuration (JSON).
    #[arg(short, long, env = "OXIDE_PAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON array of field descriptors.
    Validate {
        /// Fields file.
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Replay an event script against a page fixture.
    Replay {
        /// Page fixture file.
        #[arg(short, long)]
        page: PathBuf,

        /// Event script file.
        #[arg(short, long)]
        events: PathBuf,
    },
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => PageConfig::load(path)?,
        None => PageConfig::default(),
    };

    match cli.command {
        Commands::Validate { input } => {
            let fields = parse_fields(&read(&input)?)?;
            let validator = FieldValidator::new(config.messages.clone());
            let reports = validate_fields(&validator, &fields);

            for report in &reports {
                println!("{report}");
            }
            let failed = reports.iter().filter(|r| !r.is_valid()).count();
            if failed > 0 {
                warn!("{failed} of {} fields invalid", reports.len());
                std::process::exit(1);
            }
            info!("{} fields valid", reports.len());
        }

        Commands::Replay { page, events } => {
            let spec = PageSpec::from_json(&read(&page)?)?;
            let steps = parse_script(&read(&events)?)?;

            let submit_delay = config.submit_delay();
            let mut doc = Document::from_spec(&spec);
            let mut page = Page::from_config(config);
            page.init(&mut doc);

            let summary = replay(&mut page, &mut doc, &steps, submit_delay).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
