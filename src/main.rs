//! FinAUDIT Dashboard - terminal front end

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use finaudit_dashboard::api::{render_text, DashboardView};
use finaudit_dashboard::logic::record::load_from_file;
use finaudit_dashboard::{
    constants, AnalysisClient, AnalysisService, DashboardConfig, SelectOutcome, Session, Standard,
};

#[derive(Parser)]
#[command(name = "finaudit-dashboard", version, about = "Compliance audit dashboard")]
struct Cli {
    /// Analysis Service base URL (overrides FINAUDIT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print the dashboard as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a saved analysis
    Show { record: PathBuf },

    /// Upload a dataset for a fresh analysis
    Analyze {
        dataset: PathBuf,
        /// Save the resulting record
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Re-evaluate a saved analysis under another standard
    Reevaluate {
        record: PathBuf,
        #[arg(long, short)]
        standard: Standard,
        /// Save the merged record
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Ask the audit assistant about a saved analysis
    Ask { record: PathBuf, question: String },
}

fn print_view(session: &Session, json: bool) -> Result<()> {
    let view = DashboardView::from_session(session);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

fn save_record(session: &Session, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(&session.record())?;
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Record saved to {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = DashboardConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    config.validate()?;

    log::info!("{} v{} -> {}", constants::APP_NAME, constants::APP_VERSION, config.base_url());
    let service: Arc<dyn AnalysisService> = Arc::new(AnalysisClient::new(&config)?);

    match cli.command {
        Command::Show { record: path } => {
            let record = load_from_file(&path)?;
            let session = Session::with_notice_capacity(record, service, config.notice_capacity);
            print_view(&session, cli.json)?;
        }

        Command::Analyze { dataset, out } => {
            let content = std::fs::read(&dataset)
                .with_context(|| format!("reading {}", dataset.display()))?;
            let filename = dataset
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "dataset.csv".to_string());

            let session = Session::from_upload(service, &filename, content, config.notice_capacity).await?;
            print_view(&session, cli.json)?;
            if let Some(out) = out {
                save_record(&session, &out)?;
            }
        }

        Command::Reevaluate { record: path, standard, out } => {
            let record = load_from_file(&path)?;
            let session = Session::with_notice_capacity(record, service, config.notice_capacity);

            match session.select_standard(standard).await {
                SelectOutcome::Applied { health_score, .. } => {
                    log::info!("{} applied, health {:.1}", standard, health_score);
                }
                SelectOutcome::Failed { error, .. } => {
                    log::warn!("Keeping previous results: {}", error);
                }
                other => log::debug!("Re-evaluation outcome: {:?}", other),
            }

            print_view(&session, cli.json)?;
            if let Some(out) = out {
                save_record(&session, &out)?;
            }
        }

        Command::Ask { record: path, question } => {
            let record = load_from_file(&path)?;
            let session = Session::with_notice_capacity(record, service, config.notice_capacity);
            let answer = session.ask(&question).await?;
            println!("{}", answer);
        }
    }

    Ok(())
}
