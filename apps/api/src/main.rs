mod config;
mod errors;
mod extract;
mod llm_client;
mod matching;
mod report;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::ModelClient;
use crate::matching::analyzer::Analyzer;
use crate::routes::build_router;
use crate::state::AppState;

#[derive(Parser)]
#[command(
    name = "cv-matcher",
    about = "Match a resume against a job description with an LLM backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a resume against a job description and print a report
    Analyze {
        /// Path to the resume file (PDF or plain text)
        #[arg(long)]
        resume_path: PathBuf,

        /// Path to the job description file
        #[arg(long)]
        job_desc_path: PathBuf,
    },
    /// Start the HTTP API server
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            resume_path,
            job_desc_path,
        } => run_analyze(&config, &resume_path, &job_desc_path).await,
        Command::Serve => run_server(config).await,
    }
}

async fn run_analyze(config: &Config, resume_path: &Path, job_desc_path: &Path) -> Result<()> {
    let analyzer = Analyzer::new(ModelClient::new(config)?);

    info!("processing input files");
    let resume_text = extract::extract_text(resume_path)?;
    let job_description = extract::extract_text(job_desc_path)?;

    let result = analyzer.analyze(&resume_text, &job_description).await?;
    report::print_report(&result);
    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    info!("starting cv-matcher API v{}", env!("CARGO_PKG_VERSION"));

    let analyzer = Analyzer::new(ModelClient::new(&config)?);
    let state = AppState { analyzer };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
