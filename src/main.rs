use clap::{Parser, Subcommand};
use kyl_viewer::app::{CandidateSource, DonationSource, ViewController};
use kyl_viewer::config::AppConfig;
use kyl_viewer::fetch::{DemoDataSource, HttpDataSource};
use kyl_viewer::logging;
use kyl_viewer::render::ConsoleRenderer;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "kyl_viewer")]
#[command(about = "Know Your Leader campaign finance viewer")]
#[command(version = "0.1.0")]
struct Cli {
    /// Use the built-in demo dataset instead of fetching live data
    #[arg(long)]
    demo: bool,

    /// Disable colored party headers
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load candidates and render the grouped overview
    Overview {
        /// Search query to apply after loading (name, party, state, or id)
        #[arg(long)]
        query: Option<String>,
    },
    /// Show one candidate's profile and donation summary
    Candidate {
        /// Candidate id, e.g. P00000001
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let (candidates, donations): (Arc<dyn CandidateSource>, Arc<dyn DonationSource>) =
        if cli.demo {
            info!("using built-in demo dataset");
            (Arc::new(DemoDataSource), Arc::new(DemoDataSource))
        } else {
            let source = Arc::new(HttpDataSource::new(config.base_url.clone()));
            (source.clone(), source)
        };

    let controller = ViewController::new(
        candidates,
        donations,
        Arc::new(ConsoleRenderer::new(!cli.no_color)),
        Duration::from_millis(config.debounce_ms),
    );

    match cli.command {
        Commands::Overview { query } => {
            controller.load_all().await;
            if let Some(query) = query {
                controller.search(&query).await;
            }
        }
        Commands::Candidate { id } => {
            controller.load_all().await;
            controller.select_candidate(&id).await;
        }
    }

    Ok(())
}
