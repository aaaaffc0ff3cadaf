use crate::demo::{
    run_catalog, run_demo, run_recommend, CatalogArgs, DemoArgs, RecommendArgs,
};
use crate::infra::RecommendationOverrides;
use crate::server;
use clap::{Args, Parser, Subcommand};
use intern_match::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Internship Recommendation Service",
    about = "Match candidate profiles to internship listings from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single candidate profile and print the top recommendations
    Recommend(RecommendArgs),
    /// List the listing catalog or the intake taxonomy
    Catalog(CatalogArgs),
    /// Walk a sample candidate through intake and print their recommendations
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) overrides: ScoringArgs,
}

/// Ranking settings shared by every command that scores profiles.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct ScoringArgs {
    /// CSV export of listings to rank instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Number of recommendations to return
    #[arg(long, value_parser = crate::infra::parse_limit)]
    pub(crate) limit: Option<usize>,
    /// Clamp match scores to this maximum
    #[arg(long)]
    pub(crate) score_cap: Option<u16>,
}

impl ScoringArgs {
    pub(crate) fn into_overrides(self) -> RecommendationOverrides {
        RecommendationOverrides {
            catalog_csv: self.catalog_csv,
            limit: self.limit,
            score_cap: self.score_cap,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Demo(args) => run_demo(args),
    }
}
