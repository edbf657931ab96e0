use crate::recommend::{run_catalog, run_demo, run_recommend, CatalogArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use shoe_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Shoe Advisor",
    about = "Rank shoes against weighted preferences from the command line or over HTTP",
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
    /// Rank a catalog against the given preferences and weights
    Recommend(RecommendArgs),
    /// List the shoes in a catalog
    Catalog(CatalogArgs),
    /// Rank the sample catalog with the default profile
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve this CSV catalog instead of the configured one
    #[arg(long)]
    pub(crate) catalog: Option<std::path::PathBuf>,
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
        Command::Demo => run_demo(),
    }
}
