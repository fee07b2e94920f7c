use crate::commands::{run_questions, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mindtrx::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "mindtrx",
    about = "Score the Inner Mind Integration Inventory and serve results over HTTP",
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
    /// Score a full set of 27 answers and print the classification
    Score(ScoreArgs),
    /// Print the questionnaire grouped by section
    Questions,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Questions => run_questions(),
    }
}
