use crate::evaluate::{run_evaluate, run_quote, EvaluateArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use findr_rewards::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Findr Rewards",
    about = "Compute profile completeness, reward points and membership tiers",
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
    /// Summarize a profile snapshot stored as JSON
    Evaluate(EvaluateArgs),
    /// Quote a points redemption against a checkout subtotal
    Quote(QuoteArgs),
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Quote(args) => run_quote(args),
    }
}
