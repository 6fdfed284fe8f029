use crate::demo::{run_dashboard, run_demo, run_match, run_paths, DemoArgs, MatchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skillboard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Skillboard Workspace",
    about = "Serve and explore the skills-management workspace from the command line",
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
    /// Print the team skills dashboard
    Dashboard,
    /// Print the upskilling path overview
    Paths,
    /// Filter and sort the project match shortlist
    Match(MatchArgs),
    /// Run an end-to-end demo covering every screen plus an assignment
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dashboard => run_dashboard(),
        Command::Paths => run_paths(),
        Command::Match(args) => run_match(args),
        Command::Demo(args) => run_demo(args),
    }
}
