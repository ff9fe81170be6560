use crate::demo::{run_demo, run_score_report, DemoArgs, ScoreArgs};
use crate::server;
use ai_readiness::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AI Readiness Assessment",
    about = "Score AI readiness assessments and run the assessment service",
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
    /// Work with saved assessment responses
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Score a built-in sample business and print the report payload summary
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Score a JSON or CSV response export and print the readiness report
    Score(ScoreArgs),
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
        Command::Assessment {
            command: AssessmentCommand::Score(args),
        } => run_score_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
