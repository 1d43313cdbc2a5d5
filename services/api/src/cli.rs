use crate::demo::{run_demo, run_schema, run_validate, DemoArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use employee_registration::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Employee Registration",
    about = "Validate employee registration forms and serve the registration API",
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
    /// Validate a registration form stored as JSON and list every failing field
    Validate(ValidateArgs),
    /// Print the registration form layout with required markers and options
    Schema,
    /// Walk a blank form through filling, education edits, and submission
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
        Command::Validate(args) => run_validate(args),
        Command::Schema => run_schema(),
        Command::Demo(args) => run_demo(args).await,
    }
}
