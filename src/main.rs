use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use efund::cli::calc::CalcArgs;
use efund::core::QuoteName;
use efund::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for efund::AppCommand {
    fn from(cmd: Commands) -> efund::AppCommand {
        match cmd {
            Commands::Rates => efund::AppCommand::Rates,
            Commands::Calc {
                income,
                months,
                quote,
            } => efund::AppCommand::Calc(CalcArgs {
                income,
                months,
                quote,
            }),
            Commands::Interactive => efund::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the current dollar quotes
    Rates,
    /// Calculate an emergency fund in dollars
    Calc {
        /// Monthly income in pesos
        #[arg(short, long)]
        income: String,
        /// Number of months the fund should cover
        #[arg(short, long)]
        months: String,
        /// Quote to convert with: oficial, blue or mep
        #[arg(short, long)]
        quote: Option<QuoteName>,
    },
    /// Start an interactive calculation session
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => efund::cli::setup::setup(),
        Some(cmd) => efund::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
