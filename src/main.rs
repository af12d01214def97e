use clap::Parser;
use ff_pwd::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `ff_pwd=debug`).
const LOG_ENV_VAR: &str = "FF_PWD_LOG";

fn main() {
    // Logs go to stderr; stdout is reserved for the password from `find`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("ff_pwd=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import { ref file } => {
            ff_pwd::cli::commands::import_cmd::execute(&cli, file.as_deref())
        }
        Commands::Find { ref query } => {
            ff_pwd::cli::commands::find::execute(&cli, query.as_deref())
        }
        Commands::List => ff_pwd::cli::commands::list::execute(&cli),
        Commands::Verify => ff_pwd::cli::commands::verify::execute(&cli),
        Commands::Completions { shell } => ff_pwd::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        ff_pwd::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
