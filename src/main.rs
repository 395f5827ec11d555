//! Compass CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use compass::cli::{commands, handle_error, Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { force } => commands::init::execute(force, cli.json).await,
        Commands::Run => commands::run::execute(cli.json).await,
        Commands::Status => commands::session::status(cli.json).await,
        Commands::Answer { value } => commands::session::answer(&value, cli.json).await,
        Commands::Back => commands::session::back(cli.json).await,
        Commands::Report => commands::report::report(cli.json).await,
        Commands::Export {
            name,
            email,
            company,
        } => commands::report::export(&name, &email, &company, cli.json).await,
        Commands::Reset => commands::session::reset(cli.json).await,
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
