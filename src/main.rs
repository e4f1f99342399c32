use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use wealthwhiz::cli::{Cli, Command, execute};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let assumptions = match cli.assumptions() {
        Ok(assumptions) => assumptions,
        Err(e) => {
            error!("Invalid assumptions: {e}");
            std::process::exit(1);
        }
    };

    if let Command::Serve { port } = cli.command {
        if let Err(e) = wealthwhiz::api::run_http_server(port, assumptions).await {
            error!("Server error: {e}");
            std::process::exit(1);
        }
        return;
    }

    match execute(&cli.command, &assumptions) {
        Ok(Some(json)) => println!("{json}"),
        Ok(None) => {}
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
