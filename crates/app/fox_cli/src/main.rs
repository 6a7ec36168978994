// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};

mod chat;
mod cli;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Status => {
            let client = fox_api_client::ChatClient::new(&args.server)?;
            let view = fox_api_client::StatusView::from_result(client.status().await);
            println!("{}", view.indicator);
            if let Some(banner) = view.banner {
                println!("{banner}");
            }
        }
        Commands::Chat { model } => {
            chat::repl(&args.server, model).await?;
        }
    }

    Ok(())
}
