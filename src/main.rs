use anyhow::Result;
use clap::Parser;

use tarjuman::cli::commands::{serve, translate};
use tarjuman::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Serve {
            host,
            port,
            endpoint,
            model,
        }) => {
            let options = serve::ServeOptions {
                host,
                port,
                endpoint,
                model,
            };
            serve::run_serve(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                endpoint: args.endpoint,
                model: args.model,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
