use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tarjuman")]
#[command(about = "AI-powered translation service for Pakistani languages")]
#[command(version)]
pub struct Args {
    /// API endpoint URL (OpenAI-compatible)
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP translation server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// API endpoint URL (OpenAI-compatible)
        #[arg(short = 'e', long)]
        endpoint: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
}
