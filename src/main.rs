use anyhow::Result;
use clap::{Parser, Subcommand};
use sitemapper::cli::{generate_cmd, serve_cmd};
use sitemapper::sitemap::builder::DEFAULT_IDENT;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitemapper",
    version,
    about = "Generate and serve sitemaps.org XML documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sitemap document to a file or stdout.
    Generate {
        /// Path to the sitemap configuration file.
        #[arg(long, short)]
        config: PathBuf,
        /// Sitemap hierarchy to output.
        #[arg(long, default_value = DEFAULT_IDENT)]
        ident: String,
        /// Output file; stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Serve sitemap documents over HTTP.
    Serve {
        /// Path to the sitemap configuration file.
        #[arg(long, short)]
        config: PathBuf,
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sitemapper=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            config,
            ident,
            output,
        } => generate_cmd::run(&config, &ident, output.as_deref()),
        Commands::Serve { config, addr } => serve_cmd::run(&config, addr).await,
    }
}
