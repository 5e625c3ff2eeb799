use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, arg, command};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::LevelFilter,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use common::config::{SiteConfig, read_config};
use content::PageVariant;

mod document;
mod export;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// config file, built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// prerender the landing page to <out_dir>/index.html
    Render {
        /// page variant, overrides the config file
        #[arg(long)]
        variant: Option<PageVariant>,

        /// output directory, overrides the config file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// print the theme tokens as css variables, or one token by dotted path
    Tokens {
        /// page variant whose tokens are printed
        #[arg(long)]
        variant: Option<PageVariant>,

        /// dotted token path, e.g. color.accent.primary
        #[arg(short, long)]
        path: Option<String>,
    },

    /// print the content registries as json
    Content,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(level))
        .init();

    let config = match &cli.config {
        Some(path) => read_config(path).await?,
        None => {
            debug!("no config file given, using defaults");
            SiteConfig::default()
        }
    };

    match cli.command {
        Commands::Render { variant, out } => {
            let config = SiteConfig {
                variant: variant.unwrap_or(config.variant),
                out_dir: out.unwrap_or(config.out_dir),
                ..config
            };

            render(&config).await?;
        }
        Commands::Tokens { variant, path } => {
            let theme = variant.unwrap_or(config.variant).theme();

            match path {
                Some(path) => {
                    let value = theme
                        .lookup(&path)
                        .ok_or_else(|| anyhow!("unknown token {path} in theme {}", theme.name))?;
                    println!("{value}");
                }
                None => println!("{}", theme.css_variables()),
            }
        }
        Commands::Content => {
            println!("{}", export::content_json()?);
        }
    }

    Ok(())
}

async fn render(config: &SiteConfig) -> Result<()> {
    info!(variant = %config.variant, "rendering landing page");

    let html = document::render_document(config);

    tokio::fs::create_dir_all(&config.out_dir)
        .await
        .with_context(|| format!("failed to create {}", config.out_dir.display()))?;

    let path = config.out_dir.join("index.html");

    tokio::fs::write(&path, html)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "wrote landing page");
    Ok(())
}
