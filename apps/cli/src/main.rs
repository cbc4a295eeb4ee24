mod config;
mod errors;
mod layout;
mod llm_client;
mod models;
mod render;
mod store;
mod update;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{convert_section, Backend};
use crate::store::{DataStore, Section};

#[derive(Debug, Parser)]
#[command(
    name = "vitae",
    version,
    about = "Assemble a resume from JSON data, render it to PDF, and structure free text via an LLM"
)]
struct Cli {
    /// Directory holding the per-section JSON stores.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the resume PDF from the JSON stores.
    Generate {
        /// Output path for the PDF.
        #[arg(long, default_value = "resume.pdf")]
        output: PathBuf,
    },
    /// Walk every section interactively, editing fields and appending entries.
    Update,
    /// Convert free text into structured JSON for one section via an LLM.
    Convert {
        #[arg(long, value_enum)]
        section: Section,

        /// Backend provider.
        #[arg(long, value_enum)]
        api: Backend,

        /// Raw text to structure.
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir.clone());
    let store = DataStore::new(data_dir);

    match cli.command {
        Command::Generate { output } => {
            let data = store.load_resume()?;
            let page = layout::render(&data);
            render::write_pdf(&page, &output)?;
            info!(
                "rendered {} text ops to {}",
                page.ops().len(),
                output.display()
            );
            println!("Generated {}", output.display());
        }
        Command::Update => {
            update::interactive_update(&store)?;
        }
        Command::Convert { section, api, text } => {
            let provider = api.provider(&config)?;
            let value = convert_section(section, &text, provider.as_ref()).await?;
            store.save_value(section, &value)?;
            println!("Updated {} via {}", section.file_name(), provider.name());
        }
    }

    Ok(())
}
