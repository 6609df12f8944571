mod error;
mod input;
mod parse;
mod render;
mod schema;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use input::{PageInput, PageType};

#[derive(Parser)]
#[command(name = "ldgen", about = "JSON-LD structured data generator for web pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JSON-LD from a page input record
    Generate {
        /// Path to a JSON input record (tagged with "page_type")
        #[arg(short, long)]
        input: PathBuf,
        /// Output format
        #[arg(short, long, default_value = "json")]
        format: Format,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show recommended schema.org entities for a page type
    Recommend {
        /// Page type (homepage, local-business, service-page, collection-page, product-page)
        page_type: PageType,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Plain JSON-LD
    Json,
    /// JSON-LD wrapped in <script type="application/ld+json"> tags
    Script,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, format, output } => {
            let raw = fs::read_to_string(&input)
                .with_context(|| format!("reading input record {}", input.display()))?;
            let record: PageInput =
                serde_json::from_str(&raw).context("parsing input record")?;

            let documents = schema::generate(&record)?;
            let rendered = match format {
                Format::Json => render::to_json(&documents),
                Format::Script => render::to_script_tags(&documents),
            };

            match output {
                Some(path) => {
                    fs::write(&path, &rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote {} document(s) to {}", documents.len(), path.display());
                }
                None => println!("{}", rendered),
            }
        }
        Commands::Recommend { page_type } => {
            let recs = schema::recommend::recommendations(page_type);
            println!("{}", page_type);
            println!("  Must-have:   {}", recs.must_have.join(", "));
            println!("  Recommended: {}", recs.recommended.join(", "));
            println!("  Optional:    {}", recs.optional.join(", "));
        }
    }

    Ok(())
}
