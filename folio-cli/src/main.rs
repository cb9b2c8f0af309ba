use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use folio::common::write_string_to_file;
use folio::export::renderer;
use folio::{DirectorySink, ExportConfig, ExportService, PortfolioDraft, PortfolioRecord, ThemeId};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// Export settings (TOML)
    #[clap(short, long, global = true, default_value = "folio.toml")]
    config: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a project and save it as a zip archive
    Export {
        #[clap(short, long)]
        input: PathBuf,
        #[clap(short, long)]
        theme: Option<ThemeId>,
        #[clap(short, long, default_value = ".")]
        output: PathBuf,
        #[clap(short, long)]
        filename: Option<String>,
    },
    /// Write the generated project tree to a directory
    Render {
        #[clap(short, long)]
        input: PathBuf,
        #[clap(short, long)]
        theme: Option<ThemeId>,
        #[clap(short, long)]
        dir: PathBuf,
    },
    /// List the available themes
    Themes,
    /// Write a starter portfolio record
    Init {
        #[clap(short, long)]
        output: PathBuf,
    },
    /// Print a shared section template
    Template { section: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Export {
            input,
            theme,
            output,
            filename,
        } => {
            let service = ExportService::new(ExportConfig::load(Some(args.config.as_path()))?);
            let draft = load_draft(&input)?;
            let sink = DirectorySink::new(output);
            let saved = service
                .export(&draft, theme, &sink, filename.as_deref())
                .await?;
            info!("Exported {} ({} bytes)", saved.filename, saved.bytes);
            if let Some(location) = saved.location {
                println!("{}", location.display());
            }
        }
        Commands::Render { input, theme, dir } => {
            let service = ExportService::new(ExportConfig::load(Some(args.config.as_path()))?);
            let draft = load_draft(&input)?;
            let files = service.generate(&draft, theme)?;
            for (path, content) in &files {
                write_string_to_file(&dir.join(path), content)
                    .with_context(|| format!("Failed to write {}", path))?;
            }
            info!("Rendered {} files into {:?}", files.len(), dir);
        }
        Commands::Themes => {
            for theme in ThemeId::iter() {
                let descriptor = theme.descriptor();
                let marker = if theme == ThemeId::CANONICAL {
                    " (default)"
                } else {
                    ""
                };
                println!(
                    "{:<10} {:<28} {}{}",
                    theme,
                    descriptor.package_suffix(),
                    descriptor.label,
                    marker
                );
            }
        }
        Commands::Init { output } => {
            info!("Initializing portfolio record: {:?}", output);
            let record = PortfolioRecord::starter();
            let serialized = if is_yaml(&output) {
                serde_yaml::to_string(&record)?
            } else {
                serde_json::to_string_pretty(&record)?
            };
            write_string_to_file(&output, &serialized)?;
        }
        Commands::Template { section } => match renderer::section_template(&section) {
            Ok(template) => print!("{}", template),
            Err(_) => {
                return Err(anyhow!(
                    "Unknown section '{}', expected one of: {}",
                    section,
                    renderer::section_names().join(", ")
                ))
            }
        },
    }

    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn load_draft(path: &Path) -> Result<PortfolioDraft> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let draft = if is_yaml(path) {
        serde_yaml::from_str(&source).with_context(|| format!("Invalid YAML in {:?}", path))?
    } else {
        serde_json::from_str(&source).with_context(|| format!("Invalid JSON in {:?}", path))?
    };
    Ok(draft)
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("handlebars=off,{}", log_level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
