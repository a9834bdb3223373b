use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use entity_fields::catalog::load_catalog;
use entity_fields::{run, DeriveOptions, EntityMetadataProvider, OutputFormat, ViewKind};

#[derive(Parser)]
#[command(name = "entity-fields")]
#[command(author, version, about = "Derive list and form field layouts from entity metadata")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the ordered field list for one entity
    Derive {
        /// Model file, directory of model files, or glob pattern
        #[arg(short, long)]
        catalog: PathBuf,

        /// Entity name (case-insensitive)
        #[arg(short, long)]
        entity: String,

        /// Derive the form layout instead of the list layout
        #[arg(long)]
        form: bool,

        /// Output format (text, xml)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the entities a catalog defines
    Entities {
        /// Model file, directory of model files, or glob pattern
        #[arg(short, long)]
        catalog: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Derive {
            catalog,
            entity,
            form,
            format,
            output,
        } => {
            let options = DeriveOptions {
                catalog_path: catalog,
                entity,
                view: if form { ViewKind::Form } else { ViewKind::List },
                output_path: output,
                format,
            };

            run(&options)?;
        }
        Commands::Entities { catalog } => {
            let registry = load_catalog(&catalog)?;
            for entity in registry.entities() {
                println!(
                    "{}\t{} columns\t{} fields\tmaster={}\taudit={}",
                    entity.name,
                    entity.column_count(),
                    entity.all_fields().len(),
                    entity.master_field().map_or("-", |f| f.name.as_str()),
                    entity.has_audit_capability()
                );
            }
        }
    }

    Ok(())
}
