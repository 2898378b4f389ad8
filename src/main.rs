use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sql2struct::{generate_structs, GenConfig, GenerateOptions};

#[derive(Parser)]
#[command(name = "sql2struct")]
#[command(author, version, about = "Generate Go structs from MySQL CREATE TABLE statements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go model structs from DDL files
    Generate {
        /// DDL file, directory of .sql files, glob pattern, or - for stdin
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Output .go file or directory (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Add json tags
        #[arg(long)]
        json: bool,

        /// Add gorm tags
        #[arg(long)]
        gorm: bool,

        /// Sort struct fields by name
        #[arg(long)]
        sort: bool,

        /// Package name of the generated files
        #[arg(short, long, default_value = "model")]
        package: String,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sql2struct=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            inputs,
            output,
            json,
            gorm,
            sort,
            package,
            verbose,
        } => {
            init_tracing(verbose);

            let options = GenerateOptions {
                inputs,
                output,
                config: GenConfig {
                    json_tag: json,
                    gorm_tag: gorm,
                    sort_fields: sort,
                    package_name: package,
                },
            };

            generate_structs(options)?;
        }
    }

    Ok(())
}
