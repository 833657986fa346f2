//! crudgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::CrudCommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(about = "Generate CRUD boilerplate for a model", long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CRUD operations for a model
    #[command(name = "crud:generate", visible_alias = "generate")]
    CrudGenerate {
        /// Model name (`PascalCase`, e.g., `Post`, `Invoice`)
        model: String,

        /// Project root (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Print what would be generated without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Print the generation report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    crudgen::observability::init(cli.verbose)?;

    match cli.command {
        Commands::CrudGenerate {
            model,
            path,
            dry_run,
            json,
        } => {
            let cmd = CrudCommand::new(model, path, dry_run, json);
            cmd.execute()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_crud_generate() {
        let cli = Cli::try_parse_from(["crudgen", "crud:generate", "Post", "--dry-run"]).unwrap();
        let Commands::CrudGenerate { model, path, dry_run, json } = cli.command;
        assert_eq!(model, "Post");
        assert_eq!(path, PathBuf::from("."));
        assert!(dry_run);
        assert!(!json);
    }

    #[test]
    fn test_generate_alias() {
        let cli = Cli::try_parse_from(["crudgen", "generate", "Invoice", "-p", "/tmp/app"]).unwrap();
        let Commands::CrudGenerate { model, path, .. } = cli.command;
        assert_eq!(model, "Invoice");
        assert_eq!(path, PathBuf::from("/tmp/app"));
    }

    #[test]
    fn test_model_is_required() {
        assert!(Cli::try_parse_from(["crudgen", "crud:generate"]).is_err());
    }
}
