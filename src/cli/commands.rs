//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "medassist")]
#[command(about = "MedAssist CLI: symptom triage API, dataset pipeline and diagnostics")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the configuration file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Initialize database schema (pgvector extension, tables, optional index)
    Init,
    /// Clean the raw disease/symptom CSV
    CleanData {
        /// Raw CSV (default: dataset.raw_path)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output CSV (default: dataset.clean_path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Embed the clean dataset into the vector store
    BuildIndex {
        /// Clean CSV (default: dataset.clean_path)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Collection name (default: vector_store.collection)
        #[arg(long)]
        collection: Option<String>,
        /// Remove existing documents in the collection first
        #[arg(long)]
        rebuild: bool,
    },
    /// Run a diagnosis from the terminal
    Diagnose {
        /// Free-text symptoms
        symptoms: String,
        /// Number of documents to retrieve (default: vector_store.top_k)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
        /// Do not store the diagnosis in the database
        #[arg(long)]
        no_save: bool,
    },
    /// Show document and diagnosis counts
    Stats,
    /// Show current configuration
    Config,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_diagnose() {
        let cli = Cli::try_parse_from(["medassist", "diagnose", "fever and rash", "-k", "3", "--no-save"])
            .unwrap();
        match cli.command {
            Commands::Diagnose {
                symptoms,
                top_k,
                no_save,
            } => {
                assert_eq!(symptoms, "fever and rash");
                assert_eq!(top_k, Some(3));
                assert!(no_save);
            }
            _ => panic!("expected diagnose"),
        }
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["medassist", "-v", "serve"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Serve {
                host: None,
                port: None
            }
        ));
    }
}
