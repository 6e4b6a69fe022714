//! Database initialization handler

use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::cli::output::print_warning;
use crate::database::Database;
use crate::database::SchemaOptions;
use crate::AppConfig;
use crate::Result;

/// Handle database initialization command
pub async fn handle_init_command(config: &AppConfig) -> Result<()> {
    print_info("🗄️  Initializing MedAssist database...");

    let database = Database::from_config(config).await?;
    let options = SchemaOptions::from_config(config);

    if let Err(e) = database.init_schema(options).await {
        if e.to_string().contains("vector") || e.to_string().contains("extension") {
            print_warning(&format!("Could not enable pgvector extension: {e}"));
            print_warning("Install pgvector on the database server, then run:");
            println!("  psql -c 'CREATE EXTENSION IF NOT EXISTS vector;'");
            println!();
            println!("Then run: medassist init");
        }
        return Err(e);
    }

    print_success("Tables 'diagnoses' and 'knowledge_documents' ready");
    print_success(&format!(
        "Embedding column sized for {} dimensions",
        options.dimension
    ));
    if options.enable_index {
        print_success(&format!(
            "IVFFlat index ready ({:?}, lists = {})",
            options.distance, options.index_lists
        ));
    }

    println!();
    print_info("To build the knowledge base, run:");
    println!("   medassist clean-data && medassist build-index");

    Ok(())
}
