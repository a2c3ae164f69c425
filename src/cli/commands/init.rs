use clap::Subcommand;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::database::manager::DatabaseManager;
use crate::database::schema;

#[derive(Subcommand)]
pub enum InitCommands {
    #[command(about = "Create the users and items tables if missing")]
    Schema,
}

pub async fn handle(cmd: InitCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        InitCommands::Schema => handle_schema(output_format).await,
    }
}

async fn handle_schema(output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::pool().await?;
    schema::create_schema(&pool).await?;

    match output_format {
        OutputFormat::Json => println!("{}", json!({ "success": true, "schema": "ready" })),
        OutputFormat::Text => println!("Schema ready"),
    }

    Ok(())
}
