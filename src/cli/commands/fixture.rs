use clap::Subcommand;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::database::manager::DatabaseManager;
use crate::fixtures;

#[derive(Subcommand)]
pub enum FixtureCommands {
    #[command(about = "Load the seed users and items")]
    Load {
        #[arg(long, help = "Remove previously loaded fixtures first")]
        purge: bool,
    },
}

pub async fn handle(cmd: FixtureCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        FixtureCommands::Load { purge } => handle_load(purge, output_format).await,
    }
}

async fn handle_load(purge: bool, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::pool().await?;

    if purge {
        fixtures::purge(&pool).await?;
    }

    fixtures::load(&pool).await?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            json!({
                "success": true,
                "users": [fixtures::USER_ONE_USERNAME, fixtures::USER_TWO_USERNAME],
                "items": 2
            })
        ),
        OutputFormat::Text => println!(
            "Loaded fixtures: users {} and {}, 2 items",
            fixtures::USER_ONE_USERNAME,
            fixtures::USER_TWO_USERNAME
        ),
    }

    Ok(())
}
