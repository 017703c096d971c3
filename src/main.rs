use clap::Parser;
use random_restaurant::config::{prompt, toml_config::TomlConfig};
use random_restaurant::utils::{logger, validation::Validate};
use random_restaurant::{CliConfig, GoogleMapsClient, RestaurantError, RestaurantSelector, Selection};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting random-restaurant");

    match run(&cli).await {
        Ok(selection) => {
            println!("{}", selection);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            let exit_code = e.severity().exit_code();
            if exit_code == 0 {
                // 查無地點、查無餐廳：照原樣輸出訊息
                println!("{}", e.user_friendly_message());
            } else {
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<Selection, RestaurantError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    let settings = cli.resolve(&file, &mut prompt::stdin_prompter())?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {}", serde_json::to_string(&settings)?);

    let request = settings.selection_request()?;
    let client = GoogleMapsClient::new(&settings)?;
    let selector = RestaurantSelector::new(client.clone(), client.clone(), client);

    selector.run(&request).await
}
