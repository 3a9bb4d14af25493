use clap::Parser;
use sitefill::core::{ConfigProvider, PopulateSummary};
use sitefill::utils::{logger, validation::Validate};
use sitefill::{CliConfig, LocalStorage, PopulateEngine, SiteConfig, SitePopulator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting sitefill");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.config.clone() {
        Some(config_path) => {
            tracing::info!("Loading site config from {}", config_path);
            let site = SiteConfig::from_file(&config_path)?;
            check_config(&site);
            run(site).await
        }
        None => {
            check_config(&cli);
            run(cli).await
        }
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "✅ Populated {} pages with {} fragments",
                summary.pages_written,
                summary.fragments_appended
            );
            println!(
                "✅ Populated {} pages with {} fragments",
                summary.pages_written, summary.fragments_appended
            );
        }
        Err(e) => {
            tracing::error!("❌ Populating pages failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn check_config<C: Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run<C: ConfigProvider>(config: C) -> sitefill::Result<PopulateSummary> {
    let storage = LocalStorage::new(
        config.pages_path().to_string(),
        config.output_path().to_string(),
    );
    let populator = SitePopulator::new(storage, config);
    let engine = PopulateEngine::new(populator);
    engine.run().await
}
