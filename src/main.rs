use berry_compote::utils::logger;
use berry_compote::{CliConfig, CompoteEngine, CompotePipeline, LocalStorage};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let storage = LocalStorage::new(".");
    let pipeline = CompotePipeline::new(storage, config);
    let mut engine = CompoteEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ {} berries grouped into {} compotes",
                summary.berries,
                summary.compotes
            );
        }
        Err(e) => {
            tracing::error!("Error: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
