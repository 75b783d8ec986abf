use anyhow::Context;
use clap::Parser;
use vernacular_site::domain::ports::ConfigProvider;
use vernacular_site::utils::error::ErrorSeverity;
use vernacular_site::utils::{logger, validation::Validate};
use vernacular_site::{server, AppState, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vernacular-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let addr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address '{}'", config.bind_address()))?;

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(
                "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let exit_code = if e.severity() == ErrorSeverity::Critical { 3 } else { 1 };
            std::process::exit(exit_code);
        }
    };

    server::serve(state, addr)
        .await
        .context("server terminated with an error")?;

    Ok(())
}
