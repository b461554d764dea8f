use anyhow::Context;
use clap::Parser;
use people_registry::utils::error::ErrorSeverity;
use people_registry::utils::{logger, validation::Validate};
use people_registry::{Cli, LocalStorage, Registry, RegistryConfig, TablePresenter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = RegistryConfig::discover(cli.config.as_deref())
        .with_context(|| format!("Failed to load configuration {:?}", cli.config))?;

    logger::init_cli_logger(cli.verbose, config.log_level());
    tracing::debug!("CLI: {:?}, config: {:?}", cli, config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let base_dir = config.base_dir().context("Failed to resolve the data directory")?;
    let registry = Registry::new(LocalStorage::new(base_dir));
    let mut presenter = TablePresenter::stdout();

    if let Err(e) = registry.run(cli.command, &mut presenter) {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
