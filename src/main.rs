use reply_drafter::config::DrafterConfig;
use reply_drafter::shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only drafts.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = DrafterConfig::from_env()?;

    eprintln!("✉️  Reply Drafter v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Locale: {}", config.locale);
    if !config.processing_delay.is_zero() {
        eprintln!("   Delay: {}ms", config.processing_delay.as_millis());
    }
    match config.history_limit {
        Some(limit) => eprintln!("   History: last {} emails", limit),
        None => eprintln!("   History: unbounded"),
    }
    eprintln!("   Approval is simulated; nothing is ever sent.\n");

    shell::run(&config).await?;

    Ok(())
}
