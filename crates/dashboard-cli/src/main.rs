//! dashboard-cli: interpret a fetched ticker snapshot and print the dashboard view.
//!
//! Usage:
//!   cargo run -p dashboard-cli -- --snapshot aapl.json
//!   cargo run -p dashboard-cli -- --snapshot aapl.json --interval 1w --pretty
//!   DASHBOARD_SNAPSHOT=aapl.json cargo run -p dashboard-cli

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_cli=info,analysis_orchestrator=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = dashboard_cli::CliConfig::from_args(&args, |key| std::env::var(key).ok())?;

    let output = dashboard_cli::run(&config)?;
    println!("{}", output);
    Ok(())
}
