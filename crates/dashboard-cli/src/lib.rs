use std::path::{Path, PathBuf};

use analysis_core::Interval;
use analysis_orchestrator::{DashboardInterpreter, Snapshot};
use anyhow::{bail, Context};

pub const SNAPSHOT_ENV: &str = "DASHBOARD_SNAPSHOT";
pub const INTERVAL_ENV: &str = "DASHBOARD_INTERVAL";

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub snapshot_path: PathBuf,
    /// Replaces the interval recorded in the snapshot
    pub interval: Option<Interval>,
    pub pretty: bool,
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

impl CliConfig {
    /// Flags win over environment variables.
    pub fn from_args(args: &[String], env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let snapshot_path = match flag_value(args, "--snapshot").map(str::to_string).or_else(|| env(SNAPSHOT_ENV)) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => bail!("No snapshot given: pass --snapshot <path> or set {}", SNAPSHOT_ENV),
        };

        let interval = flag_value(args, "--interval")
            .map(str::to_string)
            .or_else(|| env(INTERVAL_ENV))
            .map(|code| {
                Interval::parse(&code).unwrap_or_else(|e| {
                    tracing::warn!("{}; falling back to {}", e, Interval::default());
                    Interval::default()
                })
            });

        Ok(Self {
            snapshot_path,
            interval,
            pretty: args.iter().any(|a| a == "--pretty"),
        })
    }
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse snapshot {}", path.display()))
}

/// Load, interpret and render the view as JSON.
pub fn run(config: &CliConfig) -> anyhow::Result<String> {
    let mut snapshot = load_snapshot(&config.snapshot_path)?;
    if let Some(interval) = config.interval {
        snapshot.interval = interval;
    }

    let view = DashboardInterpreter::new().interpret(&snapshot);
    let unavailable = view.unavailable_sections();
    if !unavailable.is_empty() {
        tracing::info!("{} of 6 sections unavailable for {}", unavailable.len(), view.ticker);
    }

    let output = if config.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_flags_override_env() {
        let config = CliConfig::from_args(
            &args(&["dashboard-cli", "--snapshot", "a.json", "--interval", "1w", "--pretty"]),
            |key| match key {
                SNAPSHOT_ENV => Some("b.json".to_string()),
                INTERVAL_ENV => Some("6m".to_string()),
                _ => None,
            },
        )
        .unwrap();
        assert_eq!(config.snapshot_path, PathBuf::from("a.json"));
        assert_eq!(config.interval, Some(Interval::OneWeek));
        assert!(config.pretty);
    }

    #[test]
    fn test_env_fallback() {
        let config = CliConfig::from_args(&args(&["dashboard-cli"]), |key| match key {
            SNAPSHOT_ENV => Some("env.json".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.snapshot_path, PathBuf::from("env.json"));
        assert_eq!(config.interval, None);
        assert!(!config.pretty);
    }

    #[test]
    fn test_unknown_interval_falls_back_to_month() {
        let config =
            CliConfig::from_args(&args(&["dashboard-cli", "--snapshot", "a.json", "--interval", "5y"]), no_env)
                .unwrap();
        assert_eq!(config.interval, Some(Interval::OneMonth));
    }

    #[test]
    fn test_missing_snapshot_is_error() {
        assert!(CliConfig::from_args(&args(&["dashboard-cli"]), no_env).is_err());
    }

    #[test]
    fn test_run_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "ticker": "aapl",
                "interval": "6m",
                "history": {{"status": "loaded", "data": [
                    {{"date": "2025-01-02", "close": 243.85}},
                    {{"date": "2025-01-03", "close": 243.36}}
                ]}},
                "indicators": {{"status": "unavailable", "data": {{"reason": "Not enough data for indicators"}}}}
            }}"#
        )
        .unwrap();

        let config = CliConfig {
            snapshot_path: file.path().to_path_buf(),
            interval: Some(Interval::OneWeek),
            pretty: false,
        };
        let output: serde_json::Value = serde_json::from_str(&run(&config).unwrap()).unwrap();

        assert_eq!(output["ticker"], "AAPL");
        assert_eq!(output["interval"], "1w");
        assert_eq!(output["chart"]["data"]["trend"], "down");
        assert_eq!(output["chart"]["data"]["ticks"], serde_json::json!(["2025-01-02", "2025-01-03"]));
        assert_eq!(output["technicals"]["status"], "unavailable");
        assert_eq!(output["fundamentals"]["status"], "loading");
    }

    #[test]
    fn test_run_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let config = CliConfig {
            snapshot_path: file.path().to_path_buf(),
            interval: None,
            pretty: true,
        };
        let err = run(&config).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse snapshot"));
    }
}
