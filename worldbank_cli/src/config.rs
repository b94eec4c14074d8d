//! Connection settings: built-in defaults, then environment, then flags.

use std::time::Duration;

use clap::Args;
use worldbank_api::ClientConfig;

use crate::error::CliError;

pub const ENV_BASE_URL: &str = "WORLDBANK_BASE_URL";
pub const ENV_USER_AGENT: &str = "WORLDBANK_USER_AGENT";
pub const ENV_ACCEPT_INVALID_CERTS: &str = "WORLDBANK_ACCEPT_INVALID_CERTS";
pub const ENV_TIMEOUT_SECS: &str = "WORLDBANK_TIMEOUT_SECS";

#[derive(Args, Default)]
pub struct ConnectionArgs {
    /// API root URL [env: WORLDBANK_BASE_URL]
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// User-Agent header to send [env: WORLDBANK_USER_AGENT]
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Skip TLS certificate validation [env: WORLDBANK_ACCEPT_INVALID_CERTS]
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [env: WORLDBANK_TIMEOUT_SECS]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

/// Resolves the client configuration from the process environment and `args`.
pub fn resolve(args: &ConnectionArgs) -> Result<ClientConfig, CliError> {
    resolve_with(args, |key| std::env::var(key).ok())
}

pub fn resolve_with(
    args: &ConnectionArgs,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::default();

    if let Some(url) = args.base_url.clone().or_else(|| env(ENV_BASE_URL)) {
        config = config.with_base_url(&url);
    }

    if let Some(agent) = args.user_agent.clone().or_else(|| env(ENV_USER_AGENT)) {
        config = config.with_user_agent(&agent);
    }

    let insecure = match env(ENV_ACCEPT_INVALID_CERTS) {
        Some(value) => args.insecure || parse_bool(ENV_ACCEPT_INVALID_CERTS, &value)?,
        None => args.insecure,
    };
    if insecure {
        tracing::warn!("TLS certificate validation is disabled");
    }
    config = config.with_accept_invalid_certs(insecure);

    let timeout = match args.timeout {
        Some(secs) => Some(secs),
        None => env(ENV_TIMEOUT_SECS)
            .map(|v| {
                v.trim().parse::<u64>().map_err(|_| {
                    CliError::InvalidInput(format!(
                        "{} must be a whole number of seconds",
                        ENV_TIMEOUT_SECS
                    ))
                })
            })
            .transpose()?,
    };
    if let Some(secs) = timeout {
        if secs == 0 {
            return Err(CliError::InvalidInput(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        config = config.with_timeout(Duration::from_secs(secs));
    }

    Ok(config)
}

fn parse_bool(key: &str, value: &str) -> Result<bool, CliError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CliError::InvalidInput(format!(
            "{} must be true or false, got '{}'",
            key, value
        ))),
    }
}
