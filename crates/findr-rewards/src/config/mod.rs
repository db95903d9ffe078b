use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::rewards::{EmployerTierRule, JobSeekerChecklist, RewardsConfig};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the rewards service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub rewards: RewardsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            rewards: load_rewards()?,
        })
    }
}

fn load_rewards() -> Result<RewardsConfig, ConfigError> {
    let mut rewards = RewardsConfig::default();

    if let Ok(value) = env::var("REWARDS_EMPLOYER_TIER_RULE") {
        rewards.employer_tier_rule =
            EmployerTierRule::parse(&value).ok_or(ConfigError::InvalidTierRule { value })?;
    }

    if let Ok(value) = env::var("REWARDS_JOBSEEKER_CHECKLIST") {
        rewards.job_seeker_checklist =
            JobSeekerChecklist::parse(&value).ok_or(ConfigError::InvalidChecklist { value })?;
    }

    if let Ok(value) = env::var("REWARDS_NET_AUTHORITATIVE_DEDUCTIONS") {
        rewards.net_authoritative_deductions =
            parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                name: "REWARDS_NET_AUTHORITATIVE_DEDUCTIONS",
                value,
            })?;
    }

    Ok(rewards)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTierRule { value: String },
    InvalidChecklist { value: String },
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTierRule { value } => write!(
                f,
                "REWARDS_EMPLOYER_TIER_RULE must be 'team_size' or 'points', got '{}'",
                value
            ),
            ConfigError::InvalidChecklist { value } => write!(
                f,
                "REWARDS_JOBSEEKER_CHECKLIST must be 'standard' or 'extended', got '{}'",
                value
            ),
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{} must be a boolean, got '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTierRule { .. }
            | ConfigError::InvalidChecklist { .. }
            | ConfigError::InvalidFlag { .. } => None,
        }
    }
}
