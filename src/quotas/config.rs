use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_MAX_QPS: f64 = 2000.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid rate limit config: {0}")]
    Invalid(String),

    #[error("Failed to parse rate limit config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persistence rate limit configuration
///
/// # Examples
///
/// ```
/// use ratelimited_persistence::quotas::RateLimitConfig;
///
/// let config = RateLimitConfig::new(500.0).burst(100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRateLimitConfig")]
pub struct RateLimitConfig {
    /// Sustained calls per second admitted
    pub max_qps: f64,

    /// Calls that may be admitted back to back once the bucket is full
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_QPS)
    }
}

impl RateLimitConfig {
    /// Create a configuration whose burst equals one second of traffic
    pub fn new(max_qps: f64) -> Self {
        Self {
            max_qps,
            burst: burst_for(max_qps),
        }
    }

    /// Set the sustained rate
    pub fn max_qps(mut self, max_qps: f64) -> Self {
        self.max_qps = max_qps;
        self
    }

    /// Set the burst size
    pub fn burst(mut self, burst: u32) -> Self {
        self.burst = burst;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_qps.is_finite() || self.max_qps <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_qps must be a positive number, got {}",
                self.max_qps
            )));
        }

        if self.burst == 0 {
            return Err(ConfigError::Invalid("burst must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Parse and validate a JSON document
    ///
    /// A missing `max_qps` takes the default rate; a missing `burst` equals `max_qps`.
    ///
    /// ```
    /// use ratelimited_persistence::quotas::RateLimitConfig;
    ///
    /// let config = RateLimitConfig::from_json(r#"{ "max_qps": 300.0, "burst": 50 }"#).unwrap();
    /// assert_eq!(config.burst, 50);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// On-disk shape: a missing `burst` follows `max_qps`, not the default rate
#[derive(Deserialize)]
struct RawRateLimitConfig {
    #[serde(default = "default_max_qps")]
    max_qps: f64,
    #[serde(default)]
    burst: Option<u32>,
}

fn default_max_qps() -> f64 {
    DEFAULT_MAX_QPS
}

impl From<RawRateLimitConfig> for RateLimitConfig {
    fn from(raw: RawRateLimitConfig) -> Self {
        Self {
            max_qps: raw.max_qps,
            burst: raw.burst.unwrap_or_else(|| burst_for(raw.max_qps)),
        }
    }
}

fn burst_for(max_qps: f64) -> u32 {
    if max_qps.is_finite() && max_qps >= 1.0 {
        max_qps.min(u32::MAX as f64) as u32
    } else {
        1
    }
}
