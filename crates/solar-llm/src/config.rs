// Construction-time configuration for Solar clients.
// Everything here is fixed once a client is built.

use crate::error::{Result, SolarError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Chat endpoint of the hosted Solar API
pub const SOLAR_API_URL: &str = "https://solar-chat.upstage.ai/api/chat";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 120.0;

/// Reasoning effort level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    #[default]
    Medium,
    High,
}

impl ReasoningEffort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasoningEffort {
    type Err = SolarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(SolarError::InvalidConfig(format!(
                "unknown reasoning effort '{other}' (expected low, medium or high)"
            ))),
        }
    }
}

/// Configuration recognized when constructing a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarConfig {
    /// Chat endpoint URL (override for local servers and tests)
    pub endpoint: String,

    pub reasoning_effort: ReasoningEffort,

    /// Request timeout in seconds; bounds the whole call, body included
    pub timeout: f64,

    /// Advisory only: callers decide between buffered and streaming calls
    pub streaming: bool,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            endpoint: SOLAR_API_URL.to_string(),
            reasoning_effort: ReasoningEffort::default(),
            timeout: DEFAULT_TIMEOUT_SECS,
            streaming: false,
        }
    }
}

impl SolarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_reasoning_effort(mut self, effort: ReasoningEffort) -> Self {
        self.reasoning_effort = effort;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.as_secs_f64();
        self
    }

    pub fn with_timeout_secs(mut self, secs: f64) -> Self {
        self.timeout = secs;
        self
    }

    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    /// Reject settings the transport cannot honor
    pub fn validate(&self) -> Result<()> {
        self.timeout_duration()?;
        if self.endpoint.trim().is_empty() {
            return Err(SolarError::InvalidConfig("endpoint must not be empty".to_string()));
        }
        Ok(())
    }

    /// Timeout as a `Duration`; fails for values no `Duration` can hold
    pub fn timeout_duration(&self) -> Result<Duration> {
        let invalid = || {
            SolarError::InvalidConfig(format!(
                "timeout must be a positive number of seconds, got {}",
                self.timeout
            ))
        };
        if self.timeout <= 0.0 {
            return Err(invalid());
        }
        Duration::try_from_secs_f64(self.timeout).map_err(|_| invalid())
    }
}
