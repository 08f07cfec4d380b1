//! Time limits for backend calls.

use std::time::Duration;

/// Timeout configuration for a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection establishment.
    pub connect: Duration,
    /// Whole request, from send to the last body byte.
    pub total: Duration,
}

impl TimeoutConfig {
    pub fn new(connect: Duration, total: Duration) -> Self {
        Self { connect, total }
    }

    /// Derive the connect limit from a single total timeout.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: Duration::from_millis(total.as_millis() as u64 / 4),
            total,
        }
    }

    /// Build from millisecond settings.
    pub fn from_millis(connect_ms: u64, total_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(connect_ms),
            Duration::from_millis(total_ms),
        )
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(3),
            total: Duration::from_secs(10),
        }
    }
}

/// Per-client request policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchPolicy {
    pub timeout: TimeoutConfig,
    /// Sent as `User-Agent`.
    pub user_agent: Option<String>,
}

impl FetchPolicy {
    pub fn new(timeout: TimeoutConfig) -> Self {
        Self {
            timeout,
            user_agent: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
