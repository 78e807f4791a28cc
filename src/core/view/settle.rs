//! Render-settle wait strategies
//!
//! The host acknowledges view commands before the screen has finished
//! updating and offers no completion callback, so dependent reads must
//! wait. `FixedDelay` is the shipped strategy; a poll-until-stable
//! strategy can replace it behind the same trait without touching the
//! orchestration.

use crate::config::HostConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Wait policy applied after host state mutations
#[async_trait(?Send)]
pub trait SettleStrategy {
    /// Wait until a view mutation (orientation, overlay) is expected to
    /// be externally visible
    async fn view_settled(&self);

    /// Wait until a load-case activation is expected to be externally
    /// visible
    async fn activation_settled(&self);
}

/// Fixed-delay settle strategy
///
/// A coarse synchronization primitive; known to be flaky under host or
/// machine slowness, which is why the delays are configurable.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    view: Duration,
    activation: Duration,
}

impl FixedDelay {
    /// Creates a strategy with explicit delays
    pub fn new(view: Duration, activation: Duration) -> Self {
        Self { view, activation }
    }

    /// Creates a strategy from host configuration
    pub fn from_config(config: &HostConfig) -> Self {
        Self::new(config.view_settle(), config.activation_settle())
    }
}

#[async_trait(?Send)]
impl SettleStrategy for FixedDelay {
    async fn view_settled(&self) {
        if !self.view.is_zero() {
            tokio::time::sleep(self.view).await;
        }
    }

    async fn activation_settled(&self) {
        if !self.activation.is_zero() {
            tokio::time::sleep(self.activation).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_configured_delays() {
        let mut config = HostConfig::default();
        config.view_settle_ms = 100;
        config.activation_settle_ms = 300;

        let strategy = FixedDelay::from_config(&config);
        assert_eq!(strategy.view, Duration::from_millis(100));
        assert_eq!(strategy.activation, Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_waits() {
        let strategy = FixedDelay::new(Duration::from_millis(500), Duration::from_millis(1000));

        let before = tokio::time::Instant::now();
        strategy.view_settled().await;
        assert_eq!(before.elapsed(), Duration::from_millis(500));

        let before = tokio::time::Instant::now();
        strategy.activation_settled().await;
        assert_eq!(before.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let strategy = FixedDelay::new(Duration::ZERO, Duration::ZERO);
        strategy.view_settled().await;
        strategy.activation_settled().await;
    }
}
