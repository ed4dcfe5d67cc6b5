//! Core traits shared across layers.

use async_trait::async_trait;

/// Trait for health checks.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of this health check.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Short label used in health responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy(_) => "unhealthy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysDown;

    #[async_trait]
    impl HealthCheck for AlwaysDown {
        fn name(&self) -> &str {
            "down"
        }

        async fn check(&self) -> HealthStatus {
            HealthStatus::Unhealthy("unreachable".to_string())
        }
    }

    #[tokio::test]
    async fn test_health_check_object_safe() {
        let check: Box<dyn HealthCheck> = Box::new(AlwaysDown);
        let status = check.check().await;
        assert_eq!(check.name(), "down");
        assert!(!status.is_healthy());
        assert_eq!(status.as_str(), "unhealthy");
        assert_eq!(HealthStatus::Healthy.as_str(), "healthy");
    }
}
