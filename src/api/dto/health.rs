//! DTOs for health check endpoint.

use serde::Serialize;

/// Body of `GET /health`, returned with both 200 and 503.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of probing one dependency.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

impl HealthResponse {
    /// Aggregates component checks; any failing check degrades the service.
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.database.is_ok() {
            "healthy"
        } else {
            "degraded"
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_degraded_when_database_fails() {
        let response = HealthResponse::from_checks(HealthChecks {
            database: CheckStatus::error("Database unavailable"),
        });

        assert!(!response.is_healthy());
        assert_eq!(
            serde_json::to_value(&response.checks).unwrap(),
            json!({ "database": { "status": "error", "message": "Database unavailable" } })
        );
    }

    #[test]
    fn test_healthy_when_database_ok() {
        let response = HealthResponse::from_checks(HealthChecks {
            database: CheckStatus::ok("Connected"),
        });

        assert!(response.is_healthy());
        assert_eq!(response.status, "healthy");
    }
}
