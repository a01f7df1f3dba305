//! Application configuration loaded from environment variables.

use std::env;

use ubik_infra::MockGatewayConfig;

use crate::telemetry::TelemetryConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gateway: MockGatewayConfig,
    pub telemetry: TelemetryConfig,
    /// Credentials typed into the login form by the scripted session.
    pub demo_email: String,
    pub demo_password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            gateway: MockGatewayConfig::from_env(),
            telemetry: TelemetryConfig::from_env(),
            demo_email: env::var("DEMO_EMAIL").unwrap_or_else(|_| "demo@ubik.co".to_string()),
            demo_password: env::var("DEMO_PASSWORD")
                .unwrap_or_else(|_| "demo-password".to_string()),
        }
    }
}
