//! Remote authentication and registration calls.

use async_trait::async_trait;

use ubik_shared::{
    AuthResult, ClientFormData, EstablishmentFormData, LoginFormData, OAuthProvider,
    RegistrationResult,
};

/// Login, OAuth and password reset calls.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, data: &LoginFormData) -> Result<AuthResult, GatewayError>;

    async fn login_with_oauth(&self, provider: OAuthProvider) -> Result<AuthResult, GatewayError>;

    /// Sends a recovery email to `email`.
    async fn request_password_reset(&self, email: &str) -> Result<AuthResult, GatewayError>;
}

/// Account creation calls.
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    async fn submit_client_registration(
        &self,
        data: &ClientFormData,
    ) -> Result<RegistrationResult, GatewayError>;

    async fn submit_establishment_registration(
        &self,
        data: &EstablishmentFormData,
    ) -> Result<RegistrationResult, GatewayError>;
}

/// Gateway call failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Input re-validated by the gateway was rejected before any call.
    #[error("{0}")]
    Validation(String),

    /// The remote side answered with a refusal.
    #[error("{0}")]
    Rejected(String),

    /// No usable answer; carries no message for the user.
    #[error("Gateway unavailable")]
    Unavailable,
}

impl GatewayError {
    /// Message to show the user, if the failure carries one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            GatewayError::Validation(message) | GatewayError::Rejected(message) => {
                Some(message.as_str()).filter(|m| !m.is_empty())
            }
            GatewayError::Unavailable => None,
        }
    }
}
