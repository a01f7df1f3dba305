//! Mock backend: re-validates input, waits a fixed delay and answers with
//! canned results. Replace with an HTTP client once the backend exists.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use ubik_core::ports::{AuthGateway, GatewayError, RegistrationGateway};
use ubik_core::validation::{
    validate_client_form, validate_establishment_form, validate_login_form,
};
use ubik_shared::{
    AuthResult, ClientFormData, EstablishmentFormData, LoginFormData, OAuthProvider,
    RegistrationResult,
};

const FORM_VALIDATION_FAILED: &str = "Errores de validación en el formulario";

/// Artificial latency per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockGatewayConfig {
    pub login_delay: Duration,
    pub oauth_delay: Duration,
    pub password_reset_delay: Duration,
    pub registration_delay: Duration,
}

impl Default for MockGatewayConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1000),
            oauth_delay: Duration::from_millis(1500),
            password_reset_delay: Duration::from_millis(1000),
            registration_delay: Duration::from_millis(1000),
        }
    }
}

impl MockGatewayConfig {
    /// Load delays from `MOCK_*_DELAY_MS` environment variables, keeping the
    /// default for any that are unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login_delay: env_delay("MOCK_LOGIN_DELAY_MS", defaults.login_delay),
            oauth_delay: env_delay("MOCK_OAUTH_DELAY_MS", defaults.oauth_delay),
            password_reset_delay: env_delay(
                "MOCK_RESET_DELAY_MS",
                defaults.password_reset_delay,
            ),
            registration_delay: env_delay(
                "MOCK_REGISTRATION_DELAY_MS",
                defaults.registration_delay,
            ),
        }
    }

    /// No latency at all.
    pub fn instant() -> Self {
        Self {
            login_delay: Duration::ZERO,
            oauth_delay: Duration::ZERO,
            password_reset_delay: Duration::ZERO,
            registration_delay: Duration::ZERO,
        }
    }
}

fn env_delay(name: &str, default: Duration) -> Duration {
    parse_delay(std::env::var(name).ok().as_deref(), default)
}

/// Milliseconds as a `Duration`; missing or non-numeric input keeps `default`.
fn parse_delay(value: Option<&str>, default: Duration) -> Duration {
    value
        .and_then(|s| s.trim().parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

/// Implements both gateway ports.
pub struct MockGateway {
    config: MockGatewayConfig,
}

impl MockGateway {
    pub fn new(config: MockGatewayConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(MockGatewayConfig::from_env())
    }

    async fn respond<T>(&self, operation: &'static str, delay: Duration, result: T) -> T {
        let request_id = Uuid::new_v4();
        debug!(
            %request_id,
            operation,
            delay_ms = delay.as_millis() as u64,
            "Simulating backend call"
        );
        tokio::time::sleep(delay).await;
        info!(%request_id, operation, "Simulated backend call completed");
        result
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(MockGatewayConfig::default())
    }
}

#[async_trait]
impl AuthGateway for MockGateway {
    async fn login(&self, data: &LoginFormData) -> Result<AuthResult, GatewayError> {
        let errors = validate_login_form(Some(data));
        if !errors.is_empty() {
            let summary: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(GatewayError::Validation(format!(
                "Error de validación: {}",
                summary.join(", ")
            )));
        }

        let result = AuthResult {
            token: Some(format!("mock-jwt-token-{}", Utc::now().timestamp_millis())),
            user_id: Some("mock-user-id".to_string()),
            redirect_url: Some("/home".to_string()),
            ..AuthResult::ok("Inicio de sesión exitoso")
        };
        Ok(self.respond("login", self.config.login_delay, result).await)
    }

    async fn login_with_oauth(&self, provider: OAuthProvider) -> Result<AuthResult, GatewayError> {
        let result = AuthResult {
            token: Some(format!(
                "mock-oauth-token-{provider}-{}",
                Utc::now().timestamp_millis()
            )),
            user_id: Some(format!("mock-oauth-user-{provider}")),
            redirect_url: Some("/home".to_string()),
            ..AuthResult::ok(format!("Inicio de sesión exitoso con {provider}"))
        };
        Ok(self
            .respond("login_with_oauth", self.config.oauth_delay, result)
            .await)
    }

    async fn request_password_reset(&self, email: &str) -> Result<AuthResult, GatewayError> {
        if email.trim().is_empty() {
            return Err(GatewayError::Validation(
                "El correo electrónico es requerido".to_string(),
            ));
        }

        let result = AuthResult::ok("Se ha enviado un correo de recuperación");
        Ok(self
            .respond(
                "request_password_reset",
                self.config.password_reset_delay,
                result,
            )
            .await)
    }
}

#[async_trait]
impl RegistrationGateway for MockGateway {
    async fn submit_client_registration(
        &self,
        data: &ClientFormData,
    ) -> Result<RegistrationResult, GatewayError> {
        if !validate_client_form(Some(data)).is_empty() {
            return Err(GatewayError::Validation(FORM_VALIDATION_FAILED.to_string()));
        }

        let result = RegistrationResult {
            redirect_url: Some("/login".to_string()),
            ..RegistrationResult::ok("Registro de cliente exitoso", "mock-user-id")
        };
        Ok(self
            .respond(
                "submit_client_registration",
                self.config.registration_delay,
                result,
            )
            .await)
    }

    async fn submit_establishment_registration(
        &self,
        data: &EstablishmentFormData,
    ) -> Result<RegistrationResult, GatewayError> {
        if !validate_establishment_form(data).is_empty() {
            return Err(GatewayError::Validation(FORM_VALIDATION_FAILED.to_string()));
        }

        if !data.accepted_terms {
            return Err(GatewayError::Validation(
                "Debe aceptar los términos y condiciones".to_string(),
            ));
        }

        let result = RegistrationResult {
            redirect_url: Some("/login".to_string()),
            ..RegistrationResult::ok(
                "Registro de establecimiento exitoso",
                "mock-establishment-id",
            )
        };
        Ok(self
            .respond(
                "submit_establishment_registration",
                self.config.registration_delay,
                result,
            )
            .await)
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use ubik_shared::{
        EstablishmentImagesData, EstablishmentLocationData, EstablishmentOwnerData, FileHandle,
    };

    use super::*;

    fn gateway() -> MockGateway {
        MockGateway::new(MockGatewayConfig::instant())
    }

    fn credentials() -> LoginFormData {
        LoginFormData {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    fn establishment() -> EstablishmentFormData {
        let photo = FileHandle::new("photo.png", 2048, "image/png");
        EstablishmentFormData {
            owner: Some(EstablishmentOwnerData {
                owner_name: "Carlos".to_string(),
                owner_email: "carlos@example.com".to_string(),
                identification_number: "123".to_string(),
                front_id_image: Some(photo.clone()),
                back_id_image: Some(photo.clone()),
            }),
            location: Some(EstablishmentLocationData {
                establishment_name: "Luna".to_string(),
                establishment_email: "luna@example.com".to_string(),
                rues: "1".to_string(),
                rnt: "2".to_string(),
                password: "password1".to_string(),
                confirm_password: "password1".to_string(),
                country: "Colombia".to_string(),
                department: "Antioquia".to_string(),
                municipality: "Medellín".to_string(),
            }),
            images: Some(EstablishmentImagesData {
                images: vec![photo],
            }),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_default_delays() {
        let config = MockGatewayConfig::default();
        assert_eq!(config.login_delay, Duration::from_millis(1000));
        assert_eq!(config.oauth_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_delay_falls_back_to_default() {
        let default = Duration::from_millis(1000);

        assert_eq!(parse_delay(None, default), default);
        assert_eq!(parse_delay(Some("abc"), default), default);
        assert_eq!(parse_delay(Some("-5"), default), default);
        assert_eq!(parse_delay(Some(""), default), default);
        assert_eq!(parse_delay(Some("250"), default), Duration::from_millis(250));
        assert_eq!(parse_delay(Some("0"), default), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_login_success() {
        let result = gateway().login(&credentials()).await.unwrap();

        assert!(result.success);
        assert!(result.token.unwrap().starts_with("mock-jwt-token-"));
        assert_eq!(result.user_id.as_deref(), Some("mock-user-id"));
        assert_eq!(result.redirect_url.as_deref(), Some("/home"));
    }

    #[tokio::test]
    async fn test_login_validation_summary() {
        let data = LoginFormData {
            email: "bad".to_string(),
            password: String::new(),
        };

        let error = gateway().login(&data).await.unwrap_err();

        assert_eq!(
            error,
            GatewayError::Validation(
                "Error de validación: El correo electrónico no es válido, La contraseña es requerida"
                    .to_string()
            )
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_configured_delay() {
        let gateway = MockGateway::default();
        let start = Instant::now();

        gateway.login(&credentials()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_validation_failure_answers_immediately() {
        let gateway = MockGateway::default();
        let start = Instant::now();

        let result = gateway.submit_client_registration(&ClientFormData::default()).await;

        assert!(result.is_err());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_oauth_login_mentions_provider() {
        let result = gateway()
            .login_with_oauth(OAuthProvider::Google)
            .await
            .unwrap();

        assert_eq!(result.message, "Inicio de sesión exitoso con GOOGLE");
        assert!(
            result
                .token
                .unwrap()
                .starts_with("mock-oauth-token-GOOGLE-")
        );
        assert_eq!(result.user_id.as_deref(), Some("mock-oauth-user-GOOGLE"));
    }

    #[tokio::test]
    async fn test_password_reset() {
        let gateway = gateway();
        assert_eq!(
            gateway.request_password_reset(" ").await,
            Err(GatewayError::Validation(
                "El correo electrónico es requerido".to_string()
            ))
        );

        let result = gateway
            .request_password_reset("user@example.com")
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.token, None);
    }

    #[tokio::test]
    async fn test_client_registration() {
        let data = ClientFormData {
            full_name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            birth_day: "1".to_string(),
            birth_month: "1".to_string(),
            birth_year: "1990".to_string(),
            password: "password1".to_string(),
            confirm_password: "password1".to_string(),
        };

        let result = gateway().submit_client_registration(&data).await.unwrap();

        assert_eq!(result.user_id.as_deref(), Some("mock-user-id"));
        assert_eq!(result.redirect_url.as_deref(), Some("/login"));
    }

    #[tokio::test]
    async fn test_establishment_registration() {
        let gateway = gateway();

        let result = gateway
            .submit_establishment_registration(&establishment())
            .await
            .unwrap();
        assert_eq!(result.user_id.as_deref(), Some("mock-establishment-id"));

        let unaccepted = EstablishmentFormData {
            accepted_terms: false,
            ..establishment()
        };
        assert_eq!(
            gateway
                .submit_establishment_registration(&unaccepted)
                .await
                .unwrap_err()
                .user_message(),
            Some("Debe aceptar los términos y condiciones")
        );

        let missing_images = EstablishmentFormData {
            images: None,
            ..establishment()
        };
        assert_eq!(
            gateway
                .submit_establishment_registration(&missing_images)
                .await,
            Err(GatewayError::Validation(
                "Errores de validación en el formulario".to_string()
            ))
        );
    }
}
