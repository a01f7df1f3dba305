//! Login screen controller.

use std::sync::Arc;

use tracing::{info, warn};

use ubik_shared::{AuthResult, LoginFormData, OAuthProvider, ValidationError, field_error};

use crate::ports::{AuthGateway, GatewayError, Navigator, Route};
use crate::session::AuthTokenStore;
use crate::validation::validate_login_form;

use super::{Pending, navigate_or_report, redirect_route};

const LOGIN_FAILED: &str = "Error al iniciar sesión";
const RESET_FAILED: &str = "Error al enviar correo de recuperación";
const PASSWORD_RESET_PENDING: &str = "Funcionalidad de recuperación de contraseña próximamente";

/// Login screen state: the form, its errors and the in-flight guard.
pub struct LoginView {
    form: LoginFormData,
    errors: Vec<ValidationError>,
    is_submitting: bool,
    notice: Option<String>,
    gateway: Arc<dyn AuthGateway>,
    tokens: AuthTokenStore,
    navigator: Arc<dyn Navigator>,
}

impl LoginView {
    /// Empty form, wired to the given ports.
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        tokens: AuthTokenStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            form: LoginFormData::default(),
            errors: Vec::new(),
            is_submitting: false,
            notice: None,
            gateway,
            tokens,
            navigator,
        }
    }

    pub fn form(&self) -> &LoginFormData {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LoginFormData {
        &mut self.form
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Confirmation shown after a password reset email was sent.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        field_error(&self.errors, field)
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_error(field).is_some()
    }

    /// Starts an email/password login, unless one is already in flight or
    /// the form does not validate.
    pub fn begin_login(&mut self) -> Option<Pending<AuthResult>> {
        if self.is_submitting {
            return None;
        }
        self.errors.clear();

        let errors = validate_login_form(Some(&self.form));
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.is_submitting = true;
        let gateway = Arc::clone(&self.gateway);
        let data = self.form.clone();
        Some(Box::pin(async move { gateway.login(&data).await }))
    }

    pub fn begin_oauth_login(&mut self, provider: OAuthProvider) -> Option<Pending<AuthResult>> {
        if self.is_submitting {
            return None;
        }
        self.errors.clear();
        self.is_submitting = true;

        let gateway = Arc::clone(&self.gateway);
        Some(Box::pin(async move { gateway.login_with_oauth(provider).await }))
    }

    /// Completion handler shared by both login kinds.
    pub async fn finish_login(&mut self, outcome: Result<AuthResult, GatewayError>) {
        self.is_submitting = false;

        let result = match outcome {
            Ok(result) => result,
            Err(error) => {
                warn!(%error, "Login failed");
                let message = error.user_message().unwrap_or(LOGIN_FAILED).to_string();
                self.errors = vec![ValidationError::form(message)];
                return;
            }
        };

        if !result.success {
            warn!(message = %result.message, "Login rejected");
            self.errors = vec![ValidationError::form(result.message)];
            return;
        }

        info!(user_id = ?result.user_id, "Login succeeded");

        if let Some(token) = result.token.as_deref()
            && let Err(error) = self.tokens.store_auth_token(token).await
        {
            warn!(%error, "Could not persist auth token");
        }

        let route = redirect_route(result.redirect_url.as_deref(), Route::Home);
        self.navigate(route).await;
    }

    pub async fn submit_login(&mut self) {
        if let Some(pending) = self.begin_login() {
            let outcome = pending.await;
            self.finish_login(outcome).await;
        }
    }

    pub async fn login_with_oauth(&mut self, provider: OAuthProvider) {
        if let Some(pending) = self.begin_oauth_login(provider) {
            let outcome = pending.await;
            self.finish_login(outcome).await;
        }
    }

    /// Asks for a recovery email for the address currently typed in the form.
    pub fn begin_password_reset(&mut self) -> Option<Pending<AuthResult>> {
        if self.is_submitting {
            return None;
        }
        self.errors.clear();
        self.notice = None;
        self.is_submitting = true;

        let gateway = Arc::clone(&self.gateway);
        let email = self.form.email.clone();
        Some(Box::pin(async move { gateway.request_password_reset(&email).await }))
    }

    pub fn finish_password_reset(&mut self, outcome: Result<AuthResult, GatewayError>) {
        self.is_submitting = false;

        match outcome {
            Ok(result) if result.success => self.notice = Some(result.message),
            Ok(result) => self.errors = vec![ValidationError::form(result.message)],
            Err(error) => {
                warn!(%error, "Password reset request failed");
                let message = error.user_message().unwrap_or(RESET_FAILED).to_string();
                self.errors = vec![ValidationError::form(message)];
            }
        }
    }

    pub async fn request_password_reset(&mut self) {
        if let Some(pending) = self.begin_password_reset() {
            let outcome = pending.await;
            self.finish_password_reset(outcome);
        }
    }

    pub async fn navigate_to_register(&mut self) {
        self.navigate(Route::Register).await;
    }

    // TODO: navigate to Route::PasswordReset once the recovery view exists.
    pub fn navigate_to_password_reset(&mut self) {
        self.errors = vec![ValidationError::form(PASSWORD_RESET_PENDING)];
    }

    async fn navigate(&mut self, route: Route) {
        if let Some(error) = navigate_or_report(self.navigator.as_ref(), route).await {
            self.errors.push(error);
        }
    }
}
