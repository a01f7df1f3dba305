//! Register screen controller: client form plus the establishment wizard.

use std::sync::Arc;

use tracing::{info, warn};

use ubik_shared::{
    ClientFormData, EstablishmentLocationData, EstablishmentOwnerData, FileHandle,
    RegistrationResult, ValidationError, field_error,
};

use crate::ports::{GatewayError, Navigator, RegistrationGateway, Route};
use crate::validation::{validate_client_form, validate_file_upload};
use crate::wizard::{
    Advance, EstablishmentDraft, FlowState, RegistrationType, RegistrationWizard, WizardStep,
};

use super::{Pending, navigate_or_report, redirect_route};

const REGISTRATION_FAILED: &str = "Error al registrar";
const TERMS_REQUIRED: &str = "Debe aceptar los términos y condiciones";

/// Which side of the owner's identity document is being uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    Front,
    Back,
}

impl DocumentSide {
    pub fn field(self) -> &'static str {
        match self {
            DocumentSide::Front => "frontIdImage",
            DocumentSide::Back => "backIdImage",
        }
    }
}

/// Registration screen: type selection, the client form and the
/// establishment wizard.
pub struct RegisterView {
    wizard: RegistrationWizard,
    client: ClientFormData,
    establishment: EstablishmentDraft,
    is_submitting: bool,
    gateway: Arc<dyn RegistrationGateway>,
    navigator: Arc<dyn Navigator>,
}

impl RegisterView {
    /// Starts on type selection with empty forms.
    pub fn new(gateway: Arc<dyn RegistrationGateway>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            wizard: RegistrationWizard::new(),
            client: ClientFormData::default(),
            establishment: EstablishmentDraft::default(),
            is_submitting: false,
            gateway,
            navigator,
        }
    }

    pub fn state(&self) -> FlowState {
        self.wizard.state()
    }

    pub fn registration_type(&self) -> Option<RegistrationType> {
        self.wizard.registration_type()
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        self.wizard.current_step()
    }

    pub fn progress_percentage(&self) -> u8 {
        self.wizard.progress_percentage()
    }

    pub fn errors(&self) -> &[ValidationError] {
        self.wizard.errors()
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        field_error(self.wizard.errors(), field)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.field_error(field).is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn client(&self) -> &ClientFormData {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut ClientFormData {
        &mut self.client
    }

    pub fn establishment(&self) -> &EstablishmentDraft {
        &self.establishment
    }

    pub fn owner_mut(&mut self) -> &mut EstablishmentOwnerData {
        &mut self.establishment.owner
    }

    pub fn location_mut(&mut self) -> &mut EstablishmentLocationData {
        &mut self.establishment.location
    }

    pub fn set_accepted_terms(&mut self, accepted: bool) {
        self.establishment.accepted_terms = accepted;
    }

    pub fn select_registration_type(&mut self, registration_type: Option<RegistrationType>) {
        self.wizard.select_type(registration_type);
    }

    pub fn go_back_to_selection(&mut self) {
        self.wizard.cancel();
    }

    pub fn previous_establishment_step(&mut self) {
        self.wizard.retreat();
    }

    /// Advances the wizard; on the confirm step this starts the
    /// establishment submission instead.
    pub fn begin_next_step(&mut self) -> Option<Pending<RegistrationResult>> {
        match self.wizard.advance(&self.establishment) {
            Advance::Submit => self.begin_establishment_registration(),
            Advance::NotApplicable | Advance::Blocked | Advance::Moved(_) => None,
        }
    }

    pub async fn next_establishment_step(&mut self) {
        if let Some(pending) = self.begin_next_step() {
            let outcome = pending.await;
            self.finish_registration(outcome).await;
        }
    }

    pub fn begin_client_registration(&mut self) -> Option<Pending<RegistrationResult>> {
        if self.is_submitting {
            return None;
        }
        self.wizard.clear_errors();

        let errors = validate_client_form(Some(&self.client));
        if !errors.is_empty() {
            self.wizard.set_errors(errors);
            return None;
        }

        self.is_submitting = true;
        let gateway = Arc::clone(&self.gateway);
        let data = self.client.clone();
        Some(Box::pin(async move { gateway.submit_client_registration(&data).await }))
    }

    pub async fn submit_client_registration(&mut self) {
        if let Some(pending) = self.begin_client_registration() {
            let outcome = pending.await;
            self.finish_registration(outcome).await;
        }
    }

    /// Starts the establishment submission once the terms are accepted.
    /// Step data is re-validated by the gateway.
    pub fn begin_establishment_registration(&mut self) -> Option<Pending<RegistrationResult>> {
        if self.is_submitting {
            return None;
        }

        if !self.establishment.accepted_terms {
            let error = ValidationError::new("terms", TERMS_REQUIRED);
            self.wizard.set_errors(vec![error]);
            return None;
        }

        self.is_submitting = true;
        let gateway = Arc::clone(&self.gateway);
        let data = self.establishment.to_form_data();
        Some(Box::pin(async move {
            gateway.submit_establishment_registration(&data).await
        }))
    }

    pub async fn submit_establishment_registration(&mut self) {
        if let Some(pending) = self.begin_establishment_registration() {
            let outcome = pending.await;
            self.finish_registration(outcome).await;
        }
    }

    /// Completion handler for both registration kinds. Success discards the
    /// entered data and leaves the view on type selection before navigating.
    pub async fn finish_registration(&mut self, outcome: Result<RegistrationResult, GatewayError>) {
        self.is_submitting = false;

        let result = match outcome {
            Ok(result) => result,
            Err(error) => {
                warn!(%error, "Registration failed");
                let message = error.user_message().unwrap_or(REGISTRATION_FAILED).to_string();
                self.wizard.set_errors(vec![ValidationError::form(message)]);
                return;
            }
        };

        if !result.success {
            warn!(message = %result.message, "Registration rejected");
            self.wizard.set_errors(vec![ValidationError::form(result.message)]);
            return;
        }

        info!(user_id = ?result.user_id, "Registration succeeded");

        self.client = ClientFormData::default();
        self.establishment = EstablishmentDraft::default();
        self.wizard.cancel();

        let route = redirect_route(result.redirect_url.as_deref(), Route::Login);
        if let Some(error) = navigate_or_report(self.navigator.as_ref(), route).await {
            self.wizard.push_error(error);
        }
    }

    /// Keeps the picked document photo if it passes the upload checks.
    /// `None` (picker dismissed) changes nothing.
    pub fn handle_owner_document_upload(&mut self, side: DocumentSide, file: Option<FileHandle>) {
        let Some(file) = file else {
            return;
        };

        let field = side.field();
        if let Some(message) = validate_file_upload(Some(&file), "El documento") {
            self.wizard.set_errors(vec![ValidationError::new(field, message)]);
            return;
        }

        let owner = &mut self.establishment.owner;
        match side {
            DocumentSide::Front => owner.front_id_image = Some(file),
            DocumentSide::Back => owner.back_id_image = Some(file),
        }
        self.wizard.clear_field_errors(field);
    }

    /// Appends a batch of establishment pictures. A single bad file rejects
    /// the whole batch, with one error per bad file.
    pub fn handle_establishment_images_upload(&mut self, files: Vec<FileHandle>) {
        if files.is_empty() {
            return;
        }

        let errors: Vec<ValidationError> = files
            .iter()
            .filter_map(|file| {
                let message = validate_file_upload(Some(file), "La imagen")?;
                Some(ValidationError::new(
                    "images",
                    format!("{}: {message}", file.name),
                ))
            })
            .collect();

        if !errors.is_empty() {
            self.wizard.set_errors(errors);
            return;
        }

        self.establishment.images.images.extend(files);
        self.wizard.clear_field_errors("images");
    }
}
