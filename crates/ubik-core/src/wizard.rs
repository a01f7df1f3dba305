//! Registration flow state machine.
//!
//! The register view starts with no registration type chosen. Clients fill
//! a single form; establishments go through four steps, each gated by the
//! validation of the data entered on it.

use tracing::debug;

use ubik_shared::{
    EstablishmentFormData, EstablishmentImagesData, EstablishmentLocationData,
    EstablishmentOwnerData, ValidationError,
};

use crate::validation::{
    validate_establishment_images, validate_establishment_location, validate_establishment_owner,
};

/// Steps of the establishment registration, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    Info = 1,
    Location = 2,
    Images = 3,
    Confirm = 4,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Info),
            2 => Some(Self::Location),
            3 => Some(Self::Images),
            4 => Some(Self::Confirm),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Progress bar value shown for this step. These are product-defined
    /// values, not a fraction of the step count.
    pub fn progress_percentage(self) -> u8 {
        match self {
            Self::Info => 10,
            Self::Location => 30,
            Self::Images => 80,
            Self::Confirm => 90,
        }
    }
}

/// Progress for an optional step; no step shows an empty bar.
pub fn progress_percentage(step: Option<WizardStep>) -> u8 {
    step.map_or(0, WizardStep::progress_percentage)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationType {
    Client,
    Establishment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    NoTypeSelected,
    ClientForm,
    Establishment(WizardStep),
}

/// Result of [`RegistrationWizard::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Not in the establishment flow.
    NotApplicable,
    /// The current step did not validate; the errors are on the wizard.
    Blocked,
    Moved(WizardStep),
    /// Confirm step reached: the caller submits the registration.
    Submit,
}

/// Data entered across the establishment steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstablishmentDraft {
    pub owner: EstablishmentOwnerData,
    pub location: EstablishmentLocationData,
    pub images: EstablishmentImagesData,
    pub accepted_terms: bool,
}

impl EstablishmentDraft {
    pub fn to_form_data(&self) -> EstablishmentFormData {
        EstablishmentFormData {
            owner: Some(self.owner.clone()),
            location: Some(self.location.clone()),
            images: Some(self.images.clone()),
            accepted_terms: self.accepted_terms,
        }
    }

    /// Errors for the data bound to `step`. The confirm step has no inputs.
    pub fn validate_step(&self, step: WizardStep) -> Vec<ValidationError> {
        match step {
            WizardStep::Info => validate_establishment_owner(Some(&self.owner)),
            WizardStep::Location => validate_establishment_location(Some(&self.location)),
            WizardStep::Images => validate_establishment_images(Some(&self.images)),
            WizardStep::Confirm => Vec::new(),
        }
    }
}

/// Current flow state plus the error list displayed by the register view.
#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    state: FlowState,
    errors: Vec<ValidationError>,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self {
            state: FlowState::NoTypeSelected,
            errors: Vec::new(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn registration_type(&self) -> Option<RegistrationType> {
        match self.state {
            FlowState::NoTypeSelected => None,
            FlowState::ClientForm => Some(RegistrationType::Client),
            FlowState::Establishment(_) => Some(RegistrationType::Establishment),
        }
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        match self.state {
            FlowState::Establishment(step) => Some(step),
            _ => None,
        }
    }

    pub fn progress_percentage(&self) -> u8 {
        progress_percentage(self.current_step())
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: Vec<ValidationError>) {
        self.errors = errors;
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Drops every error recorded for `field`.
    pub fn clear_field_errors(&mut self, field: &str) {
        self.errors.retain(|e| e.field != field);
    }

    /// Enters the chosen flow. `None` leaves the wizard untouched and
    /// returns `false`.
    pub fn select_type(&mut self, registration_type: Option<RegistrationType>) -> bool {
        let Some(registration_type) = registration_type else {
            return false;
        };

        self.state = match registration_type {
            RegistrationType::Client => FlowState::ClientForm,
            RegistrationType::Establishment => FlowState::Establishment(WizardStep::Info),
        };
        self.errors.clear();
        debug!(state = ?self.state, "Registration type selected");
        true
    }

    /// Validates the current establishment step and moves forward when it
    /// passes. On the confirm step nothing moves and [`Advance::Submit`] is
    /// returned instead.
    pub fn advance(&mut self, draft: &EstablishmentDraft) -> Advance {
        let FlowState::Establishment(step) = self.state else {
            return Advance::NotApplicable;
        };

        self.errors.clear();

        let errors = draft.validate_step(step);
        if !errors.is_empty() {
            debug!(?step, count = errors.len(), "Step blocked by validation");
            self.errors = errors;
            return Advance::Blocked;
        }

        match step.next() {
            Some(next) => {
                self.state = FlowState::Establishment(next);
                debug!(?next, "Advanced establishment step");
                Advance::Moved(next)
            }
            None => Advance::Submit,
        }
    }

    /// Steps back once; from the first step (or the client form) returns to
    /// type selection.
    pub fn retreat(&mut self) {
        match self.state {
            FlowState::NoTypeSelected => {}
            FlowState::ClientForm => self.cancel(),
            FlowState::Establishment(step) => match step.previous() {
                Some(previous) => {
                    self.state = FlowState::Establishment(previous);
                    self.errors.clear();
                    debug!(?previous, "Retreated establishment step");
                }
                None => self.cancel(),
            },
        }
    }

    /// Back to type selection from anywhere.
    pub fn cancel(&mut self) {
        self.state = FlowState::NoTypeSelected;
        self.errors.clear();
        debug!("Returned to registration type selection");
    }
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}
