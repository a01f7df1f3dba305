//! # Ubik Core
//!
//! View logic of the login and registration screens: field validators,
//! per-form validation, the establishment registration wizard and the
//! controllers that drive submissions through the ports.
//! Adapters for the ports live in `ubik-infra`.

pub mod ports;
pub mod session;
pub mod validation;
pub mod views;
pub mod wizard;

pub use session::AuthTokenStore;
pub use views::{DocumentSide, LoginView, Pending, RegisterView};
pub use wizard::{
    Advance, EstablishmentDraft, FlowState, RegistrationType, RegistrationWizard, WizardStep,
};
