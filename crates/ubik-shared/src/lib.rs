//! # Ubik Shared
//!
//! Form and result types shared between the views and a future backend.
//! Every type here serializes with camelCase field names, which is the
//! contract a real HTTP client will speak.

pub mod dto;
pub mod validation;

pub use dto::{
    AuthResult, ClientFormData, EstablishmentFormData, EstablishmentImagesData,
    EstablishmentLocationData, EstablishmentOwnerData, FileHandle, LoginFormData, OAuthProvider,
    RegistrationResult,
};
pub use validation::{ValidationError, field_error, has_field_error};
