//! Client-side validation.
//!
//! Field validators return `None` when the value is acceptable and
//! `Some(message)` otherwise. Form validators compose them in a fixed
//! field order; that order is the order errors are displayed in.

mod collect;
mod fields;
mod forms;

pub use collect::{FieldValidation, collect_validation_errors};
pub use fields::{
    ALLOWED_IMAGE_TYPES, MAX_UPLOAD_BYTES, MIN_AGE_YEARS, MIN_BIRTH_YEAR, MIN_PASSWORD_LENGTH,
    age_on, validate_birth_date, validate_birth_date_on, validate_email, validate_file_upload,
    validate_login_password, validate_password, validate_password_confirmation,
    validate_required_field,
};
pub use forms::{
    validate_client_form, validate_establishment_form, validate_establishment_images,
    validate_establishment_location, validate_establishment_owner, validate_login_form,
};
