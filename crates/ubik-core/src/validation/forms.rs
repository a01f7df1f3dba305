//! Validator composition per form shape.

use ubik_shared::{
    ClientFormData, EstablishmentFormData, EstablishmentImagesData, EstablishmentLocationData,
    EstablishmentOwnerData, LoginFormData, ValidationError,
};

use super::collect::{FieldValidation, collect_validation_errors};
use super::fields::{
    validate_birth_date, validate_email, validate_file_upload, validate_login_password,
    validate_password, validate_password_confirmation, validate_required_field,
};

const INVALID_FORM_DATA: &str = "Datos de formulario inválidos";

/// Email and password presence, in that order.
pub fn validate_login_form(data: Option<&LoginFormData>) -> Vec<ValidationError> {
    let Some(data) = data else {
        return vec![ValidationError::form(INVALID_FORM_DATA)];
    };

    collect_validation_errors(
        [
            FieldValidation::new("email", || validate_email(&data.email)),
            FieldValidation::new("password", || validate_login_password(&data.password)),
        ],
        false,
    )
}

/// The three birth date inputs report under the single `birthDate` field.
pub fn validate_client_form(data: Option<&ClientFormData>) -> Vec<ValidationError> {
    let Some(data) = data else {
        return vec![ValidationError::form(INVALID_FORM_DATA)];
    };

    collect_validation_errors(
        [
            FieldValidation::new("fullName", || {
                validate_required_field(&data.full_name, "El nombre completo")
            }),
            FieldValidation::new("email", || validate_email(&data.email)),
            FieldValidation::new("birthDate", || {
                validate_birth_date(&data.birth_day, &data.birth_month, &data.birth_year)
            }),
            FieldValidation::new("password", || validate_password(&data.password)),
            FieldValidation::new("confirmPassword", || {
                validate_password_confirmation(&data.password, &data.confirm_password)
            }),
        ],
        false,
    )
}

/// Owner step: name, email, identification number and both document photos.
pub fn validate_establishment_owner(
    owner: Option<&EstablishmentOwnerData>,
) -> Vec<ValidationError> {
    let Some(owner) = owner else {
        return vec![ValidationError::new(
            "owner",
            "Datos del propietario inválidos",
        )];
    };

    collect_validation_errors(
        [
            FieldValidation::new("ownerName", || {
                validate_required_field(&owner.owner_name, "El nombre del dueño")
            }),
            FieldValidation::new("ownerEmail", || validate_email(&owner.owner_email)),
            FieldValidation::new("identificationNumber", || {
                validate_required_field(
                    &owner.identification_number,
                    "El número de identificación",
                )
            }),
            FieldValidation::new("frontIdImage", || {
                validate_file_upload(
                    owner.front_id_image.as_ref(),
                    "La foto frontal del documento",
                )
            }),
            FieldValidation::new("backIdImage", || {
                validate_file_upload(
                    owner.back_id_image.as_ref(),
                    "La foto trasera del documento",
                )
            }),
        ],
        false,
    )
}

/// Location step, including the account password and its confirmation.
pub fn validate_establishment_location(
    location: Option<&EstablishmentLocationData>,
) -> Vec<ValidationError> {
    let Some(location) = location else {
        return vec![ValidationError::new(
            "location",
            "Datos de ubicación inválidos",
        )];
    };

    collect_validation_errors(
        [
            FieldValidation::new("establishmentName", || {
                validate_required_field(
                    &location.establishment_name,
                    "El nombre del establecimiento",
                )
            }),
            FieldValidation::new("establishmentEmail", || {
                validate_email(&location.establishment_email)
            }),
            FieldValidation::new("rues", || validate_required_field(&location.rues, "El RUES")),
            FieldValidation::new("rnt", || validate_required_field(&location.rnt, "El RNT")),
            FieldValidation::new("country", || {
                validate_required_field(&location.country, "El país")
            }),
            FieldValidation::new("department", || {
                validate_required_field(&location.department, "El departamento")
            }),
            FieldValidation::new("municipality", || {
                validate_required_field(&location.municipality, "El municipio")
            }),
            FieldValidation::new("password", || validate_password(&location.password)),
            FieldValidation::new("confirmPassword", || {
                validate_password_confirmation(&location.password, &location.confirm_password)
            }),
        ],
        false,
    )
}

/// Only checks that at least one image was kept. Individual files are
/// checked when they are picked, see `RegisterView::handle_establishment_images_upload`.
pub fn validate_establishment_images(
    images: Option<&EstablishmentImagesData>,
) -> Vec<ValidationError> {
    let Some(images) = images else {
        return vec![ValidationError::new(
            "images",
            "Debe subir al menos una imagen",
        )];
    };

    if images.images.is_empty() {
        return vec![ValidationError::new(
            "images",
            "Debe subir al menos una imagen del establecimiento",
        )];
    }

    Vec::new()
}

/// All three establishment steps, owner first. Terms acceptance is not a
/// field error and is checked by the caller.
pub fn validate_establishment_form(data: &EstablishmentFormData) -> Vec<ValidationError> {
    let mut errors = validate_establishment_owner(data.owner.as_ref());
    errors.extend(validate_establishment_location(data.location.as_ref()));
    errors.extend(validate_establishment_images(data.images.as_ref()));
    errors
}
