//! Ordered aggregation of field validators.

use ubik_shared::ValidationError;

/// A deferred check bound to the field it reports under.
pub struct FieldValidation<'a> {
    field: &'a str,
    check: Box<dyn Fn() -> Option<String> + 'a>,
}

impl<'a> FieldValidation<'a> {
    pub fn new(field: &'a str, check: impl Fn() -> Option<String> + 'a) -> Self {
        Self {
            field,
            check: Box::new(check),
        }
    }
}

/// Runs every validation in order and collects one error per failure.
///
/// With `stop_on_first_error` the remaining checks are not evaluated once
/// one fails.
pub fn collect_validation_errors<'a>(
    validations: impl IntoIterator<Item = FieldValidation<'a>>,
    stop_on_first_error: bool,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for validation in validations {
        if let Some(message) = (validation.check)() {
            errors.push(ValidationError::new(validation.field, message));
            if stop_on_first_error {
                return errors;
            }
        }
    }

    errors
}
