//! Single-field validators.

use std::sync::OnceLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use ubik_shared::FileHandle;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_AGE_YEARS: i32 = 18;
pub const MIN_BIRTH_YEAR: i32 = 1900;
/// 5 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Required, and shaped like `local@domain.tld`.
pub fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some("El correo electrónico es requerido".to_string());
    }

    if !email_regex().is_match(email) {
        return Some("El correo electrónico no es válido".to_string());
    }

    None
}

/// Registration password: required and at least [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("La contraseña es requerida".to_string());
    }

    // Length counts Unicode scalar values, not UTF-16 units: four emoji
    // are four characters.
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Some(format!(
            "La contraseña debe tener al menos {MIN_PASSWORD_LENGTH} caracteres"
        ));
    }

    None
}

/// Login password: only presence is checked. The length rule applies at
/// registration.
pub fn validate_login_password(password: &str) -> Option<String> {
    if password.trim().is_empty() {
        return Some("La contraseña es requerida".to_string());
    }

    None
}

/// Confirmation is required and must equal `password` exactly.
pub fn validate_password_confirmation(password: &str, confirm_password: &str) -> Option<String> {
    if confirm_password.is_empty() {
        return Some("Debe confirmar la contraseña".to_string());
    }

    if password != confirm_password {
        return Some("Las contraseñas no coinciden".to_string());
    }

    None
}

/// `label` is the field's display name including its article,
/// e.g. "El nombre completo".
pub fn validate_required_field(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{label} es requerido"));
    }

    None
}

/// Validates a birth date typed as three separate inputs against today's
/// local date.
pub fn validate_birth_date(day: &str, month: &str, year: &str) -> Option<String> {
    validate_birth_date_on(day, month, year, Local::now().date_naive())
}

/// Same as [`validate_birth_date`] with an explicit reference date.
pub fn validate_birth_date_on(
    day: &str,
    month: &str,
    year: &str,
    today: NaiveDate,
) -> Option<String> {
    if day.is_empty() || month.is_empty() || year.is_empty() {
        return Some("La fecha de nacimiento es requerida".to_string());
    }

    let Some(day) = parse_part(day).filter(|d| (1..=31).contains(d)) else {
        return Some("El día debe estar entre 1 y 31".to_string());
    };

    let Some(month) = parse_part(month).filter(|m| (1..=12).contains(m)) else {
        return Some("El mes debe estar entre 1 y 12".to_string());
    };

    let current_year = today.year();
    let Some(year) = parse_part(year).filter(|y| (MIN_BIRTH_YEAR..=current_year).contains(y))
    else {
        return Some(format!(
            "El año debe estar entre {MIN_BIRTH_YEAR} y {current_year}"
        ));
    };

    // Ranges are checked above, so the casts cannot wrap.
    let Some(birth_date) = NaiveDate::from_ymd_opt(year, month as u32, day as u32) else {
        return Some("La fecha no es válida".to_string());
    };

    if age_on(birth_date, today) < MIN_AGE_YEARS {
        return Some(format!("Debe ser mayor de {MIN_AGE_YEARS} años"));
    }

    None
}

/// Whole years elapsed between `birth_date` and `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

fn parse_part(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Checks an uploaded image's presence, size and MIME type.
pub fn validate_file_upload(file: Option<&FileHandle>, label: &str) -> Option<String> {
    let Some(file) = file else {
        return Some(format!("{label} es requerido"));
    };

    if file.size > MAX_UPLOAD_BYTES {
        return Some(format!("{label} no debe superar los 5MB"));
    }

    if !ALLOWED_IMAGE_TYPES.contains(&file.mime_type.as_str()) {
        return Some(format!("{label} debe ser una imagen JPG o PNG"));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn test_email_accepts_simple_address() {
        assert_eq!(validate_email("user@example.com"), None);
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        for email in ["userexample.com", "user@example", "user@", "@example.com", "us er@x.co"] {
            assert_eq!(
                validate_email(email).as_deref(),
                Some("El correo electrónico no es válido"),
                "{email}"
            );
        }
    }

    #[test]
    fn test_email_required() {
        assert_eq!(
            validate_email("   ").as_deref(),
            Some("El correo electrónico es requerido")
        );
        assert!(validate_email("").is_some());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(validate_password("").is_some());
        assert_eq!(
            validate_password("1234567").as_deref(),
            Some("La contraseña debe tener al menos 8 caracteres")
        );
        assert_eq!(validate_password("12345678"), None);
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert_eq!(validate_password("ñañañaña"), None);
        assert!(validate_password("😀😀😀😀").is_some());
    }

    #[test]
    fn test_login_password_only_requires_presence() {
        assert_eq!(validate_login_password("abc"), None);
        assert!(validate_login_password("  ").is_some());
    }

    #[test]
    fn test_password_confirmation() {
        assert_eq!(validate_password_confirmation("secret12", "secret12"), None);
        assert_eq!(
            validate_password_confirmation("secret12", "").as_deref(),
            Some("Debe confirmar la contraseña")
        );
        assert_eq!(
            validate_password_confirmation("secret12", "secret13").as_deref(),
            Some("Las contraseñas no coinciden")
        );
    }

    #[test]
    fn test_required_field_uses_label() {
        assert_eq!(
            validate_required_field(" \t", "El RNT").as_deref(),
            Some("El RNT es requerido")
        );
        assert_eq!(validate_required_field("123", "El RNT"), None);
    }

    #[test]
    fn test_birth_date_missing_part() {
        assert_eq!(
            validate_birth_date_on("1", "", "1990", today()).as_deref(),
            Some("La fecha de nacimiento es requerida")
        );
    }

    #[test]
    fn test_birth_date_ranges() {
        assert_eq!(
            validate_birth_date_on("32", "1", "1990", today()).as_deref(),
            Some("El día debe estar entre 1 y 31")
        );
        assert_eq!(
            validate_birth_date_on("1", "13", "1990", today()).as_deref(),
            Some("El mes debe estar entre 1 y 12")
        );
        assert_eq!(
            validate_birth_date_on("1", "1", "1899", today()).as_deref(),
            Some("El año debe estar entre 1900 y 2026")
        );
        assert_eq!(
            validate_birth_date_on("1", "1", "2027", today()).as_deref(),
            Some("El año debe estar entre 1900 y 2026")
        );
        assert!(validate_birth_date_on("x", "1", "1990", today()).is_some());
    }

    #[test]
    fn test_birth_date_rejects_impossible_calendar_dates() {
        for year in ["1990", "2000", "2004"] {
            assert_eq!(
                validate_birth_date_on("30", "2", year, today()).as_deref(),
                Some("La fecha no es válida")
            );
        }
        assert!(validate_birth_date_on("31", "4", "1990", today()).is_some());
        assert_eq!(validate_birth_date_on("29", "2", "2004", today()), None);
    }

    #[test]
    fn test_birth_date_age_threshold() {
        // Exactly 18 today.
        assert_eq!(validate_birth_date_on("14", "10", "2008", today()), None);
        // 17 years and 364 days.
        assert_eq!(
            validate_birth_date_on("15", "10", "2008", today()).as_deref(),
            Some("Debe ser mayor de 18 años")
        );
    }

    #[test]
    fn test_age_on_counts_birthday_not_yet_reached() {
        let birth = NaiveDate::from_ymd_opt(2000, 12, 1).unwrap();
        assert_eq!(age_on(birth, today()), 25);
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(age_on(birth, today()), 26);
    }

    #[test]
    fn test_file_upload() {
        let label = "La imagen";
        assert_eq!(
            validate_file_upload(None, label).as_deref(),
            Some("La imagen es requerido")
        );

        let big = FileHandle::new("big.png", MAX_UPLOAD_BYTES + 1, "image/png");
        assert_eq!(
            validate_file_upload(Some(&big), label).as_deref(),
            Some("La imagen no debe superar los 5MB")
        );

        let pdf = FileHandle::new("doc.pdf", 1024, "application/pdf");
        assert_eq!(
            validate_file_upload(Some(&pdf), label).as_deref(),
            Some("La imagen debe ser una imagen JPG o PNG")
        );

        let exact = FileHandle::new("ok.jpg", MAX_UPLOAD_BYTES, "image/jpg");
        assert_eq!(validate_file_upload(Some(&exact), label), None);
    }
}
