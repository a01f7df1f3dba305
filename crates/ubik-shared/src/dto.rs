//! Data Transfer Objects - form payloads and gateway results.
//!
//! Form fields are held as raw strings exactly as typed; an empty string
//! means the user has not filled the field yet.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata of a file picked by the user. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub mime_type: String,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// Login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

/// Client (end user) registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFormData {
    pub full_name: String,
    pub email: String,
    pub birth_day: String,
    pub birth_month: String,
    pub birth_year: String,
    pub password: String,
    pub confirm_password: String,
}

/// First establishment step: the owner and their identity document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentOwnerData {
    pub owner_name: String,
    pub owner_email: String,
    pub identification_number: String,
    pub front_id_image: Option<FileHandle>,
    pub back_id_image: Option<FileHandle>,
}

/// Second establishment step: business registry data and address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentLocationData {
    pub establishment_name: String,
    pub establishment_email: String,
    /// Registro Único Empresarial y Social.
    pub rues: String,
    /// Registro Nacional de Turismo.
    pub rnt: String,
    pub password: String,
    pub confirm_password: String,
    pub country: String,
    pub department: String,
    pub municipality: String,
}

/// Third establishment step: pictures of the place, in upload order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentImagesData {
    pub images: Vec<FileHandle>,
}

/// Complete establishment payload sent once the wizard is confirmed.
///
/// Sections are optional so a partially built payload can still be
/// validated; a missing section is reported as a single error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentFormData {
    pub owner: Option<EstablishmentOwnerData>,
    pub location: Option<EstablishmentLocationData>,
    pub images: Option<EstablishmentImagesData>,
    pub accepted_terms: bool,
}

/// Third-party identity providers offered on the login view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "GOOGLE",
            OAuthProvider::Facebook => "FACEBOOK",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a login, OAuth login or password reset request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl AuthResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: None,
            user_id: None,
            redirect_url: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::ok(message)
        }
    }
}

/// Outcome of a client or establishment registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl RegistrationResult {
    pub fn ok(message: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            user_id: Some(user_id.into()),
            redirect_url: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user_id: None,
            redirect_url: None,
        }
    }
}
