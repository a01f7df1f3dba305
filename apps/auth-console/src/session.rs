//! The scripted session: every screen is driven the way a user would,
//! including the mistakes.

use std::sync::Arc;

use tracing::{info, warn};

use ubik_core::ports::{AuthGateway, Navigator, RegistrationGateway};
use ubik_core::{AuthTokenStore, DocumentSide, LoginView, RegisterView, RegistrationType};
use ubik_shared::{ClientFormData, FileHandle, OAuthProvider, ValidationError};

fn report(screen: &str, errors: &[ValidationError]) {
    for error in errors {
        warn!(screen, field = %error.field, message = %error.message, "Validation error");
    }
}

pub async fn login(
    gateway: Arc<dyn AuthGateway>,
    tokens: AuthTokenStore,
    navigator: Arc<dyn Navigator>,
    email: &str,
    password: &str,
) {
    let mut view = LoginView::new(gateway, tokens.clone(), navigator);

    view.form_mut().email = email.replace('@', "");
    view.submit_login().await;
    report("login", view.errors());

    let form = view.form_mut();
    form.email = email.to_string();
    form.password = password.to_string();
    view.submit_login().await;
    report("login", view.errors());

    info!(authenticated = tokens.is_authenticated().await, "Password login done");

    view.login_with_oauth(OAuthProvider::Google).await;
    report("login", view.errors());

    view.request_password_reset().await;
    if let Some(notice) = view.notice() {
        info!(notice, "Password reset requested");
    }
}

pub async fn register_client(
    gateway: Arc<dyn RegistrationGateway>,
    navigator: Arc<dyn Navigator>,
) {
    let mut view = RegisterView::new(gateway, navigator);
    view.select_registration_type(Some(RegistrationType::Client));

    *view.client_mut() = ClientFormData {
        full_name: "Ana Gómez".to_string(),
        email: "ana@example.com".to_string(),
        birth_day: "30".to_string(),
        birth_month: "2".to_string(),
        birth_year: "1995".to_string(),
        password: "short".to_string(),
        confirm_password: "shorter".to_string(),
    };
    view.submit_client_registration().await;
    report("register/client", view.errors());

    let client = view.client_mut();
    client.birth_day = "28".to_string();
    client.password = "long-enough".to_string();
    client.confirm_password = "long-enough".to_string();
    view.submit_client_registration().await;
    report("register/client", view.errors());
}

pub async fn register_establishment(
    gateway: Arc<dyn RegistrationGateway>,
    navigator: Arc<dyn Navigator>,
) {
    let mut view = RegisterView::new(gateway, navigator);
    view.select_registration_type(Some(RegistrationType::Establishment));

    let owner = view.owner_mut();
    owner.owner_name = "Carlos Pérez".to_string();
    owner.owner_email = "carlos@example.com".to_string();
    owner.identification_number = "1032456789".to_string();
    view.handle_owner_document_upload(
        DocumentSide::Front,
        Some(FileHandle::new("cedula-front.pdf", 80_000, "application/pdf")),
    );
    report("register/establishment", view.errors());
    view.handle_owner_document_upload(
        DocumentSide::Front,
        Some(FileHandle::new("cedula-front.jpg", 80_000, "image/jpeg")),
    );
    view.handle_owner_document_upload(
        DocumentSide::Back,
        Some(FileHandle::new("cedula-back.jpg", 80_000, "image/jpeg")),
    );
    advance(&mut view).await;

    let location = view.location_mut();
    location.establishment_name = "Motel Luna".to_string();
    location.establishment_email = "reservas@luna.co".to_string();
    location.rues = "RUES-0001".to_string();
    location.rnt = "RNT-0001".to_string();
    location.country = "Colombia".to_string();
    location.department = "Antioquia".to_string();
    location.municipality = "Medellín".to_string();
    location.password = "luna-secret".to_string();
    location.confirm_password = "luna-secret".to_string();
    advance(&mut view).await;

    view.handle_establishment_images_upload(vec![
        FileHandle::new("lobby.jpg", 1_200_000, "image/jpeg"),
        FileHandle::new("suite.png", 2_400_000, "image/png"),
    ]);
    advance(&mut view).await;

    // Confirm without accepting the terms first.
    advance(&mut view).await;
    view.set_accepted_terms(true);
    advance(&mut view).await;
}

async fn advance(view: &mut RegisterView) {
    view.next_establishment_step().await;
    report("register/establishment", view.errors());
    info!(
        state = ?view.state(),
        progress = view.progress_percentage(),
        "Establishment wizard"
    );
}
