//! View controllers for the login and register screens.
//!
//! Submissions are split in two so the re-entrancy guard is checked and
//! set synchronously: `begin_*` validates and returns the in-flight call
//! (or `None` when nothing was started), `finish_*` handles its single
//! result. The plain async methods run both back to back.

use futures::future::BoxFuture;
use tracing::warn;

use ubik_shared::ValidationError;

use crate::ports::{GatewayError, Navigator, Route};

mod login;
mod register;
#[cfg(test)]
mod test_support;

pub use login::LoginView;
pub use register::{DocumentSide, RegisterView};

/// A gateway call that has been started and resolves exactly once.
pub type Pending<T> = BoxFuture<'static, Result<T, GatewayError>>;

pub(crate) const NAVIGATION_ERROR: &str = "Error al navegar. Por favor, intente nuevamente.";

/// Navigates, turning a navigator failure into a form error.
pub(crate) async fn navigate_or_report(
    navigator: &dyn Navigator,
    route: Route,
) -> Option<ValidationError> {
    match navigator.navigate(route).await {
        Ok(()) => None,
        Err(error) => {
            warn!(%error, %route, "Navigation failed");
            Some(ValidationError::form(NAVIGATION_ERROR))
        }
    }
}

/// Resolves a redirect target from a gateway result.
pub(crate) fn redirect_route(redirect_url: Option<&str>, fallback: Route) -> Route {
    match redirect_url {
        Some(url) => Route::from_path(url).unwrap_or_else(|| {
            warn!(url, %fallback, "Unknown redirect target");
            fallback
        }),
        None => fallback,
    }
}
