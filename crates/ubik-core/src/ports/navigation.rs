//! Route navigation.

use std::fmt;

use async_trait::async_trait;

/// Destinations the views can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Register,
    Login,
    /// Placeholder until the recovery flow exists.
    PasswordReset,
}

impl Route {
    /// Absolute path, with the leading slash.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::PasswordReset => "/password-reset",
        }
    }

    /// Parses a redirect target, with or without the leading slash.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim().trim_start_matches('/') {
            "home" => Some(Route::Home),
            "register" => Some(Route::Register),
            "login" => Some(Route::Login),
            "password-reset" => Some(Route::PasswordReset),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Moves the user to another view.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Shows the view registered for `route`.
    async fn navigate(&self, route: Route) -> Result<(), NavigationError>;
}

/// Navigation failures.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// No view is registered for the route path.
    #[error("No view registered for {0}")]
    UnknownRoute(String),

    /// The router could not complete the transition.
    #[error("Navigation failed: {0}")]
    Failed(String),
}
