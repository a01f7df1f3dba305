//! Navigator that keeps the visited routes in memory.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};

use ubik_core::ports::{NavigationError, Navigator, Route};

#[derive(Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Route>>,
    /// `None` accepts every route.
    routes: Option<HashSet<Route>>,
}

impl RecordingNavigator {
    /// Navigator that accepts every route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator limited to the given routes; anything else is reported as
    /// an unknown route.
    pub fn with_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        Self {
            history: Mutex::default(),
            routes: Some(routes.into_iter().collect()),
        }
    }

    pub async fn history(&self) -> Vec<Route> {
        self.history.lock().await.clone()
    }

    pub async fn current(&self) -> Option<Route> {
        self.history.lock().await.last().copied()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, route: Route) -> Result<(), NavigationError> {
        if let Some(routes) = &self.routes
            && !routes.contains(&route)
        {
            warn!(%route, "No view registered");
            return Err(NavigationError::UnknownRoute(route.path().to_string()));
        }

        info!(%route, "Navigating");
        self.history.lock().await.push(route);
        Ok(())
    }
}
