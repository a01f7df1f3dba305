//! Port stubs shared by the view tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{NavigationError, Navigator, Route};

#[derive(Default)]
pub(crate) struct StubNavigator {
    visited: Mutex<Vec<Route>>,
    fail: bool,
}

impl StubNavigator {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn visited(&self) -> Vec<Route> {
        self.visited.lock().unwrap().clone()
    }
}

#[async_trait]
impl Navigator for StubNavigator {
    async fn navigate(&self, route: Route) -> Result<(), NavigationError> {
        if self.fail {
            return Err(NavigationError::Failed("router detached".to_string()));
        }
        self.visited.lock().unwrap().push(route);
        Ok(())
    }
}
