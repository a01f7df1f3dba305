//! Authentication token persistence.
//!
//! The token is kept in plain text under a fixed key, with no encryption
//! and no expiry. This is meant for development only; production should
//! move to http-only cookies.

use std::sync::Arc;

use tracing::warn;

use crate::ports::{KeyValueStore, StoreError};

pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Reads and writes the auth token through a [`KeyValueStore`].
#[derive(Clone)]
pub struct AuthTokenStore {
    store: Arc<dyn KeyValueStore>,
}

impl AuthTokenStore {
    /// Token store backed by `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Empty tokens are ignored.
    pub async fn store_auth_token(&self, token: &str) -> Result<(), StoreError> {
        if token.is_empty() {
            return Ok(());
        }

        self.store.set(AUTH_TOKEN_KEY, token).await
    }

    /// The stored token, if any.
    pub async fn get_auth_token(&self) -> Result<Option<String>, StoreError> {
        self.store.get(AUTH_TOKEN_KEY).await
    }

    /// Removes the token. Clearing when none is stored succeeds.
    pub async fn clear_auth_token(&self) -> Result<(), StoreError> {
        self.store.remove(AUTH_TOKEN_KEY).await
    }

    /// A non-empty token is present. Storage failures count as signed out.
    pub async fn is_authenticated(&self) -> bool {
        match self.get_auth_token().await {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(error) => {
                warn!(%error, "Could not read auth token");
                false
            }
        }
    }
}
