//! Admin access flag kept in a [`KeyValueStore`].

use crate::shared::storage::KeyValueStore;

pub const DEFAULT_AUTH_KEY: &str = "adminAuthenticated";
pub const DEFAULT_LOGIN_ROUTE: &str = "/admin/login";

/// Outcome of the access check done before the dashboard mounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Granted,
    Redirect(String),
}

pub struct AdminAuth<S> {
    store: S,
    key: String,
    login_route: String,
}

impl<S: KeyValueStore> AdminAuth<S> {
    pub fn new(store: S, key: impl Into<String>, login_route: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            login_route: login_route.into(),
        }
    }

    /// Only the exact value "true" counts as signed in
    pub fn is_authenticated(&self) -> bool {
        self.store.get(&self.key).as_deref() == Some("true")
    }

    pub fn check(&self) -> AuthDecision {
        if self.is_authenticated() {
            AuthDecision::Granted
        } else {
            log::info!("admin flag '{}' not set, redirecting to {}", self.key, self.login_route);
            AuthDecision::Redirect(self.login_route.clone())
        }
    }

    pub fn login(&self) {
        self.store.set(&self.key, "true");
    }

    /// Clears the flag and returns the route to leave for
    pub fn logout(&self) -> String {
        self.store.remove(&self.key);
        log::info!("admin logged out");
        self.login_route.clone()
    }
}
