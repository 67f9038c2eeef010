use std::sync::{Arc, RwLock};

/// Source of the bearer token for the current session.
///
/// The search engine only reads the token; issuing, refreshing and clearing it
/// belong to whoever owns the session.
pub trait CredentialAccessor: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// A fixed token, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

impl CredentialAccessor for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Token shared with a login flow. Clones observe later `set`/`clear` calls.
#[derive(Debug, Clone, Default)]
pub struct SessionToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl SessionToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(token.into());
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }
}

impl CredentialAccessor for SessionToken {
    fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
