use std::fmt;
use std::sync::{Arc, RwLock};

/// Header carrying the Telegram WebApp init data (`X-Telegram-Init-Data`) on every request.
pub const IDENTITY_HEADER: &str = "x-telegram-init-data";

/// Source of the Telegram WebApp init data.
///
/// The client asks for the token on every request, so a host that finishes initializing after the
/// client was built is still picked up. Empty tokens are treated as absent.
pub trait IdentitySource: Send + Sync {
    fn init_data(&self) -> Option<String>;
}

impl<F> IdentitySource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn init_data(&self) -> Option<String> {
        self()
    }
}

/// No identity available. Requests are sent without the identity header.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIdentity;

impl IdentitySource for NoIdentity {
    fn init_data(&self) -> Option<String> {
        None
    }
}

/// A fixed init data string.
#[derive(Debug, Clone)]
pub struct StaticIdentity(pub String);

impl IdentitySource for StaticIdentity {
    fn init_data(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Init data that the host can set or clear at any time, shared between clones.
#[derive(Clone, Default)]
pub struct SharedIdentity {
    inner: Arc<RwLock<Option<String>>>,
}

impl SharedIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, init_data: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(init_data.into());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}

impl IdentitySource for SharedIdentity {
    fn init_data(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }
}

impl fmt::Debug for SharedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Init data is a credential, keep it out of logs.
        let present = self.init_data().is_some();
        f.debug_struct("SharedIdentity")
            .field("present", &present)
            .finish()
    }
}

/// Reads the token from `source`, dropping empty values.
pub(crate) fn current_token(source: &dyn IdentitySource) -> Option<String> {
    source.init_data().filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_counts_as_absent() {
        assert_eq!(current_token(&StaticIdentity(String::new())), None);
        assert_eq!(current_token(&NoIdentity), None);
        assert_eq!(
            current_token(&StaticIdentity("query_id=1".to_string())),
            Some("query_id=1".to_string())
        );
    }

    #[test]
    fn shared_identity_is_read_at_call_time() {
        let identity = SharedIdentity::new();
        let handle = identity.clone();
        assert_eq!(current_token(&identity), None);

        handle.set("user=42");
        assert_eq!(current_token(&identity), Some("user=42".to_string()));

        handle.clear();
        assert_eq!(current_token(&identity), None);
    }

    #[test]
    fn closures_are_identity_sources() {
        let source = || Some("hash=abc".to_string());
        assert_eq!(current_token(&source), Some("hash=abc".to_string()));
    }
}
