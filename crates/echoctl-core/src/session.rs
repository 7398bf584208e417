// ── Session management ──
//
// A process gets at most one authenticated connection to the device
// service. The handshake is expensive and the service rate-limits it, so
// construction is a one-shot critical section: the first caller connects,
// concurrent callers await the same in-flight result, and later callers
// get the cached handle. A rotated session cookie is persisted before the
// first caller proceeds.

use secrecy::SecretString;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::credentials::{CredentialStore, keys};
use crate::error::CoreError;
use crate::remote::Connect;

/// Credentials read from the store for the handshake.
pub struct Credentials {
    /// The session cookie blob.
    pub cookie: SecretString,
    /// Optional csrf token; backends derive one from the cookie if absent.
    pub csrf: Option<String>,
}

/// The result of a successful handshake.
///
/// Cookie rotation is an explicit output here rather than a side channel:
/// the session manager persists `refreshed_cookie` as a visible step.
pub struct Connection<C> {
    pub client: C,
    pub refreshed_cookie: Option<String>,
}

/// Owns the process-wide session.
///
/// Invariants:
/// - at most one handshake per process lifetime; concurrent callers of
///   [`get`](Self::get) observe the same client instance;
/// - missing credentials fail with [`CoreError::NotAuthenticated`] before
///   any network activity;
/// - at most one credential-store write per successful first connection
///   (the rotated-cookie write-back).
pub struct SessionManager<B: Connect, S: CredentialStore> {
    backend: B,
    store: S,
    session: OnceCell<B::Client>,
}

impl<B: Connect, S: CredentialStore> SessionManager<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            store,
            session: OnceCell::new(),
        }
    }

    /// The credential store backing this session.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Return the authenticated client, connecting on first use.
    ///
    /// A stale or rejected credential is terminal for this call -- the
    /// error directs the user to re-authenticate; nothing is retried.
    pub async fn get(&self) -> Result<&B::Client, CoreError> {
        self.session
            .get_or_try_init(|| async {
                let Some(cookie) = self.store.get(keys::COOKIE) else {
                    return Err(CoreError::NotAuthenticated);
                };
                let credentials = Credentials {
                    cookie: SecretString::from(cookie),
                    csrf: self.store.get(keys::CSRF),
                };

                debug!("establishing remote session");
                let connection = self.backend.connect(credentials).await?;

                if let Some(ref rotated) = connection.refreshed_cookie {
                    debug!("persisting rotated session cookie");
                    self.store.set(keys::COOKIE, rotated)?;
                }

                Ok(connection.client)
            })
            .await
    }
}
