#![allow(clippy::unwrap_used)]
// Session manager tests: one handshake per process, rotated-cookie
// write-back, and failure modes that must not touch the network.

mod common;

use std::sync::atomic::Ordering;

use echoctl_core::{CoreError, CredentialStore, SessionManager, keys};

use common::{FakeBackend, FakeClient, MemoryStore, speaker};

fn authed_store() -> MemoryStore {
    MemoryStore::with(&[(keys::COOKIE, "session-token=OLD; csrf=12345")])
}

#[tokio::test]
async fn get_is_idempotent_and_connects_once() {
    let backend = FakeBackend {
        devices: vec![speaker("A1", "Kitchen Echo")],
        ..FakeBackend::default()
    };
    let connects = backend.counter();
    let manager = SessionManager::new(backend, authed_store());

    let first: *const FakeClient = manager.get().await.unwrap();
    let second: *const FakeClient = manager.get().await.unwrap();

    assert_eq!(first, second, "both calls must observe the same client");
    assert_eq!(connects.load(Ordering::SeqCst), 1, "exactly one handshake");
}

#[tokio::test]
async fn concurrent_callers_share_one_handshake() {
    let backend = FakeBackend::default();
    let connects = backend.counter();
    let manager = SessionManager::new(backend, authed_store());

    let (a, b) = tokio::join!(manager.get(), manager.get());
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(
        connects.load(Ordering::SeqCst),
        1,
        "concurrent callers must not race a second handshake"
    );
}

#[tokio::test]
async fn missing_credentials_fail_without_network() {
    let backend = FakeBackend::default();
    let connects = backend.counter();
    let manager = SessionManager::new(backend, MemoryStore::default());

    let err = manager.get().await.err().unwrap();
    assert!(matches!(err, CoreError::NotAuthenticated));
    assert!(err.to_string().contains("echoctl auth"));
    assert_eq!(
        connects.load(Ordering::SeqCst),
        0,
        "no network call may be attempted"
    );
}

#[tokio::test]
async fn handshake_failure_surfaces_connection_failed() {
    let backend = FakeBackend {
        fail_handshake: true,
        ..FakeBackend::default()
    };
    let manager = SessionManager::new(backend, authed_store());

    let err = manager.get().await.err().unwrap();
    match err {
        CoreError::ConnectionFailed { reason } => {
            assert!(reason.contains("handshake rejected"));
        }
        other => panic!("expected ConnectionFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn rotated_cookie_written_back_exactly_once() {
    let backend = FakeBackend {
        rotated_cookie: Some("session-token=NEW; csrf=12345".to_owned()),
        ..FakeBackend::default()
    };
    let store = MemoryStore::with(&[(keys::COOKIE, "session-token=OLD; csrf=12345")]);
    let manager = SessionManager::new(backend, store);

    manager.get().await.unwrap();
    manager.get().await.unwrap();

    assert_eq!(
        manager.store().get(keys::COOKIE).as_deref(),
        Some("session-token=NEW; csrf=12345")
    );
    assert_eq!(
        manager.store().writes(),
        1,
        "one write-back per successful first connection"
    );
}

#[tokio::test]
async fn unrotated_cookie_is_not_rewritten() {
    let manager = SessionManager::new(FakeBackend::default(), authed_store());

    manager.get().await.unwrap();
    assert_eq!(manager.store().writes(), 0);
}
