// Shared fakes for core integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use echoctl_core::{
    Connect, Connection, CoreError, CredentialStore, Credentials, Device, DeviceCommand,
    RemoteControl, StoreError,
};

// ── In-memory credential store ──────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<BTreeMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        {
            let mut data = store.data.lock().expect("store lock");
            for (key, value) in pairs {
                data.insert((*key).to_owned(), (*value).to_owned());
            }
        }
        store
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.lock().expect("store lock").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.data
            .lock()
            .expect("store lock")
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.data.lock().expect("store lock").clear();
        Ok(())
    }
}

// ── Fake remote client ──────────────────────────────────────────────

#[derive(Default)]
pub struct FakeClient {
    pub devices: Vec<Device>,
    /// Serials whose sends should fail.
    pub failing: Vec<String>,
    pub sent: Mutex<Vec<(String, DeviceCommand)>>,
}

impl FakeClient {
    pub fn with_devices(devices: Vec<Device>) -> Self {
        Self {
            devices,
            ..Self::default()
        }
    }
}

impl RemoteControl for FakeClient {
    async fn devices(&self) -> Result<Vec<Device>, CoreError> {
        Ok(self.devices.clone())
    }

    async fn send(&self, device: &Device, command: &DeviceCommand) -> Result<(), CoreError> {
        if self.failing.contains(&device.serial) {
            return Err(CoreError::Remote {
                message: format!("device {} unreachable", device.serial),
            });
        }
        self.sent
            .lock()
            .expect("sent lock")
            .push((device.serial.clone(), command.clone()));
        Ok(())
    }
}

// ── Fake backend with a connect counter ─────────────────────────────

#[derive(Default)]
pub struct FakeBackend {
    pub devices: Vec<Device>,
    pub rotated_cookie: Option<String>,
    pub fail_handshake: bool,
    pub connects: Arc<AtomicUsize>,
}

impl FakeBackend {
    /// Handle on the connect counter, usable after the backend is moved
    /// into a session manager.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.connects)
    }
}

impl Connect for FakeBackend {
    type Client = FakeClient;

    async fn connect(&self, _credentials: Credentials) -> Result<Connection<FakeClient>, CoreError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.fail_handshake {
            return Err(CoreError::ConnectionFailed {
                reason: "handshake rejected".into(),
            });
        }
        Ok(Connection {
            client: FakeClient::with_devices(self.devices.clone()),
            refreshed_cookie: self.rotated_cookie.clone(),
        })
    }
}

// ── Device helpers ──────────────────────────────────────────────────

pub fn speaker(serial: &str, name: &str) -> Device {
    Device {
        serial: serial.to_owned(),
        name: name.to_owned(),
        family: "ECHO".to_owned(),
        kind: "A3S5BH4HMV94FB".to_owned(),
        customer_id: Some("CUST1".to_owned()),
        online: true,
        supports_audio: true,
    }
}
