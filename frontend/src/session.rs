//! Authentication session.
//!
//! The session is read from storage once at startup and then handed to
//! components through context. Sign-in writes the auth code, sign-out removes
//! it and resets the value.

#[cfg(test)]
use std::cell::RefCell;

use rand::Rng;

use crate::browser;
use crate::error::{AppError, Result};

/// Backing store for the auth code.
pub trait SessionStore {
    fn read(&self) -> Result<Option<String>>;
    fn write(&self, code: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// `window.localStorage` under a fixed key.
#[derive(Clone, Debug)]
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage> {
        browser::window()?
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("local storage unavailable".to_string()))
    }
}

impl SessionStore for BrowserStore {
    fn read(&self) -> Result<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| AppError::Storage(format!("read {}: {:?}", self.key, e)))
    }

    fn write(&self, code: &str) -> Result<()> {
        self.storage()?
            .set_item(&self.key, code)
            .map_err(|e| AppError::Storage(format!("write {}: {:?}", self.key, e)))
    }

    fn clear(&self) -> Result<()> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| AppError::Storage(format!("remove {}: {:?}", self.key, e)))
    }
}

/// In-process store for native tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_code(code: &str) -> Self {
        Self {
            slot: RefCell::new(Some(code.to_string())),
        }
    }
}

#[cfg(test)]
impl SessionStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, code: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(code.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    auth_code: Option<String>,
}

impl Session {
    /// Reads the stored code. A storage failure counts as signed out.
    pub fn load(store: &dyn SessionStore) -> Self {
        match store.read() {
            Ok(code) => {
                let session = Self {
                    auth_code: code.filter(|c| !c.is_empty()),
                };
                log::debug!("session loaded, authenticated={}", session.is_authenticated());
                session
            }
            Err(e) => {
                log::warn!("could not read session: {}", e);
                Self::default()
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_code.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub fn auth_code(&self) -> Option<&str> {
        self.auth_code.as_deref()
    }

    pub fn sign_in(store: &dyn SessionStore, code: String) -> Result<Self> {
        store.write(&code)?;
        log::info!("signed in");
        Ok(Self {
            auth_code: Some(code),
        })
    }

    pub fn sign_out(store: &dyn SessionStore) -> Result<Self> {
        store.clear()?;
        log::info!("signed out");
        Ok(Self::default())
    }
}

/// Random 5-digit code, 10000 through 99999.
pub fn generate_auth_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(10_000..=99_999u32).to_string()
}

/// Stand-in for a login request: waits, then stores a fresh code.
pub async fn simulate_login(store: &dyn SessionStore, delay_ms: u32) -> Result<Session> {
    browser::sleep(delay_ms).await?;
    let code = generate_auth_code(&mut rand::thread_rng());
    Session::sign_in(store, code)
}
