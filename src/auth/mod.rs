//! File-backed identity provider: email/password registration, sign-in and
//! sign-out, plus the currently signed-in identity.
//!
//! The rest of the tool consumes this as a black box producing an
//! `Identity` or none; everything keeps working unauthenticated.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use pbkdf2::pbkdf2_hmac;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

const PBKDF2_ITERATIONS: u32 = 100_000;
const SALT_LEN: usize = 16;
const UID_LEN: usize = 8;

/// The signed-in user, as seen by the rest of the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserRecord {
    uid: String,
    salt: String,
    hash: String,
    iterations: u32,
}

pub struct FileAuth {
    users_file: PathBuf,
    session_file: PathBuf,
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

impl FileAuth {
    pub fn new(cfg: &Config) -> Self {
        Self {
            users_file: cfg.users_file(),
            session_file: cfg.session_file(),
        }
    }

    fn load_users(&self) -> AppResult<HashMap<String, UserRecord>> {
        match fs::read_to_string(&self.users_file) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::Auth(format!("user database unreadable: {e}"))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save_users(&self, users: &HashMap<String, UserRecord>) -> AppResult<()> {
        if let Some(parent) = self.users_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.users_file, serde_json::to_string_pretty(users)?)?;
        Ok(())
    }

    /// Register a new email/password pair. An existing email is a conflict.
    pub fn register(&self, email: &str, password: &str) -> AppResult<Identity> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AppError::Auth(format!("invalid email address '{email}'")));
        }
        if password.len() < 4 {
            return Err(AppError::Auth("password too short".to_string()));
        }

        let mut users = self.load_users()?;
        if users.contains_key(email) {
            return Err(AppError::Auth(format!("email '{email}' is already registered")));
        }

        let mut salt = [0u8; SALT_LEN];
        thread_rng().fill(&mut salt);
        let key = derive_key(password, &salt, PBKDF2_ITERATIONS);

        let uid: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(UID_LEN)
            .map(char::from)
            .collect();

        users.insert(
            email.to_string(),
            UserRecord {
                uid: uid.clone(),
                salt: B64.encode(salt),
                hash: B64.encode(key),
                iterations: PBKDF2_ITERATIONS,
            },
        );
        self.save_users(&users)?;

        let identity = Identity {
            uid,
            email: email.to_string(),
        };
        self.store_session(&identity)?;
        Ok(identity)
    }

    /// Verify credentials and mark the identity as signed in.
    pub fn login(&self, email: &str, password: &str) -> AppResult<Identity> {
        let users = self.load_users()?;
        let record = users
            .get(email)
            .ok_or_else(|| AppError::Auth("unknown email or wrong password".to_string()))?;

        let salt = B64
            .decode(&record.salt)
            .map_err(|e| AppError::Auth(format!("stored credentials corrupt: {e}")))?;
        let expected = B64
            .decode(&record.hash)
            .map_err(|e| AppError::Auth(format!("stored credentials corrupt: {e}")))?;

        let key = derive_key(password, &salt, record.iterations);
        if key.as_slice() != expected.as_slice() {
            return Err(AppError::Auth("unknown email or wrong password".to_string()));
        }

        let identity = Identity {
            uid: record.uid.clone(),
            email: email.to_string(),
        };
        self.store_session(&identity)?;
        Ok(identity)
    }

    pub fn logout(&self) -> AppResult<()> {
        match fs::remove_file(&self.session_file) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Currently signed-in identity, if any. A corrupt session file counts
    /// as signed out.
    pub fn current(&self) -> AppResult<Option<Identity>> {
        match fs::read_to_string(&self.session_file) {
            Ok(raw) => Ok(serde_json::from_str(&raw).ok()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store_session(&self, identity: &Identity) -> AppResult<()> {
        if let Some(parent) = self.session_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.session_file, serde_json::to_string(identity)?)?;
        Ok(())
    }
}
