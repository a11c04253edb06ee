//! Staff credential store gating the desk UI. A username → salted digest
//! map in its own JSON file, fully independent of the catalog: the lending
//! side neither reads nor writes it.

use crate::error::{Result, ShelfError};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(ShelfError::Api(
                "Username and password cannot be empty".into(),
            ));
        }

        let mut users = self.load_users();
        if users.contains_key(username) {
            return Err(ShelfError::UserExists(username.to_string()));
        }

        let salt = Uuid::new_v4().simple().to_string();
        let entry = format!("{}${}", salt, digest(&salt, password));
        users.insert(username.to_string(), entry);
        self.save_users(&users)
    }

    /// Unknown users, wrong passwords, and unreadable credential files all
    /// come back `false`; login never takes the catalog down.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let users = self.load_users();
        match users.get(username).and_then(|stored| stored.split_once('$')) {
            Some((salt, hash)) => digest(salt, password) == hash,
            None => false,
        }
    }

    fn load_users(&self) -> BTreeMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(content) if !content.trim().is_empty() => {
                serde_json::from_str(&content).unwrap_or_default()
            }
            _ => BTreeMap::new(),
        }
    }

    fn save_users(&self, users: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(users).map_err(ShelfError::Serialization)?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = dir.join(format!(".users-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(ShelfError::Io)?;
        fs::rename(&tmp, &self.path).map_err(ShelfError::Io)?;
        Ok(())
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
