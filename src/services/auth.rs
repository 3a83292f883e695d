use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::errors::{AppError, Result};

/// File-backed store for the session credential, the console analog of
/// the browser's persistent "token" entry. Token issuance happens out of
/// band; this only remembers what it was given.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the stored token, or None when absent or empty.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(err) => {
                debug!("No stored token at {:?}: {}", self.path, err);
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        fs::write(&self.path, token)
            .map_err(|e| AppError::IoError(format!("Failed to store token: {}", e)))
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| AppError::IoError(format!("Failed to clear token: {}", e)))?;
        }
        Ok(())
    }
}

/// Explicit credential context handed to the route guard and the
/// submission pipeline. Presence alone gates access; the token itself is
/// never inspected.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    pub fn from_store(store: &TokenStore) -> Self {
        Self {
            token: store.load(),
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token"));
        assert!(store.load().is_none());

        store.save("secret-token").unwrap();
        assert_eq!(store.load().as_deref(), Some("secret-token"));

        store.clear().unwrap();
        assert!(store.load().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn blank_token_files_count_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token"));
        store.save("   \n").unwrap();
        assert!(store.load().is_none());
        assert!(!AuthContext::from_store(&store).is_signed_in());
    }

    #[test]
    fn context_presence() {
        assert!(!AuthContext::anonymous().is_signed_in());
        let ctx = AuthContext::with_token("t");
        assert!(ctx.is_signed_in());
        assert_eq!(ctx.token(), Some("t"));
    }
}
