//! Secrets file handling
//!
//! The secrets file (`secrets.json`) carries the wallet mnemonic and the
//! gateway API key. It is kept out of version control and may be missing,
//! so loading reports a [`SecretsState`] instead of an ambient optional
//! value: callers decide what an absent file means for them.
//!
//! ```json
//! {
//!   "mnemonic": "candy maple cake sugar pudding cream honey rich smooth crumble sweet treat",
//!   "infuraApiKey": "0123456789abcdef0123456789abcdef"
//! }
//! ```

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::ConfigError;

/// Default secrets file name, resolved against the working directory.
pub const SECRETS_FILE: &str = "secrets.json";

pub(crate) const REDACTED: &str = "***";

/// Credential material read from the secrets file.
///
/// Extra keys in the file are ignored. Neither field is ever printed by
/// `Debug`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Secrets {
    /// Seed phrase the wallet provider derives its accounts from.
    pub mnemonic: String,
    /// Gateway credential, appended to the network's gateway URL.
    #[serde(rename = "infuraApiKey")]
    pub infura_api_key: String,
}

impl Secrets {
    /// Parse and validate the contents of a secrets file.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let secrets: Secrets = serde_json::from_str(content)?;
        secrets.validate()?;
        Ok(secrets)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mnemonic.trim().is_empty() {
            return Err(ConfigError::MissingField("mnemonic".to_string()));
        }

        if self.infura_api_key.trim().is_empty() {
            return Err(ConfigError::MissingField("infuraApiKey".to_string()));
        }

        Ok(())
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("mnemonic", &REDACTED)
            .field("infura_api_key", &REDACTED)
            .finish()
    }
}

/// Outcome of looking for the secrets file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretsState {
    /// The file existed and parsed.
    Loaded(Secrets),
    /// No file at `path`.
    Absent { path: PathBuf },
}

impl SecretsState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, SecretsState::Loaded(_))
    }

    /// Unwrap the loaded secrets, turning an absent file into
    /// [`ConfigError::SecretsAbsent`].
    pub fn into_loaded(self) -> Result<Secrets, ConfigError> {
        match self {
            SecretsState::Loaded(secrets) => Ok(secrets),
            SecretsState::Absent { path } => Err(ConfigError::SecretsAbsent(path)),
        }
    }
}

/// Where the secrets file lives.
pub trait SecretsStore {
    /// Location reported in logs and errors.
    fn path(&self) -> &Path;

    /// Check whether the secrets file exists.
    fn exists(&self) -> bool;

    /// Read the whole secrets file as UTF-8 text.
    fn read(&self) -> Result<String, ConfigError>;
}

/// Secrets file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSecretsStore {
    path: PathBuf,
}

impl FileSecretsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `secrets.json` relative to the current working directory.
    pub fn current() -> Self {
        Self::new(SECRETS_FILE)
    }
}

impl SecretsStore for FileSecretsStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Look for the secrets file and parse it when present.
///
/// Performs one existence check and at most one read. A missing file is
/// not an error here; see [`SecretsState::into_loaded`].
pub fn load_secrets<S>(store: &S) -> Result<SecretsState, ConfigError>
where
    S: SecretsStore + ?Sized,
{
    let path = store.path();

    if !store.exists() {
        warn!(path = %path.display(), "secrets file not found");
        return Ok(SecretsState::Absent {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "reading secrets file");
    let content = store.read()?;
    let secrets = Secrets::from_json(&content)?;

    Ok(SecretsState::Loaded(secrets))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::cell::Cell;
    use std::io;

    pub(crate) const MNEMONIC: &str =
        "candy maple cake sugar pudding cream honey rich smooth crumble sweet treat";
    pub(crate) const API_KEY: &str = "0123456789abcdef0123456789abcdef";

    pub(crate) fn secrets_json() -> String {
        format!(r#"{{"mnemonic": "{MNEMONIC}", "infuraApiKey": "{API_KEY}"}}"#)
    }

    /// In-memory store that counts how often it is touched.
    pub(crate) struct CountingStore {
        path: PathBuf,
        content: Option<String>,
        pub(crate) exists_calls: Cell<usize>,
        pub(crate) read_calls: Cell<usize>,
    }

    impl CountingStore {
        pub(crate) fn with_content(content: impl Into<String>) -> Self {
            Self {
                path: PathBuf::from(SECRETS_FILE),
                content: Some(content.into()),
                exists_calls: Cell::new(0),
                read_calls: Cell::new(0),
            }
        }

        pub(crate) fn empty() -> Self {
            Self {
                path: PathBuf::from(SECRETS_FILE),
                content: None,
                exists_calls: Cell::new(0),
                read_calls: Cell::new(0),
            }
        }
    }

    impl SecretsStore for CountingStore {
        fn path(&self) -> &Path {
            &self.path
        }

        fn exists(&self) -> bool {
            self.exists_calls.set(self.exists_calls.get() + 1);
            self.content.is_some()
        }

        fn read(&self) -> Result<String, ConfigError> {
            self.read_calls.set(self.read_calls.get() + 1);
            self.content
                .clone()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound).into())
        }
    }
}
