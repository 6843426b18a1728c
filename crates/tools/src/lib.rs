//! Deployment tools library
//!
//! Loads the network and compiler configuration used to deploy contracts,
//! reading wallet credentials from an optional secrets file.

pub mod compiler;
pub mod config;
pub mod logging;
pub mod network;
pub mod secrets;

pub use compiler::{Compilers, SolcSettings, SOLC_VERSION};
pub use config::{ConfigError, DeployConfig};
pub use network::{Network, NetworkDefinition, ProviderHandle};
pub use secrets::{
    load_secrets, FileSecretsStore, Secrets, SecretsState, SecretsStore, SECRETS_FILE,
};
