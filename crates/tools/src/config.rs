//! Contract deployment configuration
//!
//! This module assembles the configuration a deploy tool consumes: one
//! [`NetworkDefinition`] per known network plus the compiler settings.
//! Loading proceeds in order:
//!
//! 1. Check whether `secrets.json` exists
//! 2. Read and parse it if it does
//! 3. Build the provider for every network from the mnemonic and API key
//! 4. Error if the secrets file was absent
//!
//! # Examples
//!
//! ```rust,no_run
//! use deploy_tools::config::DeployConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeployConfig::load()?;
//! let rinkeby = config.network("rinkeby")?;
//! println!("Network id: {}", rinkeby.network_id);
//! println!("solc: {}", config.compilers.solc.version);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::compiler::Compilers;
use crate::network::{Network, NetworkDefinition};
use crate::secrets::{load_secrets, FileSecretsStore, SecretsState, SecretsStore};

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Secrets parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Secrets file not found at {}; networks need a mnemonic and API key", .0.display())]
    SecretsAbsent(PathBuf),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid network: {0}. Must be: rinkeby")]
    InvalidNetwork(String),

    #[error("Invalid gateway URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Resolved deployment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployConfig {
    /// Network definitions keyed by network name
    pub networks: BTreeMap<String, NetworkDefinition>,
    pub compilers: Compilers,
}

impl DeployConfig {
    /// Load configuration using `secrets.json` in the working directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The secrets file is absent
    /// - The secrets file cannot be read or parsed
    /// - A gateway URL cannot be built from the API key
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&FileSecretsStore::current())
    }

    /// Load configuration from an explicit secrets store
    pub fn load_from<S>(store: &S) -> Result<Self, ConfigError>
    where
        S: SecretsStore + ?Sized,
    {
        let state = load_secrets(store)?;
        Self::from_secrets(state)
    }

    /// Build the configuration from already resolved secrets
    pub fn from_secrets(state: SecretsState) -> Result<Self, ConfigError> {
        let secrets = state.into_loaded()?;

        let networks = Network::ALL
            .iter()
            .map(|network| {
                let definition = NetworkDefinition::build(*network, &secrets)?;
                Ok((network.as_str().to_string(), definition))
            })
            .collect::<Result<BTreeMap<_, _>, ConfigError>>()?;

        let config = DeployConfig {
            networks,
            compilers: Compilers::default(),
        };

        info!(
            networks = config.networks.len(),
            solc = %config.compilers.solc.version,
            "deployment configuration loaded"
        );

        Ok(config)
    }

    /// Look up a network definition by name
    pub fn network(&self, name: &str) -> Result<&NetworkDefinition, ConfigError> {
        let network: Network = name.parse()?;
        self.networks
            .get(network.as_str())
            .ok_or_else(|| ConfigError::InvalidNetwork(name.to_string()))
    }

    /// Print the resolved configuration
    pub fn print_summary(&self) {
        print!("{}", self.summary());
    }

    /// Human-readable summary with secrets redacted
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = self.write_summary(&mut out);
        out
    }

    fn write_summary(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "╔════════════════════════════════════════════════════════════════╗")?;
        writeln!(out, "║         DEPLOYMENT CONFIGURATION RESOLVED                      ║")?;
        writeln!(out, "╠════════════════════════════════════════════════════════════════╣")?;

        for (name, definition) in &self.networks {
            writeln!(out, "  Network:             {}", name)?;
            writeln!(out, "    Provider URL:      {}", definition.provider.redacted_url())?;
            writeln!(out, "    Network ID:        {}", definition.network_id)?;
            writeln!(out, "    Gas:               {}", definition.gas)?;
            writeln!(out, "    Gas Price:         {} wei", definition.gas_price)?;
        }

        writeln!(out, "╟────────────────────────────────────────────────────────────────╢")?;

        let solc = &self.compilers.solc;
        writeln!(out, "  solc Version:        {}", solc.version)?;

        if let Some(docker) = solc.docker {
            writeln!(out, "  solc Docker:         {}", docker)?;
        }

        if let Some(ref settings) = solc.settings {
            writeln!(
                out,
                "  Optimizer:           {} ({} runs)",
                if settings.optimizer.enabled { "ENABLED" } else { "disabled" },
                settings.optimizer.runs
            )?;
            writeln!(out, "  EVM Version:         {}", settings.evm_version)?;
        }

        writeln!(out, "╚════════════════════════════════════════════════════════════════╝")
    }

    /// Get configuration as JSON, secrets redacted
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Get configuration as TOML, secrets redacted
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
