//! Deployment networks
//!
//! Each known network maps to a gateway base URL, a network id and the gas
//! parameters transactions are sent with. A [`NetworkDefinition`] is built
//! once from the loaded secrets and never changes afterwards.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::config::ConfigError;
use crate::secrets::{Secrets, REDACTED};

/// Networks contracts can be deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Network {
    /// Rinkeby Ethereum testnet
    Rinkeby,
}

impl Network {
    /// Every network a configuration is built for.
    pub const ALL: [Network; 1] = [Network::Rinkeby];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Rinkeby => "rinkeby",
        }
    }

    /// Gateway base URL; the API key is appended to it.
    pub fn gateway_base_url(&self) -> &'static str {
        match self {
            Network::Rinkeby => "https://rinkeby.infura.io/v3/",
        }
    }

    pub fn network_id(&self) -> &'static str {
        match self {
            Network::Rinkeby => "4",
        }
    }

    /// Gas limit per transaction
    pub fn gas(&self) -> u64 {
        match self {
            Network::Rinkeby => 3_000_000,
        }
    }

    /// Gas price in wei
    pub fn gas_price(&self) -> u64 {
        match self {
            Network::Rinkeby => 1_000_000_000,
        }
    }

    /// Gateway URL for `api_key`.
    ///
    /// The key must only extend the path: a key that adds a query or
    /// fragment, or that the URL parser would normalize (dot segments,
    /// backslashes, whitespace), is rejected.
    pub fn gateway_url(&self, api_key: &str) -> Result<Url, ConfigError> {
        let base = Url::parse(self.gateway_base_url())?;
        let url = base.join(api_key)?;
        let expected_path = format!("{}{}", base.path(), api_key);

        if url.path() != expected_path || url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::ValidationError(format!(
                "gateway API key for {} must be a single plain path segment",
                self
            )));
        }

        Ok(url)
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rinkeby" => Ok(Network::Rinkeby),
            other => Err(ConfigError::InvalidNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// HD wallet provider the deploy tool signs with.
///
/// Holds the mnemonic and the full gateway URL. `Debug` and `Serialize`
/// only ever show the URL with the API key masked.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderHandle {
    network: Network,
    mnemonic: String,
    gateway_url: Url,
}

impl ProviderHandle {
    pub fn hd_wallet(network: Network, secrets: &Secrets) -> Result<Self, ConfigError> {
        let gateway_url = network.gateway_url(&secrets.infura_api_key)?;

        Ok(Self {
            network,
            mnemonic: secrets.mnemonic.clone(),
            gateway_url,
        })
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn gateway_url(&self) -> &Url {
        &self.gateway_url
    }

    pub fn redacted_url(&self) -> String {
        format!("{}{}", self.network.gateway_base_url(), REDACTED)
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("network", &self.network)
            .field("mnemonic", &REDACTED)
            .field("gateway_url", &self.redacted_url())
            .finish()
    }
}

impl Serialize for ProviderHandle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("kind", "hd-wallet")?;
        map.serialize_entry("url", &self.redacted_url())?;
        map.end()
    }
}

/// One entry under `networks` in the deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDefinition {
    pub provider: ProviderHandle,
    pub network_id: String,
    pub gas: u64,
    #[serde(rename = "gasPrice")]
    pub gas_price: u64,
}

impl NetworkDefinition {
    pub fn build(network: Network, secrets: &Secrets) -> Result<Self, ConfigError> {
        Ok(Self {
            provider: ProviderHandle::hd_wallet(network, secrets)?,
            network_id: network.network_id().to_string(),
            gas: network.gas(),
            gas_price: network.gas_price(),
        })
    }
}
