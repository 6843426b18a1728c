//! Solidity compiler settings

use serde::Serialize;

/// solc release contracts are compiled with.
pub const SOLC_VERSION: &str = "0.6.7";

/// `compilers` section of the deployment configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Compilers {
    pub solc: SolcSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolcSettings {
    /// Exact version fetched from solc-bin
    pub version: String,
    /// Use a locally installed docker image of `version` instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<SolcOptimization>,
}

impl Default for SolcSettings {
    fn default() -> Self {
        Self {
            version: SOLC_VERSION.to_string(),
            docker: None,
            settings: None,
        }
    }
}

impl SolcSettings {
    pub fn with_docker(mut self, docker: bool) -> Self {
        self.docker = Some(docker);
        self
    }

    pub fn with_optimizer(mut self, settings: SolcOptimization) -> Self {
        self.settings = Some(settings);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolcOptimization {
    pub optimizer: Optimizer,
    pub evm_version: String,
}

impl Default for SolcOptimization {
    fn default() -> Self {
        Self {
            optimizer: Optimizer::default(),
            evm_version: "byzantium".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Optimizer {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: 200,
        }
    }
}
