// Copyright 2022 Aztec
// Copyright 2025 Horizen Labs, Inc.
// SPDX-License-Identifier: Apache-2.0 or MIT

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    backend::VerifierTarget,
    constants::{
        DEFAULT_EXPECTED_FUNCTION_NAME, DEFAULT_EXPECTED_FUNCTION_SIGNATURE, FUNCTION_TREE_HEIGHT,
    },
    errors::ConfigError,
    registry::AccountTypeRegistry,
    selector::FunctionSelector,
};

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "VKM_CONFIG";
/// Environment variable overriding the `bb` binary.
pub const BB_BINARY_ENV: &str = "BB_BINARY";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifierConfig {
    /// Function whose verification key must be proven to be in the class.
    pub expected_function_name: String,
    /// When set, the selector in the membership proof must equal it. Defaults
    /// to the selector of `verify_private_authwit(Field)`; a config naming
    /// another function sets it too, or `null` to check the name only.
    pub expected_selector: Option<FunctionSelector>,
    pub tree_height: usize,
    pub verifier_target: VerifierTarget,
    pub known_account_types: AccountTypeRegistry,
    pub bb: BbConfig,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            expected_function_name: DEFAULT_EXPECTED_FUNCTION_NAME.to_string(),
            expected_selector: Some(FunctionSelector::from_signature(
                DEFAULT_EXPECTED_FUNCTION_SIGNATURE,
            )),
            tree_height: FUNCTION_TREE_HEIGHT,
            verifier_target: VerifierTarget::default(),
            known_account_types: AccountTypeRegistry::default(),
            bb: BbConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BbConfig {
    pub binary: PathBuf,
    /// Trusted verification key file. Without it the backend verifies against
    /// the key shipped in the payload, which is then bound to the class only
    /// through its hash in the membership proof.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_key: Option<PathBuf>,
}

impl Default for BbConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("bb"),
            verification_key: None,
        }
    }
}

impl VerifierConfig {
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Loads the file named by `VKM_CONFIG` (defaults otherwise) and applies
    /// the `BB_BINARY` override.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                debug!(path = ?path, "loading verifier config");
                Self::from_file(Path::new(&path))?
            }
            None => Self::default(),
        };
        if let Some(binary) = std::env::var_os(BB_BINARY_ENV) {
            config.bb.binary = PathBuf::from(binary);
        }
        Ok(config)
    }
}
