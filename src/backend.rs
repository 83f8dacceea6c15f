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

//! The proving system is an external collaborator: this crate never proves or
//! verifies anything itself, it only talks to a backend through
//! `ProvingBackend`.

use core::{fmt, future::Future};

use serde::{Deserialize, Serialize};

use crate::{errors::BackendError, Fr};

/// A proof as produced by the backend, together with its public inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofData {
    #[serde(with = "crate::serde_hex::bytes")]
    pub proof: Vec<u8>,
    #[serde(with = "crate::serde_hex::fr_vec")]
    pub public_inputs: Vec<Fr>,
}

/// Which verifier flavour the proof was produced for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerifierTarget {
    Evm,
    #[default]
    NoirRecursive,
    NoirRollup,
    Starknet,
}

impl VerifierTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifierTarget::Evm => "evm",
            VerifierTarget::NoirRecursive => "noir-recursive",
            VerifierTarget::NoirRollup => "noir-rollup",
            VerifierTarget::Starknet => "starknet",
        }
    }
}

impl fmt::Display for VerifierTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerifyOptions {
    pub verifier_target: VerifierTarget,
}

/// A proving backend bound to one circuit.
///
/// Calls are long running and may use a thread pool owned by the backend;
/// callers wanting a deadline wrap them in their own timeout. `verify_proof`
/// answers `Ok(false)` for a proof that is well formed but invalid and an
/// error when the input could not be checked at all.
pub trait ProvingBackend: Send + Sync {
    fn generate_proof(
        &self,
        circuit_bytecode: &[u8],
        witness: &[u8],
    ) -> impl Future<Output = Result<ProofData, BackendError>> + Send;

    fn verify_proof(
        &self,
        proof: &ProofData,
        options: VerifyOptions,
    ) -> impl Future<Output = Result<bool, BackendError>> + Send;

    /// The serialized verification key of the circuit the backend is bound to.
    fn verification_key(&self) -> impl Future<Output = Result<Vec<u8>, BackendError>> + Send;
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn name_verifier_targets_like_the_backend() {
        assert_eq!(VerifierTarget::default().to_string(), "noir-recursive");
        assert_eq!(
            serde_json::from_str::<VerifierTarget>(r#""noir-rollup""#).unwrap(),
            VerifierTarget::NoirRollup
        );
        assert_eq!(serde_json::to_string(&VerifierTarget::Evm).unwrap(), r#""evm""#);
    }
}
