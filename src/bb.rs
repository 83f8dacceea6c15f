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

//! `ProvingBackend` implementation driving the barretenberg `bb` command line
//! tool. Inputs and outputs are exchanged through a scratch directory that is
//! removed once the call completes.

use std::{
    path::{Path, PathBuf},
    process::Output,
    sync::atomic::{AtomicU64, Ordering},
};

use tokio::process::Command;
use tracing::{debug, warn};

use crate::{
    backend::{ProofData, ProvingBackend, VerifierTarget, VerifyOptions},
    constants::FIELD_ELEMENT_SIZE,
    errors::BackendError,
    utils::{read_fr, IntoBEBytes32},
    Fr,
};

static SCRATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Debug)]
pub struct BbCliBackend {
    binary: PathBuf,
    circuit_bytecode: Option<Vec<u8>>,
    verification_key: Option<Vec<u8>>,
}

impl BbCliBackend {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            circuit_bytecode: None,
            verification_key: None,
        }
    }

    /// Binds the backend to a circuit; its key is derived on demand.
    pub fn with_circuit(mut self, bytecode: Vec<u8>) -> Self {
        self.circuit_bytecode = Some(bytecode);
        self
    }

    /// Binds the backend to an already serialized verification key.
    pub fn with_verification_key(mut self, vk: Vec<u8>) -> Self {
        self.verification_key = Some(vk);
        self
    }

    async fn run(&self, args: &[&str]) -> Result<Output, BackendError> {
        debug!(binary = %self.binary.display(), ?args, "invoking proving backend");
        Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|source| BackendError::Io { source })
    }

    async fn run_to_success(&self, args: &[&str]) -> Result<(), BackendError> {
        let output = self.run(args).await?;
        if output.status.success() {
            Ok(())
        } else {
            Err(process_error(&output))
        }
    }
}

impl ProvingBackend for BbCliBackend {
    async fn generate_proof(
        &self,
        circuit_bytecode: &[u8],
        witness: &[u8],
    ) -> Result<ProofData, BackendError> {
        let scratch = ScratchDir::create().await?;
        let bytecode_path = scratch.write("circuit.gz", circuit_bytecode).await?;
        let witness_path = scratch.write("witness.gz", witness).await?;
        let out = scratch.path();

        self.run_to_success(&[
            "prove",
            "--scheme",
            "ultra_honk",
            "-b",
            path_str(&bytecode_path)?,
            "-w",
            path_str(&witness_path)?,
            "-o",
            path_str(out)?,
        ])
        .await?;

        let proof = scratch.read("proof").await?;
        let public_inputs = read_fields(&scratch.read("public_inputs").await?)?;
        Ok(ProofData {
            proof,
            public_inputs,
        })
    }

    async fn verify_proof(
        &self,
        proof: &ProofData,
        options: VerifyOptions,
    ) -> Result<bool, BackendError> {
        let vk = self.verification_key().await?;
        let scratch = ScratchDir::create().await?;
        let vk_path = scratch.write("vk", &vk).await?;
        let proof_path = scratch.write("proof", &proof.proof).await?;
        let public_inputs_path = scratch
            .write("public_inputs", &write_fields(&proof.public_inputs))
            .await?;

        let output = self
            .run(&[
                "verify",
                "--scheme",
                "ultra_honk",
                "--oracle_hash",
                oracle_hash(options.verifier_target),
                "-k",
                path_str(&vk_path)?,
                "-p",
                path_str(&proof_path)?,
                "-i",
                path_str(&public_inputs_path)?,
            ])
            .await?;

        // bb exits with 1 when it rejects a proof it could parse.
        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => {
                debug!(stderr = %String::from_utf8_lossy(&output.stderr), "proof rejected by backend");
                Ok(false)
            }
            _ => Err(process_error(&output)),
        }
    }

    async fn verification_key(&self) -> Result<Vec<u8>, BackendError> {
        if let Some(vk) = &self.verification_key {
            return Ok(vk.clone());
        }
        let bytecode = self
            .circuit_bytecode
            .as_ref()
            .ok_or(BackendError::Unconfigured {
                what: "a circuit or a verification key",
            })?;

        let scratch = ScratchDir::create().await?;
        let bytecode_path = scratch.write("circuit.gz", bytecode).await?;
        self.run_to_success(&[
            "write_vk",
            "--scheme",
            "ultra_honk",
            "-b",
            path_str(&bytecode_path)?,
            "-o",
            path_str(scratch.path())?,
        ])
        .await?;

        scratch.read("vk").await
    }
}

fn oracle_hash(target: VerifierTarget) -> &'static str {
    match target {
        VerifierTarget::Evm => "keccak",
        VerifierTarget::Starknet => "starknet",
        VerifierTarget::NoirRecursive | VerifierTarget::NoirRollup => "poseidon2",
    }
}

fn process_error(output: &Output) -> BackendError {
    BackendError::Process {
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

fn path_str(path: &Path) -> Result<&str, BackendError> {
    path.to_str().ok_or_else(|| BackendError::MalformedOutput {
        message: format!("non UTF-8 scratch path {}", path.display()),
    })
}

pub(crate) fn read_fields(bytes: &[u8]) -> Result<Vec<Fr>, BackendError> {
    if bytes.len() % FIELD_ELEMENT_SIZE != 0 {
        return Err(BackendError::MalformedOutput {
            message: format!("{} bytes is not a whole number of field elements", bytes.len()),
        });
    }
    bytes
        .chunks_exact(FIELD_ELEMENT_SIZE)
        .map(|chunk| {
            read_fr(chunk).map_err(|e| BackendError::MalformedOutput {
                message: e.to_string(),
            })
        })
        .collect()
}

pub(crate) fn write_fields(fields: &[Fr]) -> Vec<u8> {
    fields.iter().flat_map(|field| field.into_be_bytes32()).collect()
}

struct ScratchDir(PathBuf);

impl ScratchDir {
    async fn create() -> Result<Self, BackendError> {
        let path = std::env::temp_dir().join(format!(
            "vk-membership-{}-{}",
            std::process::id(),
            SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        tokio::fs::create_dir_all(&path)
            .await
            .map_err(|source| BackendError::Io { source })?;
        Ok(Self(path))
    }

    fn path(&self) -> &Path {
        &self.0
    }

    async fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf, BackendError> {
        let path = self.0.join(name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|source| BackendError::Io { source })?;
        Ok(path)
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>, BackendError> {
        tokio::fs::read(self.0.join(name))
            .await
            .map_err(|_| BackendError::MalformedOutput {
                message: format!("backend did not produce `{name}`"),
            })
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.0) {
            warn!(path = %self.0.display(), error = %e, "could not remove scratch directory");
        }
    }
}
