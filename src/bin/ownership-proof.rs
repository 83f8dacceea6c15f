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

//! `ownership-proof` command line tool.
//!
//! ```text
//! ownership-proof generate <account-type> <prover-input.json> [out-file]
//! ownership-proof verify <payload-file> [expected-challenge]
//! ```
//!
//! `verify` hands `bb` the key pinned in `bb.verificationKey` of the config.
//! Without one it falls back to the key carried by the payload, which is then
//! tied to the contract class only through its hash in the membership proof.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vk_membership_verifier::{
    payload::OwnershipClaim, utils::fr_to_hex, utils::read_fr_hex, BbCliBackend, ContractClass,
    Fr, FunctionLeafPreimage, FunctionSelector, GenericOwnershipProof, OwnershipVerifier,
    Poseidon2, ProvingBackend, VerificationKeyData, VerifierConfig,
};

const USAGE: &str = "usage:
  ownership-proof generate <account-type> <prover-input.json> [out-file]
  ownership-proof verify <payload-file> [expected-challenge]";

const DEFAULT_OUT_FILE: &str = "ownership-proof.json";

/// What the prover knows about its contract and circuit. Circuit paths are
/// resolved against the directory of the input file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProverInput {
    artifact_hash: String,
    public_bytecode_commitment: String,
    private_functions: Vec<PrivateFunctionInput>,
    function: FunctionInput,
    challenge: String,
    circuit: CircuitInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrivateFunctionInput {
    #[serde(default)]
    selector: Option<FunctionSelector>,
    #[serde(default)]
    signature: Option<String>,
    vk_hash: String,
}

#[derive(Debug, Deserialize)]
struct FunctionInput {
    name: String,
    signature: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CircuitInput {
    bytecode: PathBuf,
    witness: PathBuf,
    #[serde(default)]
    verification_key: Option<PathBuf>,
}

impl PrivateFunctionInput {
    fn preimage(&self) -> Result<FunctionLeafPreimage> {
        let selector = match (self.selector, &self.signature) {
            (Some(selector), _) => selector,
            (None, Some(signature)) => FunctionSelector::from_signature(signature),
            (None, None) => bail!("private function needs a selector or a signature"),
        };
        let vk_hash = read_fr_hex(&self.vk_hash)
            .with_context(|| format!("invalid vkHash of function {selector}"))?;
        Ok(FunctionLeafPreimage::new(selector, vk_hash))
    }
}

impl ProverInput {
    fn contract_class(&self) -> Result<ContractClass> {
        let private_functions = self
            .private_functions
            .iter()
            .map(PrivateFunctionInput::preimage)
            .collect::<Result<Vec<_>>>()?;
        Ok(ContractClass::new(
            read_fr_hex(&self.artifact_hash).context("invalid artifactHash")?,
            private_functions,
            read_fr_hex(&self.public_bytecode_commitment)
                .context("invalid publicBytecodeCommitment")?,
        ))
    }

    fn challenge(&self) -> Result<Fr> {
        read_fr_hex(&self.challenge).context("invalid challenge")
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))
}

async fn generate(account_type: &str, input_path: &Path, out_file: Option<PathBuf>) -> Result<()> {
    let config = VerifierConfig::from_env()?;
    let input: ProverInput = serde_json::from_slice(&read_file(input_path).await?)
        .with_context(|| format!("malformed prover input {}", input_path.display()))?;
    let base = input_path.parent().unwrap_or(Path::new("."));

    let class = input.contract_class()?;
    let challenge = input.challenge()?;
    let selector = FunctionSelector::from_signature(&input.function.signature);
    let expected_vk_hash = class
        .private_functions
        .iter()
        .find(|function| function.selector == selector)
        .map(|function| function.vk_hash)
        .with_context(|| format!("`{}` is not a private function of the class", input.function.signature))?;

    let bytecode = read_file(&base.join(&input.circuit.bytecode)).await?;
    let witness = read_file(&base.join(&input.circuit.witness)).await?;
    let mut backend = BbCliBackend::new(config.bb.binary.clone()).with_circuit(bytecode.clone());
    if let Some(vk_path) = &input.circuit.verification_key {
        backend = backend.with_verification_key(read_file(&base.join(vk_path)).await?);
    }

    info!(function = %input.function.name, %selector, "generating proof");
    let zk_proof = backend.generate_proof(&bytecode, &witness).await?;
    let verification_key = VerificationKeyData::from_bytes::<Poseidon2>(&backend.verification_key().await?)
        .context("backend returned a malformed verification key")?;
    if verification_key.hash != expected_vk_hash {
        bail!(
            "circuit verification key {} does not match {} registered for {selector}",
            fr_to_hex(&verification_key.hash),
            fr_to_hex(&expected_vk_hash)
        );
    }

    let mut payload = GenericOwnershipProof::assemble::<Poseidon2>(
        OwnershipClaim {
            contract_class: &class,
            selector,
            function_name: &input.function.name,
            account_type,
            tree_height: config.tree_height,
        },
        zk_proof,
        verification_key,
        challenge,
    )?;
    if let Some(debug) = payload.debug.as_mut() {
        debug.function_signature = Some(input.function.signature.clone());
    }

    let out = out_file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_FILE));
    tokio::fs::write(&out, payload.to_json_pretty()?)
        .await
        .with_context(|| format!("cannot write {}", out.display()))?;
    info!(
        path = %out.display(),
        class_id = %fr_to_hex(&payload.contract_class.id),
        "ownership proof written"
    );
    Ok(())
}

/// The key `bb` verifies against: the pinned trusted key if configured,
/// otherwise the payload's own key.
async fn backend_verification_key(
    config: &VerifierConfig,
    proof: &GenericOwnershipProof,
) -> Result<Vec<u8>> {
    match &config.bb.verification_key {
        Some(path) => read_file(path).await,
        None => {
            info!("no trusted verification key configured, using the payload key");
            Ok(proof.verification_key.to_bytes())
        }
    }
}

async fn verify(payload_path: &Path, expected_challenge: Option<&str>) -> Result<bool> {
    let config = VerifierConfig::from_env()?;
    let expected_challenge = expected_challenge
        .map(read_fr_hex)
        .transpose()
        .context("invalid expected challenge")?;
    let proof = GenericOwnershipProof::from_json_slice(&read_file(payload_path).await?)
        .with_context(|| format!("malformed ownership proof {}", payload_path.display()))?;

    let backend = BbCliBackend::new(config.bb.binary.clone())
        .with_verification_key(backend_verification_key(&config, &proof).await?);
    let verifier = OwnershipVerifier::<_, Poseidon2>::new(backend, config);
    let result = verifier.verify(&proof, expected_challenge).await?;

    println!("{result}");
    Ok(result.is_valid)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = match args.first().map(String::as_str) {
        Some("generate") if (3..=4).contains(&args.len()) => {
            generate(&args[1], Path::new(&args[2]), args.get(3).map(PathBuf::from))
                .await
                .map(|()| true)
        }
        Some("verify") if (2..=3).contains(&args.len()) => {
            verify(Path::new(&args[1]), args.get(2).map(String::as_str)).await
        }
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
