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

//! End to end verification of a `GenericOwnershipProof`.
//!
//! Steps are independent and every one of them is always reported. A failed
//! step is a `false` in the result, never an error: errors are reserved for
//! payloads that are not even structurally sound.

use core::{fmt, marker::PhantomData};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    backend::{ProvingBackend, VerifyOptions},
    config::VerifierConfig,
    errors::VerifyError,
    hash::FieldHasher,
    key::VerificationKeyData,
    membership::verify_vk_membership_and_compute_class_id,
    payload::GenericOwnershipProof,
    poseidon2::Poseidon2,
    utils::fr_to_hex,
    Fr,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDetails {
    pub vk_membership_valid: bool,
    pub contract_class_id_valid: bool,
    pub proof_valid: bool,
    pub selector_valid: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub passed: bool,
    pub message: String,
}

impl StepOutcome {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipOutcome {
    pub class_id: StepOutcome,
    pub vk_binding: StepOutcome,
    pub claimed_class_id: String,
    pub computed_class_id: String,
    pub computed_private_functions_root: String,
}

impl MembershipOutcome {
    pub fn passed(&self) -> bool {
        self.class_id.passed && self.vk_binding.passed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProofStatus {
    Verified,
    /// The backend checked the proof and found it invalid.
    Rejected,
    /// Replayed or stale proof; the backend was not consulted.
    ChallengeMismatch,
    /// The backend is bound to a key other than the one in the class.
    VerificationKeyMismatch,
    /// The backend could not check the proof at all.
    Unverifiable,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProofOutcome {
    pub status: ProofStatus,
    pub message: String,
}

impl ProofOutcome {
    fn new(status: ProofStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == ProofStatus::Verified
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTypeOutcome {
    pub identified: Option<String>,
    pub claimed: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub is_valid: bool,
    pub contract_class_id: String,
    pub message: String,
    pub details: VerificationDetails,
    pub membership: MembershipOutcome,
    pub selector: StepOutcome,
    pub proof: ProofOutcome,
    pub account_type: AccountTypeOutcome,
}

/// Verifies ownership proofs against an injected proving backend.
pub struct OwnershipVerifier<B, H = Poseidon2> {
    backend: B,
    config: VerifierConfig,
    _hasher: PhantomData<H>,
}

impl<B: ProvingBackend, H: FieldHasher> OwnershipVerifier<B, H> {
    pub fn new(backend: B, config: VerifierConfig) -> Self {
        Self {
            backend,
            config,
            _hasher: PhantomData,
        }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn verify_json(
        &self,
        json: &str,
        expected_challenge: Option<Fr>,
    ) -> Result<VerificationResult, VerifyError> {
        let proof = GenericOwnershipProof::from_json(json)
            .map_err(|source| VerifyError::Parse { source })?;
        self.verify(&proof, expected_challenge).await
    }

    #[instrument(skip_all, fields(class_id = %fr_to_hex(&proof.contract_class.id)))]
    pub async fn verify(
        &self,
        proof: &GenericOwnershipProof,
        expected_challenge: Option<Fr>,
    ) -> Result<VerificationResult, VerifyError> {
        proof
            .vk_membership_proof
            .check_height(self.config.tree_height)
            .map_err(|source| VerifyError::Malformed { source })?;

        let membership = self.check_vk_membership(proof)?;
        let selector = self.check_selector(proof);
        let zk_proof = self.check_proof(proof, expected_challenge).await;
        let account_type = self.identify_account_type(proof);

        let details = VerificationDetails {
            vk_membership_valid: membership.passed(),
            contract_class_id_valid: membership.class_id.passed,
            proof_valid: zk_proof.passed(),
            selector_valid: selector.passed,
        };
        let is_valid = details.vk_membership_valid && details.selector_valid && details.proof_valid;
        let contract_class_id = fr_to_hex(&proof.contract_class.id);
        let message = summary(is_valid, &contract_class_id, &details);

        if is_valid {
            info!(account_type = ?account_type.identified, "ownership proof verified");
        } else {
            warn!(?details, "ownership proof rejected");
        }

        Ok(VerificationResult {
            is_valid,
            contract_class_id,
            message,
            details,
            membership,
            selector,
            proof: zk_proof,
            account_type,
        })
    }

    fn check_vk_membership(
        &self,
        proof: &GenericOwnershipProof,
    ) -> Result<MembershipOutcome, VerifyError> {
        let claimed = &proof.contract_class;
        let computed = verify_vk_membership_and_compute_class_id::<H>(
            &proof.vk_membership_proof,
            claimed.artifact_hash,
            claimed.public_bytecode_commitment,
        )
        .map_err(|source| VerifyError::Malformed { source })?;

        let claimed_class_id = fr_to_hex(&claimed.id);
        let computed_class_id = fr_to_hex(&computed.computed_class_id);
        let computed_root = fr_to_hex(&computed.computed_private_functions_root);

        let class_id = if computed.computed_class_id == claimed.id {
            StepOutcome::pass(format!("recomputed contract class id {computed_class_id}"))
        } else {
            warn!(%computed_class_id, %claimed_class_id, computed_root = %computed_root, "contract class id mismatch");
            if let Some(root) = proof.debug.as_ref().and_then(|debug| debug.private_functions_root) {
                debug!(
                    prover_root = %fr_to_hex(&root),
                    roots_match = root == computed.computed_private_functions_root,
                    "prover supplied private functions root"
                );
            }
            StepOutcome::fail(format!(
                "computed contract class id {computed_class_id} does not match claimed {claimed_class_id}"
            ))
        };

        let leaf_vk_hash = proof.vk_membership_proof.leaf_preimage.vk_hash;
        let vk_binding = if leaf_vk_hash != proof.verification_key.hash {
            StepOutcome::fail(format!(
                "membership proof is for key {} but the payload carries key {}",
                fr_to_hex(&leaf_vk_hash),
                fr_to_hex(&proof.verification_key.hash)
            ))
        } else if !proof.verification_key.is_consistent::<H>() {
            StepOutcome::fail("verification key fields do not hash to the claimed key hash")
        } else {
            StepOutcome::pass(format!(
                "verification key {} is a leaf of the private functions tree",
                fr_to_hex(&leaf_vk_hash)
            ))
        };

        Ok(MembershipOutcome {
            class_id,
            vk_binding,
            claimed_class_id,
            computed_class_id,
            computed_private_functions_root: computed_root,
        })
    }

    fn check_selector(&self, proof: &GenericOwnershipProof) -> StepOutcome {
        let function_name = &proof.metadata.function_name;
        let expected_name = &self.config.expected_function_name;
        if function_name != expected_name {
            return StepOutcome::fail(format!(
                "proof is for function `{function_name}`, expected `{expected_name}`"
            ));
        }

        let selector = proof.vk_membership_proof.leaf_preimage.selector;
        match self.config.expected_selector {
            Some(expected) if expected != selector => StepOutcome::fail(format!(
                "membership proof is for selector {selector}, expected {expected}"
            )),
            _ => StepOutcome::pass(format!("function `{function_name}` ({selector})")),
        }
    }

    async fn check_proof(
        &self,
        proof: &GenericOwnershipProof,
        expected_challenge: Option<Fr>,
    ) -> ProofOutcome {
        if let Some(expected) = expected_challenge {
            if expected != proof.challenge {
                return ProofOutcome::new(
                    ProofStatus::ChallengeMismatch,
                    format!(
                        "challenge {} does not match expected {}",
                        fr_to_hex(&proof.challenge),
                        fr_to_hex(&expected)
                    ),
                );
            }
        }

        let backend_vk = match self.backend.verification_key().await {
            Ok(raw_vk) => VerificationKeyData::from_bytes::<H>(&raw_vk),
            Err(e) => return ProofOutcome::new(ProofStatus::Unverifiable, e.to_string()),
        };
        match backend_vk {
            Ok(vk) if vk.hash == proof.verification_key.hash => {}
            Ok(vk) => {
                return ProofOutcome::new(
                    ProofStatus::VerificationKeyMismatch,
                    format!(
                        "backend verifies against key {} instead of {}",
                        fr_to_hex(&vk.hash),
                        fr_to_hex(&proof.verification_key.hash)
                    ),
                )
            }
            Err(e) => {
                return ProofOutcome::new(
                    ProofStatus::Unverifiable,
                    format!("backend verification key is malformed: {e}"),
                )
            }
        }

        let options = VerifyOptions {
            verifier_target: self.config.verifier_target,
        };
        debug!(verifier_target = %options.verifier_target, public_inputs = proof.zk_proof.public_inputs.len(), "verifying zk proof");
        match self.backend.verify_proof(&proof.zk_proof, options).await {
            Ok(true) => ProofOutcome::new(ProofStatus::Verified, "zero-knowledge proof verified"),
            Ok(false) => ProofOutcome::new(ProofStatus::Rejected, "zero-knowledge proof rejected"),
            Err(e) => {
                warn!(error = %e, "proving backend failed");
                ProofOutcome::new(ProofStatus::Unverifiable, format!("proof could not be verified: {e}"))
            }
        }
    }

    fn identify_account_type(&self, proof: &GenericOwnershipProof) -> AccountTypeOutcome {
        AccountTypeOutcome {
            identified: self
                .config
                .known_account_types
                .identify(&proof.vk_membership_proof.leaf_preimage.vk_hash)
                .map(str::to_string),
            claimed: proof.metadata.account_type.clone(),
        }
    }
}

fn summary(is_valid: bool, contract_class_id: &str, details: &VerificationDetails) -> String {
    if is_valid {
        return format!("ownership of contract class {contract_class_id} proven");
    }
    let failed: Vec<&str> = [
        (details.vk_membership_valid, "vk membership"),
        (details.selector_valid, "function selector"),
        (details.proof_valid, "zk proof"),
    ]
    .into_iter()
    .filter_map(|(passed, name)| (!passed).then_some(name))
    .collect();
    format!("failed checks: {}", failed.join(", "))
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Contract class {}", self.contract_class_id)?;
        writeln!(
            f,
            "  [{}] 1. VK membership: {}",
            verdict(self.membership.passed()),
            self.membership.vk_binding.message
        )?;
        writeln!(
            f,
            "         contract class id: {}",
            self.membership.class_id.message
        )?;
        writeln!(
            f,
            "         private functions root: {}",
            self.membership.computed_private_functions_root
        )?;
        writeln!(
            f,
            "  [{}] 2. Function selector: {}",
            verdict(self.selector.passed),
            self.selector.message
        )?;
        writeln!(
            f,
            "  [{}] 3. ZK proof: {}",
            verdict(self.proof.passed()),
            self.proof.message
        )?;
        writeln!(
            f,
            "  [INFO] 4. Account type: {} (claimed `{}`)",
            self.account_type.identified.as_deref().unwrap_or("unknown"),
            self.account_type.claimed
        )?;
        write!(
            f,
            "{}: {}",
            if self.is_valid { "VALID" } else { "INVALID" },
            self.message
        )
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        backend::ProofData,
        errors::{BackendError, MembershipError},
        constants::FUNCTION_TREE_HEIGHT,
        payload::fixtures::{contract_class, ownership_proof, vk_fields},
        registry::AccountTypeRegistry,
        selector::FunctionSelector,
    };
    use ark_ff::{AdditiveGroup, Field};
    use rstest::{fixture, rstest};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeBackend {
        verdict: Result<bool, &'static str>,
        vk: Vec<u8>,
        calls: AtomicUsize,
    }

    impl FakeBackend {
        fn answering(verdict: Result<bool, &'static str>) -> Self {
            Self {
                verdict,
                vk: VerificationKeyData::from_fields::<Poseidon2>(vk_fields()).to_bytes(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ProvingBackend for FakeBackend {
        async fn generate_proof(&self, _: &[u8], _: &[u8]) -> Result<ProofData, BackendError> {
            Err(BackendError::Unconfigured { what: "a circuit" })
        }

        async fn verify_proof(&self, _: &ProofData, _: VerifyOptions) -> Result<bool, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.verdict.map_err(|message| BackendError::MalformedOutput {
                message: message.to_string(),
            })
        }

        async fn verification_key(&self) -> Result<Vec<u8>, BackendError> {
            Ok(self.vk.clone())
        }
    }

    #[fixture]
    fn payload() -> GenericOwnershipProof {
        ownership_proof()
    }

    fn verifier(verdict: Result<bool, &'static str>) -> OwnershipVerifier<FakeBackend> {
        OwnershipVerifier::new(FakeBackend::answering(verdict), VerifierConfig::default())
    }

    #[rstest]
    #[tokio::test]
    async fn accept_a_valid_ownership_proof(payload: GenericOwnershipProof) {
        let verifier = verifier(Ok(true));
        let result = verifier.verify(&payload, Some(payload.challenge)).await.unwrap();

        assert!(result.is_valid, "{result}");
        assert_eq!(
            result.details,
            VerificationDetails {
                vk_membership_valid: true,
                contract_class_id_valid: true,
                proof_valid: true,
                selector_valid: true,
            }
        );
        assert_eq!(result.contract_class_id, fr_to_hex(&payload.contract_class.id));
        assert_eq!(verifier.backend().calls(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn verify_without_an_expected_challenge(payload: GenericOwnershipProof) {
        let result = verifier(Ok(true)).verify(&payload, None).await.unwrap();
        assert!(result.is_valid);
    }

    #[rstest]
    #[tokio::test]
    async fn accept_a_payload_straight_from_json(payload: GenericOwnershipProof) {
        let json = payload.to_json_pretty().unwrap();
        let result = verifier(Ok(true)).verify_json(&json, None).await.unwrap();
        assert!(result.is_valid);
    }

    #[rstest]
    #[tokio::test]
    async fn identify_known_account_types(payload: GenericOwnershipProof) {
        let config = VerifierConfig {
            known_account_types: AccountTypeRegistry::new()
                .with_entry(payload.verification_key.hash, "schnorr"),
            ..VerifierConfig::default()
        };
        let verifier = OwnershipVerifier::<_, Poseidon2>::new(FakeBackend::answering(Ok(true)), config);
        let result = verifier.verify(&payload, None).await.unwrap();

        assert_eq!(result.account_type.identified.as_deref(), Some("schnorr"));
        assert_eq!(result.account_type.claimed, "schnorr");
    }

    #[rstest]
    #[tokio::test]
    async fn not_require_a_known_account_type(payload: GenericOwnershipProof) {
        let result = verifier(Ok(true)).verify(&payload, None).await.unwrap();

        assert!(result.is_valid);
        assert_eq!(result.account_type.identified, None);
    }

    #[rstest]
    #[tokio::test]
    async fn report_every_step(payload: GenericOwnershipProof) {
        let report = verifier(Ok(true)).verify(&payload, None).await.unwrap().to_string();

        assert!(report.contains("[PASS] 1. VK membership"));
        assert!(report.contains("[PASS] 2. Function selector"));
        assert!(report.contains("[PASS] 3. ZK proof"));
        assert!(report.contains("[INFO] 4. Account type: unknown"));
        assert!(report.ends_with(&format!(
            "VALID: ownership of contract class {} proven",
            fr_to_hex(&payload.contract_class.id)
        )));
    }

    mod reject {
        use super::*;

        #[rstest]
        #[tokio::test]
        async fn a_proof_for_another_function(mut payload: GenericOwnershipProof) {
            payload.metadata.function_name = "transfer".into();
            let result = verifier(Ok(true)).verify(&payload, None).await.unwrap();

            assert!(!result.is_valid);
            assert!(!result.details.selector_valid);
            assert!(result.details.vk_membership_valid);
            assert!(result.details.proof_valid);
            assert!(result.to_string().contains("[FAIL] 2. Function selector"));
        }

        #[rstest]
        #[tokio::test]
        async fn a_membership_proof_for_another_selector(payload: GenericOwnershipProof) {
            let config = VerifierConfig {
                expected_selector: Some(FunctionSelector::from_signature("entrypoint((Field),(Field))")),
                ..VerifierConfig::default()
            };
            let verifier = OwnershipVerifier::<_, Poseidon2>::new(FakeBackend::answering(Ok(true)), config);
            let result = verifier.verify(&payload, None).await.unwrap();

            assert!(!result.details.selector_valid);
            assert!(result.details.vk_membership_valid);
            assert!(!result.is_valid);
        }

        #[rstest]
        #[tokio::test]
        async fn a_membership_proof_for_another_function_by_default(mut payload: GenericOwnershipProof) {
            payload.vk_membership_proof = contract_class()
                .vk_membership_proof::<Poseidon2>(
                    FunctionSelector::from_signature("transfer(Field)"),
                    FUNCTION_TREE_HEIGHT,
                )
                .unwrap();
            let result = verifier(Ok(true)).verify(&payload, None).await.unwrap();

            assert_eq!(payload.metadata.function_name, "verify_private_authwit");
            assert!(!result.details.selector_valid);
            assert!(result.details.contract_class_id_valid);
            assert!(!result.is_valid);
            assert!(result.selector.message.contains("0xc7784917"));
        }

        #[rstest]
        #[tokio::test]
        async fn a_replayed_challenge_without_calling_the_backend(payload: GenericOwnershipProof) {
            let verifier = verifier(Ok(true));
            let result = verifier
                .verify(&payload, Some(payload.challenge + Fr::ONE))
                .await
                .unwrap();

            assert_eq!(result.proof.status, ProofStatus::ChallengeMismatch);
            assert!(!result.details.proof_valid);
            assert!(!result.is_valid);
            assert_eq!(verifier.backend().calls(), 0);
        }

        #[rstest]
        #[tokio::test]
        async fn a_proof_the_backend_rejects(payload: GenericOwnershipProof) {
            let result = verifier(Ok(false)).verify(&payload, None).await.unwrap();

            assert_eq!(result.proof.status, ProofStatus::Rejected);
            assert!(!result.is_valid);
            assert!(result.details.vk_membership_valid);
        }

        #[rstest]
        #[tokio::test]
        async fn a_proof_the_backend_cannot_parse_as_unverifiable(payload: GenericOwnershipProof) {
            let result = verifier(Err("garbage proof bytes"))
                .verify(&payload, None)
                .await
                .unwrap();

            assert_eq!(result.proof.status, ProofStatus::Unverifiable);
            assert!(result.proof.message.contains("garbage proof bytes"));
            assert!(!result.is_valid);
        }

        #[rstest]
        #[tokio::test]
        async fn a_backend_bound_to_another_key(payload: GenericOwnershipProof) {
            let mut backend = FakeBackend::answering(Ok(true));
            backend.vk = VerificationKeyData::from_fields::<Poseidon2>(vec![Fr::ONE]).to_bytes();
            let verifier = OwnershipVerifier::<_, Poseidon2>::new(backend, VerifierConfig::default());
            let result = verifier.verify(&payload, None).await.unwrap();

            assert_eq!(result.proof.status, ProofStatus::VerificationKeyMismatch);
            assert_eq!(verifier.backend().calls(), 0);
        }

        #[rstest]
        #[tokio::test]
        async fn a_claimed_class_id_that_does_not_match(mut payload: GenericOwnershipProof) {
            let claimed = payload.contract_class.id + Fr::ONE;
            payload.contract_class.id = claimed;
            let result = verifier(Ok(true)).verify(&payload, None).await.unwrap();

            assert!(!result.details.contract_class_id_valid);
            assert!(!result.details.vk_membership_valid);
            assert!(!result.is_valid);
            assert_eq!(result.membership.claimed_class_id, fr_to_hex(&claimed));
            assert!(result.membership.class_id.message.contains(&fr_to_hex(&claimed)));
            assert!(result
                .membership
                .class_id
                .message
                .contains(&result.membership.computed_class_id));
        }

        #[rstest]
        #[tokio::test]
        async fn a_tampered_sibling_path(mut payload: GenericOwnershipProof) {
            payload.vk_membership_proof.sibling_path[0] += Fr::ONE;
            let result = verifier(Ok(true)).verify(&payload, None).await.unwrap();

            assert!(!result.details.contract_class_id_valid);
            assert!(!result.is_valid);
        }

        #[rstest]
        #[tokio::test]
        async fn a_verification_key_that_is_not_the_proven_leaf(mut payload: GenericOwnershipProof) {
            payload.vk_membership_proof = contract_class()
                .vk_membership_proof::<Poseidon2>(
                    FunctionSelector::from_signature("entrypoint((Field),(Field))"),
                    FUNCTION_TREE_HEIGHT,
                )
                .unwrap();

            let result = verifier(Ok(true)).verify(&payload, None).await.unwrap();

            assert!(result.details.contract_class_id_valid);
            assert!(!result.details.vk_membership_valid);
            assert!(!result.is_valid);
        }

        #[rstest]
        #[tokio::test]
        async fn verification_key_fields_that_do_not_hash_to_the_key(mut payload: GenericOwnershipProof) {
            payload.verification_key.fields[0] = Fr::ZERO;
            let result = verifier(Ok(true)).verify(&payload, None).await.unwrap();

            assert!(!result.membership.vk_binding.passed);
            assert!(!result.is_valid);
        }

        #[rstest]
        #[tokio::test]
        async fn a_sibling_path_of_the_wrong_height_as_malformed(mut payload: GenericOwnershipProof) {
            payload.vk_membership_proof.sibling_path.pop();
            let verifier = verifier(Ok(true));
            let error = verifier.verify(&payload, None).await.unwrap_err();

            assert!(matches!(
                error,
                VerifyError::Malformed {
                    source: MembershipError::SiblingPathLength {
                        expected: 7,
                        actual: 6
                    }
                }
            ));
            assert_eq!(verifier.backend().calls(), 0);
        }

        #[rstest]
        #[tokio::test]
        async fn a_leaf_index_beyond_the_tree_as_malformed(mut payload: GenericOwnershipProof) {
            payload.vk_membership_proof.leaf_index = 128;
            let error = verifier(Ok(true)).verify(&payload, None).await.unwrap_err();

            assert!(matches!(
                error,
                VerifyError::Malformed {
                    source: MembershipError::LeafIndexOutOfRange { .. }
                }
            ));
        }

        #[tokio::test]
        async fn unparseable_json() {
            let error = verifier(Ok(true))
                .verify_json("{ \"challenge\": \"0x01\" }", None)
                .await
                .unwrap_err();
            assert!(matches!(error, VerifyError::Parse { .. }));
        }
    }
}
