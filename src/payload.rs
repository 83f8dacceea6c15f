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

//! The self-contained ownership proof a prover hands to a verifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    backend::ProofData,
    contract_class::ContractClass,
    errors::{MembershipError, ParseError},
    hash::FieldHasher,
    key::VerificationKeyData,
    membership::VkMembershipProof,
    selector::FunctionSelector,
    Fr,
};

/// The claimed contract class. The private functions root is deliberately
/// absent: verifiers always recompute it from the membership proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedContractClass {
    #[serde(with = "crate::serde_hex::fr")]
    pub id: Fr,
    #[serde(with = "crate::serde_hex::fr")]
    pub artifact_hash: Fr,
    #[serde(with = "crate::serde_hex::fr")]
    pub public_bytecode_commitment: Fr,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofMetadata {
    pub generated_at: DateTime<Utc>,
    pub account_type: String,
    pub function_name: String,
}

/// Prover-side values carried for troubleshooting only. Nothing in here is
/// ever used to decide validity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_fr"
    )]
    pub private_functions_root: Option<Fr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_signature: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericOwnershipProof {
    pub contract_class: ClaimedContractClass,
    pub zk_proof: ProofData,
    pub verification_key: VerificationKeyData,
    pub vk_membership_proof: VkMembershipProof,
    #[serde(with = "crate::serde_hex::fr")]
    pub challenge: Fr,
    pub metadata: ProofMetadata,
    #[serde(rename = "_debug", default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

/// Inputs for assembling an ownership proof on the prover side.
#[derive(Clone, Debug)]
pub struct OwnershipClaim<'a> {
    pub contract_class: &'a ContractClass,
    pub selector: FunctionSelector,
    pub function_name: &'a str,
    pub account_type: &'a str,
    pub tree_height: usize,
}

impl GenericOwnershipProof {
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(|source| ParseError::Json { source })
    }

    pub fn from_json_slice(json: &[u8]) -> Result<Self, ParseError> {
        serde_json::from_slice(json).map_err(|source| ParseError::Json { source })
    }

    pub fn to_json_pretty(&self) -> Result<String, ParseError> {
        serde_json::to_string_pretty(self).map_err(|source| ParseError::Json { source })
    }

    /// Builds the payload for `claim`, deriving the class id and the
    /// membership proof from the full contract class.
    pub fn assemble<H: FieldHasher>(
        claim: OwnershipClaim<'_>,
        zk_proof: ProofData,
        verification_key: VerificationKeyData,
        challenge: Fr,
    ) -> Result<Self, MembershipError> {
        let class = claim.contract_class;
        let vk_membership_proof =
            class.vk_membership_proof::<H>(claim.selector, claim.tree_height)?;
        let private_functions_root = class.private_functions_root::<H>(claim.tree_height)?;

        Ok(Self {
            contract_class: ClaimedContractClass {
                id: class.id::<H>(claim.tree_height)?,
                artifact_hash: class.artifact_hash,
                public_bytecode_commitment: class.public_bytecode_commitment,
            },
            zk_proof,
            verification_key,
            vk_membership_proof,
            challenge,
            metadata: ProofMetadata {
                generated_at: Utc::now(),
                account_type: claim.account_type.to_string(),
                function_name: claim.function_name.to_string(),
            },
            debug: Some(DebugInfo {
                private_functions_root: Some(private_functions_root),
                function_signature: None,
            }),
        })
    }
}

mod optional_fr {
    use crate::Fr;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Fr>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => crate::serde_hex::fr::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Fr>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "crate::serde_hex::fr")] Fr);

        Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(value)| value))
    }
}
