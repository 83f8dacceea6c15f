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

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

pub mod constants;
pub mod contract_class;
pub mod errors;
pub mod hash;
pub mod key;
pub mod membership;
pub mod merkle;
mod params;
pub mod poseidon2;
pub mod registry;
pub mod selector;
mod types;
pub mod utils;

#[cfg(feature = "std")]
pub mod backend;
#[cfg(feature = "std")]
pub mod bb;
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
pub mod payload;
#[cfg(feature = "std")]
mod serde_hex;
#[cfg(feature = "std")]
pub mod verifier;

extern crate alloc;
extern crate core;

pub use contract_class::{
    compute_contract_class_id, compute_function_leaf_hash, ContractClass, FunctionLeafPreimage,
};
pub use hash::FieldHasher;
pub use key::VerificationKeyData;
pub use membership::{verify_vk_membership_and_compute_class_id, ClassIdComputation, VkMembershipProof};
pub use merkle::{compute_root_from_sibling_path, MerkleTree};
pub use poseidon2::Poseidon2;
pub use registry::AccountTypeRegistry;
pub use selector::FunctionSelector;
pub use types::*;

#[cfg(feature = "std")]
pub use backend::{ProofData, ProvingBackend, VerifierTarget, VerifyOptions};
#[cfg(feature = "std")]
pub use bb::BbCliBackend;
#[cfg(feature = "std")]
pub use config::VerifierConfig;
#[cfg(feature = "std")]
pub use payload::GenericOwnershipProof;
#[cfg(feature = "std")]
pub use verifier::{OwnershipVerifier, VerificationDetails, VerificationResult};
