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

use alloc::vec::Vec;

use crate::{
    constants::FIELD_ELEMENT_SIZE,
    errors::FieldError,
    hash::FieldHasher,
    utils::{read_fr, IntoBEBytes32},
    Fr,
};

/// A verification key in its field element form, along with the hash that is
/// committed to in the private functions tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct VerificationKeyData {
    #[cfg_attr(feature = "std", serde(with = "crate::serde_hex::fr_vec", default))]
    pub fields: Vec<Fr>,
    #[cfg_attr(feature = "std", serde(with = "crate::serde_hex::fr"))]
    pub hash: Fr,
}

impl VerificationKeyData {
    pub fn from_fields<H: FieldHasher>(fields: Vec<Fr>) -> Self {
        let hash = compute_vk_hash::<H>(&fields);
        Self { fields, hash }
    }

    /// Splits a serialized key, as produced by the proving backend, into
    /// 32 byte big-endian field elements.
    pub fn from_bytes<H: FieldHasher>(raw_vk: &[u8]) -> Result<Self, FieldError> {
        if raw_vk.is_empty() || raw_vk.len() % FIELD_ELEMENT_SIZE != 0 {
            return Err(FieldError::InvalidSliceLength {
                actual_length: raw_vk.len(),
                expected_length: raw_vk.len().div_ceil(FIELD_ELEMENT_SIZE).max(1) * FIELD_ELEMENT_SIZE,
            });
        }

        let fields = raw_vk
            .chunks_exact(FIELD_ELEMENT_SIZE)
            .map(read_fr)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_fields::<H>(fields))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.fields
            .iter()
            .flat_map(|field| field.into_be_bytes32())
            .collect()
    }

    /// Checks the claimed hash against the fields. A key carrying no fields is
    /// identified by its hash alone and is accepted as is.
    pub fn is_consistent<H: FieldHasher>(&self) -> bool {
        self.fields.is_empty() || compute_vk_hash::<H>(&self.fields) == self.hash
    }
}

pub fn compute_vk_hash<H: FieldHasher>(fields: &[Fr]) -> Fr {
    H::hash(fields)
}
