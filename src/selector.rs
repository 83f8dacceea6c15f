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

use core::{fmt, str::FromStr};

use crate::{
    constants::FUNCTION_SELECTOR_SIZE,
    errors::FieldError,
    poseidon2::Poseidon2,
    utils::{read_hex_bytes, IntoBEBytes32},
    Fr,
};
use ark_ff::PrimeField;

/// Identifies a contract function by its name and signature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionSelector(pub u32);

impl FunctionSelector {
    /// Derives the selector of a signature such as `verify_private_authwit(Field)`:
    /// the trailing four bytes of the Poseidon2 hash of the signature bytes.
    pub fn from_signature(signature: &str) -> Self {
        let digest = Poseidon2::hash_bytes(signature.as_bytes()).into_be_bytes32();
        let mut selector = [0u8; FUNCTION_SELECTOR_SIZE];
        selector.copy_from_slice(&digest[32 - FUNCTION_SELECTOR_SIZE..]);
        Self(u32::from_be_bytes(selector))
    }

    pub fn to_field(self) -> Fr {
        Fr::from(self.0)
    }

    pub fn from_field(value: &Fr) -> Result<Self, FieldError> {
        let bigint = value.into_bigint();
        if bigint.0[1..].iter().any(|limb| *limb != 0) || bigint.0[0] > u64::from(u32::MAX) {
            return Err(FieldError::SelectorOverflow);
        }
        Ok(Self(bigint.0[0] as u32))
    }
}

impl From<u32> for FunctionSelector {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for FunctionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl FromStr for FunctionSelector {
    type Err = FieldError;

    /// Accepts the 4 byte form (`0x9e0ee5e5`) as well as a full width field
    /// element whose value fits in 32 bits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = read_hex_bytes(s)?;
        let (high, low) = bytes.split_at(bytes.len().saturating_sub(FUNCTION_SELECTOR_SIZE));
        if high.iter().any(|byte| *byte != 0) {
            return Err(FieldError::SelectorOverflow);
        }
        let mut selector = [0u8; FUNCTION_SELECTOR_SIZE];
        selector[FUNCTION_SELECTOR_SIZE - low.len()..].copy_from_slice(low);
        Ok(Self(u32::from_be_bytes(selector)))
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for FunctionSelector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for FunctionSelector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
