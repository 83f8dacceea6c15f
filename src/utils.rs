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

use alloc::{format, string::String};

use crate::{constants::FIELD_ELEMENT_SIZE, errors::FieldError, Fr, U256};
use ark_ff::PrimeField;

pub(crate) trait IntoU256 {
    fn into_u256(self) -> U256;
}

impl IntoU256 for &[u8; 32] {
    fn into_u256(self) -> U256 {
        let mut rchunks_iter = self.rchunks_exact(8);
        let limbs: [_; 4] = core::array::from_fn(|_| {
            let mut limb = [0u8; 8];
            if let Some(chunk) = rchunks_iter.next() {
                limb.copy_from_slice(chunk);
            }
            u64::from_be_bytes(limb)
        });
        debug_assert!(rchunks_iter.remainder().is_empty());

        U256::new(limbs)
    }
}

impl IntoU256 for [u8; 32] {
    fn into_u256(self) -> U256 {
        (&self).into_u256()
    }
}

pub trait IntoBEBytes32 {
    fn into_be_bytes32(self) -> [u8; 32];
}

impl IntoBEBytes32 for U256 {
    fn into_be_bytes32(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }
}

impl IntoBEBytes32 for Fr {
    fn into_be_bytes32(self) -> [u8; 32] {
        self.into_bigint().into_be_bytes32()
    }
}

/// Reads a canonical field element from 32 big-endian bytes. Values not
/// below the modulus are rejected rather than reduced.
pub fn read_fr(data: &[u8]) -> Result<Fr, FieldError> {
    let bytes = <&[u8; FIELD_ELEMENT_SIZE]>::try_from(data).map_err(|_| {
        FieldError::InvalidSliceLength {
            expected_length: FIELD_ELEMENT_SIZE,
            actual_length: data.len(),
        }
    })?;

    Fr::from_bigint(bytes.into_u256()).ok_or(FieldError::NotMember)
}

/// Parses a `0x`-prefixed (or bare) hex string of at most 64 digits into a
/// canonical field element.
pub fn read_fr_hex(value: &str) -> Result<Fr, FieldError> {
    let digits = strip_hex_prefix(value);
    if digits.is_empty() {
        return Err(FieldError::InvalidHex {
            message: "empty string".into(),
        });
    }
    if digits.len() > 2 * FIELD_ELEMENT_SIZE {
        return Err(FieldError::InvalidSliceLength {
            expected_length: FIELD_ELEMENT_SIZE,
            actual_length: (digits.len() + 1) / 2,
        });
    }

    let padded = format!("{digits:0>64}");
    let mut bytes = [0u8; FIELD_ELEMENT_SIZE];
    hex::decode_to_slice(padded, &mut bytes).map_err(|e| FieldError::InvalidHex {
        message: format!("{e}"),
    })?;

    read_fr(&bytes)
}

/// Decodes an arbitrary length hex string, with or without `0x`.
pub fn read_hex_bytes(value: &str) -> Result<alloc::vec::Vec<u8>, FieldError> {
    hex::decode(strip_hex_prefix(value)).map_err(|e| FieldError::InvalidHex {
        message: format!("{e}"),
    })
}

pub fn to_hex_string(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Renders a field element as `0x` followed by 64 hex digits.
pub fn fr_to_hex(value: &Fr) -> String {
    to_hex_string(&value.into_be_bytes32())
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
