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

// Domain separators, mirroring the protocol's generator indices.
pub const FUNCTION_LEAF_SEPARATOR: u32 = 11;
pub const CONTRACT_CLASS_ID_SEPARATOR: u32 = 51;

/// Height of the private functions tree of a contract class.
pub const FUNCTION_TREE_HEIGHT: usize = 7;
pub const MAX_PRIVATE_FUNCTIONS: usize = 1 << FUNCTION_TREE_HEIGHT;

pub const FIELD_ELEMENT_SIZE: usize = 32;
pub const FUNCTION_SELECTOR_SIZE: usize = 4;

/// Bytes packed into a single field element when hashing raw bytes.
pub const BYTES_PER_FIELD: usize = 31;

/// The account contract entrypoint whose key is proven to be part of the class.
pub const DEFAULT_EXPECTED_FUNCTION_NAME: &str = "verify_private_authwit";
pub const DEFAULT_EXPECTED_FUNCTION_SIGNATURE: &str = "verify_private_authwit(Field)";

// Poseidon2 instance over BN254.
pub const POSEIDON2_WIDTH: usize = 4;
pub const POSEIDON2_RATE: usize = 3;
pub const POSEIDON2_ROUNDS_F: usize = 8;
pub const POSEIDON2_ROUNDS_P: usize = 56;
