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

use crate::Fr;

/// The two fixed-arity hashes the contract class commitment is built from.
///
/// Implementors are stateless, mirroring how curve hooks are plugged into the
/// verifier: every method is an associated function so the hasher can be
/// selected purely at the type level.
pub trait FieldHasher {
    /// Variable-length hash of a sequence of field elements.
    fn hash(inputs: &[Fr]) -> Fr;

    /// Hash of `[separator, inputs...]`. The separator keeps values hashed for
    /// different purposes (function leaves, class ids, ...) apart.
    fn hash_with_separator(inputs: &[Fr], separator: u32) -> Fr;

    /// Internal Merkle node combiner. Carries no domain separator.
    fn hash_pair(left: Fr, right: Fr) -> Fr {
        Self::hash(&[left, right])
    }
}
