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

use alloc::{collections::BTreeMap, string::String};

use crate::Fr;

/// Names of account contract flavours, keyed by the hash of the verification
/// key of their authorization function. Supplied by the caller so that each
/// deployment can carry its own list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountTypeRegistry {
    entries: BTreeMap<Fr, String>,
}

impl AccountTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, vk_hash: Fr, name: impl Into<String>) -> Self {
        self.insert(vk_hash, name);
        self
    }

    /// Registers `name` for `vk_hash`, returning the name it replaces.
    pub fn insert(&mut self, vk_hash: Fr, name: impl Into<String>) -> Option<String> {
        self.entries.insert(vk_hash, name.into())
    }

    pub fn identify(&self, vk_hash: &Fr) -> Option<&str> {
        self.entries.get(vk_hash).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Fr, &str)> {
        self.entries.iter().map(|(vk_hash, name)| (vk_hash, name.as_str()))
    }
}

#[cfg(feature = "std")]
impl TryFrom<BTreeMap<String, String>> for AccountTypeRegistry {
    type Error = crate::errors::FieldError;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .try_fold(Self::new(), |registry, (vk_hash, name)| {
                Ok(registry.with_entry(crate::utils::read_fr_hex(&vk_hash)?, name))
            })
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for AccountTypeRegistry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.entries
                .iter()
                .map(|(vk_hash, name)| (crate::utils::fr_to_hex(vk_hash), name)),
        )
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for AccountTypeRegistry {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn identify_known_keys_only() {
        let registry = AccountTypeRegistry::new()
            .with_entry(Fr::from(1u64), "schnorr")
            .with_entry(Fr::from(2u64), "ecdsasecp256k1");

        assert_eq!(registry.identify(&Fr::from(1u64)), Some("schnorr"));
        assert_eq!(registry.identify(&Fr::from(2u64)), Some("ecdsasecp256k1"));
        assert_eq!(registry.identify(&Fr::from(3u64)), None);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn replace_an_existing_name() {
        let mut registry = AccountTypeRegistry::new().with_entry(Fr::from(1u64), "schnorr");
        assert_eq!(
            registry.insert(Fr::from(1u64), "schnorr-v2"),
            Some("schnorr".into())
        );
        assert_eq!(registry.identify(&Fr::from(1u64)), Some("schnorr-v2"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn load_from_json() {
        let registry: AccountTypeRegistry =
            serde_json::from_str(r#"{ "0x01": "schnorr", "0x02": "ecdsasecp256r1" }"#).unwrap();

        assert_eq!(registry.identify(&Fr::from(2u64)), Some("ecdsasecp256r1"));
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(serde_json::from_str::<AccountTypeRegistry>(&json).unwrap(), registry);
    }

    #[cfg(feature = "std")]
    mod reject {
        use super::*;

        #[test]
        fn a_key_that_is_not_a_field_element() {
            assert!(serde_json::from_str::<AccountTypeRegistry>(r#"{ "schnorr": "schnorr" }"#).is_err());
        }
    }
}
