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

//! Serde adapters for the hex encodings used on the wire: field elements as
//! `0x` + 64 hex digits, byte blobs as `0x` + hex.

pub mod fr {
    use crate::{
        utils::{fr_to_hex, read_fr_hex},
        Fr,
    };
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::borrow::Cow;

    pub fn serialize<S: Serializer>(value: &Fr, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&fr_to_hex(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Fr, D::Error> {
        let value = Cow::<'de, str>::deserialize(deserializer)?;
        read_fr_hex(&value).map_err(D::Error::custom)
    }
}

pub mod fr_vec {
    use crate::{
        utils::{fr_to_hex, read_fr_hex},
        Fr,
    };
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::borrow::Cow;

    pub fn serialize<S: Serializer>(values: &[Fr], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(fr_to_hex))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Fr>, D::Error> {
        Vec::<Cow<'de, str>>::deserialize(deserializer)?
            .iter()
            .enumerate()
            .map(|(i, value)| {
                read_fr_hex(value).map_err(|e| D::Error::custom(format!("element {i}: {e}")))
            })
            .collect()
    }
}

pub mod bytes {
    use crate::utils::{read_hex_bytes, to_hex_string};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::borrow::Cow;

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex_string(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let value = Cow::<'de, str>::deserialize(deserializer)?;
        read_hex_bytes(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod should {
    use crate::Fr;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "super::fr")]
        value: Fr,
        #[serde(with = "super::fr_vec")]
        values: Vec<Fr>,
        #[serde(with = "super::bytes")]
        blob: Vec<u8>,
    }

    #[test]
    fn encode_field_elements_and_bytes_as_hex() {
        let sample = Sample {
            value: Fr::from(1u64),
            values: vec![Fr::from(2u64)],
            blob: vec![0xde, 0xad],
        };

        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": "0x0000000000000000000000000000000000000000000000000000000000000001",
                "values": ["0x0000000000000000000000000000000000000000000000000000000000000002"],
                "blob": "0xdead",
            })
        );
        assert_eq!(serde_json::from_value::<Sample>(json).unwrap(), sample);
    }

    mod reject {
        use super::*;

        #[test]
        fn out_of_range_field_elements() {
            let json = serde_json::json!({
                "value": "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
                "values": [],
                "blob": "0x",
            });
            assert!(serde_json::from_value::<Sample>(json).is_err());
        }

        #[test]
        fn a_bad_vector_element() {
            let json = serde_json::json!({ "value": "0x01", "values": ["0x01", "nope"], "blob": "" });
            let error = serde_json::from_value::<Sample>(json).unwrap_err();
            assert!(error.to_string().contains("element 1"));
        }
    }
}
