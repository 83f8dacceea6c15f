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
    constants::{CONTRACT_CLASS_ID_SEPARATOR, FUNCTION_LEAF_SEPARATOR},
    errors::MembershipError,
    hash::FieldHasher,
    membership::VkMembershipProof,
    merkle::MerkleTree,
    selector::FunctionSelector,
    Fr,
};

/// The data stored at a leaf of the private functions tree. Only the hash of
/// the verification key is kept, never the key itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct FunctionLeafPreimage {
    pub selector: FunctionSelector,
    #[cfg_attr(feature = "std", serde(with = "crate::serde_hex::fr"))]
    pub vk_hash: Fr,
}

impl FunctionLeafPreimage {
    pub fn new(selector: FunctionSelector, vk_hash: Fr) -> Self {
        Self { selector, vk_hash }
    }

    pub fn hash<H: FieldHasher>(&self) -> Fr {
        compute_function_leaf_hash::<H>(self.selector.to_field(), self.vk_hash)
    }
}

pub fn compute_function_leaf_hash<H: FieldHasher>(selector: Fr, vk_hash: Fr) -> Fr {
    H::hash_with_separator(&[selector, vk_hash], FUNCTION_LEAF_SEPARATOR)
}

pub fn compute_contract_class_id<H: FieldHasher>(
    artifact_hash: Fr,
    private_functions_root: Fr,
    public_bytecode_commitment: Fr,
) -> Fr {
    H::hash_with_separator(
        &[artifact_hash, private_functions_root, public_bytecode_commitment],
        CONTRACT_CLASS_ID_SEPARATOR,
    )
}

/// Everything needed to derive a contract class id and to prove that a
/// function's verification key belongs to the class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractClass {
    pub artifact_hash: Fr,
    pub private_functions: Vec<FunctionLeafPreimage>,
    pub public_bytecode_commitment: Fr,
}

impl ContractClass {
    pub fn new(
        artifact_hash: Fr,
        private_functions: Vec<FunctionLeafPreimage>,
        public_bytecode_commitment: Fr,
    ) -> Self {
        Self {
            artifact_hash,
            private_functions,
            public_bytecode_commitment,
        }
    }

    // Leaves are laid out in ascending selector order.
    fn sorted_functions(&self) -> Vec<FunctionLeafPreimage> {
        let mut functions = self.private_functions.clone();
        functions.sort_by_key(|function| function.selector);
        functions
    }

    pub fn private_functions_tree<H: FieldHasher>(
        &self,
        height: usize,
    ) -> Result<MerkleTree<H>, MembershipError> {
        let leaves: Vec<Fr> = self
            .sorted_functions()
            .iter()
            .map(FunctionLeafPreimage::hash::<H>)
            .collect();
        MerkleTree::new(height, &leaves)
    }

    pub fn private_functions_root<H: FieldHasher>(
        &self,
        height: usize,
    ) -> Result<Fr, MembershipError> {
        Ok(self.private_functions_tree::<H>(height)?.root())
    }

    pub fn id<H: FieldHasher>(&self, height: usize) -> Result<Fr, MembershipError> {
        let root = self.private_functions_root::<H>(height)?;
        Ok(compute_contract_class_id::<H>(
            self.artifact_hash,
            root,
            self.public_bytecode_commitment,
        ))
    }

    /// Builds the membership proof of the private function with `selector`.
    pub fn vk_membership_proof<H: FieldHasher>(
        &self,
        selector: FunctionSelector,
        height: usize,
    ) -> Result<VkMembershipProof, MembershipError> {
        let functions = self.sorted_functions();
        let (leaf_index, leaf_preimage) = functions
            .iter()
            .enumerate()
            .find(|(_, function)| function.selector == selector)
            .ok_or(MembershipError::FunctionNotFound { selector })?;

        let tree = self.private_functions_tree::<H>(height)?;
        let leaf_index = leaf_index as u64;

        Ok(VkMembershipProof {
            leaf_preimage: *leaf_preimage,
            sibling_path: tree.sibling_path(leaf_index)?,
            leaf_index,
        })
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{constants::FUNCTION_TREE_HEIGHT, poseidon2::Poseidon2};
    use alloc::vec;
    use ark_ff::MontFp;
    use rstest::{fixture, rstest};

    const VK_HASH: Fr = MontFp!("0x0badc0de");

    #[fixture]
    fn contract_class() -> ContractClass {
        ContractClass::new(
            Fr::from(0xa57u64),
            vec![
                FunctionLeafPreimage::new(FunctionSelector(0xc7784917), VK_HASH),
                FunctionLeafPreimage::new(FunctionSelector(0x9e0ee5e5), Fr::from(2u64)),
                FunctionLeafPreimage::new(FunctionSelector(0x00000001), Fr::from(3u64)),
            ],
            Fr::from(0xb17eu64),
        )
    }

    #[test]
    fn hash_a_function_leaf_with_its_separator() {
        let expected: Fr =
            MontFp!("0x07b119546496c1d75ea9464f6f94a02b113f8cba14a993ae35015df0626c130e");
        let leaf = FunctionLeafPreimage::new(FunctionSelector(0xc7784917), VK_HASH);

        assert_eq!(leaf.hash::<Poseidon2>(), expected);
        assert_eq!(
            compute_function_leaf_hash::<Poseidon2>(Fr::from(0xc7784917u64), VK_HASH),
            expected
        );
    }

    #[test]
    fn hash_a_contract_class_id_with_its_separator() {
        let leaf: Fr =
            MontFp!("0x07b119546496c1d75ea9464f6f94a02b113f8cba14a993ae35015df0626c130e");
        let expected: Fr =
            MontFp!("0x0e2c89199b3d3dfff5f7dc202f9bf3cd18dc7eae14560f0170c778d56b27f590");

        assert_eq!(
            compute_contract_class_id::<Poseidon2>(Fr::from(0xa57u64), leaf, Fr::from(0xb17eu64)),
            expected
        );
    }

    #[test]
    fn not_confuse_leaf_and_class_id_domains() {
        let (a, b) = (Fr::from(1u64), Fr::from(2u64));
        assert_ne!(
            compute_function_leaf_hash::<Poseidon2>(a, b),
            Poseidon2::hash_with_separator(&[a, b], CONTRACT_CLASS_ID_SEPARATOR)
        );
    }

    #[rstest]
    fn order_leaves_by_selector(contract_class: ContractClass) {
        let tree = contract_class
            .private_functions_tree::<Poseidon2>(FUNCTION_TREE_HEIGHT)
            .unwrap();
        let selectors: Vec<u32> = contract_class
            .sorted_functions()
            .iter()
            .map(|function| function.selector.0)
            .collect();

        assert_eq!(selectors, vec![0x00000001, 0x9e0ee5e5, 0xc7784917]);
        assert_eq!(
            tree.leaves()[2],
            FunctionLeafPreimage::new(FunctionSelector(0xc7784917), VK_HASH).hash::<Poseidon2>()
        );
    }

    #[rstest]
    fn not_depend_on_declaration_order(contract_class: ContractClass) {
        let mut reversed = contract_class.clone();
        reversed.private_functions.reverse();

        assert_eq!(
            reversed.id::<Poseidon2>(FUNCTION_TREE_HEIGHT),
            contract_class.id::<Poseidon2>(FUNCTION_TREE_HEIGHT)
        );
    }

    #[rstest]
    fn build_a_membership_proof_for_a_known_function(contract_class: ContractClass) {
        let proof = contract_class
            .vk_membership_proof::<Poseidon2>(FunctionSelector(0xc7784917), FUNCTION_TREE_HEIGHT)
            .unwrap();

        assert_eq!(proof.leaf_index, 2);
        assert_eq!(proof.leaf_preimage.vk_hash, VK_HASH);
        assert_eq!(proof.sibling_path.len(), FUNCTION_TREE_HEIGHT);
    }

    mod reject {
        use super::*;

        #[rstest]
        fn a_membership_proof_for_an_unknown_function(contract_class: ContractClass) {
            assert_eq!(
                contract_class
                    .vk_membership_proof::<Poseidon2>(FunctionSelector(0xdead), FUNCTION_TREE_HEIGHT),
                Err(MembershipError::FunctionNotFound {
                    selector: FunctionSelector(0xdead)
                })
            );
        }
    }
}
