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
    contract_class::{compute_contract_class_id, FunctionLeafPreimage},
    errors::MembershipError,
    hash::FieldHasher,
    merkle::compute_root_from_sibling_path,
    Fr,
};

/// Evidence that a function leaf is part of a private functions tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct VkMembershipProof {
    pub leaf_preimage: FunctionLeafPreimage,
    #[cfg_attr(feature = "std", serde(with = "crate::serde_hex::fr_vec"))]
    pub sibling_path: Vec<Fr>,
    pub leaf_index: u64,
}

impl VkMembershipProof {
    pub fn height(&self) -> usize {
        self.sibling_path.len()
    }

    /// Rejects proofs whose shape does not match a tree of `expected_height`.
    pub fn check_height(&self, expected_height: usize) -> Result<(), MembershipError> {
        if self.sibling_path.len() != expected_height {
            return Err(MembershipError::SiblingPathLength {
                expected: expected_height,
                actual: self.sibling_path.len(),
            });
        }
        crate::merkle::check_leaf_index(self.leaf_index, expected_height)
    }
}

/// Values recomputed from a membership proof. The caller decides what to
/// compare them against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassIdComputation {
    pub computed_class_id: Fr,
    pub computed_private_functions_root: Fr,
}

/// Recomputes the private functions root from `proof` and binds it to the two
/// remaining preimage components of a contract class id.
///
/// The root is always derived here and never accepted from the prover.
/// A proof for another class simply yields a different id: only structurally
/// invalid proofs produce an error.
pub fn verify_vk_membership_and_compute_class_id<H: FieldHasher>(
    proof: &VkMembershipProof,
    artifact_hash: Fr,
    public_bytecode_commitment: Fr,
) -> Result<ClassIdComputation, MembershipError> {
    let leaf = proof.leaf_preimage.hash::<H>();
    let root = compute_root_from_sibling_path::<H>(leaf, &proof.sibling_path, proof.leaf_index)?;
    tracing::trace!(leaf_index = proof.leaf_index, height = proof.height(), "recomputed private functions root");

    Ok(ClassIdComputation {
        computed_class_id: compute_contract_class_id::<H>(artifact_hash, root, public_bytecode_commitment),
        computed_private_functions_root: root,
    })
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{merkle::MerkleTree, poseidon2::Poseidon2, selector::FunctionSelector};
    use alloc::vec;
    use ark_ff::AdditiveGroup;
    use ark_std::{test_rng, UniformRand};
    use rstest::{fixture, rstest};

    struct Scenario {
        proof: VkMembershipProof,
        artifact_hash: Fr,
        public_bytecode_commitment: Fr,
        root: Fr,
        class_id: Fr,
    }

    // Eight leaves, the function of interest at index 3.
    #[fixture]
    fn scenario() -> Scenario {
        let mut rng = test_rng();
        let preimage = FunctionLeafPreimage::new(
            FunctionSelector::from_signature("verify_private_authwit(Field)"),
            Fr::rand(&mut rng),
        );
        let mut leaves: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        leaves[3] = preimage.hash::<Poseidon2>();

        let tree = MerkleTree::<Poseidon2>::new(3, &leaves).unwrap();
        let artifact_hash = Fr::rand(&mut rng);
        let public_bytecode_commitment = Fr::rand(&mut rng);
        let class_id = compute_contract_class_id::<Poseidon2>(
            artifact_hash,
            tree.root(),
            public_bytecode_commitment,
        );

        Scenario {
            proof: VkMembershipProof {
                leaf_preimage: preimage,
                sibling_path: tree.sibling_path(3).unwrap(),
                leaf_index: 3,
            },
            artifact_hash,
            public_bytecode_commitment,
            root: tree.root(),
            class_id,
        }
    }

    fn recompute(scenario: &Scenario, proof: &VkMembershipProof) -> ClassIdComputation {
        verify_vk_membership_and_compute_class_id::<Poseidon2>(
            proof,
            scenario.artifact_hash,
            scenario.public_bytecode_commitment,
        )
        .unwrap()
    }

    #[rstest]
    fn recompute_the_class_id_and_root(scenario: Scenario) {
        let computed = recompute(&scenario, &scenario.proof);

        assert_eq!(computed.computed_class_id, scenario.class_id);
        assert_eq!(computed.computed_private_functions_root, scenario.root);
    }

    #[rstest]
    fn be_deterministic(scenario: Scenario) {
        assert_eq!(
            recompute(&scenario, &scenario.proof),
            recompute(&scenario, &scenario.proof)
        );
    }

    #[rstest]
    fn yield_another_class_id_for_a_tampered_sibling_path(scenario: Scenario) {
        let mut proof = scenario.proof.clone();
        proof.sibling_path[1] = Fr::from(1u64);

        assert_ne!(recompute(&scenario, &proof).computed_class_id, scenario.class_id);
    }

    #[rstest]
    fn yield_another_class_id_for_a_tampered_vk_hash(scenario: Scenario) {
        let mut proof = scenario.proof.clone();
        proof.leaf_preimage.vk_hash += Fr::from(1u64);

        let computed = recompute(&scenario, &proof);
        assert_ne!(computed.computed_class_id, scenario.class_id);
        assert_ne!(computed.computed_private_functions_root, scenario.root);
    }

    #[rstest]
    fn yield_another_class_id_for_a_tampered_selector(scenario: Scenario) {
        let mut proof = scenario.proof.clone();
        proof.leaf_preimage.selector = FunctionSelector::from_signature("transfer(Field)");

        assert_ne!(recompute(&scenario, &proof).computed_class_id, scenario.class_id);
    }

    #[rstest]
    fn yield_another_class_id_for_a_tampered_leaf_index(scenario: Scenario) {
        let mut proof = scenario.proof.clone();
        proof.leaf_index = 2;

        assert_ne!(recompute(&scenario, &proof).computed_class_id, scenario.class_id);
    }

    #[rstest]
    fn yield_another_class_id_for_other_preimage_components(scenario: Scenario) {
        let computed = verify_vk_membership_and_compute_class_id::<Poseidon2>(
            &scenario.proof,
            scenario.public_bytecode_commitment,
            scenario.artifact_hash,
        )
        .unwrap();

        assert_eq!(computed.computed_private_functions_root, scenario.root);
        assert_ne!(computed.computed_class_id, scenario.class_id);
    }

    #[rstest]
    fn accept_a_matching_height(scenario: Scenario) {
        assert_eq!(scenario.proof.check_height(3), Ok(()));
    }

    mod reject {
        use super::*;

        #[rstest]
        fn a_leaf_index_beyond_the_path(scenario: Scenario) {
            let mut proof = scenario.proof.clone();
            proof.leaf_index = 8;

            assert_eq!(
                verify_vk_membership_and_compute_class_id::<Poseidon2>(
                    &proof,
                    scenario.artifact_hash,
                    scenario.public_bytecode_commitment,
                ),
                Err(MembershipError::LeafIndexOutOfRange {
                    leaf_index: 8,
                    height: 3
                })
            );
        }

        #[rstest]
        fn a_sibling_path_of_the_wrong_height(scenario: Scenario) {
            let mut proof = scenario.proof.clone();
            proof.sibling_path.push(Fr::ZERO);

            assert_eq!(
                proof.check_height(3),
                Err(MembershipError::SiblingPathLength {
                    expected: 3,
                    actual: 4
                })
            );
            assert_eq!(
                scenario.proof.check_height(7),
                Err(MembershipError::SiblingPathLength {
                    expected: 7,
                    actual: 3
                })
            );
        }

        #[test]
        fn a_leaf_index_that_does_not_fit_the_expected_height() {
            let proof = VkMembershipProof {
                leaf_preimage: FunctionLeafPreimage::new(FunctionSelector(1), Fr::ZERO),
                sibling_path: vec![Fr::ZERO; 2],
                leaf_index: 4,
            };
            assert_eq!(
                proof.check_height(2),
                Err(MembershipError::LeafIndexOutOfRange {
                    leaf_index: 4,
                    height: 2
                })
            );
        }
    }
}
