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

//! Fixed-height binary Merkle trees over `Fr`.
//!
//! At level `i` the bit `i` of a leaf index tells on which side the running
//! node sits: `0` means it is the left child and is hashed as
//! `hash_pair(node, sibling)`, `1` means it is the right child and is hashed as
//! `hash_pair(sibling, node)`. Flipping this convention yields a perfectly
//! well-formed but different root, so it is pinned by tests.

use alloc::{vec, vec::Vec};
use core::marker::PhantomData;

use crate::{errors::MembershipError, hash::FieldHasher, Fr};
use ark_ff::AdditiveGroup;

/// Largest height for which a `u64` leaf index can address every leaf.
pub const MAX_TREE_HEIGHT: usize = 63;

/// Recomputes the root of a tree from one of its leaves and the sibling path
/// of that leaf. The tree height is the length of `sibling_path`.
pub fn compute_root_from_sibling_path<H: FieldHasher>(
    leaf: Fr,
    sibling_path: &[Fr],
    leaf_index: u64,
) -> Result<Fr, MembershipError> {
    check_leaf_index(leaf_index, sibling_path.len())?;

    let root = sibling_path
        .iter()
        .enumerate()
        .fold(leaf, |node, (level, sibling)| {
            if is_right_child(leaf_index, level) {
                H::hash_pair(*sibling, node)
            } else {
                H::hash_pair(node, *sibling)
            }
        });

    Ok(root)
}

pub(crate) fn check_leaf_index(leaf_index: u64, height: usize) -> Result<(), MembershipError> {
    let fits = u32::try_from(height)
        .ok()
        .and_then(|height| leaf_index.checked_shr(height))
        .map_or(true, |overflow| overflow == 0);

    if fits {
        Ok(())
    } else {
        Err(MembershipError::LeafIndexOutOfRange { leaf_index, height })
    }
}

#[inline]
fn is_right_child(leaf_index: u64, level: usize) -> bool {
    u32::try_from(level)
        .ok()
        .and_then(|level| leaf_index.checked_shr(level))
        .map_or(false, |shifted| shifted & 1 == 1)
}

/// A fully materialised tree of fixed height whose empty leaves are zero.
///
/// Only the populated prefix of every level is stored; nodes to the right of
/// it are the zero hashes of that level.
#[derive(Clone, Debug, PartialEq)]
pub struct MerkleTree<H> {
    height: usize,
    // Organised from leaves to root; the last level holds the root only.
    levels: Vec<Vec<Fr>>,
    zero_hashes: Vec<Fr>,
    _hasher: PhantomData<H>,
}

impl<H: FieldHasher> MerkleTree<H> {
    pub fn new(height: usize, leaves: &[Fr]) -> Result<Self, MembershipError> {
        if height > MAX_TREE_HEIGHT {
            return Err(MembershipError::UnsupportedHeight { height });
        }
        if leaves.len() as u64 > 1u64 << height {
            return Err(MembershipError::TooManyLeaves {
                count: leaves.len(),
                height,
            });
        }

        let mut zero_hashes = Vec::with_capacity(height + 1);
        zero_hashes.push(Fr::ZERO);
        for level in 0..height {
            let zero = zero_hashes[level];
            zero_hashes.push(H::hash_pair(zero, zero));
        }

        let mut levels = Vec::with_capacity(height + 1);
        levels.push(leaves.to_vec());
        for level in 0..height {
            let next = levels[level]
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => H::hash_pair(*left, *right),
                    [left] => H::hash_pair(*left, zero_hashes[level]),
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            levels.push(next);
        }

        Ok(Self {
            height,
            levels,
            zero_hashes,
            _hasher: PhantomData,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    pub fn leaves(&self) -> &[Fr] {
        &self.levels[0]
    }

    pub fn root(&self) -> Fr {
        self.node(self.height, 0)
    }

    /// Sibling path of the leaf at `leaf_index`, from the leaf level upwards.
    pub fn sibling_path(&self, leaf_index: u64) -> Result<Vec<Fr>, MembershipError> {
        check_leaf_index(leaf_index, self.height)?;

        let mut path = vec![Fr::ZERO; self.height];
        let mut index = leaf_index;
        for (level, sibling) in path.iter_mut().enumerate() {
            *sibling = self.node(level, index ^ 1);
            index >>= 1;
        }

        Ok(path)
    }

    fn node(&self, level: usize, index: u64) -> Fr {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.levels[level].get(index))
            .copied()
            .unwrap_or(self.zero_hashes[level])
    }
}
