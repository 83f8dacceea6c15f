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

//! Poseidon2 permutation and sponge over BN254, bit compatible with the
//! barretenberg implementation used by the protocol.

use alloc::vec::Vec;

use crate::{
    constants::{
        BYTES_PER_FIELD, POSEIDON2_RATE as RATE, POSEIDON2_ROUNDS_F as ROUNDS_F,
        POSEIDON2_WIDTH as T,
    },
    hash::FieldHasher,
    params::{EXTERNAL_ROUND_CONSTANTS, INTERNAL_MATRIX_DIAGONAL, INTERNAL_ROUND_CONSTANTS},
    Fr,
};
use ark_ff::{AdditiveGroup, Field, PrimeField};

/// Poseidon2 hasher, the default `FieldHasher`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Poseidon2;

impl FieldHasher for Poseidon2 {
    fn hash(inputs: &[Fr]) -> Fr {
        let mut sponge = Sponge::new(inputs.len());
        inputs.iter().for_each(|input| sponge.absorb(*input));
        sponge.squeeze()
    }

    fn hash_with_separator(inputs: &[Fr], separator: u32) -> Fr {
        let mut sponge = Sponge::new(inputs.len() + 1);
        sponge.absorb(Fr::from(separator));
        inputs.iter().for_each(|input| sponge.absorb(*input));
        sponge.squeeze()
    }
}

impl Poseidon2 {
    /// Hashes raw bytes packed little-endian into 31 byte field elements.
    pub fn hash_bytes(bytes: &[u8]) -> Fr {
        let fields: Vec<Fr> = bytes
            .chunks(BYTES_PER_FIELD)
            .map(Fr::from_le_bytes_mod_order)
            .collect();
        Self::hash(&fields)
    }
}

/// Applies the Poseidon2 permutation to a full state.
pub fn permutation(input: &[Fr; T]) -> [Fr; T] {
    let mut state = *input;

    // Initial linear layer
    matrix_multiplication_external(&mut state);

    let (first_full, last_full) = EXTERNAL_ROUND_CONSTANTS.split_at(ROUNDS_F / 2);
    for round_constants in first_full {
        full_round(&mut state, round_constants);
    }

    for round_constant in INTERNAL_ROUND_CONSTANTS.iter() {
        state[0] += round_constant;
        sbox(&mut state[0]);
        matrix_multiplication_internal(&mut state);
    }

    for round_constants in last_full {
        full_round(&mut state, round_constants);
    }

    state
}

fn full_round(state: &mut [Fr; T], round_constants: &[Fr; T]) {
    for (element, constant) in state.iter_mut().zip(round_constants) {
        *element += constant;
        sbox(element);
    }
    matrix_multiplication_external(state);
}

#[inline]
fn sbox(x: &mut Fr) {
    let x4 = x.square().square();
    *x *= x4;
}

// Multiplication by the circulant-like 4x4 MDS matrix
// [[5, 7, 1, 3], [4, 6, 1, 1], [1, 3, 5, 7], [1, 1, 4, 6]].
fn matrix_multiplication_external(state: &mut [Fr; T]) {
    let t0 = state[0] + state[1];
    let t1 = state[2] + state[3];
    let t2 = state[1].double() + t1;
    let t3 = state[3].double() + t0;
    let t4 = t1.double().double() + t3;
    let t5 = t0.double().double() + t2;
    let t6 = t3 + t5;
    let t7 = t2 + t4;
    *state = [t6, t5, t7, t4];
}

fn matrix_multiplication_internal(state: &mut [Fr; T]) {
    let sum: Fr = state.iter().sum();
    for (element, diagonal) in state.iter_mut().zip(INTERNAL_MATRIX_DIAGONAL.iter()) {
        *element = *element * diagonal + sum;
    }
}

/// Duplex sponge with rate 3 and capacity 1. The capacity element is
/// initialised with `input_length << 64`.
struct Sponge {
    state: [Fr; T],
    cache: [Fr; RATE],
    cache_size: usize,
}

impl Sponge {
    fn new(input_length: usize) -> Self {
        let mut state = [Fr::ZERO; T];
        state[RATE] = Fr::from((input_length as u128) << 64);
        Self {
            state,
            cache: [Fr::ZERO; RATE],
            cache_size: 0,
        }
    }

    fn absorb(&mut self, input: Fr) {
        if self.cache_size == RATE {
            self.duplex();
            self.cache[0] = input;
            self.cache_size = 1;
        } else {
            self.cache[self.cache_size] = input;
            self.cache_size += 1;
        }
    }

    fn duplex(&mut self) {
        for (i, cached) in self.cache.iter_mut().enumerate() {
            if i >= self.cache_size {
                *cached = Fr::ZERO;
            }
            self.state[i] += *cached;
        }
        self.state = permutation(&self.state);
    }

    fn squeeze(mut self) -> Fr {
        self.duplex();
        self.state[0]
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use alloc::{vec, vec::Vec};
    use ark_ff::MontFp;
    use rstest::rstest;

    #[test]
    fn match_the_reference_permutation_vector() {
        let input = [Fr::from(0u64), Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)];
        let expected: [Fr; T] = [
            MontFp!("0x01bd538c2ee014ed5141b29e9ae240bf8db3fe5b9a38629a9647cf8d76c01737"),
            MontFp!("0x239b62e7db98aa3a2a8f6a0d2fa1709e7a35959aa6c7034814d9daa90cbac662"),
            MontFp!("0x04cbb44c61d928ed06808456bf758cbf0c18d1e15a7b6dbc8245fa7515d5e3cb"),
            MontFp!("0x2e11c5cff2a22c64d01304b778d78f6998eff1ab73163a35603f54794c30847a"),
        ];

        assert_eq!(permutation(&input), expected);
    }

    #[rstest]
    #[case::four_elements(
        vec![1, 2, 3, 4],
        MontFp!("0x130bf204a32cac1f0ace56c78b731aa3809f06df2731ebcf6b3464a15788b1b9")
    )]
    #[case::single_element(
        vec![1],
        MontFp!("0x168758332d5b3e2d13be8048c8011b454590e06c44bce7f702f09103eef5a373")
    )]
    #[case::empty(
        vec![],
        MontFp!("0x18dfb8dc9b82229cff974efefc8df78b1ce96d9d844236b496785c698bc6732e")
    )]
    fn hash_known_inputs(#[case] inputs: Vec<u64>, #[case] expected: Fr) {
        let inputs: Vec<Fr> = inputs.into_iter().map(Fr::from).collect();
        assert_eq!(Poseidon2::hash(&inputs), expected);
    }

    #[test]
    fn hash_pairs_without_a_separator() {
        let expected: Fr =
            MontFp!("0x038682aa1cb5ae4e0a3f13da432a95c77c5c111f6f030faf9cad641ce1ed7383");
        assert_eq!(
            Poseidon2::hash_pair(Fr::from(1u64), Fr::from(2u64)),
            expected
        );
    }

    #[test]
    fn prepend_the_separator() {
        let inputs = [Fr::from(1u64), Fr::from(2u64)];
        let expected: Fr =
            MontFp!("0x10fe83d323c88240d1af2adc607752272b8c43340e4c186890780eb10728a611");

        assert_eq!(Poseidon2::hash_with_separator(&inputs, 11), expected);
        assert_eq!(
            Poseidon2::hash_with_separator(&inputs, 11),
            Poseidon2::hash(&[Fr::from(11u64), inputs[0], inputs[1]])
        );
        assert_ne!(
            Poseidon2::hash_with_separator(&inputs, 11),
            Poseidon2::hash_with_separator(&inputs, 51)
        );
    }

    #[test]
    fn bind_the_input_length() {
        assert_ne!(
            Poseidon2::hash(&[Fr::from(1u64)]),
            Poseidon2::hash(&[Fr::from(1u64), Fr::ZERO])
        );
    }
}
