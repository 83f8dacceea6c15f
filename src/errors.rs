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

use alloc::string::String;
use snafu::Snafu;

use crate::selector::FunctionSelector;

#[cfg(feature = "std")]
use std::path::PathBuf;

/// Failure to decode a canonical BN254 scalar field element.
#[derive(Debug, PartialEq, Snafu)]
pub enum FieldError {
    #[snafu(display(
        "Invalid Slice Length. Actual length: {actual_length}, Expected length: {expected_length}"
    ))]
    InvalidSliceLength {
        actual_length: usize,
        expected_length: usize,
    },
    /// The value is not smaller than the field modulus.
    #[snafu(display("Value is not a canonical member of the scalar field"))]
    NotMember,
    #[snafu(display("Invalid hex encoding: {message}"))]
    InvalidHex { message: String },
    #[snafu(display("Value does not fit a 4 byte function selector"))]
    SelectorOverflow,
}

/// Structural problems with a membership proof or a functions tree.
#[derive(Debug, PartialEq, Snafu)]
pub enum MembershipError {
    #[snafu(display(
        "Invalid proof: leaf index {leaf_index} does not fit a tree of height {height}"
    ))]
    LeafIndexOutOfRange { leaf_index: u64, height: usize },
    #[snafu(display("Invalid proof: sibling path has {actual} entries, expected {expected}"))]
    SiblingPathLength { expected: usize, actual: usize },
    #[snafu(display("A tree of height {height} cannot hold {count} leaves"))]
    TooManyLeaves { count: usize, height: usize },
    #[snafu(display("Unsupported tree height {height}"))]
    UnsupportedHeight { height: usize },
    #[snafu(display("No private function with selector {selector}"))]
    FunctionNotFound { selector: FunctionSelector },
}

/// The ownership proof payload could not be decoded.
#[cfg(feature = "std")]
#[derive(Debug, Snafu)]
pub enum ParseError {
    #[snafu(display("Malformed ownership proof payload: {source}"))]
    Json { source: serde_json::Error },
}

/// The external proving backend could not be driven to an answer.
#[cfg(feature = "std")]
#[derive(Debug, Snafu)]
pub enum BackendError {
    #[snafu(display("Could not run the proving backend: {source}"))]
    Io { source: std::io::Error },
    #[snafu(display("Proving backend exited with {status}: {stderr}"))]
    Process { status: String, stderr: String },
    #[snafu(display("Proving backend returned malformed output: {message}"))]
    MalformedOutput { message: String },
    #[snafu(display("Proving backend is missing {what}"))]
    Unconfigured { what: &'static str },
}

#[cfg(feature = "std")]
#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Could not read config file {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Invalid config file {}: {source}", path.display()))]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The verification error type. Cryptographic mismatches are never reported
/// here; they end up as failed steps of a `VerificationResult`.
#[cfg(feature = "std")]
#[derive(Debug, Snafu)]
pub enum VerifyError {
    #[snafu(display("Malformed ownership proof: {source}"))]
    Malformed { source: MembershipError },
    #[snafu(display("{source}"))]
    Parse { source: ParseError },
}
