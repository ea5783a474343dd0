// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::fmt::Display;

/// An error returned while constructing or operating a [`SignatureContext`](super::SignatureContext).
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GostSignatureError {
    /// An unrecognized signature mode or named curve.
    UnsupportedAlgorithm,
    /// A byte argument has the wrong size or an out-of-range value.
    InvalidInput(&'static str),
    /// A curve invariant from the construction checks was violated.
    InvalidCurve(&'static str),
}

impl Display for GostSignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GostSignatureError::UnsupportedAlgorithm => write!(f, "unsupported signature mode"),
            GostSignatureError::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            GostSignatureError::InvalidCurve(reason) => {
                write!(f, "invalid elliptic curve parameters: {reason}")
            }
        }
    }
}

impl std::error::Error for GostSignatureError {}
