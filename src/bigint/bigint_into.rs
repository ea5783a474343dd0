// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::bigint_core::BigInt;
use super::bytes::be_digits_to_be_bytes;
use crate::crypto::bytes_to_hex;

impl BigInt {
    /// Return the hexadecimal representation of this big integer.
    pub(crate) fn to_hex(&self) -> String {
        // Reverses `digits`, for the hex representation is in big-endian order.
        let mut digits_be = self.as_digits().to_vec();
        digits_be.reverse();

        let bytes = be_digits_to_be_bytes(&digits_be);
        bytes_to_hex(&bytes)
    }

    /// Returns the minimal big-endian byte representation of this (non-negative)
    /// big integer. Zero is represented by an empty vector.
    pub(crate) fn to_be_bytes(&self) -> Vec<u8> {
        debug_assert!(!self.is_sign_negative());

        let mut digits_be = self.as_digits().to_vec();
        digits_be.reverse();

        be_digits_to_be_bytes(&digits_be)
    }

    /// Returns the big-endian byte representation of this (non-negative) big integer,
    /// left-padded with zeros to exactly `width` bytes.
    ///
    /// Panics if the value does not fit into `width` bytes.
    pub(crate) fn to_be_bytes_fixed(&self, width: usize) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        assert!(bytes.len() <= width, "value does not fit into width");

        let mut result = vec![0u8; width - bytes.len()];
        result.extend_from_slice(&bytes);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_be_bytes_fixed() {
        let data: &[(u64, usize, &[u8])] = &[
            (0, 2, &[0, 0]),
            (1, 2, &[0, 1]),
            (0x0102, 2, &[0x01, 0x02]),
            (0x0102, 4, &[0, 0, 0x01, 0x02]),
        ];
        for (n, width, expected) in data {
            let a = BigInt::from(*n);
            assert_eq!(a.to_be_bytes_fixed(*width), *expected);
        }
    }
}
