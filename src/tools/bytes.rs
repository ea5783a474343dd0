// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Returns a subslice with the leading zero bytes removed.
///
/// If the slice has leading zeros, returns the subslice after the leading zero bytes.
/// If the slice doesn't have leading zeros, simply returns the original slice.
/// If the slice contains only zeros, returns an empty slice.
///
/// # Examples
///
/// ```text
/// assert_eq!(strip_leading_zeros(&[0, 0, 1, 2, 3]), &[1, 2, 3]);
/// assert_eq!(strip_leading_zeros(&[1, 2, 3]), &[1, 2, 3]);
/// assert_eq!(strip_leading_zeros(&[0, 0, 0, 0, 0]), "".as_bytes());
/// ```
pub(crate) fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    if let Some(index) = bytes.iter().position(|&x| x != 0) {
        &bytes[index..]
    } else {
        &[]
    }
}

/// Returns the bytewise XOR of `a` and `b`.
///
/// Panics if `a` and `b` differ in length.
pub(crate) fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    assert_eq!(a.len(), b.len(), "xor operands must have equal length");

    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// Returns true if `a` and `b` hold the same bytes.
///
/// This is a plain, non-constant-time comparison; it is not suitable
/// for comparing secret values such as MACs.
pub(crate) fn equal_bytes(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// Returns true if every byte of `bytes` is zero.
pub(crate) fn is_zero_bytes(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

/// Overwrites `bytes` with zeros in place.
///
/// Uses `zeroize` so the write is not optimized away by the compiler,
/// for clearing key material and intermediate secrets after use.
pub(crate) fn wipe(bytes: &mut [u8]) {
    use zeroize::Zeroize;
    bytes.zeroize();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_zeros() {
        let data: &[(&[u8], &[u8])] = &[
            // (&[], &[]),
            (&[0][..], &[]),
            (&[0, 0][..], &[]),
            (&[0, 0, 1][..], &[1][..]),
            (&[1][..], &[1][..]),
            (&[0, 1][..], &[1][..]),
            (&[0, 1, 1][..], &[1, 1][..]),
            (&[0, 0, 1, 1][..], &[1, 1][..]),
            (&[0, 0, 1, 1, 0][..], &[1, 1, 0][..]),
        ];
        for (bytes, remaining) in data {
            assert_eq!(strip_leading_zeros(bytes), *remaining);
        }
    }

    #[test]
    fn test_xor() {
        assert_eq!(xor(&[0x0f, 0xf0], &[0xff, 0xff]), vec![0xf0, 0x0f]);
        assert_eq!(xor(&[], &[]), Vec::<u8>::new());
    }

    #[test]
    #[should_panic]
    fn test_xor_length_mismatch() {
        xor(&[1, 2], &[1]);
    }

    #[test]
    fn test_equal_bytes() {
        assert!(equal_bytes(&[1, 2, 3], &[1, 2, 3]));
        assert!(!equal_bytes(&[1, 2, 3], &[1, 2, 4]));
        assert!(!equal_bytes(&[1, 2], &[1, 2, 3]));
    }

    #[test]
    fn test_is_zero_bytes() {
        assert!(is_zero_bytes(&[]));
        assert!(is_zero_bytes(&[0, 0, 0]));
        assert!(!is_zero_bytes(&[0, 0, 1]));
    }

    #[test]
    fn test_wipe() {
        let mut data = vec![1u8, 2, 3, 4];
        wipe(&mut data);
        assert_eq!(data, vec![0, 0, 0, 0]);
    }
}
