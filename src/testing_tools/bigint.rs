// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(test)]
mod tests {
    use crate::bigint::BigInt;
    use crate::testing_tools::quickcheck::HexString;
    use ::quickcheck_macros::quickcheck;

    #[quickcheck]
    fn from_str_radix_16_eq_from_hex(hex: HexString) -> bool {
        let a = BigInt::from_hex(&hex.0).unwrap();
        let b = BigInt::from_str_radix(&hex.0, 16);
        a == b
    }
}
