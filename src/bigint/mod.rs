// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod add;
mod biguint;
pub(crate) mod bigint_core;
mod bigint_display;
mod bigint_from;
mod bigint_into;
mod bigint_new;
mod bigint_slice;
mod bigint_vec;
mod bits;
mod bytes;
mod cmp;
mod digit;
mod divrem;
pub(crate) mod gcd;
mod helper_methods;
mod len;
mod math;
mod mul;
mod neg;
mod shift;
mod sub;
mod zero;

pub use bigint_core::{BigInt, Sign};
pub use biguint::BigUint;
pub use digit::{Digit, DIGIT_BYTES};
