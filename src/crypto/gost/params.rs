// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named elliptic-curve parameter sets from R 1323565.1.024-2019.

use crate::bigint::{BigInt, Sign};
use std::sync::Once;

/// The parameters supplied to construct a [`SignatureContext`](super::SignatureContext).
///
/// `Canonical` gives the short-Weierstrass coefficients directly; `Edwards`
/// gives the birationally equivalent twisted-Edwards form, from which the
/// canonical form is derived at construction time.
#[derive(Clone, Debug)]
pub enum CurveParams {
    Canonical {
        p: BigInt,
        a: BigInt,
        b: BigInt,
        m: BigInt,
        q: BigInt,
        x: BigInt,
        y: BigInt,
    },
    Edwards {
        p: BigInt,
        e: BigInt,
        d: BigInt,
        m: BigInt,
        q: BigInt,
        u: BigInt,
        v: BigInt,
    },
}

fn big(bytes: &[u8]) -> BigInt {
    BigInt::from_be_bytes(bytes, Sign::Positive)
}

static mut REGISTRY: Option<Vec<(&'static str, CurveParams)>> = None;
static INIT: Once = Once::new();

/// Looks up a named curve from R 1323565.1.024-2019 by its standard identifier,
/// e.g. `"id-tc26-gost-3410-2012-256-paramSetB"`.
pub fn named_curve(id: &str) -> Option<CurveParams> {
    INIT.call_once(|| unsafe {
        REGISTRY = Some(build_registry());
    });

    let registry = unsafe { REGISTRY.as_ref().unwrap() };
    registry
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, params)| params.clone())
}

fn build_registry() -> Vec<(&'static str, CurveParams)> {
    vec![
        (
            "id-tc26-gost-3410-2012-256-paramSetA",
            CurveParams::Canonical {
                p: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0x97,
                ]),
                a: big(&[
                    0x00, 0xc2, 0x17, 0x3f, 0x15, 0x13, 0x98, 0x16, 0x73, 0xaf, 0x48, 0x92, 0xc2,
                    0x30, 0x35, 0xa2, 0x7c, 0xe2, 0x5e, 0x20, 0x13, 0xbf, 0x95, 0xaa, 0x33, 0xb2,
                    0x2c, 0x65, 0x6f, 0x27, 0x7e, 0x73, 0x35,
                ]),
                b: big(&[
                    0x29, 0x5f, 0x9b, 0xae, 0x74, 0x28, 0xed, 0x9c, 0xcc, 0x20, 0xe7, 0xc3, 0x59,
                    0xa9, 0xd4, 0x1a, 0x22, 0xfc, 0xcd, 0x91, 0x08, 0xe1, 0x7b, 0xf7, 0xba, 0x93,
                    0x37, 0xa6, 0xf8, 0xae, 0x95, 0x13,
                ]),
                m: big(&[
                    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x3f, 0x63, 0x37, 0x7f, 0x21, 0xed, 0x98, 0xd7, 0x04,
                    0x56, 0xbd, 0x55, 0xb0, 0xd8, 0x31, 0x9c,
                ]),
                q: big(&[
                    0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x0f, 0xd8, 0xcd, 0xdf, 0xc8, 0x7b, 0x66, 0x35, 0xc1, 0x15,
                    0xaf, 0x55, 0x6c, 0x36, 0x0c, 0x67,
                ]),
                x: big(&[
                    0x00, 0x91, 0xe3, 0x84, 0x43, 0xa5, 0xe8, 0x2c, 0x0d, 0x88, 0x09, 0x23, 0x42,
                    0x57, 0x12, 0xb2, 0xbb, 0x65, 0x8b, 0x91, 0x96, 0x93, 0x2e, 0x02, 0xc7, 0x8b,
                    0x25, 0x82, 0xfe, 0x74, 0x2d, 0xaa, 0x28,
                ]),
                y: big(&[
                    0x32, 0x87, 0x94, 0x23, 0xab, 0x1a, 0x03, 0x75, 0x89, 0x57, 0x86, 0xc4, 0xbb,
                    0x46, 0xe9, 0x56, 0x5f, 0xde, 0x0b, 0x53, 0x44, 0x76, 0x67, 0x40, 0xaf, 0x26,
                    0x8a, 0xdb, 0x32, 0x32, 0x2e, 0x5c,
                ]),
            },
        ),
        (
            "id-tc26-gost-3410-2012-256-paramSetB",
            CurveParams::Canonical {
                p: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0x97,
                ]),
                a: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0x94,
                ]),
                b: BigInt::from(0xa6u64),
                m: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0x6c, 0x61, 0x10, 0x70, 0x99, 0x5a, 0xd1, 0x00, 0x45,
                    0x84, 0x1b, 0x09, 0xb7, 0x61, 0xb8, 0x93,
                ]),
                q: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0x6c, 0x61, 0x10, 0x70, 0x99, 0x5a, 0xd1, 0x00, 0x45,
                    0x84, 0x1b, 0x09, 0xb7, 0x61, 0xb8, 0x93,
                ]),
                x: BigInt::one(),
                y: big(&[
                    0x00, 0x8d, 0x91, 0xe4, 0x71, 0xe0, 0x98, 0x9c, 0xda, 0x27, 0xdf, 0x50, 0x5a,
                    0x45, 0x3f, 0x2b, 0x76, 0x35, 0x29, 0x4f, 0x2d, 0xdf, 0x23, 0xe3, 0xb1, 0x22,
                    0xac, 0xc9, 0x9c, 0x9e, 0x9f, 0x1e, 0x14,
                ]),
            },
        ),
        (
            "id-tc26-gost-3410-2012-256-paramSetC",
            CurveParams::Canonical {
                p: big(&[
                    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x0c, 0x99,
                ]),
                a: big(&[
                    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x0c, 0x96,
                ]),
                b: big(&[
                    0x3e, 0x1a, 0xf4, 0x19, 0xa2, 0x69, 0xa5, 0xf8, 0x66, 0xa7, 0xd3, 0xc2, 0x5c,
                    0x3d, 0xf8, 0x0a, 0xe9, 0x79, 0x25, 0x93, 0x73, 0xff, 0x2b, 0x18, 0x2f, 0x49,
                    0xd4, 0xce, 0x7e, 0x1b, 0xbc, 0x8b,
                ]),
                m: big(&[
                    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x01, 0x5f, 0x70, 0x0c, 0xff, 0xf1, 0xa6, 0x24, 0xe5, 0xe4,
                    0x97, 0x16, 0x1b, 0xcc, 0x8a, 0x19, 0x8f,
                ]),
                q: big(&[
                    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x01, 0x5f, 0x70, 0x0c, 0xff, 0xf1, 0xa6, 0x24, 0xe5, 0xe4,
                    0x97, 0x16, 0x1b, 0xcc, 0x8a, 0x19, 0x8f,
                ]),
                x: BigInt::one(),
                y: big(&[
                    0x3f, 0xa8, 0x12, 0x43, 0x59, 0xf9, 0x66, 0x80, 0xb8, 0x3d, 0x1c, 0x3e, 0xb2,
                    0xc0, 0x70, 0xe5, 0xc5, 0x45, 0xc9, 0x85, 0x8d, 0x03, 0xec, 0xfb, 0x74, 0x4b,
                    0xf8, 0xd7, 0x17, 0x71, 0x7e, 0xfc,
                ]),
            },
        ),
        (
            "id-tc26-gost-3410-2012-256-paramSetD",
            CurveParams::Canonical {
                p: big(&[
                    0x00, 0x9b, 0x9f, 0x60, 0x5f, 0x5a, 0x85, 0x81, 0x07, 0xab, 0x1e, 0xc8, 0x5e,
                    0x6b, 0x41, 0xc8, 0xaa, 0xcf, 0x84, 0x6e, 0x86, 0x78, 0x90, 0x51, 0xd3, 0x79,
                    0x98, 0xf7, 0xb9, 0x02, 0x2d, 0x75, 0x9b,
                ]),
                a: big(&[
                    0x00, 0x9b, 0x9f, 0x60, 0x5f, 0x5a, 0x85, 0x81, 0x07, 0xab, 0x1e, 0xc8, 0x5e,
                    0x6b, 0x41, 0xc8, 0xaa, 0xcf, 0x84, 0x6e, 0x86, 0x78, 0x90, 0x51, 0xd3, 0x79,
                    0x98, 0xf7, 0xb9, 0x02, 0x2d, 0x75, 0x98,
                ]),
                b: big(&[0x80, 0x5a]),
                m: big(&[
                    0x00, 0x9b, 0x9f, 0x60, 0x5f, 0x5a, 0x85, 0x81, 0x07, 0xab, 0x1e, 0xc8, 0x5e,
                    0x6b, 0x41, 0xc8, 0xaa, 0x58, 0x2c, 0xa3, 0x51, 0x1e, 0xdd, 0xfb, 0x74, 0xf0,
                    0x2f, 0x3a, 0x65, 0x98, 0x98, 0x0b, 0xb9,
                ]),
                q: big(&[
                    0x00, 0x9b, 0x9f, 0x60, 0x5f, 0x5a, 0x85, 0x81, 0x07, 0xab, 0x1e, 0xc8, 0x5e,
                    0x6b, 0x41, 0xc8, 0xaa, 0x58, 0x2c, 0xa3, 0x51, 0x1e, 0xdd, 0xfb, 0x74, 0xf0,
                    0x2f, 0x3a, 0x65, 0x98, 0x98, 0x0b, 0xb9,
                ]),
                x: BigInt::zero(),
                y: big(&[
                    0x41, 0xec, 0xe5, 0x57, 0x43, 0x71, 0x1a, 0x8c, 0x3c, 0xbf, 0x37, 0x83, 0xcd,
                    0x08, 0xc0, 0xee, 0x4d, 0x4d, 0xc4, 0x40, 0xd4, 0x64, 0x1a, 0x8f, 0x36, 0x6e,
                    0x55, 0x0d, 0xfd, 0xb3, 0xbb, 0x67,
                ]),
            },
        ),
        (
            "id-tc26-gost-3410-12-512-paramSetA",
            CurveParams::Canonical {
                p: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0xc7,
                ]),
                a: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0xc4,
                ]),
                b: big(&[
                    0x00, 0xe8, 0xc2, 0x50, 0x5d, 0xed, 0xfc, 0x86, 0xdd, 0xc1, 0xbd, 0x0b, 0x2b,
                    0x66, 0x67, 0xf1, 0xda, 0x34, 0xb8, 0x25, 0x74, 0x76, 0x1c, 0xb0, 0xe8, 0x79,
                    0xbd, 0x08, 0x1c, 0xfd, 0x0b, 0x62, 0x65, 0xee, 0x3c, 0xb0, 0x90, 0xf3, 0x0d,
                    0x27, 0x61, 0x4c, 0xb4, 0x57, 0x40, 0x10, 0xda, 0x90, 0xdd, 0x86, 0x2e, 0xf9,
                    0xd4, 0xeb, 0xee, 0x47, 0x61, 0x50, 0x31, 0x90, 0x78, 0x5a, 0x71, 0xc7, 0x60,
                ]),
                m: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x27, 0xe6, 0x95, 0x32, 0xf4, 0x8d,
                    0x89, 0x11, 0x6f, 0xf2, 0x2b, 0x8d, 0x4e, 0x05, 0x60, 0x60, 0x9b, 0x4b, 0x38,
                    0xab, 0xfa, 0xd2, 0xb8, 0x5d, 0xca, 0xcd, 0xb1, 0x41, 0x1f, 0x10, 0xb2, 0x75,
                ]),
                q: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x27, 0xe6, 0x95, 0x32, 0xf4, 0x8d,
                    0x89, 0x11, 0x6f, 0xf2, 0x2b, 0x8d, 0x4e, 0x05, 0x60, 0x60, 0x9b, 0x4b, 0x38,
                    0xab, 0xfa, 0xd2, 0xb8, 0x5d, 0xca, 0xcd, 0xb1, 0x41, 0x1f, 0x10, 0xb2, 0x75,
                ]),
                x: BigInt::from(3u64),
                y: big(&[
                    0x75, 0x03, 0xcf, 0xe8, 0x7a, 0x83, 0x6a, 0xe3, 0xa6, 0x1b, 0x88, 0x16, 0xe2,
                    0x54, 0x50, 0xe6, 0xce, 0x5e, 0x1c, 0x93, 0xac, 0xf1, 0xab, 0xc1, 0x77, 0x80,
                    0x64, 0xfd, 0xcb, 0xef, 0xa9, 0x21, 0xdf, 0x16, 0x26, 0xbe, 0x4f, 0xd0, 0x36,
                    0xe9, 0x3d, 0x75, 0xe6, 0xa5, 0x0e, 0x3a, 0x41, 0xe9, 0x80, 0x28, 0xfe, 0x5f,
                    0xc2, 0x35, 0xf5, 0xb8, 0x89, 0xa5, 0x89, 0xcb, 0x52, 0x15, 0xf2, 0xa4,
                ]),
            },
        ),
        (
            "id-tc26-gost-3410-12-512-paramSetB",
            CurveParams::Canonical {
                p: big(&[
                    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x6f,
                ]),
                a: big(&[
                    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x6c,
                ]),
                b: big(&[
                    0x68, 0x7d, 0x1b, 0x45, 0x9d, 0xc8, 0x41, 0x45, 0x7e, 0x3e, 0x06, 0xcf, 0x6f,
                    0x5e, 0x25, 0x17, 0xb9, 0x7c, 0x7d, 0x61, 0x4a, 0xf1, 0x38, 0xbc, 0xbf, 0x85,
                    0xdc, 0x80, 0x6c, 0x4b, 0x28, 0x9f, 0x3e, 0x96, 0x5d, 0x2d, 0xb1, 0x41, 0x6d,
                    0x21, 0x7f, 0x8b, 0x27, 0x6f, 0xad, 0x1a, 0xb6, 0x9c, 0x50, 0xf7, 0x8b, 0xee,
                    0x1f, 0xa3, 0x10, 0x6e, 0xfb, 0x8c, 0xcb, 0xc7, 0xc5, 0x14, 0x01, 0x16,
                ]),
                m: big(&[
                    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x49, 0xa1, 0xec, 0x14, 0x25, 0x65,
                    0xa5, 0x45, 0xac, 0xfd, 0xb7, 0x7b, 0xd9, 0xd4, 0x0c, 0xfa, 0x8b, 0x99, 0x67,
                    0x12, 0x10, 0x1b, 0xea, 0x0e, 0xc6, 0x34, 0x6c, 0x54, 0x37, 0x4f, 0x25, 0xbd,
                ]),
                q: big(&[
                    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x49, 0xa1, 0xec, 0x14, 0x25, 0x65,
                    0xa5, 0x45, 0xac, 0xfd, 0xb7, 0x7b, 0xd9, 0xd4, 0x0c, 0xfa, 0x8b, 0x99, 0x67,
                    0x12, 0x10, 0x1b, 0xea, 0x0e, 0xc6, 0x34, 0x6c, 0x54, 0x37, 0x4f, 0x25, 0xbd,
                ]),
                x: BigInt::from(2u64),
                y: big(&[
                    0x1a, 0x8f, 0x7e, 0xda, 0x38, 0x9b, 0x09, 0x4c, 0x2c, 0x07, 0x1e, 0x36, 0x47,
                    0xa8, 0x94, 0x0f, 0x3c, 0x12, 0x3b, 0x69, 0x75, 0x78, 0xc2, 0x13, 0xbe, 0x6d,
                    0xd9, 0xe6, 0xc8, 0xec, 0x73, 0x35, 0xdc, 0xb2, 0x28, 0xfd, 0x1e, 0xdf, 0x4a,
                    0x39, 0x15, 0x2c, 0xbc, 0xaa, 0xf8, 0xc0, 0x39, 0x88, 0x28, 0x04, 0x10, 0x55,
                    0xf9, 0x4c, 0xee, 0xec, 0x7e, 0x21, 0x34, 0x07, 0x80, 0xfe, 0x41, 0xbd,
                ]),
            },
        ),
        (
            "id-tc26-gost-3410-2012-512-paramSetC",
            CurveParams::Canonical {
                p: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfd, 0xc7,
                ]),
                a: big(&[
                    0x00, 0xdc, 0x92, 0x03, 0xe5, 0x14, 0xa7, 0x21, 0x87, 0x54, 0x85, 0xa5, 0x29,
                    0xd2, 0xc7, 0x22, 0xfb, 0x18, 0x7b, 0xc8, 0x98, 0x0e, 0xb8, 0x66, 0x64, 0x4d,
                    0xe4, 0x1c, 0x68, 0xe1, 0x43, 0x06, 0x45, 0x46, 0xe8, 0x61, 0xc0, 0xe2, 0xc9,
                    0xed, 0xd9, 0x2a, 0xde, 0x71, 0xf4, 0x6f, 0xcf, 0x50, 0xff, 0x2a, 0xd9, 0x7f,
                    0x95, 0x1f, 0xda, 0x9f, 0x2a, 0x2e, 0xb6, 0x54, 0x6f, 0x39, 0x68, 0x9b, 0xd3,
                ]),
                b: big(&[
                    0x00, 0xb4, 0xc4, 0xee, 0x28, 0xce, 0xbc, 0x6c, 0x2c, 0x8a, 0xc1, 0x29, 0x52,
                    0xcf, 0x37, 0xf1, 0x6a, 0xc7, 0xef, 0xb6, 0xa9, 0xf6, 0x9f, 0x4b, 0x57, 0xff,
                    0xda, 0x2e, 0x4f, 0x0d, 0xe5, 0xad, 0xe0, 0x38, 0xcb, 0xc2, 0xff, 0xf7, 0x19,
                    0xd2, 0xc1, 0x8d, 0xe0, 0x28, 0x4b, 0x8b, 0xfe, 0xf3, 0xb5, 0x2b, 0x8c, 0xc7,
                    0xa5, 0xf5, 0xbf, 0x0a, 0x3c, 0x8d, 0x23, 0x19, 0xa5, 0x31, 0x25, 0x57, 0xe1,
                ]),
                m: big(&[
                    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x26, 0x33, 0x6e, 0x91, 0x94, 0x1a,
                    0xac, 0x01, 0x30, 0xce, 0xa7, 0xfd, 0x45, 0x1d, 0x40, 0xb3, 0x23, 0xb6, 0xa7,
                    0x9e, 0x9d, 0xa6, 0x84, 0x9a, 0x51, 0x88, 0xf3, 0xbd, 0x1f, 0xc0, 0x8f, 0xb4,
                ]),
                q: big(&[
                    0x3f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc9, 0x8c, 0xdb, 0xa4, 0x65, 0x06, 0xab,
                    0x00, 0x4c, 0x33, 0xa9, 0xff, 0x51, 0x47, 0x50, 0x2c, 0xc8, 0xed, 0xa9, 0xe7,
                    0xa7, 0x69, 0xa1, 0x26, 0x94, 0x62, 0x3c, 0xef, 0x47, 0xf0, 0x23, 0xed,
                ]),
                x: big(&[
                    0x00, 0xe2, 0xe3, 0x1e, 0xdf, 0xc2, 0x3d, 0xe7, 0xbd, 0xeb, 0xe2, 0x41, 0xce,
                    0x59, 0x3e, 0xf5, 0xde, 0x22, 0x95, 0xb7, 0xa9, 0xcb, 0xae, 0xf0, 0x21, 0xd3,
                    0x85, 0xf7, 0x07, 0x4c, 0xea, 0x04, 0x3a, 0xa2, 0x72, 0x72, 0xa7, 0xae, 0x60,
                    0x2b, 0xf2, 0xa7, 0xb9, 0x03, 0x3d, 0xb9, 0xed, 0x36, 0x10, 0xc6, 0xfb, 0x85,
                    0x48, 0x7e, 0xae, 0x97, 0xaa, 0xc5, 0xbc, 0x79, 0x28, 0xc1, 0x95, 0x01, 0x48,
                ]),
                y: big(&[
                    0x00, 0xf5, 0xce, 0x40, 0xd9, 0x5b, 0x5e, 0xb8, 0x99, 0xab, 0xbc, 0xcf, 0xf5,
                    0x91, 0x1c, 0xb8, 0x57, 0x79, 0x39, 0x80, 0x4d, 0x65, 0x27, 0x37, 0x8b, 0x8c,
                    0x10, 0x8c, 0x3d, 0x20, 0x90, 0xff, 0x9b, 0xe1, 0x8e, 0x2d, 0x33, 0xe3, 0x02,
                    0x1e, 0xd2, 0xef, 0x32, 0xd8, 0x58, 0x22, 0x42, 0x3b, 0x63, 0x04, 0xf7, 0x26,
                    0xaa, 0x85, 0x4b, 0xae, 0x07, 0xd0, 0x39, 0x6e, 0x9a, 0x9a, 0xdd, 0xc4, 0x0f,
                ]),
            },
        ),
    ]
}

/// The raw twisted-Edwards parameters of `id-tc26-gost-3410-2012-256-paramSetA`,
/// kept alongside the canonical registry entry above so the Edwards → canonical
/// conversion can be exercised against a published vector.
#[cfg(test)]
pub(crate) fn edwards_param_set_a() -> CurveParams {
    CurveParams::Edwards {
        p: big(&[
            0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xfd, 0x97,
        ]),
        e: BigInt::one(),
        d: big(&[
            0x06, 0x05, 0xf6, 0xb7, 0xc1, 0x83, 0xfa, 0x81, 0x57, 0x8b, 0xc3, 0x9c, 0xfa, 0xd5,
            0x18, 0x13, 0x2b, 0x9d, 0xf6, 0x28, 0x97, 0x00, 0x9a, 0xf7, 0xe5, 0x22, 0xc3, 0x2d,
            0x6d, 0xc7, 0xbf, 0xfb,
        ]),
        m: big(&[
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x3f, 0x63, 0x37, 0x7f, 0x21, 0xed, 0x98, 0xd7, 0x04, 0x56, 0xbd,
            0x55, 0xb0, 0xd8, 0x31, 0x9c,
        ]),
        q: big(&[
            0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x0f, 0xd8, 0xcd, 0xdf, 0xc8, 0x7b, 0x66, 0x35, 0xc1, 0x15, 0xaf, 0x55,
            0x6c, 0x36, 0x0c, 0x67,
        ]),
        u: BigInt::from(0x0du64),
        v: big(&[
            0x60, 0xca, 0x1e, 0x32, 0xaa, 0x47, 0x5b, 0x34, 0x84, 0x88, 0xc3, 0x8f, 0xab, 0x07,
            0x64, 0x9c, 0xe7, 0xef, 0x8d, 0xbe, 0x87, 0xf2, 0x2e, 0x81, 0xf9, 0x2b, 0x25, 0x92,
            0xdb, 0xa3, 0x00, 0xe7,
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_curve_found() {
        assert!(named_curve("id-tc26-gost-3410-2012-256-paramSetB").is_some());
        assert!(named_curve("id-tc26-gost-3410-12-512-paramSetA").is_some());
    }

    #[test]
    fn test_named_curve_not_found() {
        assert!(named_curve("id-tc26-gost-3410-2012-256-paramSetZ").is_none());
    }

    #[test]
    fn test_registry_has_seven_curves() {
        assert!(named_curve("id-tc26-gost-3410-2012-256-paramSetA").is_some());
        assert!(named_curve("id-tc26-gost-3410-2012-256-paramSetB").is_some());
        assert!(named_curve("id-tc26-gost-3410-2012-256-paramSetC").is_some());
        assert!(named_curve("id-tc26-gost-3410-2012-256-paramSetD").is_some());
        assert!(named_curve("id-tc26-gost-3410-12-512-paramSetA").is_some());
        assert!(named_curve("id-tc26-gost-3410-12-512-paramSetB").is_some());
        assert!(named_curve("id-tc26-gost-3410-2012-512-paramSetC").is_some());
    }
}
