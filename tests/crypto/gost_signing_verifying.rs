// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gostcryptotools::crypto::gost::{named_curve, Mode, SignatureContext};
use gostcryptotools::crypto::hex_to_bytes;
use gostcryptotools::crypto::hash::Streebog256;

fn hex(s: &str) -> Vec<u8> {
    hex_to_bytes(s.as_bytes()).unwrap()
}

#[test]
fn sign_then_verify_over_every_256_bit_curve() {
    let ids = [
        "id-tc26-gost-3410-2012-256-paramSetA",
        "id-tc26-gost-3410-2012-256-paramSetB",
        "id-tc26-gost-3410-2012-256-paramSetC",
        "id-tc26-gost-3410-2012-256-paramSetD",
    ];
    for id in ids {
        let ctx = SignatureContext::new(Mode::M256, named_curve(id).unwrap()).unwrap();

        let mut private_key =
            hex("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28");
        let digest = Streebog256::digest(b"GOST R 34.10-2012 conformance message");

        let signature = ctx.sign(&mut private_key, &digest, None).unwrap();
        assert_eq!(signature.len(), 64);

        let mut private_key_again =
            hex("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28");
        let public_key = ctx.public_key_generate(&mut private_key_again).unwrap();
        assert_eq!(public_key.len(), 64);

        assert!(ctx.verify(&public_key, &digest, &signature).unwrap(), "curve {id}");
    }
}

#[test]
fn sign_then_verify_over_512_bit_curve() {
    let ctx = SignatureContext::new(
        Mode::M512,
        named_curve("id-tc26-gost-3410-12-512-paramSetA").unwrap(),
    )
    .unwrap();

    let mut private_key = vec![0x2a_u8; 64];
    let digest = gostcryptotools::crypto::hash::Streebog512::digest(b"a 512-bit message");

    let signature = ctx.sign(&mut private_key, &digest, None).unwrap();
    assert_eq!(signature.len(), 128);

    let mut private_key_again = vec![0x2a_u8; 64];
    let public_key = ctx.public_key_generate(&mut private_key_again).unwrap();

    assert!(ctx.verify(&public_key, &digest, &signature).unwrap());
}

#[test]
fn tampering_with_any_field_breaks_verification() {
    let ctx = SignatureContext::new(
        Mode::M256,
        named_curve("id-tc26-gost-3410-2012-256-paramSetB").unwrap(),
    )
    .unwrap();

    let mut private_key =
        hex("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28");
    let digest = Streebog256::digest(b"message under test");
    let signature = ctx.sign(&mut private_key, &digest, None).unwrap();

    let mut private_key_again =
        hex("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28");
    let public_key = ctx.public_key_generate(&mut private_key_again).unwrap();

    assert!(ctx.verify(&public_key, &digest, &signature).unwrap());

    let mut tampered_signature = signature.clone();
    tampered_signature[0] ^= 1;
    assert!(!ctx.verify(&public_key, &digest, &tampered_signature).unwrap());

    let mut tampered_digest = digest.clone();
    tampered_digest[0] ^= 1;
    assert!(!ctx.verify(&public_key, &tampered_digest, &signature).unwrap());

    let mut tampered_public_key = public_key.clone();
    tampered_public_key[0] ^= 1;
    assert!(!ctx.verify(&tampered_public_key, &digest, &signature).unwrap());
}

#[test]
fn unknown_curve_identifier_is_not_registered() {
    assert!(named_curve("id-tc26-gost-3410-2012-256-paramSetZ").is_none());
}
