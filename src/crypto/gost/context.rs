// Copyright 2022 Developers of the gostcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The GOST R 34.10-2012 digital signature algorithm.

use crate::bigint::{BigInt, Sign};
use crate::math::elliptic_curve::{Curve, Point};
use crate::math::modular::{invert, modulo};
use crate::random::generator::get_os_random_bytes;
use crate::tools::bytes::wipe;

use super::error::GostSignatureError;
use super::params::CurveParams;

/// Selects the digest size, and with it the signature and key size, of a
/// [`SignatureContext`]: 256-bit or 512-bit, per GOST R 34.10-2012.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    M256,
    M512,
}

impl Mode {
    fn size(self) -> usize {
        match self {
            Mode::M256 => 32,
            Mode::M512 => 64,
        }
    }

    /// The exclusive upper bound on the embedding-degree search, i.e. the
    /// number of powers of `p` checked against 1 mod q.
    fn embedding_degree_limit(self) -> u32 {
        match self {
            Mode::M256 => 31,
            Mode::M512 => 131,
        }
    }

    /// The inclusive `[2^min_exp, 2^max_exp]` range the subgroup order `q` must fall in.
    fn subgroup_order_exponents(self) -> (usize, usize) {
        match self {
            Mode::M256 => (254, 256),
            Mode::M512 => (508, 512),
        }
    }
}

/// A GOST R 34.10-2012 signature context bound to one named curve and digest size.
///
/// A context is built once from a [`CurveParams`] value via [`SignatureContext::new`]
/// and then used to [`sign`](SignatureContext::sign), [`verify`](SignatureContext::verify),
/// and [`public_key_generate`](SignatureContext::public_key_generate).
pub struct SignatureContext {
    curve: Curve,
    base_point: Point,
    q: BigInt,
    size: usize,
}

impl SignatureContext {
    /// Builds a signature context, deriving the canonical curve form from
    /// `params` if necessary and validating every curve invariant.
    pub fn new(mode: Mode, params: CurveParams) -> Result<Self, GostSignatureError> {
        let (p, a, b, m, q, x, y) = canonicalize(&params)?;

        if m == p {
            return Err(GostSignatureError::InvalidCurve("m must not equal p"));
        }

        check_embedding_degree(&p, &q, mode.embedding_degree_limit())?;

        let (min_exp, max_exp) = mode.subgroup_order_exponents();
        let min_q = BigInt::one() << min_exp;
        let max_q = BigInt::one() << max_exp;
        if q < min_q || q > max_q {
            return Err(GostSignatureError::InvalidCurve(
                "subgroup order is out of the required range",
            ));
        }

        let curve = Curve { a, b, p };
        let base_point = Point { x, y };
        if !point_on_curve(&curve, &base_point) {
            return Err(GostSignatureError::InvalidCurve(
                "base point is not on the curve",
            ));
        }

        Ok(SignatureContext {
            curve,
            base_point,
            q,
            size: mode.size(),
        })
    }

    /// Signs `digest`, which must already be the output of Streebog at this
    /// context's digest size.
    ///
    /// `private_key` is wiped before every return, success or failure.
    ///
    /// `rand_k` supplies the per-signature nonce instead of drawing one from
    /// the operating system's CSPRNG; it is used exactly as given, with no
    /// rejection sampling against `q`, so callers asking for deterministic
    /// output are responsible for its quality.
    pub fn sign(
        &self,
        private_key: &mut [u8],
        digest: &[u8],
        rand_k: Option<&[u8]>,
    ) -> Result<Vec<u8>, GostSignatureError> {
        if private_key.len() != self.size {
            wipe(private_key);
            return Err(GostSignatureError::InvalidInput(
                "private key has the wrong length",
            ));
        }
        if digest.len() != self.size {
            wipe(private_key);
            return Err(GostSignatureError::InvalidInput("digest has the wrong length"));
        }
        if let Some(k) = rand_k {
            if k.len() != self.size {
                wipe(private_key);
                return Err(GostSignatureError::InvalidInput(
                    "rand_k has the wrong length",
                ));
            }
        }

        let priv_key = BigInt::from_be_bytes(private_key, Sign::Positive);
        let e = self.hashed_scalar(digest);

        let mut r = BigInt::zero();
        let mut s = BigInt::zero();
        let mut k = BigInt::zero();
        while s.is_zero() {
            while r.is_zero() {
                k = match rand_k {
                    Some(bytes) => BigInt::from_be_bytes(bytes, Sign::Positive),
                    None => self.random_nonce().map_err(|_| {
                        wipe(private_key);
                        GostSignatureError::InvalidInput("failed to draw randomness")
                    })?,
                };
                if k.is_zero() {
                    wipe(private_key);
                    return Err(GostSignatureError::InvalidInput("rand_k must be nonzero"));
                }

                let c = self.curve.mul_point(&self.base_point, &k);
                r = modulo(&c.x, &self.q);
            }
            s = modulo(&(&r * &priv_key + &k * &e), &self.q);
        }

        wipe(private_key);

        let mut signature = r.to_be_bytes_fixed(self.size);
        signature.extend(s.to_be_bytes_fixed(self.size));
        Ok(signature)
    }

    /// Verifies `signature` over `digest` against `public_key`.
    ///
    /// A malformed signature or public key length is a hard error; an
    /// otherwise well-formed signature that simply fails to verify returns
    /// `Ok(false)`.
    pub fn verify(
        &self,
        public_key: &[u8],
        digest: &[u8],
        signature: &[u8],
    ) -> Result<bool, GostSignatureError> {
        if signature.len() != self.size * 2 {
            return Err(GostSignatureError::InvalidInput(
                "signature has the wrong length",
            ));
        }
        if public_key.len() != self.size * 2 {
            return Err(GostSignatureError::InvalidInput(
                "public key has the wrong length",
            ));
        }
        if digest.len() != self.size {
            return Err(GostSignatureError::InvalidInput("digest has the wrong length"));
        }

        let r = BigInt::from_be_bytes(&signature[..self.size], Sign::Positive);
        let s = BigInt::from_be_bytes(&signature[self.size..], Sign::Positive);
        if r.is_zero() || r >= self.q || s.is_zero() || s >= self.q {
            return Ok(false);
        }

        let public_key_point = Point {
            x: BigInt::from_be_bytes(&public_key[..self.size], Sign::Positive),
            y: BigInt::from_be_bytes(&public_key[self.size..], Sign::Positive),
        };

        let e = self.hashed_scalar(digest);
        let v = invert(&e, &self.q)
            .ok_or(GostSignatureError::InvalidInput("digest is not invertible modulo q"))?;
        let z1 = modulo(&(&s * &v), &self.q);
        let z2 = &self.q - &modulo(&(&r * &v), &self.q);

        let p_point = self.scalar_mul(&self.base_point, &z1);
        let q_point = self.scalar_mul(&public_key_point, &z2);
        let c = self.curve.add_points(&p_point, &q_point);
        let r_check = modulo(&c.x, &self.q);

        Ok(r_check == r)
    }

    /// Derives the public key point for `private_key`, encoded as `x || y`.
    ///
    /// `private_key` is wiped before every return, success or failure.
    pub fn public_key_generate(&self, private_key: &mut [u8]) -> Result<Vec<u8>, GostSignatureError> {
        if private_key.len() != self.size {
            wipe(private_key);
            return Err(GostSignatureError::InvalidInput(
                "private key has the wrong length",
            ));
        }

        let priv_key = BigInt::from_be_bytes(private_key, Sign::Positive);
        wipe(private_key);

        if priv_key.is_zero() {
            return Err(GostSignatureError::InvalidInput(
                "private key must be nonzero",
            ));
        }

        let point = self.curve.mul_point(&self.base_point, &priv_key);
        let mut encoded = point.x.to_be_bytes_fixed(self.size);
        encoded.extend(point.y.to_be_bytes_fixed(self.size));
        Ok(encoded)
    }

    fn hashed_scalar(&self, digest: &[u8]) -> BigInt {
        let e = modulo(&BigInt::from_be_bytes(digest, Sign::Positive), &self.q);
        if e.is_zero() {
            BigInt::one()
        } else {
            e
        }
    }

    /// Multiplies `point` by `n`, treating `n == 0` as the identity element
    /// rather than relying on [`Curve::mul_point`]'s `n >= 1` precondition —
    /// `verify`'s scalars are attacker-influenced and must never panic.
    fn scalar_mul(&self, point: &Point, n: &BigInt) -> Point {
        if n.is_zero() {
            Point::identity_element()
        } else {
            self.curve.mul_point(point, n)
        }
    }

    fn random_nonce(&self) -> Result<BigInt, GostSignatureError> {
        loop {
            let candidate_bytes = get_os_random_bytes(self.size as u32)
                .map_err(|_| GostSignatureError::InvalidInput("failed to draw randomness"))?;
            let candidate = BigInt::from_be_bytes(&candidate_bytes, Sign::Positive);
            if !candidate.is_zero() && candidate < self.q {
                return Ok(candidate);
            }
        }
    }
}

#[allow(clippy::type_complexity)]
fn canonicalize(
    params: &CurveParams,
) -> Result<(BigInt, BigInt, BigInt, BigInt, BigInt, BigInt, BigInt), GostSignatureError> {
    match params {
        CurveParams::Canonical { p, a, b, m, q, x, y } => {
            Ok((p.clone(), a.clone(), b.clone(), m.clone(), q.clone(), x.clone(), y.clone()))
        }
        CurveParams::Edwards { p, e, d, m, q, u, v } => {
            let inv4 = safe_invert(&BigInt::from(4u64), p, "4 is not invertible modulo p")?;
            let inv6 = safe_invert(&BigInt::from(6u64), p, "6 is not invertible modulo p")?;

            let s = modulo(&(&(e - d) * &inv4), p);
            let t = modulo(&(&(e + d) * &inv6), p);

            let three = BigInt::from(3u64);
            let two = BigInt::from(2u64);
            let a_canonical = modulo(&(&(&s * &s) - &(&three * &t * &t)), p);
            let b_canonical = modulo(&(&(&two * &t * &t * &t) - &(&t * &s * &s)), p);

            let one_minus_v = modulo(&(&BigInt::one() - v), p);
            let inv_one_minus_v =
                safe_invert(&one_minus_v, p, "1 - v is not invertible modulo p")?;
            let one_plus_v = &BigInt::one() + v;

            let x = modulo(&(&(&s * &one_plus_v) * &inv_one_minus_v + &t), p);

            let one_minus_v_u = modulo(&(&one_minus_v * u), p);
            let inv_one_minus_v_u =
                safe_invert(&one_minus_v_u, p, "(1 - v) * u is not invertible modulo p")?;
            let y = modulo(&(&(&s * &one_plus_v) * &inv_one_minus_v_u), p);

            Ok((p.clone(), a_canonical, b_canonical, m.clone(), q.clone(), x, y))
        }
    }
}

fn safe_invert(a: &BigInt, p: &BigInt, reason: &'static str) -> Result<BigInt, GostSignatureError> {
    if a.is_zero() {
        return Err(GostSignatureError::InvalidCurve(reason));
    }
    invert(a, p).ok_or(GostSignatureError::InvalidCurve(reason))
}

/// Checks that `p^i mod q != 1 mod q` for `i` in `1..=limit`, guarding against
/// a small embedding degree under the MOV attack.
fn check_embedding_degree(p: &BigInt, q: &BigInt, limit: u32) -> Result<(), GostSignatureError> {
    let one_mod_q = modulo(&BigInt::one(), q);
    let mut power = modulo(p, q);
    for _ in 1..=limit {
        if power == one_mod_q {
            return Err(GostSignatureError::InvalidCurve(
                "embedding degree is too small",
            ));
        }
        power = modulo(&(&power * p), q);
    }
    Ok(())
}

fn point_on_curve(curve: &Curve, point: &Point) -> bool {
    let lhs = curve.modulo(&(&point.y * &point.y));
    let rhs = curve.modulo(&(&(&point.x * &point.x * &point.x) + &(&curve.a * &point.x) + &curve.b));
    lhs == rhs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::gost::params::{edwards_param_set_a, named_curve};
    use crate::random::generator;

    fn param_set_b() -> CurveParams {
        named_curve("id-tc26-gost-3410-2012-256-paramSetB").unwrap()
    }

    fn hex(s: &str) -> Vec<u8> {
        crate::crypto::hex_to_bytes(s.as_bytes()).unwrap()
    }

    #[test]
    fn test_edwards_to_canonical_matches_published_curve() {
        let edwards = edwards_param_set_a();
        let canonical = named_curve("id-tc26-gost-3410-2012-256-paramSetA").unwrap();

        let (_, a1, b1, _, _, x1, y1) = canonicalize(&edwards).unwrap();
        let (_, a2, b2, _, _, x2, y2) = canonicalize(&canonical).unwrap();

        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
        assert_eq!(x1, x2);
        assert_eq!(y1, y2);
    }

    #[test]
    fn test_new_accepts_param_set_b() {
        assert!(SignatureContext::new(Mode::M256, param_set_b()).is_ok());
    }

    #[test]
    fn test_new_rejects_m_equal_p() {
        let broken = CurveParams::Canonical {
            p: BigInt::from(23u64),
            a: BigInt::from(1u64),
            b: BigInt::from(1u64),
            m: BigInt::from(23u64),
            q: BigInt::from(23u64),
            x: BigInt::from(0u64),
            y: BigInt::from(1u64),
        };
        let err = SignatureContext::new(Mode::M256, broken).unwrap_err();
        assert_eq!(err, GostSignatureError::InvalidCurve("m must not equal p"));
    }

    #[test]
    fn test_new_rejects_point_off_curve() {
        let mut params = param_set_b();
        if let CurveParams::Canonical { y, .. } = &mut params {
            *y = &*y + &BigInt::one();
        }
        let err = SignatureContext::new(Mode::M256, params).unwrap_err();
        assert_eq!(
            err,
            GostSignatureError::InvalidCurve("base point is not on the curve")
        );
    }

    #[test]
    fn test_sign_then_verify_roundtrip() {
        let ctx = SignatureContext::new(Mode::M256, param_set_b()).unwrap();
        let mut private_key =
            hex("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28");
        let digest = hex("2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e67ece6672b043ee5");

        let rand_k = hex("1111111111111111111111111111111111111111111111111111111111111111");
        let signature = ctx.sign(&mut private_key, &digest, Some(&rand_k)).unwrap();
        assert_eq!(private_key, [0u8; 32]);

        let mut private_key_again =
            hex("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28");
        let public_key = ctx
            .public_key_generate(&mut private_key_again)
            .unwrap();

        assert!(ctx.verify(&public_key, &digest, &signature).unwrap());

        let mut tampered = signature.clone();
        let last = tampered.len() - 1;
        tampered[last] ^= 1;
        assert!(!ctx.verify(&public_key, &digest, &tampered).unwrap());
    }

    #[test]
    fn test_sign_is_deterministic_with_fixed_rand_k() {
        let ctx = SignatureContext::new(Mode::M256, param_set_b()).unwrap();
        let digest = hex("2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e67ece6672b043ee5");
        let rand_k = hex("1111111111111111111111111111111111111111111111111111111111111111");

        let mut key_a =
            hex("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28");
        let mut key_b = key_a.clone();

        let signature_a = ctx.sign(&mut key_a, &digest, Some(&rand_k)).unwrap();
        let signature_b = ctx.sign(&mut key_b, &digest, Some(&rand_k)).unwrap();
        assert_eq!(signature_a, signature_b);
    }

    #[test]
    fn test_sign_rejects_wrong_length_private_key() {
        let ctx = SignatureContext::new(Mode::M256, param_set_b()).unwrap();
        let mut private_key = vec![0u8; 31];
        let digest = [0u8; 32];
        let err = ctx.sign(&mut private_key, &digest, None).unwrap_err();
        assert_eq!(
            err,
            GostSignatureError::InvalidInput("private key has the wrong length")
        );
    }

    #[test]
    fn test_verify_rejects_wrong_length_signature() {
        let ctx = SignatureContext::new(Mode::M256, param_set_b()).unwrap();
        let public_key = vec![0u8; 64];
        let digest = [0u8; 32];
        let err = ctx.verify(&public_key, &digest, &[0u8; 10]).unwrap_err();
        assert_eq!(
            err,
            GostSignatureError::InvalidInput("signature has the wrong length")
        );
    }

    #[test]
    fn test_verify_returns_false_for_out_of_range_r_and_s() {
        let ctx = SignatureContext::new(Mode::M256, param_set_b()).unwrap();
        let public_key = vec![0u8; 64];
        let digest = [0u8; 32];
        let signature = vec![0u8; 64];
        assert_eq!(ctx.verify(&public_key, &digest, &signature).unwrap(), false);
    }

    #[test]
    fn test_sign_uses_os_random_bytes_when_rand_k_is_not_supplied() {
        let ctx = SignatureContext::new(Mode::M256, param_set_b()).unwrap();
        let digest = hex("2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e67ece6672b043ee5");
        let mut private_key =
            hex("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee1d19ce9891ec3b28");

        let ctx_guard = generator::get_os_random_bytes_context();
        ctx_guard.expect().returning(|len| {
            let mut bytes = vec![0u8; len as usize];
            bytes[len as usize - 1] = 7;
            Ok(bytes)
        });

        let signature = ctx.sign(&mut private_key, &digest, None).unwrap();
        assert_eq!(signature.len(), 64);
    }
}
