//! Arithmetic and encodings for elements of the BN254 scalar field.
//!
//! All arithmetic is delegated to `ark_bn254::Fr`, which keeps every value reduced
//! modulo `P = 21888242871839275222246405745257275088548364400416034343698204186575808495617`.
//! The helpers here cover the boundary: parsing the decimal / `0x`-hex strings other
//! components hand us, and printing values back in the same shapes.

use crate::HashError;
use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use num_traits::Num;
use serde::Deserialize;

#[inline]
pub fn add(a: Fr, b: Fr) -> Fr {
    a + b
}

#[inline]
pub fn mul(a: Fr, b: Fr) -> Fr {
    a * b
}

/// S-box: `v^5`, computed as `v * (v^2)^2`.
#[inline]
pub fn pow5(v: Fr) -> Fr {
    let o = v * v;
    v * o * o
}

/// The field modulus as an unbounded integer.
pub fn modulus() -> BigUint {
    BigUint::from_bytes_be(&Fr::MODULUS.to_bytes_be())
}

pub fn to_biguint(x: &Fr) -> BigUint {
    BigUint::from_bytes_be(&x.into_bigint().to_bytes_be())
}

/// Convert an integer into the field, rejecting anything `>= P`.
pub fn from_biguint(v: &BigUint) -> Result<Fr, HashError> {
    if *v >= modulus() {
        return Err(HashError::InvalidFieldElement(format!(
            "{v} is not smaller than the field modulus"
        )));
    }
    Ok(Fr::from_be_bytes_mod_order(&v.to_bytes_be()))
}

/// Interpret `bytes` as a big-endian integer, shift it right by `shift` bits and map it
/// into the field.
///
/// Callers pick `shift` so the result is already below `P`; anything larger is reduced.
pub fn from_be_bytes_shifted(bytes: &[u8], shift: u32) -> Fr {
    let v = BigUint::from_bytes_be(bytes) >> shift;
    Fr::from_be_bytes_mod_order(&v.to_bytes_be())
}

/// Parse a decimal or `0x`-prefixed hexadecimal integer into a field element.
pub fn parse_field_element(s: &str) -> Result<Fr, HashError> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => parse_hex(digits),
        None => BigUint::from_str_radix(trimmed, 10).ok(),
    };

    let value = parsed.ok_or_else(|| {
        HashError::InvalidFieldElement(format!("not a decimal or hex integer: {s:?}"))
    })?;
    from_biguint(&value)
}

fn parse_hex(digits: &str) -> Option<BigUint> {
    if digits.is_empty() {
        return None;
    }
    // hex::decode wants whole bytes.
    let padded = if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };
    hex::decode(padded).ok().map(|b| BigUint::from_bytes_be(&b))
}

/// `0x` followed by lowercase hex digits, no zero padding (`0x0` for zero).
pub fn to_hex(x: &Fr) -> String {
    format!("0x{}", to_biguint(x).to_str_radix(16))
}

pub fn to_decimal(x: &Fr) -> String {
    to_biguint(x).to_string()
}

/// Wire shapes accepted for a single field element.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldRepr {
    Str(String),
    Int(u64),
}

impl FieldRepr {
    fn into_fr(self) -> Result<Fr, HashError> {
        match self {
            FieldRepr::Str(s) => parse_field_element(&s),
            FieldRepr::Int(v) => Ok(Fr::from(v)),
        }
    }
}

/// `#[serde(with = "serde_fr")]`: decimal string out, decimal/hex string or integer in.
pub mod serde_fr {
    use super::{FieldRepr, to_decimal};
    use ark_bn254::Fr;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(x: &Fr, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&to_decimal(x))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Fr, D::Error> {
        FieldRepr::deserialize(d)?.into_fr().map_err(de::Error::custom)
    }
}

/// Same encoding as [`serde_fr`], for sequences.
pub mod serde_fr_vec {
    use super::{FieldRepr, to_decimal};
    use ark_bn254::Fr;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(xs: &[Fr], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(xs.iter().map(to_decimal))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Fr>, D::Error> {
        Vec::<FieldRepr>::deserialize(d)?
            .into_iter()
            .map(|r| r.into_fr().map_err(de::Error::custom))
            .collect()
    }
}

/// Same encoding as [`serde_fr`] for optional values; pair with `#[serde(default)]`.
pub mod serde_fr_opt {
    use super::{FieldRepr, to_decimal};
    use ark_bn254::Fr;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(x: &Option<Fr>, s: S) -> Result<S::Ok, S::Error> {
        match x {
            Some(v) => s.serialize_some(&to_decimal(v)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Fr>, D::Error> {
        Option::<FieldRepr>::deserialize(d)?
            .map(|r| r.into_fr().map_err(de::Error::custom))
            .transpose()
    }
}
