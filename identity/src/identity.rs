//! Identity construction, derivation and the `["0x<trapdoor>","0x<nullifier>"]` export format.

use crate::IdentityError;
use rand::RngCore;
use rand::rngs::OsRng;
use semaphore_poseidon::field::{from_be_bytes_shifted, parse_field_element, to_decimal, to_hex};
use semaphore_poseidon::{Fr, hash1, hash2};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;
use sha2::{Digest, Sha512};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Entropy per random trapdoor / nullifier. 248 bits always fit the field.
pub const RANDOM_BYTES: usize = 31;

/// Bits dropped from each half of the seed digest. The field holds 253 bits safely.
const SEED_SHIFT: u32 = 3;

/// A Semaphore identity.
///
/// Immutable once built: `secret` and `commitment` are derived at construction and
/// never serialized, so they cannot drift from the trapdoor and nullifier.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    trapdoor: Fr,
    nullifier: Fr,
    secret: Fr,
    commitment: Fr,
}

impl Identity {
    /// Fresh identity from OS randomness.
    pub fn new() -> Self {
        Self::from_rng(&mut OsRng)
    }

    /// Fresh identity from a caller-supplied RNG.
    pub fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let trapdoor = random_field_element(rng);
        let nullifier = random_field_element(rng);
        debug!("created random identity");
        Self::from_parts(trapdoor, nullifier)
    }

    /// Build an identity from a string the way the JS library does: a JSON array is
    /// treated as an export, anything else as a seed.
    pub fn from_message(message: &str) -> Result<Self, IdentityError> {
        if is_json_array(message) {
            Self::import(message)
        } else {
            Ok(Self::from_seed(message.as_bytes()))
        }
    }

    /// Deterministic identity from arbitrary seed bytes.
    ///
    /// The SHA-512 digest is split in two: the high half becomes the nullifier, the
    /// low half the trapdoor, each shifted right by 3 bits.
    pub fn from_seed(seed: &[u8]) -> Self {
        let digest = Sha512::digest(seed);
        let nullifier = from_be_bytes_shifted(&digest[..32], SEED_SHIFT);
        let trapdoor = from_be_bytes_shifted(&digest[32..], SEED_SHIFT);
        debug!("derived identity from seed");
        Self::from_parts(trapdoor, nullifier)
    }

    /// Parse a previously exported identity.
    pub fn import(exported: &str) -> Result<Self, IdentityError> {
        let value: Value = serde_json::from_str(exported)
            .map_err(|e| IdentityError::InvalidExport(e.to_string()))?;
        Self::from_export_value(&value)
    }

    /// Build from a dynamically typed value, e.g. one pulled out of a JSON document.
    ///
    /// `null` means "no input" and yields a random identity; strings go through
    /// [`Identity::from_message`]; everything else is a type error.
    pub fn from_value(value: &Value) -> Result<Self, IdentityError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::String(s) => Self::from_message(s),
            _ => Err(IdentityError::InvalidParameterType {
                name: "identityOrMessage",
                expected: "string",
            }),
        }
    }

    pub fn from_parts(trapdoor: Fr, nullifier: Fr) -> Self {
        let secret = hash2(nullifier, trapdoor);
        let commitment = hash1(secret);
        Self {
            trapdoor,
            nullifier,
            secret,
            commitment,
        }
    }

    fn from_export_value(value: &Value) -> Result<Self, IdentityError> {
        // Entries past the first two are ignored.
        let Some([trapdoor, nullifier, ..]) = value.as_array().map(Vec::as_slice) else {
            return Err(IdentityError::InvalidExport(
                "expected a [trapdoor, nullifier] array".to_string(),
            ));
        };
        Ok(Self::from_parts(
            export_component(trapdoor, "trapdoor")?,
            export_component(nullifier, "nullifier")?,
        ))
    }

    pub fn trapdoor(&self) -> Fr {
        self.trapdoor
    }

    pub fn nullifier(&self) -> Fr {
        self.nullifier
    }

    pub fn secret(&self) -> Fr {
        self.secret
    }

    /// The public value that becomes a group member.
    pub fn commitment(&self) -> Fr {
        self.commitment
    }

    /// `["0x<trapdoor>","0x<nullifier>"]`, the inverse of [`Identity::import`].
    pub fn export(&self) -> String {
        self.to_string()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[\"{}\",\"{}\"]",
            to_hex(&self.trapdoor),
            to_hex(&self.nullifier)
        )
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("commitment", &to_decimal(&self.commitment))
            .finish_non_exhaustive()
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::import(s)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        [to_hex(&self.trapdoor), to_hex(&self.nullifier)].serialize(s)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(d)?;
        Self::from_export_value(&value).map_err(de::Error::custom)
    }
}

fn random_field_element<R: RngCore + ?Sized>(rng: &mut R) -> Fr {
    let mut bytes = [0u8; RANDOM_BYTES];
    rng.fill_bytes(&mut bytes);
    from_be_bytes_shifted(&bytes, 0)
}

fn is_json_array(s: &str) -> bool {
    serde_json::from_str::<Value>(s).is_ok_and(|v| v.is_array())
}

fn export_component(value: &Value, name: &'static str) -> Result<Fr, IdentityError> {
    match value {
        Value::String(s) => {
            parse_field_element(s).map_err(|source| IdentityError::InvalidComponent { name, source })
        }
        Value::Number(n) => n.as_u64().map(Fr::from).ok_or_else(|| {
            IdentityError::InvalidExport(format!("{name} must be a non-negative integer"))
        }),
        _ => Err(IdentityError::InvalidParameterType {
            name,
            expected: "string",
        }),
    }
}
