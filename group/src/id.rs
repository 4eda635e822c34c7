//! Group identifiers and the keccak-to-field hash that turns them into zero leaves.

use crate::GroupError;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, One};
use semaphore_poseidon::Fr;
use semaphore_poseidon::field::from_be_bytes_shifted;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

/// A group identifier: any integer that fits a 256-bit two's-complement word.
///
/// The textual form is kept as given so it can be echoed back to collaborators; only
/// the 32-byte word takes part in hashing and equality.
#[derive(Clone, Debug)]
pub struct GroupId {
    repr: String,
    word: [u8; 32],
}

impl PartialEq for GroupId {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for GroupId {}

impl std::hash::Hash for GroupId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

impl GroupId {
    /// Parse a decimal or `0x`-hex integer with an optional leading `-`.
    pub fn parse(s: &str) -> Result<Self, GroupError> {
        let trimmed = s.trim();
        let (sign, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, trimmed),
        };

        let magnitude = match digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            Some(hex) => BigUint::from_str_radix(hex, 16),
            None => BigUint::from_str_radix(digits, 10),
        }
        .map_err(|_| GroupError::InvalidGroupId(format!("not an integer: {s:?}")))?;

        Self::from_bigint(trimmed.to_string(), BigInt::from_biguint(sign, magnitude))
    }

    fn from_bigint(repr: String, value: BigInt) -> Result<Self, GroupError> {
        let word = to_twos_word(&value)
            .ok_or_else(|| GroupError::InvalidGroupId(format!("{repr} does not fit in 256 bits")))?;
        Ok(Self { repr, word })
    }

    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Big-endian two's-complement encoding.
    pub fn to_bytes32(&self) -> [u8; 32] {
        self.word
    }
}

/// Encode as a 256-bit two's-complement word: `[0, 2^256)` as is, `[-2^255, 0)` wrapped.
fn to_twos_word(value: &BigInt) -> Option<[u8; 32]> {
    let unsigned = if value.sign() == Sign::Minus {
        if *value < -(BigInt::one() << 255u32) {
            return None;
        }
        value + (BigInt::one() << 256u32)
    } else {
        value.clone()
    };

    let (_, bytes) = unsigned.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }

    let mut word = [0u8; 32];
    word[32 - bytes.len()..].copy_from_slice(&bytes);
    Some(word)
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for GroupId {
                fn from(v: $t) -> Self {
                    let value = BigInt::from(v);
                    // Every primitive integer fits in 256 bits.
                    let word = to_twos_word(&value).unwrap_or([0u8; 32]);
                    Self { repr: v.to_string(), word }
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl FromStr for GroupId {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl Serialize for GroupId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.repr)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Str(String),
    Unsigned(u64),
    Signed(i64),
}

impl<'de> Deserialize<'de> for GroupId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match IdRepr::deserialize(d)? {
            IdRepr::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            IdRepr::Unsigned(v) => Ok(Self::from(v)),
            IdRepr::Signed(v) => Ok(Self::from(v)),
        }
    }
}

/// `keccak256(word) >> 8`, which always lands below the field modulus.
pub fn hash_bytes32(word: &[u8; 32]) -> Fr {
    let digest = Keccak256::digest(word);
    from_be_bytes_shifted(&digest, 8)
}

/// The zero leaf of a group's tree.
pub fn hash_group_id(id: &GroupId) -> Fr {
    hash_bytes32(&id.to_bytes32())
}

#[cfg(test)]
mod tests {
    use super::*;
    use semaphore_poseidon::field::parse_field_element;

    fn fr(s: &str) -> Fr {
        parse_field_element(s).unwrap()
    }

    #[test]
    fn zero_values_match_reference() {
        assert_eq!(
            hash_group_id(&GroupId::from(1u64)),
            fr("312829776796408387545637016147278514583116203736587368460269838669765409292")
        );
        assert_eq!(
            hash_group_id(&GroupId::from(0u64)),
            fr("72536837793382353857766664600029564596379343648020771091641483823512744933")
        );
        assert_eq!(
            hash_group_id(&GroupId::from(-1i64)),
            fr("299960357257039674083140105386840675525084898880315147717440550201513745295")
        );
    }

    #[test]
    fn string_and_integer_ids_agree() {
        let from_int = GroupId::from(42u32);
        let from_dec: GroupId = "42".parse().unwrap();
        let from_hex: GroupId = "0x2a".parse().unwrap();

        assert_eq!(from_int, from_dec);
        assert_eq!(from_int, from_hex);
        assert_eq!(from_hex.as_str(), "0x2a");
        assert_eq!(
            hash_group_id(&from_dec),
            fr("337128325429352729837209583172397910712856832050213866488156768494212314437")
        );
    }

    #[test]
    fn negative_ids_wrap() {
        let id: GroupId = "-1".parse().unwrap();
        assert_eq!(id.to_bytes32(), [0xffu8; 32]);
        assert_eq!(id, GroupId::from(-1i8));
    }

    #[test]
    fn rejects_non_numeric_and_oversized_ids() {
        assert!(matches!(GroupId::parse("group-a"), Err(GroupError::InvalidGroupId(_))));
        assert!(GroupId::parse("").is_err());

        let too_big = format!("0x1{}", "0".repeat(64));
        assert!(GroupId::parse(&too_big).is_err());

        let max = format!("0x{}", "f".repeat(64));
        assert!(GroupId::parse(&max).is_ok());

        let min = format!("-0x8{}", "0".repeat(63));
        assert_eq!(GroupId::parse(&min).unwrap().to_bytes32()[0], 0x80);
        let below_min = format!("-0x8{}1", "0".repeat(62));
        assert!(GroupId::parse(&below_min).is_err());
    }

    #[test]
    fn serde_accepts_strings_and_numbers() {
        let a: GroupId = serde_json::from_str(r#""7""#).unwrap();
        let b: GroupId = serde_json::from_str("7").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), r#""7""#);
        assert!(serde_json::from_str::<GroupId>(r#""seven""#).is_err());
    }
}
