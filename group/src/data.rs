//! Plain data shapes exchanged with ledger and indexer collaborators.
//!
//! Indexers report numbers as strings (`"depth": "20"`, decimal member values), so
//! every numeric field here accepts either a JSON string or a JSON integer.

use crate::config::DEFAULT_TREE_DEPTH;
use crate::{GroupError, GroupId};
use semaphore_poseidon::Fr;
use semaphore_poseidon::field::{parse_field_element, serde_fr, serde_fr_opt, serde_fr_vec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A group as a collaborator sees it.
///
/// `root` and `zero_value` are optional: when present, rebuilding the group from
/// `members` must reproduce them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupData {
    pub id: GroupId,
    #[serde(default = "default_depth", with = "depth_repr")]
    pub depth: usize,
    #[serde(default, with = "serde_fr_opt", skip_serializing_if = "Option::is_none")]
    pub zero_value: Option<Fr>,
    #[serde(default, with = "serde_fr_opt", skip_serializing_if = "Option::is_none")]
    pub root: Option<Fr>,
    #[serde(default, with = "serde_fr_vec")]
    pub members: Vec<Fr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verified_proofs: Vec<VerifiedProof>,
}

/// A proof the ledger accepted for a group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedProof {
    pub signal: String,
    #[serde(with = "serde_fr")]
    pub merkle_tree_root: Fr,
    #[serde(with = "serde_fr")]
    pub external_nullifier: Fr,
    #[serde(with = "serde_fr")]
    pub nullifier_hash: Fr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

fn default_depth() -> usize {
    DEFAULT_TREE_DEPTH
}

/// Parse one member commitment from a dynamically typed value.
///
/// Accepts decimal or `0x`-hex strings and non-negative integers.
pub fn parse_member(value: &Value) -> Result<Fr, GroupError> {
    match value {
        Value::String(s) => Ok(parse_field_element(s)?),
        Value::Number(n) => n.as_u64().map(Fr::from).ok_or(GroupError::InvalidParameterType {
            name: "member",
            expected: "non-negative integer",
        }),
        _ => Err(GroupError::InvalidParameterType {
            name: "member",
            expected: "field element",
        }),
    }
}

mod depth_repr {
    use serde::{Deserialize, Deserializer, Serializer, de};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Int(usize),
    }

    pub fn serialize<S: Serializer>(depth: &usize, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(*depth as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
        match Repr::deserialize(d)? {
            Repr::Int(v) => Ok(v),
            Repr::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("depth must be an integer, got {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_indexer_shaped_group() {
        let data: GroupData = serde_json::from_value(json!({
            "id": "42",
            "depth": "16",
            "members": ["1", "0x2", 3],
            "admin": "0xd770134156f9aB742fDB4561A684187f733A9586",
            "verifiedProofs": [{
                "signal": "hello",
                "merkleTreeRoot": "7",
                "externalNullifier": "8",
                "nullifierHash": "9",
                "timestamp": "1690000000"
            }]
        }))
        .unwrap();

        assert_eq!(data.id, GroupId::from(42u8));
        assert_eq!(data.depth, 16);
        assert_eq!(data.members, vec![Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)]);
        assert_eq!(data.root, None);
        assert_eq!(data.verified_proofs[0].nullifier_hash, Fr::from(9u64));
        assert_eq!(data.verified_proofs[0].timestamp.as_deref(), Some("1690000000"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let data: GroupData = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(data.depth, DEFAULT_TREE_DEPTH);
        assert!(data.members.is_empty());
        assert!(data.admin.is_none());
        assert!(data.verified_proofs.is_empty());
    }

    #[test]
    fn serializes_without_empty_optionals() {
        let data: GroupData = serde_json::from_value(json!({ "id": "1", "depth": 20 })).unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, json!({ "id": "1", "depth": 20, "members": [] }));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(serde_json::from_value::<GroupData>(json!({ "id": "1", "depth": "deep" })).is_err());
        assert!(serde_json::from_value::<GroupData>(json!({ "id": "1", "members": ["x"] })).is_err());
    }

    #[test]
    fn parse_member_checks_types() {
        assert_eq!(parse_member(&json!("0x10")).unwrap(), Fr::from(16u64));
        assert_eq!(parse_member(&json!(5)).unwrap(), Fr::from(5u64));
        assert!(matches!(parse_member(&json!("nope")), Err(GroupError::Field(_))));
        assert!(matches!(
            parse_member(&json!(-1)),
            Err(GroupError::InvalidParameterType { name: "member", .. })
        ));
        assert!(matches!(
            parse_member(&json!(true)),
            Err(GroupError::InvalidParameterType { .. })
        ));
    }
}
