//! A Merkle tree bound to a group id.

use crate::config::{GroupConfig, validate_group_depth};
use crate::{GroupData, GroupError, GroupId, IncrementalMerkleTree, MerkleProof, hash_group_id};
use semaphore_poseidon::Fr;
use semaphore_poseidon::field::to_decimal;
use tracing::{debug, info};

/// A membership group.
///
/// The tree's zero leaf is derived from the id, so two groups with the same members but
/// different ids have different roots.
#[derive(Clone, Debug)]
pub struct Group {
    id: GroupId,
    tree: IncrementalMerkleTree,
}

impl Group {
    /// An empty group. `depth` must lie in `[16, 32]`.
    pub fn new(id: impl Into<GroupId>, depth: usize) -> Result<Self, GroupError> {
        Self::with_members(id, depth, Vec::new())
    }

    pub fn with_members(
        id: impl Into<GroupId>,
        depth: usize,
        members: Vec<Fr>,
    ) -> Result<Self, GroupError> {
        validate_group_depth(depth)?;

        let id = id.into();
        let tree = IncrementalMerkleTree::with_leaves(depth, hash_group_id(&id), members)?;
        debug!(group = %id, depth, members = tree.len(), "group created");

        Ok(Self { id, tree })
    }

    pub fn from_config(id: impl Into<GroupId>, cfg: &GroupConfig) -> Result<Self, GroupError> {
        cfg.validate()?;
        Self::new(id, cfg.depth)
    }

    /// Rebuild a group from collaborator data, checking any root or zero value it
    /// carries against the rebuilt tree.
    pub fn from_data(data: &GroupData) -> Result<Self, GroupError> {
        let group = Self::with_members(data.id.clone(), data.depth, data.members.clone())?;

        if let Some(expected) = data.zero_value {
            ensure_matches("zeroValue", expected, group.zero_value())?;
        }
        if let Some(expected) = data.root {
            ensure_matches("root", expected, group.root())?;
        }

        info!(
            group = %group.id,
            members = group.len(),
            root = %to_decimal(&group.root()),
            "group rebuilt from external data"
        );
        Ok(group)
    }

    /// The exchange shape of this group. Admin and verified proofs are left empty.
    pub fn to_data(&self) -> GroupData {
        GroupData {
            id: self.id.clone(),
            depth: self.depth(),
            zero_value: Some(self.zero_value()),
            root: Some(self.root()),
            members: self.members().to_vec(),
            admin: None,
            verified_proofs: Vec::new(),
        }
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn root(&self) -> Fr {
        self.tree.root()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn zero_value(&self) -> Fr {
        self.tree.zero_value()
    }

    /// Members in insertion order. Removed members read as the zero value.
    pub fn members(&self) -> &[Fr] {
        self.tree.leaves()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn index_of(&self, member: &Fr) -> Option<usize> {
        self.tree.index_of(member)
    }

    pub fn add_member(&mut self, member: Fr) -> Result<usize, GroupError> {
        self.tree.insert(member)
    }

    /// Add members one at a time. On error, members added before the failing one stay.
    pub fn add_members(&mut self, members: impl IntoIterator<Item = Fr>) -> Result<(), GroupError> {
        for member in members {
            self.add_member(member)?;
        }
        Ok(())
    }

    pub fn update_member(&mut self, index: usize, member: Fr) -> Result<(), GroupError> {
        self.tree.update(index, member)
    }

    pub fn remove_member(&mut self, index: usize) -> Result<(), GroupError> {
        self.tree.remove(index)
    }

    pub fn generate_merkle_proof(&self, index: usize) -> Result<MerkleProof, GroupError> {
        self.tree.generate_proof(index)
    }

    /// Whether `proof` is valid against this group's current root.
    pub fn verify_merkle_proof(&self, proof: &MerkleProof) -> bool {
        proof.root == self.root() && proof.verify()
    }
}

fn ensure_matches(field: &'static str, expected: Fr, actual: Fr) -> Result<(), GroupError> {
    if expected != actual {
        return Err(GroupError::RootMismatch {
            field,
            expected: to_decimal(&expected),
            actual: to_decimal(&actual),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use semaphore_poseidon::field::parse_field_element;

    fn fr(s: &str) -> Fr {
        parse_field_element(s).unwrap()
    }

    #[test]
    fn new_group_uses_id_hash_as_zero_value() {
        let group = Group::new(1u64, 20).unwrap();
        assert_eq!(
            group.zero_value(),
            fr("312829776796408387545637016147278514583116203736587368460269838669765409292")
        );
        assert_eq!(
            group.root(),
            fr("10354334201938752428558948798274962999644820234654929486063894213598717249307")
        );
        assert_eq!(group.depth(), 20);
        assert!(group.is_empty());
        assert_eq!(group.id().as_str(), "1");
    }

    #[test]
    fn rejects_depth_outside_group_bounds() {
        for depth in [0, 15, 33] {
            assert!(matches!(
                Group::new(1u64, depth),
                Err(GroupError::InvalidTreeDepth { min: 16, max: 32, .. })
            ));
        }
    }

    #[test]
    fn membership_operations() {
        let mut group = Group::new(1u64, 16).unwrap();
        assert_eq!(group.add_member(Fr::from(1u64)).unwrap(), 0);
        group.add_members([Fr::from(2u64), Fr::from(3u64)]).unwrap();
        assert_eq!(group.len(), 3);
        assert_eq!(group.index_of(&Fr::from(3u64)), Some(2));
        assert_eq!(group.index_of(&Fr::from(4u64)), None);

        group.update_member(1, Fr::from(4u64)).unwrap();
        assert_eq!(group.members()[1], Fr::from(4u64));

        group.remove_member(0).unwrap();
        assert_eq!(group.members()[0], group.zero_value());
        assert_eq!(group.len(), 3);

        assert!(group.update_member(3, Fr::from(5u64)).is_err());
    }

    #[test]
    fn proofs_verify_against_current_root_only() {
        let mut group = Group::with_members(1u64, 16, vec![Fr::from(1u64), Fr::from(2u64)]).unwrap();
        let proof = group.generate_merkle_proof(1).unwrap();
        assert_eq!(proof.siblings.len(), 16);
        assert!(group.verify_merkle_proof(&proof));

        group.add_member(Fr::from(3u64)).unwrap();
        assert!(!group.verify_merkle_proof(&proof));
        assert!(proof.verify());
    }

    #[test]
    fn from_config_uses_configured_depth() {
        let group = Group::from_config(7u64, &GroupConfig { depth: 32 }).unwrap();
        assert_eq!(group.depth(), 32);
        assert!(Group::from_config(7u64, &GroupConfig { depth: 8 }).is_err());
    }

    #[test]
    fn data_round_trip_checks_roots() {
        let group = Group::with_members(5u64, 16, vec![Fr::from(10u64), Fr::from(11u64)]).unwrap();
        let data = group.to_data();
        assert_eq!(data.root, Some(group.root()));

        let rebuilt = Group::from_data(&data).unwrap();
        assert_eq!(rebuilt.root(), group.root());
        assert_eq!(rebuilt.members(), group.members());

        let mut wrong_root = data.clone();
        wrong_root.root = Some(Fr::from(1u64));
        assert!(matches!(
            Group::from_data(&wrong_root),
            Err(GroupError::RootMismatch { field: "root", .. })
        ));

        let mut wrong_zero = data;
        wrong_zero.zero_value = Some(Fr::from(1u64));
        let err = Group::from_data(&wrong_zero).unwrap_err();
        assert!(err.to_string().starts_with("zeroValue mismatch"));
    }
}
