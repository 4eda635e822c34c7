//! Group configuration.

use crate::GroupError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TREE_DEPTH: usize = 20;
pub const MIN_TREE_DEPTH: usize = 16;
pub const MAX_TREE_DEPTH: usize = 32;

/// Environment variable read by [`GroupConfig::from_env`].
pub const TREE_DEPTH_ENV: &str = "SEMAPHORE_TREE_DEPTH";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Depth of the member tree; a group holds up to `2^depth` members.
    pub depth: usize,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_TREE_DEPTH,
        }
    }
}

impl GroupConfig {
    pub fn from_env() -> Result<Self, GroupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`GroupConfig::from_env`], with the variable lookup supplied by the caller.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GroupError> {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(TREE_DEPTH_ENV) {
            cfg.depth = raw.trim().parse().map_err(|_| {
                GroupError::Config(format!("{TREE_DEPTH_ENV} must be an integer, got {raw:?}"))
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), GroupError> {
        validate_group_depth(self.depth)
    }
}

/// Groups only accept depths in `[MIN_TREE_DEPTH, MAX_TREE_DEPTH]`.
pub fn validate_group_depth(depth: usize) -> Result<(), GroupError> {
    if !(MIN_TREE_DEPTH..=MAX_TREE_DEPTH).contains(&depth) {
        return Err(GroupError::InvalidTreeDepth {
            depth,
            min: MIN_TREE_DEPTH,
            max: MAX_TREE_DEPTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_depth_20() {
        assert_eq!(GroupConfig::default().depth, 20);
        assert_eq!(GroupConfig::from_lookup(|_| None).unwrap().depth, 20);
    }

    #[test]
    fn reads_depth_from_lookup() {
        let cfg = GroupConfig::from_lookup(|key| {
            (key == TREE_DEPTH_ENV).then(|| " 32 ".to_string())
        })
        .unwrap();
        assert_eq!(cfg.depth, 32);
    }

    #[test]
    fn rejects_bad_values() {
        let err = GroupConfig::from_lookup(|_| Some("deep".to_string())).unwrap_err();
        assert!(matches!(err, GroupError::Config(_)));

        let err = GroupConfig::from_lookup(|_| Some("15".to_string())).unwrap_err();
        assert!(matches!(err, GroupError::InvalidTreeDepth { depth: 15, .. }));
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: GroupConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, GroupConfig::default());

        let cfg: GroupConfig = serde_json::from_str(r#"{"depth":16}"#).unwrap();
        assert_eq!(cfg.depth, 16);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn depth_bounds_are_inclusive() {
        assert!(validate_group_depth(16).is_ok());
        assert!(validate_group_depth(32).is_ok());
        assert!(validate_group_depth(15).is_err());
        assert!(validate_group_depth(33).is_err());
    }
}
