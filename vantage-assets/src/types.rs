//! Source records and node types for the asset inventory hierarchy.

use serde::{Deserialize, Serialize};

/// Node kind, one per hierarchy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetNodeType { Tenant, Project, SubProject, Environment }

impl AssetNodeType {
    /// Fixed depth: one level per type, in declaration order.
    pub fn level(self) -> u8 {
        match self {
            AssetNodeType::Tenant => 0,
            AssetNodeType::Project => 1,
            AssetNodeType::SubProject => 2,
            AssetNodeType::Environment => 3,
        }
    }
}

/// Posture payload carried by every asset record and copied onto its node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetInfo {
    pub status: String,
    pub risk_score: f64,
    pub vulnerabilities_count: u32,
}

/// Leaf of the hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub info: AssetInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubProject {
    pub id: String,
    pub name: String,
    pub info: AssetInfo,
    pub environments: Vec<Environment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub info: AssetInfo,
    pub sub_projects: Vec<SubProject>,
}

/// Root of the hierarchy. The source arrays are already materialized; no
/// cross-reference resolution happens here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub info: AssetInfo,
    pub projects: Vec<Project>,
}

/// A node of the built tree. `expanded` and `selected` are derived from the
/// externally-owned UI state on every build; they are never stored on the
/// source data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetTreeNode {
    pub id: String,
    pub name: String,
    pub node_type: AssetNodeType,
    /// 0..=3, strictly +1 per generation.
    pub level: u8,
    /// None only at level 0.
    pub parent_id: Option<String>,
    pub expanded: bool,
    pub selected: bool,
    pub info: AssetInfo,
    /// Insertion order equals source array order. Always empty for
    /// Environment nodes.
    pub children: Vec<AssetTreeNode>,
}

impl AssetTreeNode {
    pub fn is_leaf(&self) -> bool {
        self.node_type == AssetNodeType::Environment
    }
}
