//! Asset hierarchy tree builder with externally-owned expand/select state.
//!
//! `build_tree` is a pure function of the source arrays and the two pieces
//! of UI state (expanded-id set, selected id). `AssetTreeState` owns that
//! state behind a lock so a toggle is visible to the very next build.

use std::collections::HashSet;

use parking_lot::RwLock;
use tracing::debug;

use crate::types::{AssetInfo, AssetNodeType, AssetTreeNode, Tenant};

/// Build the full tree from source data. Children preserve the input array
/// order exactly; no implicit sorting. A child referencing a non-existent
/// parent is unreachable by construction, since iteration only follows the
/// parents' own nested arrays.
pub fn build_tree(
    tenants: &[Tenant],
    expanded: &HashSet<String>,
    selected: Option<&str>,
) -> Vec<AssetTreeNode> {
    tenants
        .iter()
        .map(|tenant| {
            let mut node = make_node(
                &tenant.id, &tenant.name, AssetNodeType::Tenant, None,
                &tenant.info, expanded, selected,
            );
            node.children = tenant
                .projects
                .iter()
                .map(|project| {
                    let mut node = make_node(
                        &project.id, &project.name, AssetNodeType::Project,
                        Some(&tenant.id), &project.info, expanded, selected,
                    );
                    node.children = project
                        .sub_projects
                        .iter()
                        .map(|sub| {
                            let mut node = make_node(
                                &sub.id, &sub.name, AssetNodeType::SubProject,
                                Some(&project.id), &sub.info, expanded, selected,
                            );
                            node.children = sub
                                .environments
                                .iter()
                                .map(|env| {
                                    make_node(
                                        &env.id, &env.name, AssetNodeType::Environment,
                                        Some(&sub.id), &env.info, expanded, selected,
                                    )
                                })
                                .collect();
                            node
                        })
                        .collect();
                    node
                })
                .collect();
            node
        })
        .collect()
}

fn make_node(
    id: &str,
    name: &str,
    node_type: AssetNodeType,
    parent_id: Option<&str>,
    info: &AssetInfo,
    expanded: &HashSet<String>,
    selected: Option<&str>,
) -> AssetTreeNode {
    AssetTreeNode {
        id: id.to_string(),
        name: name.to_string(),
        node_type,
        level: node_type.level(),
        parent_id: parent_id.map(str::to_string),
        expanded: expanded.contains(id),
        selected: selected == Some(id),
        info: info.clone(),
        children: Vec::new(),
    }
}

#[derive(Debug, Clone, Default)]
struct TreeUiState {
    expanded: HashSet<String>,
    selected: Option<String>,
}

/// Expand/select state for the inventory tree. At most one node is selected
/// at a time; the expanded set grows and shrinks per node id.
#[derive(Debug, Default)]
pub struct AssetTreeState {
    state: RwLock<TreeUiState>,
}

impl AssetTreeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the expanded flag for a single node. O(1).
    pub fn toggle_node(&self, id: &str) {
        let mut state = self.state.write();
        if !state.expanded.remove(id) {
            state.expanded.insert(id.to_string());
        }
    }

    /// Replace the single selected node.
    pub fn select_node(&self, id: &str) {
        self.state.write().selected = Some(id.to_string());
    }

    pub fn clear_selection(&self) {
        self.state.write().selected = None;
    }

    pub fn selected(&self) -> Option<String> {
        self.state.read().selected.clone()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.state.read().expanded.contains(id)
    }

    /// Add every node id at every level to the expanded set. Leaves are
    /// included; they have no expand affordance, so this is harmless.
    pub fn expand_all(&self, tenants: &[Tenant]) {
        let mut state = self.state.write();
        for tenant in tenants {
            state.expanded.insert(tenant.id.clone());
            for project in &tenant.projects {
                state.expanded.insert(project.id.clone());
                for sub in &project.sub_projects {
                    state.expanded.insert(sub.id.clone());
                    for env in &sub.environments {
                        state.expanded.insert(env.id.clone());
                    }
                }
            }
        }
        debug!(expanded = state.expanded.len(), "Expanded all asset nodes");
    }

    pub fn collapse_all(&self) {
        self.state.write().expanded.clear();
    }

    /// Rebuild the tree from source data and the current state snapshot.
    pub fn build(&self, tenants: &[Tenant]) -> Vec<AssetTreeNode> {
        let state = self.state.read();
        build_tree(tenants, &state.expanded, state.selected.as_deref())
    }
}
