//! # Vantage Assets — Asset inventory hierarchy
//!
//! Builds the inventory view's tree from flat nested organizational data:
//! tenant → project → sub-project → environment, exactly four levels. The
//! tree is rebuilt in full from source data plus the current expand/select
//! state on every state change, so it can never drift from either.

pub mod tree;
pub mod types;

pub use tree::{build_tree, AssetTreeState};
pub use types::{
    AssetInfo, AssetNodeType, AssetTreeNode, Environment, Project, SubProject, Tenant,
};

#[cfg(test)]
mod tests;
