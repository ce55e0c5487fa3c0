#[cfg(test)]
mod tests {
    use crate::tree::*;
    use crate::types::*;
    use std::collections::HashSet;

    fn info(status: &str, risk: f64, vulns: u32) -> AssetInfo {
        AssetInfo {
            status: status.into(),
            risk_score: risk,
            vulnerabilities_count: vulns,
        }
    }

    fn sample_tenants() -> Vec<Tenant> {
        vec![Tenant {
            id: "t1".into(),
            name: "Acme Corp".into(),
            info: info("active", 7.2, 14),
            projects: vec![
                Project {
                    id: "p1".into(),
                    name: "Storefront".into(),
                    info: info("active", 6.1, 9),
                    sub_projects: vec![SubProject {
                        id: "sp1".into(),
                        name: "Checkout".into(),
                        info: info("active", 8.4, 6),
                        environments: vec![
                            Environment { id: "e1".into(), name: "prod".into(), info: info("active", 8.4, 4) },
                            Environment { id: "e2".into(), name: "staging".into(), info: info("active", 3.0, 2) },
                        ],
                    }],
                },
                Project {
                    id: "p2".into(),
                    name: "Billing".into(),
                    info: info("active", 2.5, 1),
                    sub_projects: vec![],
                },
            ],
        }]
    }

    fn walk<'a>(nodes: &'a [AssetTreeNode], out: &mut Vec<&'a AssetTreeNode>) {
        for node in nodes {
            out.push(node);
            walk(&node.children, out);
        }
    }

    #[test]
    fn test_levels_increase_by_one_per_generation() {
        let tree = build_tree(&sample_tenants(), &HashSet::new(), None);
        fn check(node: &AssetTreeNode) {
            for child in &node.children {
                assert_eq!(child.level, node.level + 1);
                assert_eq!(child.parent_id.as_deref(), Some(node.id.as_str()));
                check(child);
            }
        }
        for root in &tree {
            assert_eq!(root.level, 0);
            assert!(root.parent_id.is_none());
            check(root);
        }
    }

    #[test]
    fn test_children_preserve_source_order() {
        let tree = build_tree(&sample_tenants(), &HashSet::new(), None);
        let projects: Vec<&str> = tree[0].children.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(projects, vec!["p1", "p2"]);
        let envs: Vec<&str> = tree[0].children[0].children[0]
            .children
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(envs, vec!["e1", "e2"]);
    }

    #[test]
    fn test_environment_nodes_are_leaves() {
        let tree = build_tree(&sample_tenants(), &HashSet::new(), None);
        let mut all = Vec::new();
        walk(&tree, &mut all);
        for node in all {
            if node.node_type == AssetNodeType::Environment {
                assert!(node.is_leaf());
                assert!(node.children.is_empty());
                assert_eq!(node.level, 3);
            }
        }
    }

    #[test]
    fn test_ids_unique_across_tree() {
        let tree = build_tree(&sample_tenants(), &HashSet::new(), None);
        let mut all = Vec::new();
        walk(&tree, &mut all);
        let ids: HashSet<&str> = all.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_expanded_selected_derived_from_state() {
        let mut expanded = HashSet::new();
        expanded.insert("p1".to_string());
        let tree = build_tree(&sample_tenants(), &expanded, Some("e2"));

        let mut all = Vec::new();
        walk(&tree, &mut all);
        for node in all {
            assert_eq!(node.expanded, node.id == "p1");
            assert_eq!(node.selected, node.id == "e2");
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let state = AssetTreeState::new();
        assert!(!state.is_expanded("t1"));
        state.toggle_node("t1");
        assert!(state.is_expanded("t1"));
        state.toggle_node("t1");
        assert!(!state.is_expanded("t1"));
    }

    #[test]
    fn test_toggle_visible_to_next_build() {
        let tenants = sample_tenants();
        let state = AssetTreeState::new();
        state.toggle_node("t1");
        let tree = state.build(&tenants);
        assert!(tree[0].expanded);
    }

    #[test]
    fn test_expand_all_then_collapse_all() {
        let tenants = sample_tenants();
        let state = AssetTreeState::new();

        state.expand_all(&tenants);
        let tree = state.build(&tenants);
        let mut all = Vec::new();
        walk(&tree, &mut all);
        assert!(all.iter().all(|n| n.expanded));

        state.collapse_all();
        let tree = state.build(&tenants);
        let mut all = Vec::new();
        walk(&tree, &mut all);
        assert!(all.iter().all(|n| !n.expanded));
    }

    #[test]
    fn test_single_selection_replaced() {
        let tenants = sample_tenants();
        let state = AssetTreeState::new();
        state.select_node("p1");
        state.select_node("e1");

        let tree = state.build(&tenants);
        let mut all = Vec::new();
        walk(&tree, &mut all);
        let selected: Vec<&str> = all.iter().filter(|n| n.selected).map(|n| n.id.as_str()).collect();
        assert_eq!(selected, vec!["e1"]);

        state.clear_selection();
        assert_eq!(state.selected(), None);
    }
}
