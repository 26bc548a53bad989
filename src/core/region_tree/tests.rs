use super::*;

fn rect(x: i32, y: i32) -> GridRect {
    GridRect::new(x, y, 4, 4)
}

/// Baut `town -> { yard -> { shed }, market }`.
fn sample_tree() -> RegionTree {
    let mut tree = RegionTree::new();
    tree.add("town", GridRect::new(0, 0, 20, 20), None).unwrap();
    tree.add("yard", rect(0, 0), Some("town")).unwrap();
    tree.add("shed", GridRect::new(1, 1, 2, 2), Some("yard"))
        .unwrap();
    tree.add("market", rect(10, 10), Some("town")).unwrap();
    tree
}

#[test]
fn add_rejects_duplicates_and_unknown_parents() {
    let mut tree = sample_tree();
    assert_eq!(
        tree.add("yard", rect(5, 5), None),
        Err(LayerError::NameTaken {
            name: "yard".into()
        })
    );
    assert_eq!(
        tree.add("pond", rect(5, 5), Some("lake")),
        Err(LayerError::NotFound {
            name: "lake".into()
        })
    );
    assert_eq!(tree.add("  ", rect(5, 5), None), Err(LayerError::EmptyName));
    assert_eq!(tree.len(), 4);
}

#[test]
fn rename_keeps_children_and_position() {
    let mut tree = sample_tree();
    tree.rename("yard", "garden").unwrap();

    assert!(tree.find("yard").is_none());
    let garden = tree.find("garden").expect("umbenannter Knoten");
    assert_eq!(garden.children, vec!["shed".to_string()]);
    assert_eq!(garden.parent.as_deref(), Some("town"));
    assert_eq!(
        tree.find("shed").and_then(|n| n.parent.as_deref()),
        Some("garden")
    );
    assert_eq!(
        tree.find("town").map(|n| n.children.clone()),
        Some(vec!["garden".to_string(), "market".to_string()])
    );
}

#[test]
fn rename_to_taken_name_is_rejected_without_change() {
    let mut tree = sample_tree();
    assert!(matches!(
        tree.rename("yard", "market"),
        Err(LayerError::NameTaken { .. })
    ));
    assert!(tree.contains("yard"));
    assert!(matches!(
        tree.rename("nowhere", "x"),
        Err(LayerError::NotFound { .. })
    ));
}

#[test]
fn delete_orphans_children_to_root() {
    let mut tree = sample_tree();
    let removed = tree.delete("yard").unwrap();

    assert_eq!(removed.children, vec!["shed".to_string()]);
    assert!(tree.find("shed").is_some_and(|n| n.parent.is_none()));
    assert_eq!(tree.roots(), &["town".to_string(), "shed".to_string()]);
    assert_eq!(
        tree.find("town").map(|n| n.children.clone()),
        Some(vec!["market".to_string()])
    );
}

#[test]
fn move_into_own_descendant_is_a_cycle_and_a_no_op() {
    let mut tree = sample_tree();
    let before = tree.to_nested();

    assert_eq!(
        tree.move_to("yard", "shed"),
        Err(LayerError::Cycle {
            name: "yard".into(),
            target: "shed".into()
        })
    );
    assert!(matches!(
        tree.move_to("town", "town"),
        Err(LayerError::Cycle { .. })
    ));
    assert_eq!(tree.to_nested(), before);
}

#[test]
fn move_and_move_to_root_rewire_parents() {
    let mut tree = sample_tree();
    tree.move_to("shed", "market").unwrap();
    assert!(tree.is_ancestor("market", "shed"));
    assert!(tree.is_ancestor("town", "shed"));
    assert!(!tree.is_ancestor("yard", "shed"));

    tree.move_to_root("market").unwrap();
    assert_eq!(tree.roots(), &["town".to_string(), "market".to_string()]);
    assert!(!tree.is_ancestor("town", "shed"));
}

#[test]
fn random_moves_never_create_cycles() {
    let names = ["a", "b", "c", "d", "e", "f"];
    let mut tree = RegionTree::new();
    for name in names {
        tree.add(name, rect(0, 0), None).unwrap();
    }

    // Deterministische Pseudo-Zufallsfolge (LCG)
    let mut seed: u32 = 7;
    for _ in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let from = names[(seed >> 8) as usize % names.len()];
        let to = names[(seed >> 16) as usize % names.len()];
        let _ = tree.move_to(from, to);

        for name in names {
            assert!(!tree.is_ancestor(name, name), "{name} ist eigener Vorfahre");
        }
    }
    let total: usize = tree.to_nested().iter().map(count_nodes).sum();
    assert_eq!(total, names.len());
}

fn count_nodes(node: &RegionSnapshot) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}

#[test]
fn descendants_are_post_order() {
    let tree = sample_tree();
    assert_eq!(
        tree.descendants("town"),
        vec![
            "shed".to_string(),
            "yard".to_string(),
            "market".to_string()
        ]
    );
    assert!(tree.descendants("shed").is_empty());
}

#[test]
fn nested_snapshot_uses_inclusive_corners() {
    let tree = sample_tree();
    let nested = tree.to_nested();
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0].rect, [[0, 0], [19, 19]]);
    assert_eq!(nested[0].children[0].children[0].rect, [[1, 1], [2, 2]]);
}
