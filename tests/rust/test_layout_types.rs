use super::*;

#[test]
fn test_horizontal_value_and_bucket() {
    assert_eq!(Horizontal::Spread(-4).value(), -4.0);
    assert_eq!(Horizontal::Spread(-4).bucket(), -4);
    assert_eq!(Horizontal::Scaled(2.9).bucket(), 2);
    assert_eq!(Horizontal::Scaled(0.5).bucket(), 0);
}

#[test]
fn test_horizontal_display() {
    assert_eq!(Horizontal::Spread(0).to_string(), "0");
    assert_eq!(Horizontal::Spread(-7).to_string(), "-7");
    assert_eq!(Horizontal::Scaled(1.0).to_string(), "1.0");
    assert_eq!(Horizontal::Scaled(1.5).to_string(), "1.5");
}

#[test]
fn test_layout_result_lookup() {
    let node = PlacedNode {
        id: "A".to_string(),
        group: String::new(),
        color: "#202020".to_string(),
        weight: 1.0,
        ancestors: 0,
        x: Horizontal::Spread(0),
        y: 140.0,
        radius: 0.2,
    };
    let result = LayoutResult {
        nodes: vec![node.clone()],
        successors: vec![vec![]],
        stats: LayoutStats::default(),
    };
    assert_eq!(result.node_count(), 1);
    assert_eq!(result.index_of("A"), Some(0));
    assert_eq!(result.node("A"), Some(&node));
    assert!(result.node("B").is_none());
}

#[test]
fn test_stats_display() {
    let stats = LayoutStats {
        node_count: 3,
        edge_count: 2,
        zero_ancestor_count: 1,
        bucket_count: 3,
        weight_range: Some((1.0, 3.0)),
    };
    let text = stats.to_string();
    assert!(text.contains("# of nodes: 3"));
    assert!(text.contains("# of edges: 2"));
    assert!(text.ends_with("max: 3.0 min: 1.0"));
}
