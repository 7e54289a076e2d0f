use ppin_core::NetError;
use ppin_graph::Network;

#[test]
fn surrounding_whitespace_is_trimmed() {
    let mut network = Network::new();
    network.ensure_edge(" A ", "B").unwrap();
    network.ensure_edge("A", "C").unwrap();
    assert_eq!(network.node_count(), 3);
    assert_eq!(network.node_degree("A").unwrap(), 2);
    assert_eq!(network.node_degree(" A ").unwrap(), 2);
}

#[test]
fn empty_name_is_rejected_without_side_effects() {
    let mut network = Network::new();
    let err = network.ensure_edge("", "B").unwrap_err();
    match err {
        NetError::Graph(info) => assert_eq!(info.code, "invalid-name"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(network.node_count(), 0);
    assert_eq!(network.edge_count(), 0);
}

#[test]
fn whitespace_only_name_is_rejected() {
    let mut network = Network::new();
    let err = network.ensure_edge("   ", "B").unwrap_err();
    match err {
        NetError::Graph(info) => {
            assert_eq!(info.code, "invalid-name");
            assert_eq!(info.context.get("endpoint"), Some(&"one".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(network.node_count(), 0);
}

#[test]
fn second_endpoint_is_validated_too() {
    let mut network = Network::new();
    let err = network.ensure_edge("A", " ").unwrap_err();
    match err {
        NetError::Graph(info) => {
            assert_eq!(info.code, "invalid-name");
            assert_eq!(info.context.get("endpoint"), Some(&"two".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(network.node_count(), 0);
}

#[test]
fn unknown_node_degree_lookup_fails() {
    let network = Network::new();
    let err = network.node_degree("X").unwrap_err();
    match err {
        NetError::Graph(info) => {
            assert_eq!(info.code, "unknown-node");
            assert_eq!(info.context.get("name"), Some(&"X".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn degree_lookup_validates_before_searching() {
    let network = Network::new();
    let err = network.node_degree("   ").unwrap_err();
    match err {
        NetError::Graph(info) => assert_eq!(info.code, "invalid-name"),
        other => panic!("unexpected error: {other:?}"),
    }
}
