use ppin_graph::{render_distribution_table, render_hub_summary, Network, NetworkSummary};

fn star() -> Network {
    let mut network = Network::new();
    network
        .load_from_lines("star.txt", ["Hub\tA", "Hub\tB", "Hub\tC"])
        .unwrap();
    network
}

#[test]
fn distribution_table_lists_every_degree_to_max() {
    let network = star();
    let table = render_distribution_table(&network, "star.txt");
    assert_eq!(
        table,
        "Network: star.txt\nDegree\tNo. of nodes with this degree\n1\t3\n2\t0\n3\t1\n"
    );
}

#[test]
fn empty_network_table_has_headers_only() {
    let network = Network::new();
    let table = render_distribution_table(&network, "empty.txt");
    assert_eq!(
        table,
        "Network: empty.txt\nDegree\tNo. of nodes with this degree\n"
    );
}

#[test]
fn hub_summary_concatenates_labels() {
    let network = star();
    let summary = render_hub_summary(&network).unwrap();
    assert_eq!(
        summary,
        "Highest degree (hub degree): 3\nHub nodes are: <Hub>"
    );
}

#[test]
fn tied_hubs_keep_first_seen_order() {
    let mut network = Network::new();
    network.ensure_edge("B", "A").unwrap();
    let summary = render_hub_summary(&network).unwrap();
    assert_eq!(
        summary,
        "Highest degree (hub degree): 1\nHub nodes are: <B><A>"
    );
}

#[test]
fn summary_collects_totals_and_hubs() {
    let mut network = Network::new();
    network
        .load_from_lines("triangle.txt", ["P1\tP2", "P2\tP3", "P1\tP3"])
        .unwrap();
    let summary = NetworkSummary::collect(&network, "triangle.txt").unwrap();
    assert_eq!(summary.name, "triangle.txt");
    assert_eq!(summary.nodes, 3);
    assert_eq!(summary.edges, 3);
    assert_eq!(summary.average_degree, Some(2.0));
    assert_eq!(summary.formatted_average().as_deref(), Some("2.000"));
    assert_eq!(summary.max_degree, 2);
    assert_eq!(summary.hubs, ["<P1>", "<P2>", "<P3>"]);

    let json = summary.to_json().unwrap();
    let restored: NetworkSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, summary);
}

#[test]
fn empty_summary_omits_the_average() {
    let network = Network::new();
    let summary = NetworkSummary::collect(&network, "empty.txt").unwrap();
    assert_eq!(summary.nodes, 0);
    assert_eq!(summary.average_degree, None);
    assert_eq!(summary.formatted_average(), None);
    assert!(summary.hubs.is_empty());

    let json = summary.to_json().unwrap();
    assert!(!json.contains("average_degree"));
}
