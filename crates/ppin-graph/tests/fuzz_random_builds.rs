use std::collections::BTreeSet;

use ppin_core::rng::RngHandle;
use ppin_core::InteractionGraph;
use ppin_graph::{gen_random_network, Network};
use proptest::prelude::*;

fn check_invariants(network: &Network) {
    let mut keys = BTreeSet::new();
    for id in network.edge_ids() {
        let edge = network.edge(id).unwrap();
        keys.insert(edge.key().clone());
    }
    assert_eq!(keys.len(), network.edge_count());

    let degree_sum: usize = network.iter_nodes().map(|(_, node)| node.degree()).sum();
    assert_eq!(degree_sum, 2 * network.edge_count());

    let distribution = network.degree_distribution();
    assert_eq!(distribution.values().sum::<usize>(), network.node_count());
    if network.node_count() > 0 {
        assert_eq!(distribution.keys().max().copied(), Some(network.max_degree()));
    }
}

fn census<G: InteractionGraph>(graph: &G) -> (usize, usize) {
    (graph.nodes().len(), graph.edges().len())
}

proptest! {
    #[test]
    fn random_builds_respect_invariants(seed in any::<u64>(), nodes in 1usize..12, edges in 0usize..40) {
        let mut rng = RngHandle::from_seed(seed);
        let network = gen_random_network(nodes, edges, &mut rng).unwrap();
        check_invariants(&network);
        prop_assert!(network.edge_count() <= edges);
        prop_assert_eq!(census(&network), (network.node_count(), network.edge_count()));
    }

    #[test]
    fn insertion_preserves_invariants_stepwise(pairs in proptest::collection::vec((0u8..6, 0u8..6), 0..30)) {
        let mut network = Network::new();
        for (a, b) in pairs {
            network.ensure_edge(&format!("P{a}"), &format!("P{b}")).unwrap();
            check_invariants(&network);
        }
    }

    #[test]
    fn trimmed_aliases_resolve_to_one_node(name in "[A-Z]{1,6}") {
        let mut network = Network::new();
        network.ensure_edge(&format!("  {name} "), "peer").unwrap();
        network.ensure_edge(&name, "peer").unwrap();
        prop_assert_eq!(network.edge_count(), 1);
        prop_assert_eq!(network.node_degree(&name).unwrap(), 1);
    }
}
