use ppin_core::errors::{ErrorInfo, NetError};
use ppin_core::rng::RngHandle;
use rand::Rng;

use crate::network::Network;

/// Builds a random interaction network with deterministic randomness.
///
/// Node names are synthesized as `N0..N{n_nodes - 1}` and `n_edges` pairs
/// are sampled uniformly with replacement, so self-edges occur and
/// duplicate pairs collapse into the existing edge. The resulting edge
/// count is therefore at most `n_edges`, and only sampled nodes exist in
/// the output.
pub fn gen_random_network(
    n_nodes: usize,
    n_edges: usize,
    rng: &mut RngHandle,
) -> Result<Network, NetError> {
    if n_nodes == 0 {
        return Err(NetError::Graph(ErrorInfo::new(
            "empty-graph",
            "random network generation requires at least one node",
        )));
    }
    let names: Vec<String> = (0..n_nodes).map(|idx| format!("N{idx}")).collect();
    let mut network = Network::new();
    for _ in 0..n_edges {
        let one = rng.gen_range(0..n_nodes);
        let two = rng.gen_range(0..n_nodes);
        network.ensure_edge(&names[one], &names[two])?;
    }
    Ok(network)
}
