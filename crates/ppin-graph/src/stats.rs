use std::collections::BTreeMap;

use ppin_core::errors::{ErrorInfo, NetError};
use ppin_core::NodeId;

use crate::network::Network;

impl Network {
    /// Returns the current degree of the named node.
    ///
    /// The name is trimmed first; empty names and names not present in the
    /// network are rejected.
    pub fn node_degree(&self, name: &str) -> Result<usize, NetError> {
        let trimmed = Self::validate_name(name, "lookup")?;
        let id = self.node_id(trimmed).ok_or_else(|| {
            NetError::Graph(
                ErrorInfo::new("unknown-node", "node is not in the network")
                    .with_context("name", trimmed),
            )
        })?;
        Ok(self.node(id)?.degree())
    }

    /// Returns the average degree, `(2 × edges) / nodes`.
    ///
    /// Every edge contributes two degree endpoints, self-edges included, so
    /// the numerator counts edges twice. The empty network has no
    /// meaningful average and fails instead of dividing by zero.
    pub fn average_degree(&self) -> Result<f64, NetError> {
        if self.node_count() == 0 {
            return Err(NetError::Stats(ErrorInfo::new(
                "empty-network",
                "average degree is undefined for a network with no nodes",
            )));
        }
        Ok((self.edge_count() as f64 * 2.0) / self.node_count() as f64)
    }

    /// Returns the highest degree over all nodes, 0 for an empty network.
    pub fn max_degree(&self) -> usize {
        self.iter_nodes()
            .map(|(_, node)| node.degree())
            .max()
            .unwrap_or(0)
    }

    /// Returns all nodes whose degree equals `degree`, in first-seen order.
    ///
    /// Callers typically pass [`max_degree`](Network::max_degree) to obtain
    /// the hub set, but any value is accepted.
    pub fn hubs_of_degree(&self, degree: usize) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, node)| node.degree() == degree)
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns the count of nodes per distinct degree value.
    ///
    /// Degrees with no nodes are absent from the mapping; callers rendering
    /// a dense table default missing keys to 0.
    pub fn degree_distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for (_, node) in self.iter_nodes() {
            *distribution.entry(node.degree()).or_insert(0) += 1;
        }
        distribution
    }
}
