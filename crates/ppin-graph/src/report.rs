use ppin_core::errors::{ErrorInfo, NetError};
use serde::{Deserialize, Serialize};

use crate::network::Network;

/// Aggregate statistics describing a built network.
///
/// This is the plain-data form handed to presentation layers; the engine
/// never renders windows or writes files itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSummary {
    /// Display name of the network, usually the source file name.
    pub name: String,
    /// Total number of nodes.
    pub nodes: usize,
    /// Total number of edges.
    pub edges: usize,
    /// Average degree; absent for the empty network, where it is undefined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_degree: Option<f64>,
    /// Highest degree present in the network.
    pub max_degree: usize,
    /// Display labels of the hub nodes, in first-seen order.
    pub hubs: Vec<String>,
}

impl NetworkSummary {
    /// Collects the summary for `network` under the provided display name.
    pub fn collect(network: &Network, name: &str) -> Result<Self, NetError> {
        let max_degree = network.max_degree();
        let mut hubs = Vec::new();
        for id in network.hubs_of_degree(max_degree) {
            hubs.push(network.node(id)?.to_string());
        }
        Ok(Self {
            name: name.to_owned(),
            nodes: network.node_count(),
            edges: network.edge_count(),
            average_degree: network.average_degree().ok(),
            max_degree,
            hubs,
        })
    }

    /// Average degree formatted to three decimals, as presented to users.
    pub fn formatted_average(&self) -> Option<String> {
        self.average_degree.map(|avg| format!("{avg:.3}"))
    }

    /// Encodes the summary as JSON for external collaborators.
    pub fn to_json(&self) -> Result<String, NetError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| NetError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
    }
}

/// Renders the two-column degree distribution table.
///
/// A header line identifies the network, then one `degree \t count` row per
/// degree from 1 to the maximum inclusive, with 0 for degrees no node
/// holds. Degree 0 is never emitted. An empty network yields the headers
/// alone.
pub fn render_distribution_table(network: &Network, name: &str) -> String {
    let distribution = network.degree_distribution();
    let mut table = format!("Network: {name}\nDegree\tNo. of nodes with this degree\n");
    for degree in 1..=network.max_degree() {
        let count = distribution.get(&degree).copied().unwrap_or(0);
        table.push_str(&format!("{degree}\t{count}\n"));
    }
    table
}

/// Renders the hub view: the hub degree and the concatenated display
/// labels of every node holding it.
pub fn render_hub_summary(network: &Network) -> Result<String, NetError> {
    let max_degree = network.max_degree();
    let mut labels = String::new();
    for id in network.hubs_of_degree(max_degree) {
        labels.push_str(&network.node(id)?.to_string());
    }
    Ok(format!(
        "Highest degree (hub degree): {max_degree}\nHub nodes are: {labels}"
    ))
}
