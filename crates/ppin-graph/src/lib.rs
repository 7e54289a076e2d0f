#![deny(missing_docs)]
#![doc = include_str!("../docs/graph-api.md")]

//! Undirected interaction-network engine implementing the `ppin-core` contracts.

mod generators;
mod ids;
mod ingest;
mod network;
mod parse;
mod report;
mod stats;

pub use generators::gen_random_network;
pub use ingest::load_network_file;
pub use network::{Edge, Network, Node, PairKey};
pub use report::{render_distribution_table, render_hub_summary, NetworkSummary};
