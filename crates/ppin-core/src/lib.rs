#![deny(missing_docs)]

//! Core traits and data types for the PPIN interaction-network engine.
//!
//! The engine maintains an undirected graph built incrementally from
//! pairwise interaction records and answers structural statistics queries.
//! This crate holds the shared contracts: identifier newtypes, the
//! [`InteractionGraph`] trait implemented by the engine crate, structured
//! error types, and the deterministic RNG handle used by generators.

use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, NetError};
pub use rng::RngHandle;

/// Identifier for a node within an [`InteractionGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Identifier for an edge within an [`InteractionGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Structural contract for undirected interaction networks.
///
/// Implementations own their node and edge collections; nodes are created
/// lazily the first time an edge references their name, and [`ensure_edge`]
/// is the single sanctioned mutation path. Self-edges are valid and
/// contribute two endpoints to their node's degree.
///
/// [`ensure_edge`]: InteractionGraph::ensure_edge
pub trait InteractionGraph: Send + Sync {
    /// Returns an iterator over all node identifiers in first-seen order.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_>;

    /// Returns an iterator over all edge identifiers in insertion order.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_>;

    /// Returns the endpoint handles of the specified edge.
    ///
    /// The stored order is representational only; edge identity is the
    /// unordered pair of endpoint names.
    fn endpoints(&self, edge: EdgeId) -> Result<(NodeId, NodeId), NetError>;

    /// Returns the trimmed name of the specified node.
    fn node_name(&self, node: NodeId) -> Result<&str, NetError>;

    /// Returns the maintained degree of the specified node.
    fn degree(&self, node: NodeId) -> Result<usize, NetError>;

    /// Returns the number of nodes currently in the graph.
    fn node_count(&self) -> usize;

    /// Returns the number of edges currently in the graph.
    fn edge_count(&self) -> usize;

    /// Inserts the undirected edge between two named endpoints, creating
    /// any missing nodes. Idempotent for duplicate unordered pairs.
    fn ensure_edge(&mut self, one: &str, two: &str) -> Result<EdgeId, NetError>;
}
