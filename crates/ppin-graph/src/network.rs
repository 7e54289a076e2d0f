use std::collections::BTreeMap;
use std::fmt;

use ppin_core::errors::{ErrorInfo, NetError};
use ppin_core::{EdgeId, InteractionGraph, NodeId};

use crate::ids::{edge_index, make_edge, make_node, node_index};
use crate::parse;

/// A named vertex owned by a [`Network`].
///
/// The degree counts incident edge endpoints, so a self-edge contributes
/// two. Only the owning network mutates it, during edge insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    degree: usize,
}

impl Node {
    fn new(name: String) -> Self {
        Self { name, degree: 0 }
    }

    /// Returns the trimmed node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maintained degree count.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub(crate) fn bump_degree(&mut self) {
        self.degree += 1;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}

/// An undirected edge stored as a pair of arena handles.
///
/// The stored order is representational only; identity is the canonical
/// unordered name pair. Self-edges carry the same handle twice. Immutable
/// once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    one: NodeId,
    two: NodeId,
    key: PairKey,
}

impl Edge {
    /// Returns the first endpoint handle as stored.
    pub fn one(&self) -> NodeId {
        self.one
    }

    /// Returns the second endpoint handle as stored.
    pub fn two(&self) -> NodeId {
        self.two
    }

    /// Returns the canonical unordered name pair identifying this edge.
    pub fn key(&self) -> &PairKey {
        &self.key
    }
}

/// Canonical key used to deduplicate edges.
///
/// The two trimmed endpoint names are ordered lexicographically at
/// construction, so `(A, B)` and `(B, A)` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Builds the canonical key for an unordered name pair.
    pub fn new(one: &str, two: &str) -> Self {
        if one <= two {
            Self {
                first: one.to_owned(),
                second: two.to_owned(),
            }
        } else {
            Self {
                first: two.to_owned(),
                second: one.to_owned(),
            }
        }
    }

    /// Returns the lexicographically smaller endpoint name.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the lexicographically larger endpoint name.
    pub fn second(&self) -> &str {
        &self.second
    }
}

/// Undirected interaction network with deduplicated insertion.
///
/// Owns all nodes in an arena kept in first-seen order and all edges in
/// insertion order, plus a name index and a canonical pair index used only
/// for deduplication. Mutation happens exclusively through
/// [`ensure_edge`](Network::ensure_edge) and the two ingestion entry
/// points; every statistics query is a read-only scan.
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    name_index: BTreeMap<String, NodeId>,
    pair_index: BTreeMap<PairKey, EdgeId>,
}

impl Network {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims a node name, rejecting names that are empty afterwards.
    pub(crate) fn validate_name<'a>(name: &'a str, endpoint: &str) -> Result<&'a str, NetError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NetError::Graph(
                ErrorInfo::new("invalid-name", "node name cannot be empty")
                    .with_context("endpoint", endpoint),
            ));
        }
        Ok(trimmed)
    }

    /// Returns the handle for `name`, appending a fresh degree-0 node when
    /// the name has not been seen before. Expects a validated name.
    pub(crate) fn ensure_node(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.name_index.get(name) {
            return *id;
        }
        let id = make_node(self.nodes.len());
        self.nodes.push(Node::new(name.to_owned()));
        self.name_index.insert(name.to_owned(), id);
        id
    }

    /// Inserts the undirected edge `(one, two)` if its unordered pair is new.
    ///
    /// Both names are trimmed and validated before any state changes.
    /// Duplicate pairs, in either ordering and including duplicate
    /// self-edges, return the existing edge handle without touching the
    /// network. A new edge increments each endpoint's degree by one, so a
    /// self-edge increments its node's degree twice.
    pub fn ensure_edge(&mut self, one: &str, two: &str) -> Result<EdgeId, NetError> {
        let one = Self::validate_name(one, "one")?;
        let two = Self::validate_name(two, "two")?;
        let key = PairKey::new(one, two);
        if let Some(existing) = self.pair_index.get(&key) {
            return Ok(*existing);
        }
        let node_one = self.ensure_node(one);
        let node_two = self.ensure_node(two);
        let id = make_edge(self.edges.len());
        self.edges.push(Edge {
            one: node_one,
            two: node_two,
            key: key.clone(),
        });
        self.pair_index.insert(key, id);
        self.node_mut(node_one)?.bump_degree();
        self.node_mut(node_two)?.bump_degree();
        Ok(id)
    }

    /// Adds a single comma-separated interaction such as `"P12459,P60879"`.
    ///
    /// Exactly two fields are required; anything else fails without
    /// modifying the network.
    pub fn add_interaction(&mut self, text: &str) -> Result<EdgeId, NetError> {
        let (one, two) = parse::split_interaction(text)?;
        self.ensure_edge(one, two)
    }

    /// Bulk-loads tab-separated interaction records.
    ///
    /// Each line must contain exactly two tab-separated fields. The first
    /// malformed line aborts the load with an error naming `source` and the
    /// 1-based line number; edges inserted from preceding valid lines are
    /// retained. Returns the number of lines consumed.
    pub fn load_from_lines<I, S>(&mut self, source: &str, lines: I) -> Result<usize, NetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut consumed = 0;
        for (idx, line) in lines.into_iter().enumerate() {
            let number = idx + 1;
            let (one, two) = parse::split_record(line.as_ref(), source, number)?;
            self.ensure_edge(one, two)
                .map_err(|err| err.at_line(source, number))?;
            consumed = number;
        }
        Ok(consumed)
    }

    /// Looks up a node handle by name, trimming the input first.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name.trim()).copied()
    }

    /// Returns the node stored under the provided handle.
    pub fn node(&self, id: NodeId) -> Result<&Node, NetError> {
        self.nodes.get(node_index(id)).ok_or_else(|| {
            NetError::Graph(
                ErrorInfo::new("unknown-node", "node does not exist")
                    .with_context("node", id.as_raw().to_string()),
            )
        })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, NetError> {
        self.nodes.get_mut(node_index(id)).ok_or_else(|| {
            NetError::Graph(
                ErrorInfo::new("unknown-node", "node does not exist")
                    .with_context("node", id.as_raw().to_string()),
            )
        })
    }

    /// Returns the edge stored under the provided handle.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge, NetError> {
        self.edges.get(edge_index(id)).ok_or_else(|| {
            NetError::Graph(
                ErrorInfo::new("unknown-edge", "edge does not exist")
                    .with_context("edge", id.as_raw().to_string()),
            )
        })
    }

    /// Returns all node handles in first-seen order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        (0..self.nodes.len()).map(make_node).collect()
    }

    /// Returns all edge handles in insertion order.
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        (0..self.edges.len()).map(make_edge).collect()
    }

    /// Iterates nodes in first-seen order together with their handles.
    pub fn iter_nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (make_node(idx), node))
    }

    /// Returns the number of nodes currently in the network.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges currently in the network.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Renders an edge as `<one>-<two>` using each endpoint's display form.
    ///
    /// Edges hold arena handles rather than names, so rendering is a
    /// network-level query.
    pub fn edge_label(&self, id: EdgeId) -> Result<String, NetError> {
        let edge = self.edge(id)?;
        let one = self.node(edge.one())?;
        let two = self.node(edge.two())?;
        Ok(format!("{one}-{two}"))
    }
}

impl InteractionGraph for Network {
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = NodeId> + '_> {
        Box::new(self.node_ids().into_iter())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_> {
        Box::new(self.edge_ids().into_iter())
    }

    fn endpoints(&self, edge: EdgeId) -> Result<(NodeId, NodeId), NetError> {
        let edge = self.edge(edge)?;
        Ok((edge.one(), edge.two()))
    }

    fn node_name(&self, node: NodeId) -> Result<&str, NetError> {
        Ok(self.node(node)?.name())
    }

    fn degree(&self, node: NodeId) -> Result<usize, NetError> {
        Ok(self.node(node)?.degree())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn ensure_edge(&mut self, one: &str, two: &str) -> Result<EdgeId, NetError> {
        Network::ensure_edge(self, one, two)
    }
}

trait LineContextExt {
    fn at_line(self, source: &str, number: usize) -> NetError;
}

impl LineContextExt for NetError {
    fn at_line(self, source: &str, number: usize) -> NetError {
        let annotate = |info: ErrorInfo| {
            info.with_context("source", source)
                .with_context("line", number.to_string())
        };
        match self {
            NetError::Graph(info) => NetError::Graph(annotate(info)),
            NetError::Parse(info) => NetError::Parse(annotate(info)),
            other => other,
        }
    }
}
