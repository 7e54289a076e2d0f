use ppin_core::{EdgeId, NodeId};

/// Converts a [`NodeId`] into its underlying index within the node arena.
pub(crate) fn node_index(id: NodeId) -> usize {
    id.as_raw() as usize
}

/// Converts an [`EdgeId`] into its underlying index within the edge list.
pub(crate) fn edge_index(id: EdgeId) -> usize {
    id.as_raw() as usize
}

/// Creates a [`NodeId`] from an arena index.
pub(crate) fn make_node(index: usize) -> NodeId {
    NodeId::from_raw(index as u64)
}

/// Creates an [`EdgeId`] from a list index.
pub(crate) fn make_edge(index: usize) -> EdgeId {
    EdgeId::from_raw(index as u64)
}
