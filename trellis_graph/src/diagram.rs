// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::types::{
    Edge, EdgeKey, EdgePatch, EdgeRejected, MIN_NODE_SIZE, Node, NodeId, NodePatch, NodeRejected,
};

/// The diagram: flat node and edge lists with linear-scan lookup.
///
/// Node order doubles as paint order; later nodes render on top and win hit
/// testing ties. All mutation commits synchronously, so a reader between two
/// commands always observes a complete state.
#[derive(Clone, Debug, Default)]
pub struct Diagram {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates an empty diagram.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// All nodes, in paint order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Looks up a node by id, mutably.
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    /// Returns `true` if a node with the given id exists.
    #[must_use]
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Looks up an edge by its identity key.
    #[must_use]
    pub fn edge(&self, key: &EdgeKey) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| e.from == key.from && e.to == key.to)
    }

    /// Returns `true` if an edge with the given key exists.
    #[must_use]
    pub fn has_edge(&self, key: &EdgeKey) -> bool {
        self.edge(key).is_some()
    }

    /// Resolves both endpoints of an edge.
    ///
    /// `None` when either endpoint is missing, the dangling-edge case.
    /// Geometry consumers skip such edges rather than treating them as
    /// errors.
    #[must_use]
    pub fn edge_endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
        Some((self.node(&edge.from)?, self.node(&edge.to)?))
    }

    /// Replaces the entire node list.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
    }

    /// Replaces the entire edge list.
    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    /// Adds a node, rejecting duplicate ids.
    pub fn add_node(&mut self, node: Node) -> Result<(), NodeRejected> {
        if self.has_node(&node.id) {
            return Err(NodeRejected::DuplicateId);
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Adds an edge, rejecting self-loops and duplicates.
    ///
    /// Endpoints are *not* required to exist: edges referencing unknown
    /// nodes are tolerated (they simply never produce geometry).
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), EdgeRejected> {
        if edge.from == edge.to {
            return Err(EdgeRejected::SelfLoop);
        }
        if self.has_edge(&edge.key()) {
            return Err(EdgeRejected::Duplicate);
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Applies a partial update to a node.
    ///
    /// Returns `false` (a silent no-op) when the id is unknown. Patched
    /// sizes are floored at [`MIN_NODE_SIZE`].
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        if let Some(x) = patch.x {
            node.x = x;
        }
        if let Some(y) = patch.y {
            node.y = y;
        }
        if let Some(width) = patch.width {
            node.width = width.max(MIN_NODE_SIZE);
        }
        if let Some(height) = patch.height {
            node.height = height.max(MIN_NODE_SIZE);
        }
        if let Some(label) = patch.label {
            node.label = label;
        }
        if let Some(disabled) = patch.disabled {
            node.disabled = disabled;
        }
        true
    }

    /// Applies a partial update to an edge.
    ///
    /// Returns `false` (a silent no-op) when the key is unknown.
    pub fn update_edge(&mut self, key: &EdgeKey, patch: EdgePatch) -> bool {
        let Some(edge) = self
            .edges
            .iter_mut()
            .find(|e| e.from == key.from && e.to == key.to)
        else {
            return false;
        };
        if let Some(label) = patch.label {
            edge.label = label;
        }
        if let Some(color) = patch.color {
            edge.color = color;
        }
        if let Some(animated) = patch.animated {
            edge.animated = animated;
        }
        true
    }
}
