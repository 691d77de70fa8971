// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: identifiers, nodes, edges, patches, and rejections.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect};

/// Default width of a freshly created node, in world units.
pub const DEFAULT_NODE_WIDTH: f64 = 80.0;
/// Default height of a freshly created node, in world units.
pub const DEFAULT_NODE_HEIGHT: f64 = 40.0;
/// Minimum node width/height; resize and patches never go below this.
pub const MIN_NODE_SIZE: f64 = 20.0;

/// Identifier for a node.
///
/// Ids are string-backed, unique within a diagram, and stable for the
/// diagram's lifetime: moving or resizing a node never changes its id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Creates an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of an edge: the ordered pair of its endpoint node ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    /// Source node id.
    pub from: NodeId,
    /// Target node id.
    pub to: NodeId,
}

impl EdgeKey {
    /// Creates a key from the two endpoint ids.
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A node on the canvas: a world-space rectangle with display attributes.
///
/// `(x, y)` is the top-left corner in world units. Size is kept at or above
/// [`MIN_NODE_SIZE`] by the constructors and patch application; gesture code
/// enforces the same floor during interactive resize.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Stable unique identifier.
    pub id: NodeId,
    /// World-space x of the top-left corner.
    pub x: f64,
    /// World-space y of the top-left corner.
    pub y: f64,
    /// Width in world units.
    pub width: f64,
    /// Height in world units.
    pub height: f64,
    /// Optional display content.
    pub label: Option<String>,
    /// Disabled nodes render dimmed and are not interactive.
    pub disabled: bool,
}

impl Node {
    /// Creates a node at `(x, y)` with the default size.
    pub fn new(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
            label: None,
            disabled: false,
        }
    }

    /// Sets the size, floored at [`MIN_NODE_SIZE`] per axis.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width.max(MIN_NODE_SIZE);
        self.height = height.max(MIN_NODE_SIZE);
        self
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Top-left corner as a point.
    #[must_use]
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// World-space bounding box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// A directed connection between two nodes, identified by its endpoints.
///
/// Edges carry no geometry of their own; their curve is derived from the
/// endpoint nodes plus the diagram orientation every time it is needed.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// Source node id.
    pub from: NodeId,
    /// Target node id.
    pub to: NodeId,
    /// Optional display label.
    pub label: Option<String>,
    /// Optional stroke color, as an opaque string the renderer interprets.
    pub color: Option<String>,
    /// Whether the renderer animates the edge.
    pub animated: bool,
}

impl Edge {
    /// Creates a plain edge between two nodes.
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            color: None,
            animated: false,
        }
    }

    /// Returns the identity key of this edge.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

/// Partial node update; absent fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodePatch {
    /// New x coordinate.
    pub x: Option<f64>,
    /// New y coordinate.
    pub y: Option<f64>,
    /// New width, floored at [`MIN_NODE_SIZE`].
    pub width: Option<f64>,
    /// New height, floored at [`MIN_NODE_SIZE`].
    pub height: Option<f64>,
    /// New label; `Some(None)` clears it.
    pub label: Option<Option<String>>,
    /// New disabled flag.
    pub disabled: Option<bool>,
}

/// Partial edge update; absent fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgePatch {
    /// New label; `Some(None)` clears it.
    pub label: Option<Option<String>>,
    /// New color; `Some(None)` clears it.
    pub color: Option<Option<String>>,
    /// New animated flag.
    pub animated: Option<bool>,
}

/// Why an `add_node` command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRejected {
    /// A node with the same id already exists.
    DuplicateId,
}

impl fmt::Display for NodeRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId => f.write_str("a node with this id already exists"),
        }
    }
}

impl core::error::Error for NodeRejected {}

/// Why an `add_edge` command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeRejected {
    /// The edge connects a node to itself.
    SelfLoop,
    /// An edge with the same `(from, to)` pair already exists.
    Duplicate,
}

impl fmt::Display for EdgeRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop => f.write_str("an edge cannot connect a node to itself"),
            Self::Duplicate => f.write_str("an identical edge already exists"),
        }
    }
}

impl core::error::Error for EdgeRejected {}
