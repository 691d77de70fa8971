// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state variants and their per-gesture context.

use hashbrown::HashMap;
use kurbo::{Point, Vec2};

use trellis_graph::{EdgeKey, NodeId};

use crate::events::PointerId;

/// What a world-space point lands on, in hit-test priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The resize grip of a selected node.
    ResizeHandle(NodeId),
    /// An enabled node's body.
    Node(NodeId),
    /// An edge's invisible hit stroke.
    Edge(EdgeKey),
    /// Empty canvas.
    Canvas,
}

/// A press on a node that has not yet moved past the drag threshold.
#[derive(Clone, Debug)]
pub(crate) struct NodePress {
    pub(crate) pointer: PointerId,
    /// The node the press started on.
    pub(crate) node: NodeId,
    /// Screen position of the press, for threshold checks.
    pub(crate) start: Point,
    /// Offsets from the press point to each selected node's corner, captured
    /// once at press time so a later drag never accumulates drift.
    pub(crate) offsets: HashMap<NodeId, Vec2>,
    /// Shift-click on an already selected node: deselect on release unless a
    /// drag happens first.
    pub(crate) potential_deselect: Option<NodeId>,
    /// Plain click on one node of a multi-selection: collapse to it on
    /// release unless a drag happens first.
    pub(crate) replace_on_click: Option<NodeId>,
}

/// A press on an edge that has not yet moved past the drag threshold.
#[derive(Clone, Debug)]
pub(crate) struct EdgePress {
    pub(crate) pointer: PointerId,
    pub(crate) start: Point,
    pub(crate) key: EdgeKey,
}

/// A single touch on empty canvas, still ambiguous between tap and pan.
#[derive(Clone, Debug)]
pub(crate) struct TouchPress {
    pub(crate) pointer: PointerId,
    pub(crate) start: Point,
    /// Timestamp of the down event, milliseconds.
    pub(crate) down_at: u64,
    /// Pan anchor captured at press time, used if this becomes a pan.
    pub(crate) anchor: Vec2,
}

/// An active pan.
#[derive(Clone, Debug)]
pub(crate) struct PanContext {
    pub(crate) pointer: PointerId,
    pub(crate) anchor: Vec2,
}

/// An active drag of the selected nodes.
#[derive(Clone, Debug)]
pub(crate) struct DragContext {
    pub(crate) pointer: PointerId,
    /// The node the press started on.
    pub(crate) node: NodeId,
    pub(crate) offsets: HashMap<NodeId, Vec2>,
}

/// An active resize of one node from its bottom-right grip.
#[derive(Clone, Debug)]
pub(crate) struct ResizeContext {
    pub(crate) pointer: PointerId,
    pub(crate) node: NodeId,
    /// World position of the press.
    pub(crate) start: Point,
    pub(crate) initial_width: f64,
    pub(crate) initial_height: f64,
}

/// An active rubber-band box selection.
#[derive(Clone, Debug)]
pub(crate) struct BoxSelectContext {
    pub(crate) pointer: PointerId,
    /// Both corners in screen coordinates.
    pub(crate) start: Point,
    pub(crate) current: Point,
}

/// The one-at-a-time gesture the machine is in.
///
/// At most one gesture is ever active; starting a new one requires being in
/// `Idle` (pinch is the exception, which cancels compatible gestures).
#[derive(Clone, Debug, Default)]
pub(crate) enum GestureState {
    #[default]
    Idle,
    NodePress(NodePress),
    EdgePress(EdgePress),
    TouchPress(TouchPress),
    Panning(PanContext),
    Dragging(DragContext),
    Resizing(ResizeContext),
    BoxSelecting(BoxSelectContext),
    Pinching,
}

impl GestureState {
    /// The pointer driving the current gesture, if any.
    pub(crate) fn pointer(&self) -> Option<PointerId> {
        match self {
            Self::Idle | Self::Pinching => None,
            Self::NodePress(p) => Some(p.pointer),
            Self::EdgePress(p) => Some(p.pointer),
            Self::TouchPress(p) => Some(p.pointer),
            Self::Panning(p) => Some(p.pointer),
            Self::Dragging(p) => Some(p.pointer),
            Self::Resizing(p) => Some(p.pointer),
            Self::BoxSelecting(p) => Some(p.pointer),
        }
    }
}
