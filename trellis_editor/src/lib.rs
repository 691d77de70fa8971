// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Editor: the state container tying the interaction core together.
//!
//! [`Editor`] owns the diagram, the viewport, both selection sets, and the
//! gesture machine. A host embeds it by doing three things:
//! - Forward input: [`Editor::pointer_down`] and friends, [`Editor::wheel`],
//!   and [`Editor::frame`] once per display frame.
//! - Issue commands: replace or patch nodes, edges, selection, and viewport.
//! - Render from the read accessors, which expose everything as plain data:
//!   node and edge slices, the viewport transform, selections, and the
//!   ephemeral gesture indicators (selection box, dragged node, ...).
//!
//! All mutation is synchronous; a reader between two calls always observes
//! a complete, consistent state. There is no interior mutability and no
//! global state, so multiple independent editors can coexist.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use trellis_editor::Editor;
//! use trellis_graph::{Edge, Node};
//!
//! let mut editor = Editor::new();
//! editor.add_node(Node::new("a", 0.0, 0.0)).unwrap();
//! editor.add_node(Node::new("b", 200.0, 0.0)).unwrap();
//! editor.add_edge(Edge::new("a", "b")).unwrap();
//!
//! editor.select_all_nodes();
//! assert_eq!(editor.selected_nodes().len(), 2);
//!
//! // Only node "a" is visible through a small view.
//! let visible: Vec<_> = editor.visible_nodes(Size::new(100.0, 100.0)).collect();
//! assert_eq!(visible.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use trellis_geometry::Orientation;
use trellis_gesture::{
    EditorCtx, GestureConfig, GestureMachine, HitTarget, PointerEvent, WheelEvent,
};
use trellis_graph::{
    Diagram, Edge, EdgeKey, EdgePatch, EdgeRejected, Node, NodeId, NodePatch, NodeRejected,
};
use trellis_selection::SelectionSet;
use trellis_view::{Viewport, ViewportPatch};

/// The diagram editor core.
///
/// See the [crate docs](crate) for the embedding contract.
#[derive(Debug, Default)]
pub struct Editor {
    diagram: Diagram,
    viewport: Viewport,
    selected_nodes: SelectionSet<NodeId>,
    selected_edges: SelectionSet<EdgeKey>,
    machine: GestureMachine,
    orientation: Orientation,
}

impl Editor {
    /// Creates an empty editor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty editor with a custom gesture configuration.
    #[must_use]
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            machine: GestureMachine::with_config(config),
            ..Self::default()
        }
    }

    fn with_ctx<R>(&mut self, f: impl FnOnce(&mut GestureMachine, &mut EditorCtx<'_>) -> R) -> R {
        let mut ctx = EditorCtx {
            diagram: &mut self.diagram,
            viewport: &mut self.viewport,
            selected_nodes: &mut self.selected_nodes,
            selected_edges: &mut self.selected_edges,
            orientation: self.orientation,
        };
        f(&mut self.machine, &mut ctx)
    }

    // --- Input forwarding ---

    /// Forwards a pointer-down event to the gesture machine.
    pub fn pointer_down(&mut self, ev: &PointerEvent) {
        self.with_ctx(|machine, ctx| machine.on_pointer_down(ev, ctx));
    }

    /// Forwards a pointer-move event to the gesture machine.
    pub fn pointer_move(&mut self, ev: &PointerEvent) {
        self.with_ctx(|machine, ctx| machine.on_pointer_move(ev, ctx));
    }

    /// Forwards a pointer-up event to the gesture machine.
    pub fn pointer_up(&mut self, ev: &PointerEvent) {
        self.with_ctx(|machine, ctx| machine.on_pointer_up(ev, ctx));
    }

    /// Forwards a pointer cancellation to the gesture machine.
    pub fn pointer_cancel(&mut self, ev: &PointerEvent) {
        self.machine.on_pointer_cancel(ev);
    }

    /// Forwards a wheel event (zoom about the cursor).
    pub fn wheel(&mut self, ev: &WheelEvent) {
        self.with_ctx(|machine, ctx| machine.on_wheel(ev, ctx));
    }

    /// Applies movement coalesced since the last frame. Call once per
    /// display frame.
    pub fn frame(&mut self) {
        self.with_ctx(|machine, ctx| machine.on_frame(ctx));
    }

    // --- Commands ---

    /// Replaces the node list wholesale, pruning stale ids from the node
    /// selection.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.diagram.set_nodes(nodes);
        let diagram = &self.diagram;
        self.selected_nodes.retain(|id| diagram.has_node(id));
    }

    /// Replaces the edge list wholesale, pruning stale keys from the edge
    /// selection.
    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        self.diagram.set_edges(edges);
        let diagram = &self.diagram;
        self.selected_edges.retain(|key| diagram.has_edge(key));
    }

    /// Adds a node, rejecting duplicate ids.
    pub fn add_node(&mut self, node: Node) -> Result<(), NodeRejected> {
        self.diagram.add_node(node)
    }

    /// Adds an edge, rejecting self-loops and duplicates.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), EdgeRejected> {
        self.diagram.add_edge(edge)
    }

    /// Applies a partial update to a node. `false` when the id is unknown.
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> bool {
        self.diagram.update_node(id, patch)
    }

    /// Applies a partial update to an edge. `false` when the key is unknown.
    pub fn update_edge(&mut self, key: &EdgeKey, patch: EdgePatch) -> bool {
        self.diagram.update_edge(key, patch)
    }

    /// Replaces the node selection, keeping only ids that exist.
    pub fn set_selected_nodes(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        let diagram = &self.diagram;
        self.selected_nodes
            .replace_with(ids.into_iter().filter(|id| diagram.has_node(id)));
    }

    /// Replaces the edge selection, keeping only keys that exist.
    pub fn set_selected_edges(&mut self, keys: impl IntoIterator<Item = EdgeKey>) {
        let diagram = &self.diagram;
        self.selected_edges
            .replace_with(keys.into_iter().filter(|key| diagram.has_edge(key)));
    }

    /// Selects every node.
    pub fn select_all_nodes(&mut self) {
        let ids: Vec<NodeId> = self.diagram.nodes().iter().map(|n| n.id.clone()).collect();
        self.selected_nodes.replace_with(ids);
    }

    /// Clears both selections.
    pub fn clear_selection(&mut self) {
        self.selected_nodes.clear();
        self.selected_edges.clear();
    }

    /// Merges a partial viewport update; a patched zoom is clamped.
    pub fn patch_viewport(&mut self, patch: ViewportPatch) {
        self.viewport.apply_patch(patch);
    }

    /// Sets the viewport zoom limits.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.viewport.set_zoom_limits(min_zoom, max_zoom);
    }

    /// Sets the edge routing direction.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    // --- Read accessors ---

    /// All nodes, in paint order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        self.diagram.nodes()
    }

    /// All edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        self.diagram.edges()
    }

    /// The underlying diagram.
    #[must_use]
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// The current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The current edge routing direction.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The selected node ids.
    #[must_use]
    pub fn selected_nodes(&self) -> &SelectionSet<NodeId> {
        &self.selected_nodes
    }

    /// The selected edge keys.
    #[must_use]
    pub fn selected_edges(&self) -> &SelectionSet<EdgeKey> {
        &self.selected_edges
    }

    /// The rubber-band rectangle in screen coordinates, while a box
    /// selection is live.
    #[must_use]
    pub fn selection_box(&self) -> Option<Rect> {
        self.machine.selection_box()
    }

    /// The node being dragged, if any.
    #[must_use]
    pub fn dragged_node(&self) -> Option<&NodeId> {
        self.machine.dragged_node()
    }

    /// The node being resized, if any.
    #[must_use]
    pub fn resizing_node(&self) -> Option<&NodeId> {
        self.machine.resizing_node()
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.machine.is_panning()
    }

    /// Resolves what a world-space point lands on.
    #[must_use]
    pub fn hit_test(&mut self, world: Point) -> HitTarget {
        self.with_ctx(|machine, ctx| machine.hit_test(world, ctx))
    }

    /// The nodes whose bounds intersect the world region visible through a
    /// view of the given screen size.
    pub fn visible_nodes(&self, view_size: Size) -> impl Iterator<Item = &Node> {
        let world = self.viewport.visible_world_rect(view_size);
        self.diagram
            .nodes()
            .iter()
            .filter(move |n| world.overlaps(n.rect()))
    }

    /// A diagnostic snapshot of the editor state.
    #[must_use]
    pub fn debug_info(&self) -> EditorDebugInfo {
        EditorDebugInfo {
            node_count: self.diagram.nodes().len(),
            edge_count: self.diagram.edges().len(),
            selected_node_count: self.selected_nodes.len(),
            selected_edge_count: self.selected_edges.len(),
            viewport_x: self.viewport.x(),
            viewport_y: self.viewport.y(),
            zoom: self.viewport.zoom(),
            gesture_idle: self.machine.is_idle(),
        }
    }
}

/// Diagnostic snapshot returned by [`Editor::debug_info`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorDebugInfo {
    /// Number of nodes in the diagram.
    pub node_count: usize,
    /// Number of edges in the diagram.
    pub edge_count: usize,
    /// Number of selected nodes.
    pub selected_node_count: usize,
    /// Number of selected edges.
    pub selected_edge_count: usize,
    /// Horizontal viewport translation.
    pub viewport_x: f64,
    /// Vertical viewport translation.
    pub viewport_y: f64,
    /// Viewport zoom factor.
    pub zoom: f64,
    /// Whether the gesture machine is idle.
    pub gesture_idle: bool,
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Size;

    use trellis_graph::{Edge, EdgeKey, Node, NodeId};
    use trellis_view::ViewportPatch;

    use super::Editor;

    fn linked_editor() -> Editor {
        let mut editor = Editor::new();
        editor.add_node(Node::new("a", 0.0, 0.0)).unwrap();
        editor.add_node(Node::new("b", 200.0, 0.0)).unwrap();
        editor.add_edge(Edge::new("a", "b")).unwrap();
        editor
    }

    #[test]
    fn set_nodes_prunes_stale_selection() {
        let mut editor = linked_editor();
        editor.select_all_nodes();

        editor.set_nodes(vec![Node::new("a", 0.0, 0.0)]);
        assert_eq!(editor.selected_nodes().items(), [NodeId::new("a")]);
    }

    #[test]
    fn set_edges_prunes_stale_selection() {
        let mut editor = linked_editor();
        editor.set_selected_edges([EdgeKey::new("a", "b")]);

        editor.set_edges(vec![]);
        assert!(editor.selected_edges().is_empty());
    }

    #[test]
    fn selection_commands_filter_unknown_entities() {
        let mut editor = linked_editor();

        editor.set_selected_nodes(["a".into(), "ghost".into()]);
        assert_eq!(editor.selected_nodes().len(), 1);

        editor.set_selected_edges([EdgeKey::new("a", "b"), EdgeKey::new("a", "ghost")]);
        assert_eq!(editor.selected_edges().len(), 1);
    }

    #[test]
    fn visible_nodes_culls_by_viewport() {
        let mut editor = linked_editor();

        // A 100x100 view at the origin sees node a but not node b.
        let visible: Vec<&str> = editor
            .visible_nodes(Size::new(100.0, 100.0))
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(visible, ["a"]);

        // Panning left by 150 brings node b into view and drops a.
        editor.patch_viewport(ViewportPatch {
            x: Some(-150.0),
            ..ViewportPatch::default()
        });
        let visible: Vec<&str> = editor
            .visible_nodes(Size::new(100.0, 100.0))
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(visible, ["b"]);
    }

    #[test]
    fn debug_info_snapshots_counts() {
        let mut editor = linked_editor();
        editor.select_all_nodes();

        let info = editor.debug_info();
        assert_eq!(info.node_count, 2);
        assert_eq!(info.edge_count, 1);
        assert_eq!(info.selected_node_count, 2);
        assert!(info.gesture_idle);
    }
}
