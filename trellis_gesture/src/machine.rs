// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use trellis_geometry::{Orientation, contains_rect, cubic_bounding_box, edge_curve, edge_hit};
use trellis_graph::{Diagram, EdgeKey, MIN_NODE_SIZE, NodeId};
use trellis_selection::SelectionSet;
use trellis_view::{PinchTracker, Viewport, magnetic_snap};

use crate::config::GestureConfig;
use crate::events::{Modifiers, PointerButton, PointerEvent, PointerId, PointerType, WheelEvent};
use crate::state::{
    BoxSelectContext, DragContext, EdgePress, GestureState, HitTarget, NodePress, PanContext,
    ResizeContext, TouchPress,
};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Everything a gesture is allowed to touch, borrowed from the editor for
/// the duration of one event or frame call.
///
/// The machine is the sole writer of node positions and sizes during
/// drag/resize and of the selection sets during click and box selection;
/// routing all of that through this struct keeps the borrow story explicit.
#[derive(Debug)]
pub struct EditorCtx<'a> {
    /// The node and edge model.
    pub diagram: &'a mut Diagram,
    /// The pan/zoom camera.
    pub viewport: &'a mut Viewport,
    /// Selected node ids.
    pub selected_nodes: &'a mut SelectionSet<NodeId>,
    /// Selected edge keys.
    pub selected_edges: &'a mut SelectionSet<EdgeKey>,
    /// Edge routing direction, needed to derive edge curves for hit testing.
    pub orientation: Orientation,
}

/// The most recent pointer move, held until the next frame tick.
#[derive(Clone, Copy, Debug)]
struct MoveSample {
    pos: Point,
    modifiers: Modifiers,
}

/// The pointer gesture state machine.
///
/// Feed it pointer and wheel events as they arrive, then call
/// [`GestureMachine::on_frame`] once per animation frame. Events that start
/// or end a gesture take effect immediately; continuous movement is
/// coalesced so that each frame applies only the latest pointer position.
///
/// At most one gesture is active at a time. A press is kept ambiguous until
/// movement crosses a threshold, so a click and the start of a drag can be
/// told apart; see the per-method docs for the exact tie-break rules.
#[derive(Debug, Default)]
pub struct GestureMachine {
    config: GestureConfig,
    state: GestureState,
    /// Live touch contacts, in the order they went down.
    touches: SmallVec<[(PointerId, Point); 4]>,
    pinch: PinchTracker,
    pending: Option<MoveSample>,
}

impl GestureMachine {
    /// Creates a machine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine with a custom configuration.
    #[must_use]
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.state, GestureState::Panning(_))
    }

    /// Returns `true` while a two-finger pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.state, GestureState::Pinching)
    }

    /// The node the pointer went down on, while a drag is active.
    #[must_use]
    pub fn dragged_node(&self) -> Option<&NodeId> {
        match &self.state {
            GestureState::Dragging(drag) => Some(&drag.node),
            _ => None,
        }
    }

    /// The node being resized, while a resize is active.
    #[must_use]
    pub fn resizing_node(&self) -> Option<&NodeId> {
        match &self.state {
            GestureState::Resizing(resize) => Some(&resize.node),
            _ => None,
        }
    }

    /// The rubber-band rectangle in screen coordinates, while a box
    /// selection is active.
    #[must_use]
    pub fn selection_box(&self) -> Option<Rect> {
        match &self.state {
            GestureState::BoxSelecting(b) => Some(Rect::from_points(b.start, b.current)),
            _ => None,
        }
    }

    /// Resolves what a world-space point lands on.
    ///
    /// Priority: resize grips of selected nodes, then node bodies in reverse
    /// paint order (topmost wins), then the nearest edge whose hit stroke
    /// contains the point, then empty canvas. Disabled nodes are skipped
    /// entirely.
    #[must_use]
    pub fn hit_test(&self, world: Point, ctx: &EditorCtx<'_>) -> HitTarget {
        let grip = self.config.resize_handle_size;
        for node in ctx.diagram.nodes().iter().rev() {
            if node.disabled || !ctx.selected_nodes.contains(&node.id) {
                continue;
            }
            let r = node.rect();
            let handle = Rect::new(r.x1 - grip, r.y1 - grip, r.x1, r.y1);
            if handle.contains(world) {
                return HitTarget::ResizeHandle(node.id.clone());
            }
        }
        for node in ctx.diagram.nodes().iter().rev() {
            if !node.disabled && node.rect().contains(world) {
                return HitTarget::Node(node.id.clone());
            }
        }
        let mut best: Option<(f64, EdgeKey)> = None;
        for edge in ctx.diagram.edges() {
            let Some((from, to)) = ctx.diagram.edge_endpoints(edge) else {
                continue;
            };
            let curve = edge_curve(from.rect(), to.rect(), ctx.orientation);
            if let Some(dist) = edge_hit(world, &curve, self.config.edge_hit_half_width)
                && best.as_ref().is_none_or(|(b, _)| dist < *b)
            {
                best = Some((dist, edge.key()));
            }
        }
        match best {
            Some((_, key)) => HitTarget::Edge(key),
            None => HitTarget::Canvas,
        }
    }

    /// Handles a pointer going down.
    ///
    /// Starts a new gesture only from idle; a second touch landing during a
    /// compatible gesture cancels it into a pinch instead. Middle or right
    /// mouse buttons pan from anywhere; the primary button resolves through
    /// hit testing.
    pub fn on_pointer_down(&mut self, ev: &PointerEvent, ctx: &mut EditorCtx<'_>) {
        if ev.pointer_type == PointerType::Touch {
            self.touch_insert(ev.id, ev.pos);
            if self.touches.len() == 2
                && !matches!(
                    self.state,
                    GestureState::Dragging(_) | GestureState::Resizing(_)
                )
            {
                // Whatever single-pointer gesture was forming yields to the
                // pinch; its coalesced movement is discarded unapplied.
                self.pending = None;
                self.pinch.reset();
                self.state = GestureState::Pinching;
                return;
            }
        }
        if !matches!(self.state, GestureState::Idle) {
            return;
        }
        if ev.pointer_type == PointerType::Mouse
            && matches!(
                ev.button,
                PointerButton::Auxiliary | PointerButton::Secondary
            )
        {
            self.state = GestureState::Panning(PanContext {
                pointer: ev.id,
                anchor: ctx.viewport.pan_anchor(ev.pos),
            });
            return;
        }
        if ev.button != PointerButton::Primary {
            return;
        }
        let world = ctx.viewport.screen_to_world(ev.pos);
        match self.hit_test(world, ctx) {
            HitTarget::ResizeHandle(id) => self.begin_resize(ev, world, id, ctx),
            HitTarget::Node(id) => self.begin_node_press(ev, world, id, ctx),
            HitTarget::Edge(key) => {
                self.state = GestureState::EdgePress(EdgePress {
                    pointer: ev.id,
                    start: ev.pos,
                    key,
                });
            }
            HitTarget::Canvas => {
                if ev.pointer_type == PointerType::Touch {
                    self.state = GestureState::TouchPress(TouchPress {
                        pointer: ev.id,
                        start: ev.pos,
                        down_at: ev.time_ms,
                        anchor: ctx.viewport.pan_anchor(ev.pos),
                    });
                } else {
                    self.state = GestureState::BoxSelecting(BoxSelectContext {
                        pointer: ev.id,
                        start: ev.pos,
                        current: ev.pos,
                    });
                }
            }
        }
    }

    /// Handles pointer movement.
    ///
    /// Threshold checks (press-to-drag, touch tap-to-pan) run here, on event
    /// arrival, so intent resolves as soon as the pointer crosses the line.
    /// Continuous updates of an already resolved gesture are only recorded;
    /// [`GestureMachine::on_frame`] applies the latest one.
    pub fn on_pointer_move(&mut self, ev: &PointerEvent, ctx: &mut EditorCtx<'_>) {
        if ev.pointer_type == PointerType::Touch {
            self.touch_update(ev.id, ev.pos);
        }
        let sample = MoveSample {
            pos: ev.pos,
            modifiers: ev.modifiers,
        };
        let state = mem::take(&mut self.state);
        self.state = match state {
            GestureState::NodePress(press) if press.pointer == ev.id => {
                if distance(press.start, ev.pos) >= self.config.drag_threshold {
                    let drag = DragContext {
                        pointer: press.pointer,
                        node: press.node,
                        offsets: press.offsets,
                    };
                    // The promoting move applies immediately so the nodes
                    // visibly pick up without waiting a frame.
                    Self::apply_drag(&self.config, &sample, &drag, ctx);
                    GestureState::Dragging(drag)
                } else {
                    GestureState::NodePress(press)
                }
            }
            GestureState::EdgePress(press) if press.pointer == ev.id => {
                if distance(press.start, ev.pos) >= self.config.drag_threshold {
                    GestureState::BoxSelecting(BoxSelectContext {
                        pointer: press.pointer,
                        start: press.start,
                        current: ev.pos,
                    })
                } else {
                    GestureState::EdgePress(press)
                }
            }
            GestureState::TouchPress(press) if press.pointer == ev.id => {
                let moved = distance(press.start, ev.pos);
                let held = ev.time_ms.saturating_sub(press.down_at);
                if moved > self.config.touch_pan_distance
                    || (held > self.config.tap_time_ms
                        && moved > self.config.touch_drift_tolerance)
                {
                    self.pending = Some(sample);
                    GestureState::Panning(PanContext {
                        pointer: press.pointer,
                        anchor: press.anchor,
                    })
                } else {
                    GestureState::TouchPress(press)
                }
            }
            GestureState::Panning(pan) if pan.pointer == ev.id => {
                self.pending = Some(sample);
                GestureState::Panning(pan)
            }
            GestureState::Dragging(drag) if drag.pointer == ev.id => {
                self.pending = Some(sample);
                GestureState::Dragging(drag)
            }
            GestureState::Resizing(resize) if resize.pointer == ev.id => {
                self.pending = Some(sample);
                GestureState::Resizing(resize)
            }
            GestureState::BoxSelecting(b) if b.pointer == ev.id => {
                self.pending = Some(sample);
                GestureState::BoxSelecting(b)
            }
            GestureState::Pinching => {
                self.pending = Some(sample);
                GestureState::Pinching
            }
            other => other,
        };
    }

    /// Applies the movement coalesced since the last frame, if any.
    ///
    /// Call once per animation frame. Intermediate pointer positions between
    /// two frames are dropped; only the latest matters, which is correct
    /// because drags and pans are recomputed from anchors rather than
    /// accumulated incrementally.
    pub fn on_frame(&mut self, ctx: &mut EditorCtx<'_>) {
        let Some(sample) = self.pending.take() else {
            return;
        };
        if matches!(self.state, GestureState::Pinching) {
            if let Some((a, b)) = self.two_touches() {
                self.pinch.update(a, b, ctx.viewport);
            }
            return;
        }
        match &mut self.state {
            GestureState::Dragging(drag) => Self::apply_drag(&self.config, &sample, drag, ctx),
            GestureState::Resizing(resize) => {
                Self::apply_resize(&self.config, &sample, resize, ctx);
            }
            GestureState::Panning(pan) => ctx.viewport.pan_to(sample.pos, pan.anchor),
            GestureState::BoxSelecting(b) => b.current = sample.pos,
            _ => {}
        }
    }

    /// Handles a pointer going up, resolving deferred click semantics.
    ///
    /// A press that never crossed its movement threshold resolves as a
    /// click here: shift-click deselection, collapsing a multi-selection to
    /// the clicked node, edge selection, and the touch tap that clears the
    /// selection on empty canvas.
    pub fn on_pointer_up(&mut self, ev: &PointerEvent, ctx: &mut EditorCtx<'_>) {
        if ev.pointer_type == PointerType::Touch {
            self.touch_remove(ev.id);
        }
        let is_touch = ev.pointer_type == PointerType::Touch;
        let primary = is_touch || ev.button == PointerButton::Primary;
        let state = mem::take(&mut self.state);
        self.state = match state {
            GestureState::Pinching => {
                if self.touches.len() < 2 {
                    self.pinch.reset();
                    self.pending = None;
                    GestureState::Idle
                } else {
                    GestureState::Pinching
                }
            }
            GestureState::NodePress(press) if press.pointer == ev.id && primary => {
                self.pending = None;
                if let Some(id) = press.potential_deselect {
                    ctx.selected_nodes.remove(&id);
                } else if let Some(id) = press.replace_on_click {
                    ctx.selected_nodes.select_only(id);
                }
                GestureState::Idle
            }
            GestureState::EdgePress(press) if press.pointer == ev.id && primary => {
                self.pending = None;
                if ev.modifiers.contains(Modifiers::SHIFT) {
                    ctx.selected_edges.toggle(press.key);
                } else {
                    ctx.selected_nodes.clear();
                    ctx.selected_edges.select_only(press.key);
                }
                GestureState::Idle
            }
            GestureState::TouchPress(press) if press.pointer == ev.id => {
                self.pending = None;
                let world = ctx.viewport.screen_to_world(ev.pos);
                if matches!(self.hit_test(world, ctx), HitTarget::Canvas) {
                    ctx.selected_nodes.clear();
                    ctx.selected_edges.clear();
                }
                GestureState::Idle
            }
            GestureState::Panning(pan)
                if pan.pointer == ev.id
                    && (is_touch
                        || matches!(
                            ev.button,
                            PointerButton::Auxiliary | PointerButton::Secondary
                        )) =>
            {
                self.pending = None;
                GestureState::Idle
            }
            GestureState::Dragging(drag) if drag.pointer == ev.id && primary => {
                self.pending = None;
                GestureState::Idle
            }
            GestureState::Resizing(resize) if resize.pointer == ev.id && primary => {
                self.pending = None;
                GestureState::Idle
            }
            GestureState::BoxSelecting(mut b) if b.pointer == ev.id && primary => {
                self.pending = None;
                b.current = ev.pos;
                self.finish_box_select(&b, ctx);
                GestureState::Idle
            }
            other => other,
        };
    }

    /// Handles a pointer cancellation (contact lost, window blur).
    ///
    /// The gesture ends with nothing committed beyond what earlier frames
    /// already applied; pending movement is discarded.
    pub fn on_pointer_cancel(&mut self, ev: &PointerEvent) {
        if ev.pointer_type == PointerType::Touch {
            self.touch_remove(ev.id);
        }
        if matches!(self.state, GestureState::Pinching) {
            if self.touches.len() < 2 {
                self.pinch.reset();
                self.pending = None;
                self.state = GestureState::Idle;
            }
            return;
        }
        if self.state.pointer() == Some(ev.id) {
            self.pending = None;
            self.state = GestureState::Idle;
        }
    }

    /// Handles a wheel event by zooming about the cursor.
    ///
    /// Zoom is always available, even mid-gesture; it does not interact with
    /// the gesture state.
    pub fn on_wheel(&mut self, ev: &WheelEvent, ctx: &mut EditorCtx<'_>) {
        ctx.viewport
            .wheel_zoom(ev.pos, ev.delta_y, self.config.wheel_sensitivity);
    }

    fn begin_node_press(
        &mut self,
        ev: &PointerEvent,
        world: Point,
        id: NodeId,
        ctx: &mut EditorCtx<'_>,
    ) {
        let shift = ev.modifiers.contains(Modifiers::SHIFT);
        if !shift {
            ctx.selected_edges.clear();
        }
        let mut potential_deselect = None;
        let mut replace_on_click = None;
        if ctx.selected_nodes.contains(&id) {
            if shift {
                // Deselect on release, but only if no drag happens first.
                potential_deselect = Some(id.clone());
            } else if ctx.selected_nodes.len() > 1 {
                // Plain click on one of several selected nodes keeps the
                // group for a potential drag and collapses on release.
                replace_on_click = Some(id.clone());
            }
        } else if shift {
            ctx.selected_nodes.add(id.clone());
        } else {
            ctx.selected_nodes.select_only(id.clone());
        }
        let offsets = ctx
            .selected_nodes
            .iter()
            .filter_map(|sel| ctx.diagram.node(sel).map(|n| (sel.clone(), world - n.pos())))
            .collect();
        self.state = GestureState::NodePress(NodePress {
            pointer: ev.id,
            start: ev.pos,
            offsets,
            potential_deselect,
            replace_on_click,
            node: id,
        });
    }

    fn begin_resize(
        &mut self,
        ev: &PointerEvent,
        world: Point,
        id: NodeId,
        ctx: &mut EditorCtx<'_>,
    ) {
        let Some(node) = ctx.diagram.node(&id) else {
            return;
        };
        self.state = GestureState::Resizing(ResizeContext {
            pointer: ev.id,
            start: world,
            initial_width: node.width,
            initial_height: node.height,
            node: id,
        });
    }

    /// Repositions every node in the offset map from the current pointer
    /// position. Absolute recomputation, so dropped frames cannot make the
    /// nodes lag behind or drift.
    fn apply_drag(
        config: &GestureConfig,
        sample: &MoveSample,
        drag: &DragContext,
        ctx: &mut EditorCtx<'_>,
    ) {
        let world = ctx.viewport.screen_to_world(sample.pos);
        let free = sample.modifiers.contains(Modifiers::ALT);
        for (id, offset) in &drag.offsets {
            // Nodes removed mid-gesture are skipped; the drag continues for
            // the rest.
            let Some(node) = ctx.diagram.node_mut(id) else {
                continue;
            };
            let target = world - *offset;
            if free {
                node.x = target.x;
                node.y = target.y;
            } else {
                node.x = magnetic_snap(target.x, config.grid_size, config.snap_threshold);
                node.y = magnetic_snap(target.y, config.grid_size, config.snap_threshold);
            }
        }
    }

    /// Grows the node from its resize-start size by the pointer's world
    /// delta, snapping the right/bottom edges and flooring at the minimum
    /// node size.
    fn apply_resize(
        config: &GestureConfig,
        sample: &MoveSample,
        resize: &ResizeContext,
        ctx: &mut EditorCtx<'_>,
    ) {
        let world = ctx.viewport.screen_to_world(sample.pos);
        let delta = world - resize.start;
        let free = sample.modifiers.contains(Modifiers::ALT);
        let Some(node) = ctx.diagram.node_mut(&resize.node) else {
            return;
        };
        let mut right = node.x + resize.initial_width + delta.x;
        let mut bottom = node.y + resize.initial_height + delta.y;
        if !free {
            right = magnetic_snap(right, config.grid_size, config.snap_threshold);
            bottom = magnetic_snap(bottom, config.grid_size, config.snap_threshold);
        }
        node.width = (right - node.x).max(MIN_NODE_SIZE);
        node.height = (bottom - node.y).max(MIN_NODE_SIZE);
    }

    /// Commits a finished box selection.
    ///
    /// A box below the tap-area threshold is a click on empty canvas and
    /// clears both selections (if it still lands on canvas). A real box
    /// replaces both selections with the fully contained entities; edges
    /// qualify by their curve's bounding box.
    fn finish_box_select(&self, b: &BoxSelectContext, ctx: &mut EditorCtx<'_>) {
        let dx = (b.current.x - b.start.x).abs();
        let dy = (b.current.y - b.start.y).abs();
        if dx * dy < self.config.tap_area {
            let world = ctx.viewport.screen_to_world(b.current);
            if matches!(self.hit_test(world, ctx), HitTarget::Canvas) {
                ctx.selected_nodes.clear();
                ctx.selected_edges.clear();
            }
            return;
        }
        let bounds = Rect::from_points(
            ctx.viewport.screen_to_world(b.start),
            ctx.viewport.screen_to_world(b.current),
        );
        let node_ids: Vec<NodeId> = ctx
            .diagram
            .nodes()
            .iter()
            .filter(|n| contains_rect(bounds, n.rect()))
            .map(|n| n.id.clone())
            .collect();
        let edge_keys: Vec<EdgeKey> = ctx
            .diagram
            .edges()
            .iter()
            .filter_map(|edge| {
                let (from, to) = ctx.diagram.edge_endpoints(edge)?;
                let curve = edge_curve(from.rect(), to.rect(), ctx.orientation);
                contains_rect(bounds, cubic_bounding_box(curve)).then(|| edge.key())
            })
            .collect();
        ctx.selected_nodes.replace_with(node_ids);
        ctx.selected_edges.replace_with(edge_keys);
    }

    fn touch_insert(&mut self, id: PointerId, pos: Point) {
        if let Some(touch) = self.touches.iter_mut().find(|(tid, _)| *tid == id) {
            touch.1 = pos;
        } else {
            self.touches.push((id, pos));
        }
    }

    fn touch_update(&mut self, id: PointerId, pos: Point) {
        if let Some(touch) = self.touches.iter_mut().find(|(tid, _)| *tid == id) {
            touch.1 = pos;
        }
    }

    fn touch_remove(&mut self, id: PointerId) {
        self.touches.retain(|(tid, _)| *tid != id);
    }

    fn two_touches(&self) -> Option<(Point, Point)> {
        match self.touches.as_slice() {
            [(_, a), (_, b)] => Some((*a, *b)),
            _ => None,
        }
    }
}

fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}
