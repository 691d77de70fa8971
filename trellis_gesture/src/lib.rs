// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Gesture: the pointer gesture state machine of the diagram editor.
//!
//! One stream of pointer and wheel events carries several competing intents:
//! click to select, drag to move nodes, drag a grip to resize, drag empty
//! canvas to box-select, middle-drag or touch-drag to pan, two-finger pinch
//! to zoom. This crate disambiguates them with an explicit state machine:
//! - A press starts out *pending*; only movement past a threshold promotes
//!   it to a drag (node), box selection (edge or canvas), or pan (touch).
//! - A press that never moves resolves its click semantics on release:
//!   shift-click toggling, collapsing a multi-selection, tap-to-deselect.
//! - Exactly one gesture is active at a time. Pan cannot start while a drag
//!   or resize is in flight; a second touch converts compatible gestures
//!   into a pinch.
//!
//! Continuous movement is frame-coalesced: move events only record the
//! latest sample, and [`GestureMachine::on_frame`] applies it once per
//! animation frame. Because drags and pans recompute from anchors captured
//! at press time, dropping intermediate samples is lossless.
//!
//! The machine owns no model state. Each call borrows the diagram, viewport,
//! and selection sets through [`EditorCtx`], and the machine is the sole
//! writer of node geometry and selections during its gestures.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use trellis_gesture::{EditorCtx, GestureMachine, PointerButton, PointerEvent};
//! use trellis_graph::{Diagram, Node};
//! use trellis_geometry::Orientation;
//! use trellis_selection::SelectionSet;
//! use trellis_view::Viewport;
//!
//! let mut diagram = Diagram::new();
//! diagram.add_node(Node::new("a", 100.0, 100.0)).unwrap();
//! let mut viewport = Viewport::new();
//! let mut nodes = SelectionSet::new();
//! let mut edges = SelectionSet::new();
//!
//! let mut machine = GestureMachine::new();
//! let mut ctx = EditorCtx {
//!     diagram: &mut diagram,
//!     viewport: &mut viewport,
//!     selected_nodes: &mut nodes,
//!     selected_edges: &mut edges,
//!     orientation: Orientation::LeftRight,
//! };
//!
//! // Click the node: selected on press.
//! let down = PointerEvent::mouse(1, PointerButton::Primary, Point::new(120.0, 110.0));
//! machine.on_pointer_down(&down, &mut ctx);
//! machine.on_pointer_up(&down, &mut ctx);
//! assert_eq!(nodes.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod events;
mod machine;
mod state;

pub use config::{
    DRAG_THRESHOLD, GestureConfig, RESIZE_HANDLE_SIZE, TAP_AREA, TAP_TIME_MS, TOUCH_DRIFT_TOLERANCE,
    TOUCH_PAN_DISTANCE,
};
pub use events::{Modifiers, PointerButton, PointerEvent, PointerId, PointerType, WheelEvent};
pub use machine::{EditorCtx, GestureMachine};
pub use state::HitTarget;
