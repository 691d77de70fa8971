// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests driving the editor through its public surface: input
//! events in, rendered state out.

use kurbo::Point;

use trellis_editor::Editor;
use trellis_gesture::{PointerButton, PointerEvent, WheelEvent};
use trellis_graph::{Edge, Node, NodeId};

fn linked_editor() -> Editor {
    let mut editor = Editor::new();
    editor.add_node(Node::new("a", 0.0, 0.0)).unwrap();
    editor.add_node(Node::new("b", 200.0, 0.0)).unwrap();
    editor.add_edge(Edge::new("a", "b")).unwrap();
    editor
}

#[test]
fn click_then_drag_moves_the_selected_node() {
    let mut editor = linked_editor();

    let down = PointerEvent::mouse(1, PointerButton::Primary, Point::new(40.0, 20.0));
    editor.pointer_down(&down);
    assert_eq!(editor.selected_nodes().items(), [NodeId::new("a")]);

    editor.pointer_move(&PointerEvent::mouse(
        1,
        PointerButton::None,
        Point::new(90.0, 50.0),
    ));
    assert_eq!(editor.dragged_node(), Some(&NodeId::new("a")));
    editor.frame();
    editor.pointer_up(&PointerEvent::mouse(
        1,
        PointerButton::Primary,
        Point::new(90.0, 50.0),
    ));

    let node = editor.diagram().node(&"a".into()).unwrap();
    assert_eq!((node.x, node.y), (50.0, 30.0));
    assert!(editor.dragged_node().is_none());
}

#[test]
fn wheel_zoom_keeps_the_cursor_anchored() {
    let mut editor = linked_editor();

    let before = editor.viewport().screen_to_world(Point::new(100.0, 50.0));
    editor.wheel(&WheelEvent::new(Point::new(100.0, 50.0), -500.0));
    let after = editor.viewport().screen_to_world(Point::new(100.0, 50.0));

    assert!(editor.viewport().zoom() > 1.0);
    assert!((after.x - before.x).abs() < 1e-9);
    assert!((after.y - before.y).abs() < 1e-9);
}

#[test]
fn box_selection_through_the_editor_replaces_selection() {
    let mut editor = linked_editor();
    editor.set_selected_nodes(["b".into()]);

    editor.pointer_down(&PointerEvent::mouse(
        1,
        PointerButton::Primary,
        Point::new(-10.0, -10.0),
    ));
    editor.pointer_move(&PointerEvent::mouse(
        1,
        PointerButton::None,
        Point::new(90.0, 50.0),
    ));
    editor.frame();
    assert!(editor.selection_box().is_some());
    editor.pointer_up(&PointerEvent::mouse(
        1,
        PointerButton::Primary,
        Point::new(90.0, 50.0),
    ));

    assert_eq!(editor.selected_nodes().items(), [NodeId::new("a")]);
    assert!(editor.selection_box().is_none());
}
