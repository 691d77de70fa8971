// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input event types fed into the gesture machine.
//!
//! These are deliberately minimal: the host platform (browser, winit, test
//! harness) maps its native events onto these structs. Positions are in
//! screen coordinates; the machine converts to world space itself.

use kurbo::Point;

/// Identifies one pointer across a down/move/up sequence.
///
/// A mouse keeps one id for its lifetime; each touch contact gets a fresh id
/// for the duration of that contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// The kind of device behind a pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerType {
    /// A mouse or mouse-like device with distinct buttons.
    #[default]
    Mouse,
    /// A touch contact. Touches never pan-with-middle-button or box-select;
    /// they get the press-and-move disambiguation instead.
    Touch,
}

/// Which button changed state on a pointer down/up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, or any touch contact.
    #[default]
    Primary,
    /// Middle mouse button.
    Auxiliary,
    /// Right mouse button.
    Secondary,
    /// No button changed (move events).
    None,
}

bitflags::bitflags! {
    /// Keyboard modifiers held while an event fired.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// Shift key. Switches clicks to additive/toggling selection.
        const SHIFT = 1 << 0;
        /// Alt/Option key.
        const ALT = 1 << 1;
        /// Control key.
        const CTRL = 1 << 2;
        /// Meta/Command key.
        const META = 1 << 3;
    }
}

/// A pointer down, move, up, or cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer this event belongs to.
    pub id: PointerId,
    /// Mouse or touch.
    pub pointer_type: PointerType,
    /// The button that changed, or [`PointerButton::None`] for moves.
    pub button: PointerButton,
    /// Position in screen coordinates.
    pub pos: Point,
    /// Modifiers held at the time of the event.
    pub modifiers: Modifiers,
    /// Monotonic timestamp in milliseconds. Only tap-vs-pan disambiguation
    /// reads it, so mouse events may leave it at zero.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Builds a mouse event with no modifiers and a zero timestamp.
    #[must_use]
    pub fn mouse(id: u64, button: PointerButton, pos: Point) -> Self {
        Self {
            id: PointerId(id),
            pointer_type: PointerType::Mouse,
            button,
            pos,
            modifiers: Modifiers::empty(),
            time_ms: 0,
        }
    }

    /// Builds a touch event at the given timestamp.
    #[must_use]
    pub fn touch(id: u64, pos: Point, time_ms: u64) -> Self {
        Self {
            id: PointerId(id),
            pointer_type: PointerType::Touch,
            button: PointerButton::Primary,
            pos,
            modifiers: Modifiers::empty(),
            time_ms,
        }
    }

    /// Replaces the modifier set.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A scroll wheel event, used exclusively for zooming.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Cursor position in screen coordinates; the zoom anchor.
    pub pos: Point,
    /// Vertical scroll delta. Negative zooms in.
    pub delta_y: f64,
    /// Modifiers held at the time of the event.
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Builds a wheel event with no modifiers.
    #[must_use]
    pub fn new(pos: Point, delta_y: f64) -> Self {
        Self {
            pos,
            delta_y,
            modifiers: Modifiers::empty(),
        }
    }
}
