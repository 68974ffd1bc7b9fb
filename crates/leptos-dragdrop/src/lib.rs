//! Leptos DragDrop Utilities
//!
//! Free-form drag-and-drop for Leptos using Pointer Events, so mouse, pen
//! and touch all drag the same way. Uses movement threshold to distinguish
//! a tap from a drag, and reports where the dragged element's center ended
//! up when the pointer is released.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Viewport position of the dragged element's center
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DropPoint {
    pub x: f64,
    pub y: f64,
}

/// Whether the pointer has moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// The element follows the pointer, so its center moves by the pointer delta
pub fn dragged_center(origin: (f64, f64), start: (i32, i32), current: (i32, i32)) -> DropPoint {
    DropPoint {
        x: origin.0 + f64::from(current.0 - start.0),
        y: origin.1 + f64::from(current.1 - start.1),
    }
}

/// Gesture state for one pointer at a time
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// Item pressed but not yet moved past the threshold
    pending: Option<u32>,
    dragging: Option<u32>,
    /// Pointer that owns the gesture; others are ignored
    pointer_id: Option<i32>,
    /// Pointer position at press
    start: (i32, i32),
    /// Center of the pressed element at press
    origin: (f64, f64),
    offset: (f64, f64),
}

impl DragState {
    pub fn dragging_id(&self) -> Option<u32> {
        self.dragging
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Translation to apply to the dragged element
    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    fn owns(&self, pointer_id: i32) -> bool {
        self.pointer_id == Some(pointer_id)
    }

    /// A press on an item. Ignored while another pointer holds a gesture.
    pub fn press(&mut self, item_id: u32, pointer_id: i32, start: (i32, i32), origin: (f64, f64)) -> bool {
        if self.is_active() {
            return false;
        }
        *self = DragState {
            pending: Some(item_id),
            dragging: None,
            pointer_id: Some(pointer_id),
            start,
            origin,
            offset: (0.0, 0.0),
        };
        true
    }

    /// Pointer moved. Returns the dragged item and its center once dragging.
    pub fn move_to(&mut self, pointer_id: i32, current: (i32, i32)) -> Option<(u32, DropPoint)> {
        if !self.owns(pointer_id) {
            return None;
        }
        let pending = self.pending?;
        if self.dragging.is_none() {
            if !exceeds_threshold(self.start, current) {
                return None;
            }
            self.dragging = Some(pending);
        }
        self.offset = (
            f64::from(current.0 - self.start.0),
            f64::from(current.1 - self.start.1),
        );
        Some((pending, dragged_center(self.origin, self.start, current)))
    }

    /// Pointer lifted. Returns the drop only if it was an actual drag, not a tap.
    pub fn release(&mut self, pointer_id: i32, current: (i32, i32)) -> Option<(u32, DropPoint)> {
        if !self.owns(pointer_id) {
            return None;
        }
        let dropped = self
            .dragging
            .map(|id| (id, dragged_center(self.origin, self.start, current)));
        *self = DragState::default();
        dropped
    }

    /// The browser took the pointer away (scroll, palm rejection, alert).
    /// The gesture ends without a drop.
    pub fn cancel(&mut self, pointer_id: i32) -> bool {
        if !self.owns(pointer_id) {
            return false;
        }
        *self = DragState::default();
        true
    }
}

/// Drag state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    pub state_read: ReadSignal<DragState>,
    pub state_write: WriteSignal<DragState>,
}

pub fn create_drag_signals() -> DragSignals {
    let (state_read, state_write) = signal(DragState::default());
    DragSignals { state_read, state_write }
}

impl DragSignals {
    /// Translation for `item_id`, zero unless it is the one being dragged
    pub fn offset_for(&self, item_id: u32) -> (f64, f64) {
        self.state_read.with(|s| {
            if s.dragging_id() == Some(item_id) { s.offset() } else { (0.0, 0.0) }
        })
    }

    pub fn is_dragging(&self, item_id: u32) -> bool {
        self.state_read.with(|s| s.dragging_id() == Some(item_id))
    }
}

/// Create pointerdown handler for draggable items
/// Records pending drag with start position and element center
pub fn make_on_pointerdown(drag: DragSignals, item_id: u32) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        // Keep the browser from starting a text selection or native image drag
        ev.prevent_default();

        let element = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        let origin = element
            .as_ref()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                (rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0)
            })
            .unwrap_or((f64::from(ev.client_x()), f64::from(ev.client_y())));

        let mut pressed = false;
        drag.state_write.update(|s| {
            pressed = s.press(item_id, ev.pointer_id(), (ev.client_x(), ev.client_y()), origin);
        });
        if pressed {
            // Keep receiving moves even when the finger outruns the element
            if let Some(el) = element {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
    }
}

type PointerClosure = Closure<dyn FnMut(web_sys::PointerEvent)>;

/// Document-level pointer listeners; removed when dropped
pub struct DocumentListeners {
    listeners: Vec<(&'static str, PointerClosure)>,
}

impl Drop for DocumentListeners {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            for (event, closure) in &self.listeners {
                let _ = doc.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }
    }
}

/// Bind global pointermove/pointerup/pointercancel handlers
///
/// `on_move` fires for every move while an item is dragged, `on_drop` once on
/// release of an actual drag (a tap never reaches it), `on_cancel` when the
/// browser aborts the gesture.
pub fn bind_document_listeners<M, D, C>(drag: DragSignals, on_move: M, on_drop: D, on_cancel: C) -> DocumentListeners
where
    M: Fn(u32, DropPoint) + 'static,
    D: Fn(u32, DropPoint) + 'static,
    C: Fn() + 'static,
{
    let on_pointermove = PointerClosure::new(move |ev: web_sys::PointerEvent| {
        if !drag.state_read.with_untracked(DragState::is_active) {
            return;
        }
        let mut moved = None;
        drag.state_write.update(|s| moved = s.move_to(ev.pointer_id(), (ev.client_x(), ev.client_y())));
        if let Some((id, point)) = moved {
            on_move(id, point);
        }
    });

    let on_pointerup = PointerClosure::new(move |ev: web_sys::PointerEvent| {
        if !drag.state_read.with_untracked(DragState::is_active) {
            return;
        }
        let mut dropped = None;
        drag.state_write.update(|s| dropped = s.release(ev.pointer_id(), (ev.client_x(), ev.client_y())));
        if let Some((id, point)) = dropped {
            on_drop(id, point);
        }
    });

    let on_pointercancel = PointerClosure::new(move |ev: web_sys::PointerEvent| {
        let mut cancelled = false;
        drag.state_write.update(|s| cancelled = s.cancel(ev.pointer_id()));
        if cancelled {
            on_cancel();
        }
    });

    let listeners = vec![
        ("pointermove", on_pointermove),
        ("pointerup", on_pointerup),
        ("pointercancel", on_pointercancel),
    ];
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        for (event, closure) in &listeners {
            let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }

    DocumentListeners { listeners }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed() -> DragState {
        let mut state = DragState::default();
        assert!(state.press(4, 1, (90, 40), (100.0, 50.0)));
        state
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_dragged_center_follows_pointer() {
        let p = dragged_center((100.0, 50.0), (90, 40), (190, 10));
        assert_eq!(p, DropPoint { x: 200.0, y: 20.0 });
    }

    #[test]
    fn test_small_move_stays_pending() {
        let mut state = pressed();
        assert_eq!(state.move_to(1, (93, 42)), None);
        assert_eq!(state.dragging_id(), None);
        assert!(state.is_active());
    }

    #[test]
    fn test_drag_then_release_drops() {
        let mut state = pressed();
        assert_eq!(state.move_to(1, (140, 40)), Some((4, DropPoint { x: 150.0, y: 50.0 })));
        assert_eq!(state.offset(), (50.0, 0.0));

        let dropped = state.release(1, (190, 10));
        assert_eq!(dropped, Some((4, DropPoint { x: 200.0, y: 20.0 })));
        assert_eq!(state, DragState::default());
    }

    #[test]
    fn test_tap_release_does_not_drop() {
        let mut state = pressed();
        assert_eq!(state.release(1, (91, 41)), None);
        assert!(!state.is_active());
    }

    #[test]
    fn test_cancel_clears_without_drop() {
        let mut state = pressed();
        state.move_to(1, (200, 40));
        assert_eq!(state.dragging_id(), Some(4));

        assert!(state.cancel(1));
        assert_eq!(state, DragState::default());
        assert_eq!(state.offset(), (0.0, 0.0));
        // The lift that follows a cancel has nothing to drop
        assert_eq!(state.release(1, (200, 40)), None);
    }

    #[test]
    fn test_other_pointers_ignored() {
        let mut state = pressed();
        assert!(!state.press(7, 2, (0, 0), (0.0, 0.0)));
        assert_eq!(state.move_to(2, (300, 300)), None);
        assert!(!state.cancel(2));
        assert_eq!(state.release(2, (300, 300)), None);
        assert!(state.is_active());
    }
}
