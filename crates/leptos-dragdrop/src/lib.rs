//! Leptos DragDrop Utilities
//!
//! Pointer drag-and-drop for reorderable tree rows, plus a horizontal swipe
//! tracker for carousels. A movement threshold separates clicks from drags.

use leptos::ev;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::JsCast;

/// Where a dragged row will land
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Onto a row: become its last child
    Onto(u64),
    /// Into the gap between rows: (parent id, index among siblings)
    Between(Option<u64>, usize),
}

/// Drag state shared by every row of one table
#[derive(Clone, Copy)]
pub struct DndState {
    pub dragging: RwSignal<Option<u64>>,
    pub target: RwSignal<Option<DropTarget>>,
    /// Set briefly after a drop so the trailing click can be ignored
    pub just_ended: RwSignal<bool>,
    pending: RwSignal<Option<u64>>,
    start: RwSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_state() -> DndState {
    DndState {
        dragging: RwSignal::new(None),
        target: RwSignal::new(None),
        just_ended: RwSignal::new(false),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

impl DndState {
    pub fn is_dragging(&self) -> bool {
        self.dragging.get().is_some()
    }

    fn end(&self) {
        self.dragging.set(None);
        self.target.set(None);
        self.pending.set(None);
        self.just_ended.set(true);
        let just_ended = self.just_ended;
        set_timeout(move || just_ended.set(false), Duration::from_millis(100));
    }
}

/// Whether a pointer has travelled far enough from its press point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    (now.0 - start.0).abs() > DRAG_THRESHOLD_PX || (now.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// Mousedown on a draggable row: record a pending drag
pub fn make_on_mousedown(dnd: DndState, row_id: u64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
            {
                return;
            }
        }
        dnd.pending.set(Some(row_id));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter on a row: offer it as the new parent
pub fn make_on_row_mouseenter(dnd: DndState, row_id: u64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging.get_untracked() {
            if dragging != row_id {
                dnd.target.set(Some(DropTarget::Onto(row_id)));
            }
        }
    }
}

/// Mouseenter on a gap between rows
pub fn make_on_gap_mouseenter(
    dnd: DndState,
    parent_id: Option<u64>,
    position: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.target.set(Some(DropTarget::Between(parent_id, position)));
        }
    }
}

pub fn make_on_mouseleave(dnd: DndState) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.target.set(None);
        }
    }
}

/// Bind window-level mousemove/mouseup for the lifetime of the calling owner.
///
/// `on_drop(dragged, target)` runs only for a real drag that ended over a target.
pub fn bind_global_drag<F>(dnd: DndState, on_drop: F)
where
    F: Fn(u64, DropTarget) + 'static,
{
    let move_handle = window_event_listener(ev::mousemove, move |ev| {
        let pending = dnd.pending.get_untracked();
        if pending.is_some() && dnd.dragging.get_untracked().is_none() {
            if exceeds_threshold(dnd.start.get_untracked(), (ev.client_x(), ev.client_y())) {
                dnd.dragging.set(pending);
            }
        }
    });

    let up_handle = window_event_listener(ev::mouseup, move |_ev| {
        let dragged = dnd.dragging.get_untracked();
        let target = dnd.target.get_untracked();
        dnd.end();
        if let (Some(dragged), Some(target)) = (dragged, target) {
            on_drop(dragged, target);
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });
}

// ========================
// Swipe
// ========================

/// A finished horizontal gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    /// Horizontal travel in px (negative = leftwards)
    pub offset: f64,
    /// Signed speed in px per second
    pub velocity: f64,
}

/// Tracks one pointer gesture from press to release
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    origin: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press at `x` px, `at_ms` milliseconds
    pub fn begin(&mut self, x: f64, at_ms: f64) {
        self.origin = Some((x, at_ms));
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Release; `None` if no gesture was started
    pub fn finish(&mut self, x: f64, at_ms: f64) -> Option<Swipe> {
        let (start_x, start_ms) = self.origin.take()?;
        let offset = x - start_x;
        // Same-millisecond releases still count as one millisecond
        let elapsed_s = (at_ms - start_ms).max(1.0) / 1000.0;
        Some(Swipe { offset, velocity: offset / elapsed_s })
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

/// Current time in ms from the page's performance clock
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}
