//! Drag Context
//!
//! Signals shared between the list and its items, provided via the
//! Leptos context API.

use leptos::prelude::*;

use crate::order;

/// Drag-and-drop state shared across the component tree
#[derive(Clone, Copy)]
pub struct DragContext {
    /// Identifier of the item currently being dragged - read
    pub dragging: ReadSignal<Option<usize>>,
    set_dragging: WriteSignal<Option<usize>>,
    /// Live display order of identifiers - read
    pub order: ReadSignal<Vec<usize>>,
    set_order: WriteSignal<Vec<usize>>,
}

impl DragContext {
    pub fn new(
        dragging: (ReadSignal<Option<usize>>, WriteSignal<Option<usize>>),
        order: (ReadSignal<Vec<usize>>, WriteSignal<Vec<usize>>),
    ) -> Self {
        Self {
            dragging: dragging.0,
            set_dragging: dragging.1,
            order: order.0,
            set_order: order.1,
        }
    }

    pub fn begin_drag(&self, id: usize) {
        self.set_dragging.set(Some(id));
    }

    pub fn end_drag(&self) {
        self.set_dragging.set(None);
    }

    /// Reposition the dragged item around `target` while a drag is active.
    pub fn drag_over(&self, target: usize, before: bool) {
        let Some(dragged) = self.dragging.get_untracked() else {
            return;
        };
        if dragged == target {
            return;
        }
        self.set_order
            .update(|ord| order::reposition(ord, dragged, target, before));
    }

    /// Replace the whole display order (show-solution)
    pub fn replace_order(&self, new_order: Vec<usize>) {
        self.set_order.set(new_order);
    }

    /// Mutate the display order in place (reset re-shuffle)
    pub fn update_order(&self, f: impl FnOnce(&mut Vec<usize>)) {
        self.set_order.update(f);
    }
}
