//! Tap detection over the dot row.

use super::cursor::CursorModel;
use super::geometry::Geometry;

/// Pointer input in indicator units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32 },
    Up { x: f32 },
    /// The gesture was taken over by someone else.
    Cancel,
}

/// Request for the pager to show another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateTo(pub usize);

/// Remembers where the pointer went down until it comes back up.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    down_slot: Option<usize>,
}

impl TouchTracker {
    /// Feed one pointer event.  A tap is a down and an up inside the same
    /// slot's hit interval; it yields a navigation to the page drawn in that
    /// slot when the page exists and is not already selected.  `travel` is
    /// the eased travel of the frame on screen.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        cursor: &CursorModel,
        geometry: &Geometry,
        travel: f32,
    ) -> Option<NavigateTo> {
        match event {
            PointerEvent::Down { x } => {
                self.down_slot = geometry.slot_at(x);
                None
            }
            PointerEvent::Cancel => {
                self.down_slot = None;
                None
            }
            PointerEvent::Up { x } => {
                let down = self.down_slot.take()?;
                let up = geometry.slot_at(x)?;
                if down != up {
                    tracing::trace!(down, up, "pointer moved across slots, not a tap");
                    return None;
                }
                let page = cursor.page_at_slot(up, travel)?;
                (page != cursor.current()).then_some(NavigateTo(page))
            }
        }
    }
}
