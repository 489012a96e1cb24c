//! Drag-to-reschedule.
//!
//! A [`DragController`] owns at most one [`DragSession`]. Views call
//! [`DragController::begin_drag`] on pointer-down over an event, feed every
//! pointer move through [`DragController::on_pointer_move`] together with
//! the drop zones they painted, and finish with
//! [`DragController::on_pointer_release`], which writes the final times to
//! the event store. In between, [`DragController::ghost`] describes the
//! preview to draw.

mod ghost;
mod handles;
mod session;
mod surface;

pub use ghost::{BarGhost, BlockGhost, Ghost};
pub use handles::{HandleRects, HANDLE_SIZE};
pub use session::{DragMode, DragSession, Tentative, MIN_DURATION_MINUTES};
pub use surface::{
    DropZone, HitTest, PointerButton, PointerEvent, SurfaceMap, SNAP_MINUTES,
};

use crate::models::event::Event;
use crate::services::event_store::EventStore;
use crate::services::layout::TimeScale;
use crate::utils::date::Moment;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Pointer feedback while a drag is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragCursor {
    Grabbing,
    ResizeVertical,
    ResizeHorizontal,
}

/// A committed reschedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleChange {
    pub event_id: String,
    pub mode: DragMode,
    pub from: (Moment, Moment),
    pub to: (Moment, Moment),
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
    scale: TimeScale,
}

impl DragController {
    pub fn new(scale: TimeScale) -> Self {
        Self {
            state: DragState::Idle,
            scale,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session().is_some()
    }

    /// True for the event being dragged; views dim its original block.
    pub fn is_dragging(&self, event_id: &str) -> bool {
        self.session().map_or(false, |s| s.event_id == event_id)
    }

    /// Start a drag on `event`. Only the primary button starts a drag, and
    /// a press during a running drag is ignored. Returns whether a session
    /// was opened.
    pub fn begin_drag(
        &mut self,
        pointer: &PointerEvent,
        event: &Event,
        mode: DragMode,
        reference: DropZone,
    ) -> bool {
        if pointer.button != PointerButton::Primary {
            return false;
        }
        if let DragState::Dragging(active) = &self.state {
            log::debug!(
                "Ignoring drag on {} while {} is being dragged",
                event.id,
                active.event_id
            );
            return false;
        }

        log::debug!("Begin {:?} drag on {} at {:?}", mode, event.id, pointer.pos);
        self.state = DragState::Dragging(DragSession::new(event, mode, reference, pointer.pos));
        true
    }

    /// Track the pointer. Positions outside every zone, or over the other
    /// kind of surface, keep the previous placement.
    pub fn on_pointer_move(
        &mut self,
        pointer: &PointerEvent,
        surface: &impl HitTest,
    ) -> Option<Tentative> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        if let Some(zone) = surface.zone_at(pointer.pos) {
            if let Some(placement) = session.track(&zone, pointer.pos, &self.scale) {
                session.tentative = Some(placement);
            }
        }
        session.tentative
    }

    /// End the drag and commit the last placement, if any. The session is
    /// cleared whether or not the store accepts the update.
    pub fn on_pointer_release<S: EventStore + ?Sized>(
        &mut self,
        pointer: &PointerEvent,
        store: &mut S,
    ) -> Option<ScheduleChange> {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        let Some(placement) = session.tentative else {
            log::debug!("Drag on {} released at {:?} without a placement", session.event_id, pointer.pos);
            return None;
        };

        match store.update_event(&session.event_id, placement.start, placement.end) {
            Ok(()) => {
                log::info!(
                    "Rescheduled {} to {} - {}",
                    session.event_id,
                    placement.start,
                    placement.end
                );
                Some(ScheduleChange {
                    event_id: session.event_id,
                    mode: session.mode,
                    from: (session.original_start, session.original_end),
                    to: (placement.start, placement.end),
                })
            }
            Err(err) => {
                log::warn!("Failed to reschedule {}: {}", session.event_id, err);
                None
            }
        }
    }

    pub fn ghost(&self) -> Option<Ghost> {
        self.session().and_then(Ghost::for_session)
    }

    pub fn cursor(&self) -> Option<DragCursor> {
        let session = self.session()?;
        Some(match session.mode {
            DragMode::Move => DragCursor::Grabbing,
            _ if session.is_timed() => DragCursor::ResizeVertical,
            _ => DragCursor::ResizeHorizontal,
        })
    }
}
