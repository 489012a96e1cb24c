// Resize handle hit zones
//
// Timed blocks resize from their top (start) and bottom (end) edges; bars
// resize from their left (start) and right (end) edges. Pressing anywhere
// else on an event moves it.

use egui::{CursorIcon, Pos2, Rect, Vec2};

use super::session::DragMode;

/// Hit area size of a resize handle
pub const HANDLE_SIZE: f32 = 8.0;

/// Edge zones of one painted event
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandleRects {
    pub start: Option<Rect>,
    pub end: Option<Rect>,
}

impl HandleRects {
    /// Top and bottom strips of a block in the time grid.
    ///
    /// Each strip is at most a quarter of the block height.
    pub fn for_timed_block(rect: Rect) -> Self {
        let zone_height = HANDLE_SIZE.min(rect.height() / 4.0);
        Self {
            start: Some(Rect::from_min_size(
                rect.left_top(),
                Vec2::new(rect.width(), zone_height),
            )),
            end: Some(Rect::from_min_size(
                Pos2::new(rect.left(), rect.bottom() - zone_height),
                Vec2::new(rect.width(), zone_height),
            )),
        }
    }

    /// Left and right strips of a bar. A side clipped by the week row has
    /// no handle because the real edge lies in another row.
    pub fn for_bar(rect: Rect, shows_start: bool, shows_end: bool) -> Self {
        let zone_width = HANDLE_SIZE.min(rect.width() / 4.0);
        Self {
            start: shows_start.then(|| {
                Rect::from_min_size(rect.left_top(), Vec2::new(zone_width, rect.height()))
            }),
            end: shows_end.then(|| {
                Rect::from_min_size(
                    Pos2::new(rect.right() - zone_width, rect.top()),
                    Vec2::new(zone_width, rect.height()),
                )
            }),
        }
    }

    /// Drag mode for a press at `pos` inside the event.
    pub fn mode_at(&self, pos: Pos2) -> DragMode {
        if self.start.map_or(false, |r| r.contains(pos)) {
            DragMode::ResizeStart
        } else if self.end.map_or(false, |r| r.contains(pos)) {
            DragMode::ResizeEnd
        } else {
            DragMode::Move
        }
    }

    /// Cursor to show while hovering `pos`.
    pub fn hover_cursor(&self, pos: Pos2, vertical: bool) -> CursorIcon {
        match self.mode_at(pos) {
            DragMode::Move => CursorIcon::Grab,
            _ if vertical => CursorIcon::ResizeVertical,
            _ => CursorIcon::ResizeHorizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_block_zones() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 100.0), Vec2::new(200.0, 60.0));
        let handles = HandleRects::for_timed_block(rect);

        assert_eq!(handles.mode_at(Pos2::new(200.0, 101.0)), DragMode::ResizeStart);
        assert_eq!(handles.mode_at(Pos2::new(200.0, 159.0)), DragMode::ResizeEnd);
        assert_eq!(handles.mode_at(Pos2::new(200.0, 130.0)), DragMode::Move);
    }

    #[test]
    fn test_short_block_keeps_a_move_body() {
        // 20px: each strip is 5px tall.
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(100.0, 20.0));
        let handles = HandleRects::for_timed_block(rect);
        assert_eq!(handles.mode_at(Pos2::new(50.0, 10.0)), DragMode::Move);
        assert_eq!(handles.mode_at(Pos2::new(50.0, 19.0)), DragMode::ResizeEnd);
    }

    #[test]
    fn test_bar_zones_respect_clipping() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(300.0, 20.0));

        let both = HandleRects::for_bar(rect, true, true);
        assert_eq!(both.mode_at(Pos2::new(2.0, 10.0)), DragMode::ResizeStart);
        assert_eq!(both.mode_at(Pos2::new(298.0, 10.0)), DragMode::ResizeEnd);

        let clipped = HandleRects::for_bar(rect, false, true);
        assert!(clipped.start.is_none());
        assert_eq!(clipped.mode_at(Pos2::new(2.0, 10.0)), DragMode::Move);
    }

    #[test]
    fn test_hover_cursor() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(300.0, 20.0));
        let handles = HandleRects::for_bar(rect, true, true);
        assert_eq!(handles.hover_cursor(Pos2::new(150.0, 10.0), false), CursorIcon::Grab);
        assert_eq!(
            handles.hover_cursor(Pos2::new(2.0, 10.0), false),
            CursorIcon::ResizeHorizontal
        );
    }
}
