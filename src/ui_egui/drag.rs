// egui glue for the drag controller
//
// Views call `attach_drag_handle` for every painted event; the app calls
// `pump_pointer` once per frame after all views have registered their drop
// zones.

use egui::{Context, CursorIcon, Id, LayerId, Order, Pos2, Response};

use crate::models::event::Event;
use crate::services::drag::{
    DragController, DragCursor, DropZone, HandleRects, PointerButton, PointerEvent,
    ScheduleChange, SurfaceMap,
};
use crate::services::event_store::EventStore;
use crate::ui_egui::views::utils::{readable_text, token_color};

const BUTTONS: [(egui::PointerButton, PointerButton); 3] = [
    (egui::PointerButton::Primary, PointerButton::Primary),
    (egui::PointerButton::Secondary, PointerButton::Secondary),
    (egui::PointerButton::Middle, PointerButton::Middle),
];

/// Wire pointer-down on a painted event to the controller. The press
/// position picks the drag mode from the event's handle zones.
pub fn attach_drag_handle(
    ctx: &Context,
    response: &Response,
    event: &Event,
    handles: &HandleRects,
    zone: DropZone,
    controller: &mut DragController,
) {
    if !controller.is_active() {
        if let Some(pos) = response.hover_pos() {
            ctx.set_cursor_icon(handles.hover_cursor(pos, zone.is_day_column()));
        }
    }

    for (egui_button, button) in BUTTONS {
        if !response.drag_started_by(egui_button) {
            continue;
        }
        let Some(pos) = ctx
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos())
        else {
            continue;
        };
        let mode = handles.mode_at(pos);
        controller.begin_drag(&PointerEvent::new(pos, button), event, mode, zone);
    }
}

/// Feed this frame's pointer state to the controller. Returns the committed
/// change when the button was released.
pub fn pump_pointer<S: EventStore + ?Sized>(
    ctx: &Context,
    controller: &mut DragController,
    surface: &SurfaceMap,
    store: &mut S,
) -> Option<ScheduleChange> {
    if !controller.is_active() {
        return None;
    }

    let (latest, released) = ctx.input(|i| {
        (
            i.pointer.latest_pos(),
            i.pointer.primary_released() || !i.pointer.primary_down(),
        )
    });
    let pos = latest.unwrap_or(Pos2::ZERO);

    if latest.is_some() {
        controller.on_pointer_move(&PointerEvent::primary(pos), surface);
    }

    if released {
        return controller.on_pointer_release(&PointerEvent::primary(pos), store);
    }

    if let Some(cursor) = controller.cursor() {
        ctx.set_cursor_icon(cursor_icon(cursor));
    }
    draw_drag_proxy(ctx, controller, pos);
    ctx.request_repaint();
    None
}

fn cursor_icon(cursor: DragCursor) -> CursorIcon {
    match cursor {
        DragCursor::Grabbing => CursorIcon::Grabbing,
        DragCursor::ResizeVertical => CursorIcon::ResizeVertical,
        DragCursor::ResizeHorizontal => CursorIcon::ResizeHorizontal,
    }
}

/// Small title chip that follows the pointer.
fn draw_drag_proxy(ctx: &Context, controller: &DragController, pos: Pos2) {
    let Some(ghost) = controller.ghost() else {
        return;
    };
    let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new("drag_proxy")));
    let fill = token_color(ghost.color());
    let galley = painter.layout_no_wrap(
        ghost.title().to_string(),
        egui::FontId::proportional(12.0),
        readable_text(fill),
    );
    let rect = egui::Rect::from_min_size(pos + egui::vec2(12.0, 12.0), galley.size())
        .expand(4.0);
    painter.rect_filled(rect, 4.0, fill.gamma_multiply(0.9));
    painter.galley(rect.min + egui::vec2(4.0, 4.0), galley, readable_text(fill));
}
