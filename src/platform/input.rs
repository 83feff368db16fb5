//! Mouse and touch decoding into pointer samples

use web_sys::{MouseEvent, TouchEvent, TouchList};

use crate::sim::{PointerId, PointerSample};

pub fn mouse_sample(event: &MouseEvent) -> PointerSample {
    PointerSample::mouse(event.client_x() as f32, event.client_y() as f32)
}

/// The contact that just touched down
pub fn touch_start_sample(event: &TouchEvent) -> Option<PointerSample> {
    let touch = event.changed_touches().get(0)?;
    Some(PointerSample::touch(
        touch.identifier(),
        touch.client_x() as f32,
        touch.client_y() as f32,
    ))
}

/// Find the tracked contact in `list`
///
/// Use `touches()` for moves and `changedTouches()` for end/cancel, since a
/// lifted finger is no longer in `touches()`.
pub fn tracked_touch(list: &TouchList, tracked: Option<PointerId>) -> Option<PointerSample> {
    let Some(PointerId::Touch(id)) = tracked else {
        return None;
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .find(|t| t.identifier() == id)
        .map(|t| PointerSample::touch(id, t.client_x() as f32, t.client_y() as f32))
}
