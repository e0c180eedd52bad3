use std::slice;

use crate::engine::Engine;
use crate::event::{InputEvent, KeyAction, Modifiers};
use crate::window::WindowBuffer;

/// Opaque driver handle passed across the C boundary.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ColorbandEngineHandle(*mut Engine);

#[no_mangle]
pub extern "C" fn colorband_engine_new() -> ColorbandEngineHandle {
    let engine = Box::new(Engine::new(None));
    ColorbandEngineHandle(Box::into_raw(engine))
}

#[no_mangle]
pub extern "C" fn colorband_engine_free(handle: ColorbandEngineHandle) {
    if !handle.0.is_null() {
        unsafe {
            let _ = Box::from_raw(handle.0);
        }
    }
}

/// Feeds a pointer motion event; returns `true` when it was consumed.
#[no_mangle]
pub extern "C" fn colorband_engine_handle_motion(
    handle: ColorbandEngineHandle,
    x: f32,
    y: f32,
) -> bool {
    let engine = unsafe { &mut *handle.0 };
    engine.handle_input(InputEvent::Motion { x, y })
}

/// Feeds a key event (`action` 0 = down, anything else = up); returns
/// `true` when it was consumed.
#[no_mangle]
pub extern "C" fn colorband_engine_handle_key(
    handle: ColorbandEngineHandle,
    action: u32,
    code: u32,
    meta_state: u32,
) -> bool {
    let engine = unsafe { &mut *handle.0 };
    let action = if action == 0 {
        KeyAction::Down
    } else {
        KeyAction::Up
    };

    engine.handle_input(InputEvent::Key {
        action,
        code,
        modifiers: Modifiers::from_bits_truncate(meta_state),
    })
}

#[no_mangle]
pub extern "C" fn colorband_engine_is_animating(handle: ColorbandEngineHandle) -> bool {
    let engine = unsafe { &*handle.0 };
    engine.is_animating()
}

#[no_mangle]
pub extern "C" fn colorband_engine_set_animating(handle: ColorbandEngineHandle, animating: bool) {
    let engine = unsafe { &mut *handle.0 };
    engine.set_animating(animating);
}

/// Fills a caller-owned RGB565 buffer with one color band per row.
///
/// `pixels` must point to at least `stride * height` writable pixels and
/// stay valid for the duration of the call. Returns `false` without touching
/// the buffer when the pointer is null or `stride < width`.
#[no_mangle]
pub extern "C" fn colorband_engine_fill(
    handle: ColorbandEngineHandle,
    pixels: *mut u16,
    width: u32,
    height: u32,
    stride: u32,
) -> bool {
    if pixels.is_null() || stride < width {
        return false;
    }

    let engine = unsafe { &mut *handle.0 };
    let len = stride as usize * height as usize;
    let pixels = unsafe { slice::from_raw_parts_mut(pixels, len) };

    let mut buffer = WindowBuffer::from_raw(pixels, width, height, stride);
    engine.fill_into(&mut buffer);

    true
}
