//! Drives the animation loop against the in-memory glue and prints a crude
//! readout of the bands that ended up in the window.
//!
//! Run with `RUST_LOG=info` to see the driver's diagnostics.

use anyhow::Result;
use colorband_engine::event::{AppEvent, InputEvent, LifecycleEvent};
use colorband_engine::glue::headless::{HeadlessGlue, HeadlessWindow};
use colorband_engine::window::PixelFormat;
use colorband_engine::Engine;

fn main() -> Result<()> {
    env_logger::init();

    let window = HeadlessWindow::with_stride(32, 16, 36, PixelFormat::Rgbx8888);
    let mut glue = HeadlessGlue::new(Some(window));
    glue.push_events([
        AppEvent::Lifecycle(LifecycleEvent::WindowCreated),
        AppEvent::Input(InputEvent::Motion { x: 16.0, y: 8.0 }),
    ]);
    // Keep the queue alive for a handful of animated frames, then let the
    // driver see the disconnect and wind down.
    glue.allow_empty_polls(8);

    let mut engine = Engine::new(None);
    engine.run(&mut glue);

    let window = glue.window_ref().expect("the demo window outlives the run");
    println!(
        "posted {} frames into a 32x16 window (stride 36)",
        window.frames_posted()
    );

    println!("last frame, one band per row:");
    for row in window.pixels().chunks(window.stride() as usize) {
        println!("  {:#06X}", row[0]);
    }

    Ok(())
}
