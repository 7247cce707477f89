//! Keyboard and mouse mapping for the studio.

use ziggurat_engine::coords::{Vec2, Viewport};
use ziggurat_engine::input::{InputFrame, Key};
use ziggurat_engine::render::Camera2D;
use ziggurat_life::GridDims;

/// View the initial camera is fitted to, and the basis for pan distance.
pub const REFERENCE_VIEW: Viewport = Viewport::new(960.0, 540.0);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    TogglePause,
    Clear,
    SlowDown,
    SpeedUp,
    ResetCamera,
    /// Unit direction in world space (+Y up).
    Pan(Vec2),
    ZoomIn,
    ZoomOut,
    Exit,
}

const BINDINGS: [(Key, Action); 12] = [
    (Key::Escape, Action::Exit),
    (Key::P, Action::TogglePause),
    (Key::C, Action::Clear),
    (Key::A, Action::SlowDown),
    (Key::Z, Action::SpeedUp),
    (Key::R, Action::ResetCamera),
    (Key::ArrowLeft, Action::Pan(Vec2::new(-1.0, 0.0))),
    (Key::ArrowRight, Action::Pan(Vec2::new(1.0, 0.0))),
    (Key::ArrowUp, Action::Pan(Vec2::new(0.0, 1.0))),
    (Key::ArrowDown, Action::Pan(Vec2::new(0.0, -1.0))),
    (Key::PageUp, Action::ZoomIn),
    (Key::PageDown, Action::ZoomOut),
];

/// Actions triggered by keys released this frame, in binding order.
pub fn actions(frame: &InputFrame) -> Vec<Action> {
    BINDINGS
        .iter()
        .filter(|(key, _)| frame.key_released(*key))
        .map(|(_, action)| *action)
        .collect()
}

/// World units moved by one pan step at `zoom`.
pub fn pan_step(zoom: f32) -> f32 {
    0.1 * REFERENCE_VIEW.width / zoom
}

/// Grid cell under a window position, or `None` outside the grid.
///
/// The grid is drawn centred on the world origin with row 0 at the top.
pub fn cell_under(
    camera: &Camera2D,
    pointer: Vec2,
    viewport: Viewport,
    dims: GridDims,
) -> Option<(u32, u32)> {
    let world = camera.world_from_window(pointer, viewport);
    if !world.is_finite() {
        return None;
    }

    let gx = (world.x + dims.width() as f32 * 0.5).floor() as i64;
    let gy = (dims.height() as f32 * 0.5 - world.y).floor() as i64;

    dims.contains(gx, gy).then_some((gx as u32, gy as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> GridDims {
        GridDims::new(64, 64, 16).unwrap()
    }

    fn released(keys: &[Key]) -> InputFrame {
        let mut frame = InputFrame::default();
        frame.keys_released.extend(keys.iter().copied());
        frame
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn nothing_released_means_no_actions() {
        assert!(actions(&InputFrame::default()).is_empty());
    }

    #[test]
    fn presses_alone_do_not_trigger() {
        let mut frame = InputFrame::default();
        frame.keys_pressed.insert(Key::P);
        assert!(actions(&frame).is_empty());
    }

    #[test]
    fn released_keys_map_in_binding_order() {
        let frame = released(&[Key::Z, Key::P, Key::ArrowUp]);
        assert_eq!(
            actions(&frame),
            vec![
                Action::TogglePause,
                Action::SpeedUp,
                Action::Pan(Vec2::new(0.0, 1.0)),
            ]
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert!(actions(&released(&[Key::Q, Key::Unknown(7)])).is_empty());
    }

    #[test]
    fn pan_step_shrinks_with_zoom() {
        assert_eq!(pan_step(1.0), 96.0);
        assert_eq!(pan_step(2.0), 48.0);
    }

    // ── pointer → grid ────────────────────────────────────────────────────

    #[test]
    fn viewport_centre_is_the_middle_cell() {
        let cam = Camera2D::fit(64.0, 64.0, REFERENCE_VIEW);
        let cell = cell_under(&cam, Vec2::new(480.0, 270.0), REFERENCE_VIEW, dims());
        assert_eq!(cell, Some((32, 32)));
    }

    #[test]
    fn top_left_pixel_of_the_grid_is_origin_cell() {
        let cam = Camera2D::fit(64.0, 64.0, REFERENCE_VIEW);
        let half = 32.0 * cam.zoom;
        let p = Vec2::new(480.0 - half + 1.0, 270.0 - half + 1.0);
        assert_eq!(cell_under(&cam, p, REFERENCE_VIEW, dims()), Some((0, 0)));
    }

    #[test]
    fn bottom_right_pixel_is_last_cell() {
        let cam = Camera2D::fit(64.0, 64.0, REFERENCE_VIEW);
        let half = 32.0 * cam.zoom;
        let p = Vec2::new(480.0 + half - 1.0, 270.0 + half - 1.0);
        assert_eq!(cell_under(&cam, p, REFERENCE_VIEW, dims()), Some((63, 63)));
    }

    #[test]
    fn outside_the_grid_is_none() {
        let cam = Camera2D::fit(64.0, 64.0, REFERENCE_VIEW);
        assert_eq!(cell_under(&cam, Vec2::zero(), REFERENCE_VIEW, dims()), None);
        assert_eq!(cell_under(&cam, Vec2::new(959.0, 539.0), REFERENCE_VIEW, dims()), None);
    }

    #[test]
    fn panning_moves_the_cell_under_a_fixed_pointer() {
        let mut cam = Camera2D::fit(64.0, 64.0, REFERENCE_VIEW);
        cam.pan(Vec2::new(4.0, 0.0));
        let cell = cell_under(&cam, Vec2::new(480.0, 270.0), REFERENCE_VIEW, dims());
        assert_eq!(cell, Some((36, 32)));
    }
}
