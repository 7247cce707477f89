use crate::coords::{Vec2, Viewport};

/// Orthographic 2D camera.
///
/// `focus` is the world point shown at the centre of the viewport and `zoom`
/// is logical pixels per world unit. World +Y points up, window +Y points down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2D {
    pub focus: Vec2,
    pub zoom: f32,
}

impl Camera2D {
    pub const MIN_ZOOM: f32 = 1.0 / 64.0;
    pub const MAX_ZOOM: f32 = 1024.0;

    pub fn new(focus: Vec2, zoom: f32) -> Self {
        Self {
            focus,
            zoom: zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM),
        }
    }

    /// Camera centred on the origin with the largest zoom that fits a
    /// `world_w` x `world_h` region inside `reference`.
    pub fn fit(world_w: f32, world_h: f32, reference: Viewport) -> Self {
        let zoom = (reference.width / world_w).min(reference.height / world_h);
        Self::new(Vec2::zero(), zoom)
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Moves the focus by `delta` world units.
    pub fn pan(&mut self, delta: Vec2) {
        self.focus += delta;
    }

    /// Maps a window position (logical px, top-left origin) to world space.
    pub fn world_from_window(&self, p: Vec2, viewport: Viewport) -> Vec2 {
        Vec2::new(
            self.focus.x + (p.x - viewport.width * 0.5) / self.zoom,
            self.focus.y - (p.y - viewport.height * 0.5) / self.zoom,
        )
    }

    /// Maps a world position to window space (logical px).
    pub fn window_from_world(&self, p: Vec2, viewport: Viewport) -> Vec2 {
        Vec2::new(
            viewport.width * 0.5 + (p.x - self.focus.x) * self.zoom,
            viewport.height * 0.5 - (p.y - self.focus.y) * self.zoom,
        )
    }

    /// World-to-NDC scale for the vertex shader.
    pub(crate) fn ndc_scale(&self, viewport: Viewport) -> [f32; 2] {
        [
            2.0 * self.zoom / viewport.width.max(1.0),
            2.0 * self.zoom / viewport.height.max(1.0),
        ]
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Vec2::zero(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(960.0, 540.0);

    #[test]
    fn viewport_centre_maps_to_focus() {
        let cam = Camera2D::new(Vec2::new(10.0, -4.0), 3.0);
        assert_eq!(cam.world_from_window(Vec2::new(480.0, 270.0), VP), cam.focus);
    }

    #[test]
    fn window_y_is_flipped() {
        let cam = Camera2D::new(Vec2::zero(), 2.0);
        let top_left = cam.world_from_window(Vec2::zero(), VP);
        assert_eq!(top_left, Vec2::new(-240.0, 135.0));
    }

    #[test]
    fn window_world_round_trip() {
        let cam = Camera2D::new(Vec2::new(5.5, 7.25), 4.0);
        let p = Vec2::new(123.0, 456.0);
        let back = cam.window_from_world(cam.world_from_window(p, VP), VP);
        assert!((back.x - p.x).abs() < 1e-3 && (back.y - p.y).abs() < 1e-3);
    }

    #[test]
    fn fit_picks_the_tighter_axis() {
        let cam = Camera2D::fit(64.0, 64.0, VP);
        assert_eq!(cam.zoom, 540.0 / 64.0);

        let cam = Camera2D::fit(1920.0, 64.0, VP);
        assert_eq!(cam.zoom, 0.5);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera2D::default();
        cam.set_zoom(0.0);
        assert_eq!(cam.zoom, Camera2D::MIN_ZOOM);
        cam.set_zoom(f32::MAX);
        assert_eq!(cam.zoom, Camera2D::MAX_ZOOM);
    }
}
