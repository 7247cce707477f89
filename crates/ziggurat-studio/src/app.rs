use ziggurat_engine::coords::Vec2;
use ziggurat_engine::core::{App, AppControl, FrameCtx};
use ziggurat_engine::input::MouseButton;
use ziggurat_engine::paint::Color;
use ziggurat_engine::render::{Camera2D, TexturedQuad, TexturedQuadRenderer};
use ziggurat_life::{GpuGrid, GridBackend, LifeConfig, LifeEngine, LifeResult};

use crate::controls::{self, Action, REFERENCE_VIEW};
use crate::palette;

/// Dark salmon.
const BACKGROUND: [u8; 3] = [233, 150, 122];

pub const TITLE: &str = "Conway's Game of Life";

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub life: LifeConfig,
    /// Animate the live-cell colour from the frame clock.
    pub cycle_palette: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            life: LifeConfig::default(),
            cycle_palette: true,
        }
    }
}

/// Interactive Game of Life: input drives the simulation, its output
/// texture is drawn as a world-space quad.
pub struct LifeStudio {
    config: StudioConfig,
    /// Created on the first frame, once a device exists.
    sim: Option<LifeEngine<GpuGrid>>,
    quad: TexturedQuadRenderer,
    camera: Camera2D,
    /// Last status shown in the window title.
    status: String,
}

impl LifeStudio {
    pub fn new(config: StudioConfig) -> Self {
        let camera = home_camera(&config.life);
        Self {
            config,
            sim: None,
            quad: TexturedQuadRenderer::new(),
            camera,
            status: String::new(),
        }
    }

    fn ensure_sim(&mut self, ctx: &FrameCtx<'_, '_>) -> LifeResult<()> {
        if self.sim.is_some() {
            return Ok(());
        }

        let grid = GpuGrid::new(ctx.gpu.device(), ctx.gpu.queue(), &self.config.life)?;
        let dims = grid.dims();
        log::info!(
            "grid {}x{} (tile {}), {} frames per step",
            dims.width(),
            dims.height(),
            dims.tile(),
            self.config.life.frames_per_step
        );

        // The grid may have been rounded; fit the camera to what was built.
        self.camera = Camera2D::fit(dims.width() as f32, dims.height() as f32, REFERENCE_VIEW);
        self.sim = Some(LifeEngine::new(grid, &self.config.life));
        Ok(())
    }
}

impl App for LifeStudio {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Err(e) = self.ensure_sim(ctx) {
            ctx.runtime
                .fail(anyhow::Error::new(e).context("failed to create simulation"));
            return AppControl::Exit;
        }
        let Some(sim) = self.sim.as_mut() else {
            return AppControl::Exit;
        };
        let dims = sim.dims();

        // ── keys ──────────────────────────────────────────────────────────
        for action in controls::actions(ctx.input_frame) {
            match action {
                Action::Exit => return AppControl::Exit,
                Action::TogglePause => {
                    sim.toggle_paused();
                }
                Action::Clear => {
                    sim.request_clear();
                    log::info!("clear requested");
                }
                Action::SlowDown => {
                    sim.slow_down();
                }
                Action::SpeedUp => {
                    sim.speed_up();
                }
                Action::ResetCamera => {
                    self.camera =
                        Camera2D::fit(dims.width() as f32, dims.height() as f32, REFERENCE_VIEW);
                    log::debug!("camera reset");
                }
                Action::Pan(dir) => {
                    let step = controls::pan_step(self.camera.zoom);
                    self.camera.pan(dir * step);
                }
                Action::ZoomIn => self.camera.set_zoom(self.camera.zoom * 2.0),
                Action::ZoomOut => self.camera.set_zoom(self.camera.zoom * 0.5),
            }
        }

        // ── mouse ─────────────────────────────────────────────────────────
        let left = ctx.input.button_down(MouseButton::Left);
        let right = ctx.input.button_down(MouseButton::Right);
        if let (true, Some(pointer)) = (left || right, ctx.input.pointer_pos) {
            let viewport = ctx.window.viewport();
            if let Some((x, y)) =
                controls::cell_under(&self.camera, Vec2::from(pointer), viewport, dims)
            {
                if left {
                    sim.request_activate(x, y);
                }
                if right {
                    sim.request_deactivate(x, y);
                }
            }
        }

        let status = status_line(sim.cadence().is_paused(), sim.cadence().frames_per_step());
        if status != self.status {
            ctx.window.set_title(&format!("{TITLE} | {status}"));
            self.status = status;
        }

        if self.config.cycle_palette {
            sim.set_palette(palette::cycling(ctx.time.elapsed, self.config.life.palette.dead));
        }

        // ── frame ─────────────────────────────────────────────────────────
        let quad_renderer = &mut self.quad;
        let camera = self.camera;
        let quad = TexturedQuad {
            center: Vec2::zero(),
            size: Vec2::new(dims.width() as f32, dims.height() as f32),
        };
        let [r, g, b] = BACKGROUND;
        let mut outcome = None;

        let control = ctx.render(Color::from_srgb_u8(r, g, b, 255), |rctx, target| {
            outcome = Some(sim.run_frame(&mut *target.encoder));

            if !quad_renderer.has_texture() {
                quad_renderer.set_texture(rctx, sim.backend().output_view());
            }
            quad_renderer.render(rctx, target, &camera, quad);
        });

        match outcome {
            Some(Ok(report)) if report.committed => {
                log::trace!("generation committed into {:?}", report.active);
            }
            Some(Err(e)) => {
                ctx.runtime
                    .fail(anyhow::Error::new(e).context("simulation frame failed"));
                return AppControl::Exit;
            }
            // Skipped frames (surface lost) never reach the closure.
            _ => {}
        }

        control
    }

    fn on_exit(&mut self) {
        // The quad binds the grid's output view.
        self.quad.clear_texture();
        if let Some(sim) = self.sim.take() {
            let grid = sim.teardown();
            drop(grid);
            log::debug!("simulation released");
        }
    }
}

fn home_camera(life: &LifeConfig) -> Camera2D {
    Camera2D::fit(life.width.max(1) as f32, life.height.max(1) as f32, REFERENCE_VIEW)
}

/// Run state and step delay, e.g. `::PAUSED:: | Delay Frames: 4`.
pub fn status_line(paused: bool, frames_per_step: u32) -> String {
    let state = if paused { "::PAUSED::" } else { "::RUNNING::" };
    format!("{state} | Delay Frames: {frames_per_step}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_shows_run_state_and_delay() {
        assert_eq!(status_line(false, 0), "::RUNNING:: | Delay Frames: 0");
        assert_eq!(status_line(true, 4), "::PAUSED:: | Delay Frames: 4");
    }

    #[test]
    fn status_line_changes_with_each_control() {
        let running = status_line(false, 2);
        assert_ne!(running, status_line(true, 2));
        assert_ne!(running, status_line(false, 3));
    }

    #[test]
    fn fresh_studio_has_no_status_yet() {
        let studio = LifeStudio::new(StudioConfig::default());
        assert!(studio.status.is_empty());
        assert!(studio.sim.is_none());
    }
}
