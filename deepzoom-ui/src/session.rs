//! Explorer session: the single owner of view state.
//!
//! Input events come in as values, are translated into camera commands, and
//! each effective change schedules one redraw. The host drains frames with
//! [`ExplorerSession::next_frame`] on its refresh tick and evaluates them with
//! [`ExplorerSession::render`] (or ships them to workers).

use crate::gesture::{CameraCommand, GestureTranslator};
use crate::input::InputEvent;
use crate::readout::{apply_edit, Readout, ReadoutEdit};
use crate::redraw::{FrameRequest, RedrawScheduler};
use deepzoom_compute::{ComputeError, EscapeRenderer, Renderer};
use deepzoom_core::{Camera, EscapeResult, EvaluatorStrategy, ExplorerConfig, TierTable};
use log::{info, warn};

pub struct ExplorerSession {
    camera: Camera,
    tiers: TierTable,
    renderer: EscapeRenderer,
    gestures: GestureTranslator,
    scheduler: RedrawScheduler,
    canvas_size: (u32, u32),
    strategy: EvaluatorStrategy,
}

impl ExplorerSession {
    /// Validate `config` and start a session. The first frame is scheduled
    /// immediately.
    pub fn new(config: ExplorerConfig, canvas_size: (u32, u32)) -> Result<Self, ComputeError> {
        let renderer = EscapeRenderer::from_config(config.clone())?;
        let tiers = config.tier_table()?;
        let camera = Camera::from_config(&config);
        let strategy = tiers.select(camera.zoom());

        info!(
            "explorer session created: {}x{} canvas, zoom {}, {} precision",
            canvas_size.0,
            canvas_size.1,
            camera.zoom(),
            strategy
        );

        let mut session = Self {
            camera,
            tiers,
            renderer,
            gestures: GestureTranslator::new(config.move_speed, config.pinch_threshold),
            scheduler: RedrawScheduler::new(config.redraw_debounce_ms),
            canvas_size,
            strategy,
        };
        let frame = session.current_frame();
        session.scheduler.request_immediate(frame, 0.0);
        Ok(session)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    /// Strategy of the most recently requested frame.
    pub fn strategy(&self) -> EvaluatorStrategy {
        self.strategy
    }

    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.gestures.set_device_pixel_ratio(ratio);
    }

    /// Apply one input event. Returns whether a redraw was requested.
    pub fn handle_event(&mut self, event: &InputEvent, now_ms: f64) -> bool {
        if let InputEvent::Resize { width, height } = *event {
            return self.resize((width, height), now_ms);
        }

        let Some(command) = self.gestures.translate(event) else {
            return false;
        };
        let before = self.camera.snapshot();
        self.apply_command(command);
        if self.camera.snapshot() == before {
            return false;
        }
        self.request_redraw(now_ms);
        true
    }

    fn apply_command(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Pan { dx, dy } => self.camera.apply_pan(dx, dy),
            CameraCommand::ZoomAt { amount, anchor } => {
                self.camera.zoom_at(amount, anchor, self.canvas_size)
            }
            CameraCommand::ZoomCentered { amount } => {
                let center = (
                    self.canvas_size.0 as f64 / 2.0,
                    self.canvas_size.1 as f64 / 2.0,
                );
                self.camera.zoom_at(amount, center, self.canvas_size)
            }
        }
    }

    fn resize(&mut self, canvas_size: (u32, u32), now_ms: f64) -> bool {
        if canvas_size.0 == 0 || canvas_size.1 == 0 {
            warn!(
                "ignoring resize to empty canvas {}x{}",
                canvas_size.0, canvas_size.1
            );
            return false;
        }
        self.canvas_size = canvas_size;
        self.request_redraw(now_ms);
        true
    }

    pub fn readout(&self) -> Readout {
        Readout::from_camera(&self.camera)
    }

    /// Apply a readout edit through the camera setters and redraw.
    pub fn edit_readout(&mut self, edit: ReadoutEdit, now_ms: f64) {
        apply_edit(&mut self.camera, edit);
        self.request_redraw(now_ms);
    }

    fn current_frame(&self) -> FrameRequest {
        let view = self.camera.snapshot();
        FrameRequest {
            view,
            canvas_size: self.canvas_size,
            strategy: self.tiers.select(view.zoom),
        }
    }

    fn request_redraw(&mut self, now_ms: f64) {
        let frame = self.current_frame();
        if frame.strategy != self.strategy {
            info!(
                "precision tier switched: {} -> {} at zoom {:e}",
                self.strategy, frame.strategy, frame.view.zoom
            );
            self.strategy = frame.strategy;
        }
        self.scheduler.request(frame, now_ms);
    }

    /// The frame due at `now_ms`, if any.
    pub fn next_frame(&mut self, now_ms: f64) -> Option<FrameRequest> {
        self.scheduler.poll(now_ms)
    }

    pub fn has_pending_frame(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Evaluate a frame on the calling thread.
    pub fn render(&self, frame: &FrameRequest) -> Result<Vec<EscapeResult>, ComputeError> {
        self.renderer.render(&frame.view, frame.canvas_size)
    }
}
