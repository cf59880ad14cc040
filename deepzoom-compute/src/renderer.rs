use crate::evaluator::EscapeParams;
use crate::frame::{FrameEncoding, FramePlan};
use crate::ComputeError;
use deepzoom_core::{EscapeResult, EvaluatorStrategy, ExplorerConfig, PixelRect, TierTable, ViewSnapshot};
use log::debug;

/// Produces per-pixel data for a view. Output is row-major, top row first.
pub trait Renderer {
    type Data;

    /// Render a sub-rectangle of the canvas.
    fn render_tile(
        &self,
        view: &ViewSnapshot,
        canvas_size: (u32, u32),
        tile: PixelRect,
    ) -> Result<Vec<Self::Data>, ComputeError>;

    /// Render the whole canvas.
    fn render(
        &self,
        view: &ViewSnapshot,
        canvas_size: (u32, u32),
    ) -> Result<Vec<Self::Data>, ComputeError> {
        self.render_tile(view, canvas_size, PixelRect::full(canvas_size))
    }
}

/// Escape-time renderer that picks its precision tier from the view's zoom.
#[derive(Clone, Debug)]
pub struct EscapeRenderer {
    config: ExplorerConfig,
    tiers: TierTable,
}

impl EscapeRenderer {
    pub fn from_config(config: ExplorerConfig) -> Result<Self, ComputeError> {
        config.validate()?;
        let tiers = config.tier_table()?;
        Ok(Self { config, tiers })
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn strategy_for(&self, zoom: f64) -> EvaluatorStrategy {
        self.tiers.select(zoom)
    }

    /// Fix the strategy, encoding and parameters for one pass.
    pub fn plan(&self, view: &ViewSnapshot, canvas_size: (u32, u32)) -> FramePlan {
        let strategy = self.strategy_for(view.zoom);
        FramePlan {
            encoding: FrameEncoding::new(strategy, view, canvas_size),
            params: EscapeParams::for_zoom(&self.config, view.zoom),
            canvas_size,
        }
    }
}

impl Default for EscapeRenderer {
    fn default() -> Self {
        Self {
            config: ExplorerConfig::default(),
            tiers: TierTable::default(),
        }
    }
}

impl Renderer for EscapeRenderer {
    type Data = EscapeResult;

    fn render_tile(
        &self,
        view: &ViewSnapshot,
        canvas_size: (u32, u32),
        tile: PixelRect,
    ) -> Result<Vec<EscapeResult>, ComputeError> {
        let (width, height) = canvas_size;
        if width == 0 || height == 0 {
            return Err(ComputeError::EmptyCanvas { width, height });
        }
        if !tile.fits_within(canvas_size) {
            return Err(ComputeError::TileOutOfBounds {
                tile,
                width,
                height,
            });
        }

        let plan = self.plan(view, canvas_size);
        debug!(
            "render pass: {} tile {:?} at zoom {:e}",
            plan.strategy(),
            tile,
            view.zoom
        );

        let mut data = Vec::with_capacity(tile.area());
        for row in tile.y..tile.y + tile.height {
            for col in tile.x..tile.x + tile.width {
                data.push(plan.evaluate_pixel(col, row));
            }
        }
        Ok(data)
    }
}
