pub mod camera;
pub mod complex;
pub mod config;
pub mod error;
pub mod escape_result;
pub mod pixel_rect;
pub mod precision;
pub mod split_float;
pub mod transforms;

pub use camera::{Camera, ViewSnapshot};
pub use complex::{Complex, NativeComplex, OrbitScalar, SplitComplex};
pub use config::ExplorerConfig;
pub use error::ConfigError;
pub use escape_result::{EscapeResult, Outcome};
pub use pixel_rect::PixelRect;
pub use precision::{
    default_tiers, EvaluatorStrategy, PrecisionTier, TierTable, NATIVE_PRECISION_LIMIT,
    SPLIT_PRECISION_LIMIT,
};
pub use split_float::{quick_two_sum, two_prod, two_sum, ulp, SplitFloat};
pub use transforms::{pixel_center, pixel_to_plane, plane_to_pixel, screen_to_frame};
