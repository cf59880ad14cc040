pub mod error;
pub mod evaluator;
pub mod frame;
pub mod messages;
pub mod renderer;
pub mod worker;

pub use error::ComputeError;
pub use evaluator::{evaluate, EscapeParams};
pub use frame::{FrameEncoding, FramePlan, FrameUniforms};
pub use messages::{WorkerRequest, WorkerResponse};
pub use renderer::{EscapeRenderer, Renderer};
pub use worker::{handle_request, respond};

// Re-export core types for convenience
pub use deepzoom_core::*;
