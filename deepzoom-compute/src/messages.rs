use deepzoom_core::{EscapeResult, EvaluatorStrategy, PixelRect, ViewSnapshot};
use serde::{Deserialize, Serialize};

/// Messages sent from the main thread to a worker
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum WorkerRequest {
    /// Evaluate one tile of a frame
    RenderTile {
        render_id: u32,
        view: ViewSnapshot,
        canvas_width: u32,
        canvas_height: u32,
        tile: PixelRect,
    },

    /// Terminate worker
    Terminate,
}

/// Messages sent from a worker back to the main thread
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum WorkerResponse {
    /// Worker is initialized and ready for commands
    Ready,

    /// Worker completed a tile
    TileComplete {
        render_id: u32,
        tile: PixelRect,
        strategy: EvaluatorStrategy,
        data: Vec<EscapeResult>,
    },

    /// Worker encountered an error
    Error {
        render_id: Option<u32>,
        tile: Option<PixelRect>,
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_message_serialization() {
        let msg = WorkerResponse::Ready;
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"Ready\""));
    }

    #[test]
    fn test_render_tile_deserialization() {
        let json = r#"{
            "type": "RenderTile",
            "render_id": 7,
            "view": {"center_x": 0.0, "center_y": 0.0, "zoom": 300.0},
            "canvas_width": 800,
            "canvas_height": 600,
            "tile": {"x": 0, "y": 0, "width": 64, "height": 64}
        }"#;
        let msg: WorkerRequest = serde_json::from_str(json).unwrap();
        match msg {
            WorkerRequest::RenderTile {
                render_id,
                view,
                tile,
                ..
            } => {
                assert_eq!(render_id, 7);
                assert_eq!(view.zoom, 300.0);
                assert_eq!(tile.area(), 64 * 64);
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_tile_complete_carries_strategy_name() {
        let msg = WorkerResponse::TileComplete {
            render_id: 1,
            tile: PixelRect::new(0, 0, 1, 1),
            strategy: EvaluatorStrategy::SplitPrecision,
            data: vec![EscapeResult::escaped(3, 250)],
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"strategy\":\"split_precision\""));
        let back: WorkerResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_terminate_deserialization() {
        let msg: WorkerRequest = serde_json::from_str(r#"{"type":"Terminate"}"#).unwrap();
        assert_eq!(msg, WorkerRequest::Terminate);
    }
}
