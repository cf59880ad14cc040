use crate::{ComputeError, EscapeRenderer, Renderer, WorkerRequest, WorkerResponse};
use deepzoom_core::ExplorerConfig;
use log::{debug, info};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static RENDERER: RefCell<Option<EscapeRenderer>> = const { RefCell::new(None) };
}

/// Execute one request. `Terminate` yields no response.
pub fn handle_request(renderer: &EscapeRenderer, request: WorkerRequest) -> Option<WorkerResponse> {
    match request {
        WorkerRequest::RenderTile {
            render_id,
            view,
            canvas_width,
            canvas_height,
            tile,
        } => {
            let canvas_size = (canvas_width, canvas_height);
            let response = match renderer.render_tile(&view, canvas_size, tile) {
                Ok(data) => WorkerResponse::TileComplete {
                    render_id,
                    tile,
                    strategy: renderer.strategy_for(view.zoom),
                    data,
                },
                Err(e) => WorkerResponse::Error {
                    render_id: Some(render_id),
                    tile: Some(tile),
                    error: e.to_string(),
                },
            };
            Some(response)
        }
        WorkerRequest::Terminate => {
            debug!("worker terminating");
            None
        }
    }
}

/// Parse a JSON request, execute it and serialize the reply.
pub fn respond(renderer: &EscapeRenderer, message_json: &str) -> Result<Option<String>, ComputeError> {
    let request: WorkerRequest = serde_json::from_str(message_json)?;
    handle_request(renderer, request)
        .map(|response| serde_json::to_string(&response))
        .transpose()
        .map_err(ComputeError::from)
}

/// Worker initialization. Returns the serialized `Ready` message.
#[wasm_bindgen]
pub fn init_worker() -> Result<String, JsValue> {
    console_error_panic_hook::set_once();
    serde_json::to_string(&WorkerResponse::Ready).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Install the explorer configuration used for subsequent requests.
#[wasm_bindgen]
pub fn configure_worker(config_json: &str) -> Result<(), JsValue> {
    let renderer = ExplorerConfig::from_json(config_json)
        .map_err(ComputeError::from)
        .and_then(EscapeRenderer::from_config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    info!("worker configured");
    RENDERER.with(|slot| *slot.borrow_mut() = Some(renderer));
    Ok(())
}

/// Process a request from the main thread. Unconfigured workers use defaults.
#[wasm_bindgen]
pub fn process_request(message_json: &str) -> Result<Option<String>, JsValue> {
    RENDERER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let renderer = slot.get_or_insert_with(EscapeRenderer::default);
        respond(renderer, message_json).map_err(|e| {
            let reply = WorkerResponse::Error {
                render_id: None,
                tile: None,
                error: e.to_string(),
            };
            JsValue::from_str(&serde_json::to_string(&reply).unwrap_or_else(|_| e.to_string()))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepzoom_core::{EvaluatorStrategy, PixelRect, ViewSnapshot};

    fn tile_request(tile: PixelRect) -> WorkerRequest {
        WorkerRequest::RenderTile {
            render_id: 3,
            view: ViewSnapshot::new(0.0, 0.0, 300.0),
            canvas_width: 800,
            canvas_height: 600,
            tile,
        }
    }

    #[test]
    fn tile_request_completes() {
        let renderer = EscapeRenderer::default();
        let tile = PixelRect::new(384, 284, 32, 32);
        match handle_request(&renderer, tile_request(tile)) {
            Some(WorkerResponse::TileComplete {
                render_id,
                tile: done,
                strategy,
                data,
            }) => {
                assert_eq!(render_id, 3);
                assert_eq!(done, tile);
                assert_eq!(strategy, EvaluatorStrategy::NativePrecision);
                assert_eq!(data.len(), 32 * 32);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn out_of_bounds_tile_reports_error() {
        let renderer = EscapeRenderer::default();
        let tile = PixelRect::new(790, 0, 32, 32);
        match handle_request(&renderer, tile_request(tile)) {
            Some(WorkerResponse::Error {
                render_id, tile: t, ..
            }) => {
                assert_eq!(render_id, Some(3));
                assert_eq!(t, Some(tile));
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn terminate_has_no_reply() {
        let renderer = EscapeRenderer::default();
        assert_eq!(handle_request(&renderer, WorkerRequest::Terminate), None);
    }

    #[test]
    fn malformed_json_is_message_error() {
        let renderer = EscapeRenderer::default();
        assert!(matches!(
            respond(&renderer, "{\"type\":\"Bogus\"}"),
            Err(ComputeError::Message(_))
        ));
    }

    #[test]
    fn respond_round_trips_json() {
        let renderer = EscapeRenderer::default();
        let request = serde_json::to_string(&tile_request(PixelRect::new(0, 0, 2, 2))).unwrap();
        let reply = respond(&renderer, &request).unwrap().unwrap();
        let response: WorkerResponse = serde_json::from_str(&reply).unwrap();
        assert!(matches!(response, WorkerResponse::TileComplete { .. }));
    }
}
